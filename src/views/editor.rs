//! Editor view: tab row plus the active document's text surface.
//!
//! The view owns the cursor and scroll position only. Text itself belongs to
//! the kernel; every edit command here is resolved into a full replacement
//! buffer which the workbench dispatches as `Action::EditBuffer`.

use std::path::{Path, PathBuf};

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::app::theme::UiTheme;
use crate::core::Command;
use crate::kernel::WorkspaceState;
use crate::services::config::EditorConfig;

const TAB_BAR_HEIGHT: u16 = 1;

fn line_at(text: &str, index: usize) -> &str {
    text.split('\n').nth(index).unwrap_or("")
}

fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

fn grapheme_len(line: &str) -> usize {
    line.graphemes(true).count()
}

/// Byte offset of grapheme `col` on line `line`, clamping past-the-end
/// positions to the line end.
fn byte_offset(text: &str, line: usize, col: usize) -> usize {
    let mut offset = 0;
    for (i, l) in text.split('\n').enumerate() {
        if i == line {
            let clamped = col.min(grapheme_len(l));
            let prefix: usize = l
                .grapheme_indices(true)
                .nth(clamped)
                .map(|(b, _)| b)
                .unwrap_or(l.len());
            return offset + prefix;
        }
        offset += l.len() + 1;
    }
    text.len()
}

pub struct EditorView {
    cursor_line: usize,
    cursor_col: usize,
    scroll: usize,
    last_path: Option<PathBuf>,
    config: EditorConfig,
}

impl EditorView {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            cursor_line: 0,
            cursor_col: 0,
            scroll: 0,
            last_path: None,
            config,
        }
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_line, self.cursor_col)
    }

    /// Resets cursor and scroll when the active document changes, and clamps
    /// the cursor when the buffer shrank underneath it.
    pub fn sync_document(&mut self, active_path: Option<&Path>, text: &str) {
        if self.last_path.as_deref() != active_path {
            self.last_path = active_path.map(|p| p.to_path_buf());
            self.cursor_line = 0;
            self.cursor_col = 0;
            self.scroll = 0;
            return;
        }

        let max_line = line_count(text).saturating_sub(1);
        if self.cursor_line > max_line {
            self.cursor_line = max_line;
        }
        let len = grapheme_len(line_at(text, self.cursor_line));
        if self.cursor_col > len {
            self.cursor_col = len;
        }
    }

    /// Applies an edit or cursor command against `text`. Edit commands return
    /// the replacement buffer; cursor commands move the cursor and return None.
    pub fn apply_command(&mut self, command: &Command, text: &str, view_height: usize) -> Option<String> {
        match command {
            Command::CursorLeft => {
                if self.cursor_col > 0 {
                    self.cursor_col -= 1;
                } else if self.cursor_line > 0 {
                    self.cursor_line -= 1;
                    self.cursor_col = grapheme_len(line_at(text, self.cursor_line));
                }
                None
            }
            Command::CursorRight => {
                let len = grapheme_len(line_at(text, self.cursor_line));
                if self.cursor_col < len {
                    self.cursor_col += 1;
                } else if self.cursor_line + 1 < line_count(text) {
                    self.cursor_line += 1;
                    self.cursor_col = 0;
                }
                None
            }
            Command::CursorUp => {
                if self.cursor_line > 0 {
                    self.cursor_line -= 1;
                    self.clamp_col(text);
                }
                None
            }
            Command::CursorDown => {
                if self.cursor_line + 1 < line_count(text) {
                    self.cursor_line += 1;
                    self.clamp_col(text);
                }
                None
            }
            Command::CursorLineStart => {
                self.cursor_col = 0;
                None
            }
            Command::CursorLineEnd => {
                self.cursor_col = grapheme_len(line_at(text, self.cursor_line));
                None
            }
            Command::PageUp => {
                let step = view_height.max(1) + self.config.scroll_lines;
                self.cursor_line = self.cursor_line.saturating_sub(step);
                self.clamp_col(text);
                None
            }
            Command::PageDown => {
                let step = view_height.max(1) + self.config.scroll_lines;
                let max_line = line_count(text).saturating_sub(1);
                self.cursor_line = (self.cursor_line + step).min(max_line);
                self.clamp_col(text);
                None
            }
            Command::InsertChar(ch) => {
                let offset = byte_offset(text, self.cursor_line, self.cursor_col);
                let mut next = text.to_string();
                next.insert(offset, *ch);
                self.cursor_col += 1;
                Some(next)
            }
            Command::InsertNewline => {
                let offset = byte_offset(text, self.cursor_line, self.cursor_col);
                let mut next = text.to_string();
                next.insert(offset, '\n');
                self.cursor_line += 1;
                self.cursor_col = 0;
                Some(next)
            }
            Command::InsertTab => {
                let offset = byte_offset(text, self.cursor_line, self.cursor_col);
                let spaces = " ".repeat(self.config.tab_size as usize);
                let mut next = text.to_string();
                next.insert_str(offset, &spaces);
                self.cursor_col += self.config.tab_size as usize;
                Some(next)
            }
            Command::DeleteBackward => {
                if self.cursor_col > 0 {
                    let end = byte_offset(text, self.cursor_line, self.cursor_col);
                    let start = byte_offset(text, self.cursor_line, self.cursor_col - 1);
                    let mut next = text.to_string();
                    next.replace_range(start..end, "");
                    self.cursor_col -= 1;
                    Some(next)
                } else if self.cursor_line > 0 {
                    let prev_len = grapheme_len(line_at(text, self.cursor_line - 1));
                    let offset = byte_offset(text, self.cursor_line, 0);
                    let mut next = text.to_string();
                    next.replace_range(offset - 1..offset, "");
                    self.cursor_line -= 1;
                    self.cursor_col = prev_len;
                    Some(next)
                } else {
                    None
                }
            }
            Command::DeleteForward => {
                let len = grapheme_len(line_at(text, self.cursor_line));
                if self.cursor_col < len {
                    let start = byte_offset(text, self.cursor_line, self.cursor_col);
                    let end = byte_offset(text, self.cursor_line, self.cursor_col + 1);
                    let mut next = text.to_string();
                    next.replace_range(start..end, "");
                    Some(next)
                } else if self.cursor_line + 1 < line_count(text) {
                    let offset = byte_offset(text, self.cursor_line, self.cursor_col);
                    let mut next = text.to_string();
                    next.replace_range(offset..offset + 1, "");
                    Some(next)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn clamp_col(&mut self, text: &str) {
        let len = grapheme_len(line_at(text, self.cursor_line));
        if self.cursor_col > len {
            self.cursor_col = len;
        }
    }

    fn gutter_width(&self, text: &str) -> usize {
        if !self.config.show_line_numbers {
            return 0;
        }
        line_count(text).to_string().len() + 1
    }

    fn render_tab_bar(
        &self,
        frame: &mut Frame,
        area: Rect,
        workspace: &WorkspaceState,
        theme: &UiTheme,
    ) {
        let mut spans = Vec::new();
        for doc in workspace.open_docs() {
            let is_active = workspace.active_path() == Some(doc.path.as_path());
            let title = if doc.modified {
                format!(" ● {} ", doc.name)
            } else {
                format!(" {} ", doc.name)
            };
            let style = if is_active {
                Style::default()
                    .bg(theme.tab_active_bg)
                    .fg(theme.tab_active_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.tab_inactive_fg)
            };
            spans.push(Span::styled(title, style));
            spans.push(Span::raw("│"));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.tab_bar_bg)),
            area,
        );
    }

    fn render_welcome(&self, frame: &mut Frame, area: Rect, theme: &UiTheme) {
        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                "Welcome to choicepad",
                Style::default()
                    .fg(theme.accent_fg)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                "Open a .txt file from the explorer (Ctrl+E) to start editing",
                Style::default().fg(theme.fg),
            )),
            Line::from(Span::styled(
                "your interactive story.",
                Style::default().fg(theme.fg),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        workspace: &WorkspaceState,
        focused: bool,
        theme: &UiTheme,
    ) {
        if !workspace.open_docs().is_empty() && area.height > TAB_BAR_HEIGHT {
            let tab_area = Rect::new(area.x, area.y, area.width, TAB_BAR_HEIGHT);
            self.render_tab_bar(frame, tab_area, workspace, theme);
        }

        let text_area = if workspace.open_docs().is_empty() {
            area
        } else {
            Rect::new(
                area.x,
                area.y + TAB_BAR_HEIGHT,
                area.width,
                area.height.saturating_sub(TAB_BAR_HEIGHT),
            )
        };

        if workspace.active_path().is_none() {
            self.render_welcome(frame, text_area, theme);
            return;
        }

        let text = workspace.active_buffer();
        let view_height = text_area.height as usize;

        // Keep the cursor line inside the viewport.
        if self.cursor_line < self.scroll {
            self.scroll = self.cursor_line;
        } else if view_height > 0 && self.cursor_line >= self.scroll + view_height {
            self.scroll = self.cursor_line + 1 - view_height;
        }

        let gutter = self.gutter_width(text);
        let total = line_count(text);
        let visible_end = (self.scroll + view_height).min(total);

        let lines: Vec<Line> = text
            .split('\n')
            .enumerate()
            .skip(self.scroll)
            .take(visible_end.saturating_sub(self.scroll))
            .map(|(i, l)| {
                let mut spans = Vec::new();
                if gutter > 0 {
                    spans.push(Span::styled(
                        format!("{:>width$} ", i + 1, width = gutter - 1),
                        Style::default().fg(theme.line_number_fg),
                    ));
                }
                spans.push(Span::styled(
                    l.to_string(),
                    Style::default().fg(theme.fg),
                ));
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), text_area);

        if focused && view_height > 0 {
            let line = line_at(text, self.cursor_line);
            let prefix_end = byte_offset(text, self.cursor_line, self.cursor_col)
                - byte_offset(text, self.cursor_line, 0);
            let x = text_area.x
                + gutter as u16
                + UnicodeWidthStr::width(&line[..prefix_end]) as u16;
            let y = text_area.y + (self.cursor_line - self.scroll) as u16;
            if x < text_area.x + text_area.width && y < text_area.y + text_area.height {
                frame.set_cursor_position((x, y));
            }
        }
    }
}
