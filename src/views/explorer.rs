//! Directory listing view (single level, render only).

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::theme::UiTheme;
use crate::fs::DirEntry;

pub struct ExplorerView;

impl ExplorerView {
    pub fn new() -> Self {
        Self
    }

    fn render_row(&self, entry: &DirEntry, is_selected: bool, theme: &UiTheme) -> Line<'static> {
        let icon = if entry.is_dir { "▸ " } else { "  " };
        let text = format!("{}{}", icon, entry.name);

        let style = if is_selected {
            Style::default()
                .bg(theme.selected_bg)
                .fg(theme.selected_fg)
        } else if entry.is_dir {
            Style::default().fg(theme.accent_fg)
        } else {
            Style::default().fg(theme.fg)
        };

        Line::from(Span::styled(text, style))
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        entries: &[DirEntry],
        selected: usize,
        scroll: usize,
        theme: &UiTheme,
    ) {
        let visible_height = area.height as usize;
        let visible_end = (scroll + visible_height).min(entries.len());
        let start = scroll.min(visible_end);

        let lines: Vec<Line> = entries[start..visible_end]
            .iter()
            .enumerate()
            .map(|(i, entry)| self.render_row(entry, start + i == selected, theme))
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }
}

impl Default for ExplorerView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_row_styles_distinguish_dirs_and_selection() {
        let view = ExplorerView::new();
        let theme = UiTheme::default();
        let dir = DirEntry::new(std::path::PathBuf::from("/r/scenes"), true);
        let file = DirEntry::new(std::path::PathBuf::from("/r/startup.txt"), false);

        let selected = view.render_row(&file, true, &theme);
        assert_eq!(selected.spans[0].style.bg, Some(theme.selected_bg));

        let dir_row = view.render_row(&dir, false, &theme);
        assert!(dir_row.spans[0].content.starts_with("▸ "));
        assert_eq!(dir_row.spans[0].style.fg, Some(theme.accent_fg));
        assert_eq!(dir_row.spans[0].style.bg, None::<Color>);
    }
}
