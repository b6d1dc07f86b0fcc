//! Frame rendering: header, sidebar, editor area, status line, notice popup.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::kernel::{Action, FocusTarget, NoticeKind};

use super::Workbench;

pub(super) fn render(workbench: &mut Workbench, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(super::HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(super::STATUS_HEIGHT),
        ])
        .split(area);

    let header_area = chunks[0];
    let body_area = chunks[1];
    let status_area = chunks[2];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(super::SIDEBAR_WIDTH.min(area.width / 2)),
            Constraint::Min(0),
        ])
        .split(body_area);

    let sidebar_area = columns[0];
    let editor_area = columns[1];

    // Report viewport sizes before drawing so selection/scroll math uses
    // current dimensions.
    let explorer_height = sidebar_area.height.saturating_sub(2) as usize;
    workbench.dispatch(Action::ExplorerSetViewHeight {
        height: explorer_height,
    });
    workbench.last_editor_height = editor_area.height.saturating_sub(3) as usize;

    {
        let state = workbench.store.state();
        let active_path = state.workspace.active_path().map(|p| p.to_path_buf());
        let buffer = state.workspace.active_buffer().to_string();
        workbench.editor.sync_document(active_path.as_deref(), &buffer);
    }

    render_header(workbench, frame, header_area);
    render_sidebar(workbench, frame, sidebar_area);
    render_editor(workbench, frame, editor_area);
    render_status(workbench, frame, status_area);

    if workbench.store.state().ui.notice.is_some() {
        render_notice(workbench, frame, area);
    }
}

fn render_header(workbench: &Workbench, frame: &mut Frame, area: Rect) {
    let theme = &workbench.theme;
    let state = workbench.store.state();

    let title = match state.workspace.active_document() {
        Some(doc) if doc.modified => format!(" choicepad — {} ●", doc.name),
        Some(doc) => format!(" choicepad — {}", doc.name),
        None => " choicepad".to_string(),
    };

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            title,
            Style::default()
                .fg(theme.header_fg)
                .add_modifier(Modifier::BOLD),
        )))
        .style(Style::default().bg(theme.header_bg)),
        area,
    );
}

fn render_sidebar(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let focused = workbench.store.state().ui.focus == FocusTarget::Explorer;
    let border_color = if focused {
        workbench.theme.focus_border
    } else {
        workbench.theme.inactive_border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" EXPLORER ")
        .style(Style::default().bg(workbench.theme.sidebar_bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Workbench {
        store,
        explorer,
        theme,
        ..
    } = workbench;
    let state = store.state();
    explorer.render(
        frame,
        inner,
        state.workspace.entries(),
        state.ui.explorer.selected,
        state.ui.explorer.scroll,
        theme,
    );
}

fn render_editor(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let focused = workbench.store.state().ui.focus == FocusTarget::Editor;
    let border_color = if focused {
        workbench.theme.focus_border
    } else {
        workbench.theme.inactive_border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let notice_visible = workbench.store.state().ui.notice.is_some();
    let Workbench {
        store,
        editor,
        theme,
        ..
    } = workbench;
    let state = store.state();
    editor.render(
        frame,
        inner,
        &state.workspace,
        focused && !notice_visible,
        theme,
    );
}

fn render_status(workbench: &Workbench, frame: &mut Frame, area: Rect) {
    let theme = &workbench.theme;
    let state = workbench.store.state();

    let hints = match state.ui.focus {
        FocusTarget::Explorer => "Enter open · Home root · Esc editor · Ctrl+Q quit",
        FocusTarget::Editor => "Ctrl+S save · Ctrl+W close · Ctrl+E explorer · Ctrl+Q quit",
    };
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", state.workspace.current_dir().display()),
            Style::default().fg(theme.accent_fg),
        ),
        Span::styled(hints, Style::default().fg(theme.status_fg)),
    ]);

    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(theme.status_bg)),
        area,
    );
}

fn render_notice(workbench: &Workbench, frame: &mut Frame, area: Rect) {
    let Some(notice) = workbench.store.state().ui.notice.as_ref() else {
        return;
    };
    let theme = &workbench.theme;

    let width = (notice.message.len() as u16 + 6).clamp(24, area.width.saturating_sub(4));
    let height = 5;
    let popup = centered_rect(area, width, height);

    let (title, color) = match notice.kind {
        NoticeKind::Error => (" Error ", theme.error_fg),
        NoticeKind::Info => (" Notice ", theme.info_fg),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title)
        .style(Style::default().bg(theme.popup_bg));
    let inner = block.inner(popup);

    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                notice.message.clone(),
                Style::default().fg(theme.fg),
            )),
            Line::default(),
            Line::from(Span::styled(
                "[Enter]",
                Style::default().fg(theme.status_fg),
            )),
        ])
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center),
        inner,
    );
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
