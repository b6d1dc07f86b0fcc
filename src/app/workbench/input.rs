//! Input routing: key events become commands, commands become actions.

use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};

use crate::core::event::{InputEvent, Key};
use crate::core::Command;
use crate::kernel::{Action, FocusTarget};

use super::Workbench;

pub(super) fn handle(workbench: &mut Workbench, event: &InputEvent) {
    let Some(key_event) = event.as_key() else {
        return;
    };
    if !matches!(key_event.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return;
    }
    let key = Key::new(key_event.code, key_event.modifiers);

    // A visible notice is blocking: dismissal only, everything else swallowed.
    if workbench.state().ui.notice.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            workbench.dispatch(Action::RunCommand(Command::DismissNotice));
        }
        return;
    }

    let focus = workbench.state().ui.focus;
    let Some(command) = command_for_key(key, focus) else {
        return;
    };

    // Edit and cursor commands are resolved against the live buffer by the
    // editor view; the result is written through as a full-buffer replace.
    if focus == FocusTarget::Editor
        && (command.is_edit_command() || command.is_cursor_command())
    {
        if workbench.state().workspace.active_path().is_none() {
            return;
        }
        let view_height = workbench.editor_view_height();
        let text = workbench.state().workspace.active_buffer().to_string();
        if let Some(next) = workbench.editor.apply_command(&command, &text, view_height) {
            workbench.dispatch(Action::EditBuffer(next));
        }
        return;
    }

    workbench.dispatch(Action::RunCommand(command));
}

fn command_for_key(key: Key, focus: FocusTarget) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('q') => Some(Command::Quit),
            KeyCode::Char('s') => Some(Command::Save),
            KeyCode::Char('w') => Some(Command::CloseTab),
            KeyCode::Char('e') => Some(Command::FocusExplorer),
            KeyCode::Right => Some(Command::NextTab),
            KeyCode::Left => Some(Command::PrevTab),
            _ => None,
        };
    }

    match focus {
        FocusTarget::Explorer => match key.code {
            KeyCode::Up => Some(Command::ExplorerUp),
            KeyCode::Down => Some(Command::ExplorerDown),
            KeyCode::PageUp => Some(Command::ExplorerPageUp),
            KeyCode::PageDown => Some(Command::ExplorerPageDown),
            KeyCode::Enter => Some(Command::ExplorerActivate),
            KeyCode::Home => Some(Command::ExplorerGoRoot),
            KeyCode::Esc => Some(Command::FocusEditor),
            _ => None,
        },
        FocusTarget::Editor => match key.code {
            KeyCode::Char(ch) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                Some(Command::InsertChar(ch))
            }
            KeyCode::Enter => Some(Command::InsertNewline),
            KeyCode::Tab => Some(Command::InsertTab),
            KeyCode::Backspace => Some(Command::DeleteBackward),
            KeyCode::Delete => Some(Command::DeleteForward),
            KeyCode::Left => Some(Command::CursorLeft),
            KeyCode::Right => Some(Command::CursorRight),
            KeyCode::Up => Some(Command::CursorUp),
            KeyCode::Down => Some(Command::CursorDown),
            KeyCode::Home => Some(Command::CursorLineStart),
            KeyCode::End => Some(Command::CursorLineEnd),
            KeyCode::PageUp => Some(Command::PageUp),
            KeyCode::PageDown => Some(Command::PageDown),
            _ => None,
        },
    }
}
