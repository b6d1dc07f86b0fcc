//! Semantic command definitions.
//!
//! Commands name user intents without caring which key produced them; the
//! workbench translates key events into commands, the store executes them.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== cursor movement ====================
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorLineStart,
    CursorLineEnd,
    PageUp,
    PageDown,

    // ==================== editing ====================
    InsertChar(char),
    InsertNewline,
    InsertTab,
    DeleteBackward,
    DeleteForward,

    // ==================== document lifecycle ====================
    Save,
    CloseTab,
    NextTab,
    PrevTab,

    // ==================== explorer ====================
    ExplorerUp,
    ExplorerDown,
    ExplorerPageUp,
    ExplorerPageDown,
    ExplorerActivate,
    ExplorerGoRoot,

    // ==================== system ====================
    FocusExplorer,
    FocusEditor,
    DismissNotice,
    Quit,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::CursorLeft => "cursorLeft",
            Command::CursorRight => "cursorRight",
            Command::CursorUp => "cursorUp",
            Command::CursorDown => "cursorDown",
            Command::CursorLineStart => "cursorLineStart",
            Command::CursorLineEnd => "cursorLineEnd",
            Command::PageUp => "pageUp",
            Command::PageDown => "pageDown",
            Command::InsertChar(_) => "insertChar",
            Command::InsertNewline => "insertNewline",
            Command::InsertTab => "insertTab",
            Command::DeleteBackward => "deleteBackward",
            Command::DeleteForward => "deleteForward",
            Command::Save => "save",
            Command::CloseTab => "closeTab",
            Command::NextTab => "nextTab",
            Command::PrevTab => "prevTab",
            Command::ExplorerUp => "explorerUp",
            Command::ExplorerDown => "explorerDown",
            Command::ExplorerPageUp => "explorerPageUp",
            Command::ExplorerPageDown => "explorerPageDown",
            Command::ExplorerActivate => "explorerActivate",
            Command::ExplorerGoRoot => "explorerGoRoot",
            Command::FocusExplorer => "focusExplorer",
            Command::FocusEditor => "focusEditor",
            Command::DismissNotice => "dismissNotice",
            Command::Quit => "quit",
        }
    }

    pub fn is_edit_command(&self) -> bool {
        matches!(
            self,
            Command::InsertChar(_)
                | Command::InsertNewline
                | Command::InsertTab
                | Command::DeleteBackward
                | Command::DeleteForward
        )
    }

    pub fn is_cursor_command(&self) -> bool {
        matches!(
            self,
            Command::CursorLeft
                | Command::CursorRight
                | Command::CursorUp
                | Command::CursorDown
                | Command::CursorLineStart
                | Command::CursorLineEnd
                | Command::PageUp
                | Command::PageDown
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_names() {
        assert_eq!(Command::Save.name(), "save");
        assert_eq!(Command::InsertChar('a').name(), "insertChar");
        assert_eq!(Command::ExplorerActivate.name(), "explorerActivate");
    }

    #[test]
    fn test_is_edit_command() {
        assert!(Command::InsertChar('a').is_edit_command());
        assert!(Command::DeleteBackward.is_edit_command());
        assert!(!Command::CursorLeft.is_edit_command());
        assert!(!Command::Save.is_edit_command());
    }

    #[test]
    fn test_is_cursor_command() {
        assert!(Command::CursorLeft.is_cursor_command());
        assert!(Command::PageDown.is_cursor_command());
        assert!(!Command::InsertChar('a').is_cursor_command());
    }
}
