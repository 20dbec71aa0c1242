use crate::command::CommandId;
use crate::position::{Selection, TextRange};

/// The slice of an editor that the jump commands need.
///
/// The search core never sees this trait; only [`crate::jump::JumpExtension`]
/// talks to the host.
pub trait EditorHost {
    /// Full text of the active document, or `None` when no document is open.
    fn active_document_text(&self) -> Option<String>;

    /// Primary selection of the active document.
    fn active_selection(&self) -> Option<Selection>;

    /// Replace the primary selection with `range` and scroll it into view.
    fn set_selection_and_reveal(&mut self, range: TextRange);

    fn show_error_message(&mut self, message: &str);

    /// Make `command` invocable under `name`.
    fn register_command(&mut self, name: &'static str, command: CommandId);
}
