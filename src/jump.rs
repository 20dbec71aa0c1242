use tracing::{debug, info, warn};

use crate::command::CommandId;
use crate::config::IndicatorConfig;
use crate::error::{JumpError, Result};
use crate::host::EditorHost;
use crate::indicators::StatusIndicators;
use crate::occurrence::{jump_target, Direction};
use crate::position::TextRange;

/// Owns the jump commands and their status bar indicators for as long as the
/// extension is active.
#[derive(Debug)]
pub struct JumpExtension {
    indicators: StatusIndicators,
}

impl JumpExtension {
    /// Register every command with `host` and create the indicators.
    pub fn activate<H: EditorHost>(host: &mut H, config: &IndicatorConfig) -> Self {
        for command in CommandId::ALL {
            host.register_command(command.name(), command);
        }
        info!(commands = CommandId::ALL.len(), "jump extension activated");
        Self {
            indicators: StatusIndicators::new(config),
        }
    }

    /// Drop the indicators. The extension cannot be used afterwards.
    pub fn deactivate(self) {
        info!("jump extension deactivated");
    }

    pub fn indicators(&self) -> &StatusIndicators {
        &self.indicators
    }

    /// Run `command`. Jump failures are reported through the host and leave
    /// the selection alone.
    pub fn execute<H: EditorHost>(&mut self, command: CommandId, host: &mut H) {
        match command {
            CommandId::ShowIndicators => self.indicators.show(),
            CommandId::HideIndicators => self.indicators.hide(),
            CommandId::SelectPrevious => Self::run_jump(host, Direction::Previous),
            CommandId::SelectNext => Self::run_jump(host, Direction::Next),
        }
    }

    fn run_jump<H: EditorHost>(host: &mut H, direction: Direction) {
        match select_occurrence(host, direction) {
            Ok(range) => debug!(%range, ?direction, "selection moved"),
            Err(e) => {
                warn!(error = %e, ?direction, "jump failed");
                host.show_error_message(&e.to_string());
            }
        }
    }
}

/// Move the host's selection to the neighbouring occurrence of the word
/// under the selection start.
pub fn select_occurrence<H: EditorHost>(host: &mut H, direction: Direction) -> Result<TextRange> {
    let text = host.active_document_text().ok_or(JumpError::NoActiveEditor)?;
    let selection = host.active_selection().ok_or(JumpError::NoActiveEditor)?;

    let range = jump_target(&text, selection.start(), direction)?;
    host.set_selection_and_reveal(range);
    Ok(range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::{Position, Selection, WordSpan};
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct FakeHost {
        text: Option<String>,
        selection: Option<Selection>,
        revealed: Vec<TextRange>,
        errors: Vec<String>,
        commands: Vec<(&'static str, CommandId)>,
    }

    impl FakeHost {
        fn with_document(text: &str, cursor: Position) -> Self {
            Self {
                text: Some(text.to_string()),
                selection: Some(Selection::caret(cursor)),
                ..Self::default()
            }
        }
    }

    impl EditorHost for FakeHost {
        fn active_document_text(&self) -> Option<String> {
            self.text.clone()
        }

        fn active_selection(&self) -> Option<Selection> {
            self.selection
        }

        fn set_selection_and_reveal(&mut self, range: TextRange) {
            self.selection = Some(range.into());
            self.revealed.push(range);
        }

        fn show_error_message(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }

        fn register_command(&mut self, name: &'static str, command: CommandId) {
            self.commands.push((name, command));
        }
    }

    fn activate(host: &mut FakeHost) -> JumpExtension {
        JumpExtension::activate(host, &IndicatorConfig::default())
    }

    #[test]
    fn test_activate_registers_all_commands() {
        let mut host = FakeHost::default();
        let _ext = activate(&mut host);
        let names: Vec<&str> = host.commands.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "wordjump.selectPrevious",
                "wordjump.selectNext",
                "wordjump.showIndicators",
                "wordjump.hideIndicators",
            ]
        );
    }

    #[test]
    fn test_next_moves_selection() {
        let mut host = FakeHost::with_document("foo bar\nbaz foo", Position::new(0, 1));
        let mut ext = activate(&mut host);
        ext.execute(CommandId::SelectNext, &mut host);

        let expected = TextRange::on_line(1, WordSpan::new(4, 7));
        assert_eq!(host.revealed, vec![expected]);
        assert_eq!(host.selection, Some(Selection::from(expected)));
        assert!(host.errors.is_empty());
    }

    #[test]
    fn test_repeated_previous_walks_back() {
        let mut host = FakeHost::with_document("a x\nx b\nc x", Position::new(2, 2));
        let mut ext = activate(&mut host);
        ext.execute(CommandId::SelectPrevious, &mut host);
        ext.execute(CommandId::SelectPrevious, &mut host);

        let starts: Vec<Position> = host.revealed.iter().map(|r| r.start).collect();
        assert_eq!(starts, vec![Position::new(1, 0), Position::new(0, 2)]);
    }

    #[test]
    fn test_selection_start_is_used() {
        // anchor after active: the search starts from the earlier end
        let mut host = FakeHost::with_document("foo bar foo", Position::new(0, 0));
        host.selection = Some(Selection::new(Position::new(0, 11), Position::new(0, 8)));
        let range = select_occurrence(&mut host, Direction::Previous).unwrap();
        assert_eq!(range, TextRange::on_line(0, WordSpan::new(0, 3)));
    }

    #[test]
    fn test_cursor_on_whitespace() {
        let mut host = FakeHost::with_document("foo bar", Position::new(0, 3));
        let mut ext = activate(&mut host);
        ext.execute(CommandId::SelectNext, &mut host);

        assert_eq!(host.errors, vec!["Move the cursor to the word".to_string()]);
        assert!(host.revealed.is_empty());
        assert_eq!(host.selection, Some(Selection::caret(Position::new(0, 3))));
    }

    #[test]
    fn test_no_other_occurrence() {
        let mut host = FakeHost::with_document("alpha", Position::new(0, 2));
        let mut ext = activate(&mut host);
        ext.execute(CommandId::SelectNext, &mut host);
        ext.execute(CommandId::SelectPrevious, &mut host);

        assert_eq!(
            host.errors,
            vec![
                "Next identical word not found".to_string(),
                "Previous identical word not found".to_string(),
            ]
        );
        assert!(host.revealed.is_empty());
    }

    #[test]
    fn test_no_active_editor() {
        let mut host = FakeHost::default();
        assert_eq!(
            select_occurrence(&mut host, Direction::Next),
            Err(JumpError::NoActiveEditor)
        );
        let mut ext = activate(&mut host);
        ext.execute(CommandId::SelectPrevious, &mut host);
        assert_eq!(host.errors, vec!["No active editor".to_string()]);
    }

    #[test]
    fn test_indicator_commands() {
        let mut host = FakeHost::default();
        let mut ext = activate(&mut host);
        assert!(!ext.indicators().is_visible());

        ext.execute(CommandId::ShowIndicators, &mut host);
        assert!(ext.indicators().is_visible());
        ext.execute(CommandId::HideIndicators, &mut host);
        assert!(!ext.indicators().is_visible());
        assert!(host.errors.is_empty());
        ext.deactivate();
    }
}
