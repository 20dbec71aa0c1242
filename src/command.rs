use std::fmt::Display;

use crate::occurrence::Direction;

/// Commands contributed by the jump extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommandId {
    SelectPrevious,
    SelectNext,
    ShowIndicators,
    HideIndicators,
}

impl CommandId {
    pub const ALL: [CommandId; 4] = [
        CommandId::SelectPrevious,
        CommandId::SelectNext,
        CommandId::ShowIndicators,
        CommandId::HideIndicators,
    ];

    /// Stable name used to register and invoke the command.
    pub fn name(self) -> &'static str {
        match self {
            CommandId::SelectPrevious => "wordjump.selectPrevious",
            CommandId::SelectNext => "wordjump.selectNext",
            CommandId::ShowIndicators => "wordjump.showIndicators",
            CommandId::HideIndicators => "wordjump.hideIndicators",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }

    /// The scan direction for the two jump commands.
    pub fn direction(self) -> Option<Direction> {
        match self {
            CommandId::SelectPrevious => Some(Direction::Previous),
            CommandId::SelectNext => Some(Direction::Next),
            CommandId::ShowIndicators | CommandId::HideIndicators => None,
        }
    }
}

impl Display for CommandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
