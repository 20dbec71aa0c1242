use crate::command::CommandId;
use crate::config::IndicatorConfig;

/// A clickable status bar item bound to a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub text: String,
    /// Higher priority items sit further left.
    pub priority: u16,
    pub command: CommandId,
    visible: bool,
}

impl Indicator {
    pub fn new(text: impl Into<String>, priority: u16, command: CommandId) -> Self {
        Self {
            text: text.into(),
            priority,
            command,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

/// The "Up" and "Down" status bar items of the jump extension.
#[derive(Debug, Clone)]
pub struct StatusIndicators {
    up: Indicator,
    down: Indicator,
}

impl StatusIndicators {
    pub fn new(config: &IndicatorConfig) -> Self {
        let mut indicators = Self {
            up: Indicator::new(config.up_text.clone(), 100, CommandId::SelectPrevious),
            down: Indicator::new(config.down_text.clone(), 101, CommandId::SelectNext),
        };
        if config.show_on_start {
            indicators.show();
        }
        indicators
    }

    pub fn show(&mut self) {
        self.up.show();
        self.down.show();
    }

    pub fn hide(&mut self) {
        self.up.hide();
        self.down.hide();
    }

    pub fn is_visible(&self) -> bool {
        self.up.is_visible() || self.down.is_visible()
    }

    pub fn up(&self) -> &Indicator {
        &self.up
    }

    pub fn down(&self) -> &Indicator {
        &self.down
    }

    /// Visible indicators in display order, left to right.
    pub fn visible(&self) -> Vec<&Indicator> {
        let mut items: Vec<&Indicator> = [&self.up, &self.down]
            .into_iter()
            .filter(|item| item.is_visible())
            .collect();
        items.sort_by(|a, b| b.priority.cmp(&a.priority));
        items
    }
}
