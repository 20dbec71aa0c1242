use anyhow::{anyhow, Result};
use ratatui::layout::{Position as ScreenPosition, Rect};
use std::path::PathBuf;
use tracing::warn;

use crate::command::CommandId;
use crate::config::Config;
use crate::host::EditorHost;
use crate::indicators::StatusIndicators;
use crate::jump::JumpExtension;
use crate::position::Position;
use crate::theme::Theme;
use crate::ui::editor::render::gutter_width;
use crate::ui::editor::EditorState;
use crate::ui::status_bar::indicator_areas;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Command,
}

/// Result of executing a command bar line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    Continue,
    Quit,
}

pub struct App {
    pub mode: Mode,
    pub editor: EditorState,
    pub extension: Option<JumpExtension>,
    pub command_input: String,
    pub config: Config,
    // Areas from the last frame, for mouse hit testing
    pub editor_area: Rect,
    pub status_area: Rect,
}

impl App {
    pub fn new(path: Option<PathBuf>, config: Config) -> Self {
        let mut editor = EditorState::new(&config.editor);
        let extension = JumpExtension::activate(&mut editor, &config.indicators);

        editor.set_status("Alt+Up/Alt+Down jump | F2/F3 indicators | : commands | Ctrl+Q quit");

        if let Some(file_path) = path {
            match editor.open_file(&file_path) {
                Ok(()) => editor.set_status(format!("Opened: {}", file_path.display())),
                Err(e) => {
                    warn!(path = %file_path.display(), error = %e, "failed to open file");
                    editor.show_error_message(&format!(
                        "Failed to open {}: {}",
                        file_path.display(),
                        e
                    ));
                }
            }
        }

        Self {
            mode: Mode::Normal,
            editor,
            extension: Some(extension),
            command_input: String::new(),
            config,
            editor_area: Rect::default(),
            status_area: Rect::default(),
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.config.theme
    }

    pub fn indicators(&self) -> Option<&StatusIndicators> {
        self.extension.as_ref().map(JumpExtension::indicators)
    }

    pub fn run_command(&mut self, command: CommandId) {
        if let Some(extension) = self.extension.as_mut() {
            extension.execute(command, &mut self.editor);
        }
    }

    /// Execute the command bar input.
    pub fn execute_command(&mut self) -> Result<CommandResult> {
        let input = std::mem::take(&mut self.command_input);
        self.mode = Mode::Normal;

        let name = input.trim();
        match name {
            "" => Ok(CommandResult::Continue),
            "q" | "quit" => Ok(CommandResult::Quit),
            "commands" => {
                let names: Vec<&str> = self.editor.command_names().collect();
                self.editor.set_status(names.join("  "));
                Ok(CommandResult::Continue)
            }
            _ => {
                let command = self
                    .editor
                    .lookup_command(name)
                    .ok_or_else(|| anyhow!("Unknown command: {}", name))?;
                self.run_command(command);
                Ok(CommandResult::Continue)
            }
        }
    }

    /// Handle a left click at a screen cell.
    pub fn click(&mut self, column: u16, row: u16) {
        let cell = ScreenPosition::new(column, row);

        if self.status_area.contains(cell) {
            let hit = self.indicators().and_then(|indicators| {
                indicator_areas(self.status_area, indicators)
                    .into_iter()
                    .find(|(area, _)| area.contains(cell))
                    .map(|(_, command)| command)
            });
            if let Some(command) = hit {
                self.run_command(command);
            }
            return;
        }

        if self.editor_area.contains(cell) {
            let Some(buf) = self.editor.buf() else {
                return;
            };
            let gutter = gutter_width(&self.editor) as u16;
            let line = buf.scroll_offset + (row - self.editor_area.y) as usize;
            let cell = (column - self.editor_area.x).saturating_sub(gutter) as usize;
            let character = buf.char_at_column(line, cell);
            self.editor.click_at(Position::new(line, character));
        }
    }

    pub fn update_editor_visible_height(&mut self, height: usize) {
        self.editor.update_visible_height(height);
    }

    /// Deactivate the extension, disposing its indicators.
    pub fn shutdown(&mut self) {
        if let Some(extension) = self.extension.take() {
            extension.deactivate();
        }
    }
}
