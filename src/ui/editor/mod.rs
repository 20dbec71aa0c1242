pub mod buffer;
pub mod cursor;
pub mod render;
pub mod selection;

pub use buffer::Buffer;

use anyhow::Result;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use crate::command::CommandId;
use crate::config::EditorConfig;
use crate::host::EditorHost;
use crate::position::{Position, Selection, TextRange};
use cursor::CursorOps;
use selection::SelectionOps;

/// Message shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// The terminal editor: at most one open document plus the state the
/// jump commands read and write through [`EditorHost`].
pub struct EditorState {
    pub buffer: Option<Buffer>,
    pub visible_height: usize,
    pub scroll_margin: usize,
    pub show_line_numbers: bool,
    pub message: Option<StatusMessage>,
    commands: BTreeMap<&'static str, CommandId>,
}

impl EditorState {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            buffer: None,
            visible_height: 0,
            scroll_margin: config.scroll_margin,
            show_line_numbers: config.show_line_numbers,
            message: None,
            commands: BTreeMap::new(),
        }
    }

    // ========== Buffer Accessors ==========

    pub fn buf(&self) -> Option<&Buffer> {
        self.buffer.as_ref()
    }

    fn buf_mut(&mut self) -> Option<&mut Buffer> {
        self.buffer.as_mut()
    }

    pub fn cursor(&self) -> Position {
        self.buf().map(|b| b.cursor).unwrap_or_default()
    }

    // ========== File Operations ==========

    pub fn open_file(&mut self, path: &Path) -> Result<()> {
        let buffer = Buffer::from_file(path)?;
        info!(path = %path.display(), lines = buffer.len_lines(), "opened file");
        self.buffer = Some(buffer);
        Ok(())
    }

    pub fn open_text(&mut self, content: &str) {
        self.buffer = Some(Buffer::from_text(content));
    }

    // ========== Cursor Movement ==========

    /// Apply a caret movement, dropping any selection.
    pub fn move_cursor(&mut self, movement: impl FnOnce(&mut Buffer)) {
        let (height, margin) = (self.visible_height, self.scroll_margin);
        if let Some(buf) = self.buf_mut() {
            SelectionOps::clear_selection(buf);
            movement(buf);
            CursorOps::ensure_visible(buf, height, margin);
        }
    }

    pub fn move_up(&mut self) {
        self.move_cursor(CursorOps::move_up);
    }

    pub fn move_down(&mut self) {
        self.move_cursor(CursorOps::move_down);
    }

    pub fn move_left(&mut self) {
        self.move_cursor(CursorOps::move_left);
    }

    pub fn move_right(&mut self) {
        self.move_cursor(CursorOps::move_right);
    }

    pub fn move_to_line_start(&mut self) {
        self.move_cursor(CursorOps::move_to_line_start);
    }

    pub fn move_to_line_end(&mut self) {
        self.move_cursor(CursorOps::move_to_line_end);
    }

    pub fn page_up(&mut self) {
        let page = self.visible_height;
        self.move_cursor(|buf| CursorOps::page_up(buf, page));
    }

    pub fn page_down(&mut self) {
        let page = self.visible_height;
        self.move_cursor(|buf| CursorOps::page_down(buf, page));
    }

    /// Place the caret at a screen-derived position, clamped to the text.
    pub fn click_at(&mut self, position: Position) {
        self.move_cursor(|buf| {
            buf.cursor = position;
            CursorOps::clamp(buf);
        });
    }

    pub fn update_visible_height(&mut self, height: usize) {
        self.visible_height = height;
        let margin = self.scroll_margin;
        if let Some(buf) = self.buf_mut() {
            CursorOps::ensure_visible(buf, height, margin);
        }
    }

    // ========== Messages ==========

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.message = Some(StatusMessage::info(text));
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    // ========== Commands ==========

    pub fn lookup_command(&self, name: &str) -> Option<CommandId> {
        self.commands.get(name).copied()
    }

    pub fn command_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }
}

impl EditorHost for EditorState {
    fn active_document_text(&self) -> Option<String> {
        self.buf().map(Buffer::content)
    }

    fn active_selection(&self) -> Option<Selection> {
        self.buf().map(Buffer::primary_selection)
    }

    fn set_selection_and_reveal(&mut self, range: TextRange) {
        let height = self.visible_height;
        if let Some(buf) = self.buf_mut() {
            SelectionOps::select(buf, range);
            CursorOps::reveal_centered(buf, range.start.line, height);
        }
        self.clear_message();
    }

    fn show_error_message(&mut self, message: &str) {
        self.message = Some(StatusMessage::error(message));
    }

    fn register_command(&mut self, name: &'static str, command: CommandId) {
        self.commands.insert(name, command);
    }
}
