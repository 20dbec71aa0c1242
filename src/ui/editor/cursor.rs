use super::buffer::Buffer;

/// Caret movement over a [`Buffer`]. Columns are char offsets.
pub struct CursorOps;

impl CursorOps {
    /// Clamp the caret to an existing line and column.
    pub fn clamp(buf: &mut Buffer) {
        let last_line = buf.len_lines().saturating_sub(1);
        buf.cursor.line = buf.cursor.line.min(last_line);
        buf.cursor.character = buf.cursor.character.min(buf.line_len(buf.cursor.line));
    }

    pub fn move_up(buf: &mut Buffer) {
        if buf.cursor.line > 0 {
            buf.cursor.line -= 1;
            Self::clamp(buf);
        }
    }

    pub fn move_down(buf: &mut Buffer) {
        if buf.cursor.line + 1 < buf.len_lines() {
            buf.cursor.line += 1;
            Self::clamp(buf);
        }
    }

    /// Move left one character, wrapping to the end of the previous line.
    pub fn move_left(buf: &mut Buffer) {
        Self::clamp(buf);
        if buf.cursor.character > 0 {
            buf.cursor.character -= 1;
        } else if buf.cursor.line > 0 {
            buf.cursor.line -= 1;
            buf.cursor.character = buf.line_len(buf.cursor.line);
        }
    }

    /// Move right one character, wrapping to the start of the next line.
    pub fn move_right(buf: &mut Buffer) {
        Self::clamp(buf);
        if buf.cursor.character < buf.line_len(buf.cursor.line) {
            buf.cursor.character += 1;
        } else if buf.cursor.line + 1 < buf.len_lines() {
            buf.cursor.line += 1;
            buf.cursor.character = 0;
        }
    }

    pub fn move_to_line_start(buf: &mut Buffer) {
        buf.cursor.character = 0;
    }

    pub fn move_to_line_end(buf: &mut Buffer) {
        buf.cursor.character = buf.line_len(buf.cursor.line);
    }

    pub fn page_up(buf: &mut Buffer, page: usize) {
        buf.cursor.line = buf.cursor.line.saturating_sub(page.max(1));
        Self::clamp(buf);
    }

    pub fn page_down(buf: &mut Buffer, page: usize) {
        buf.cursor.line += page.max(1);
        Self::clamp(buf);
    }

    /// Scroll just enough to keep the caret `margin` lines inside the viewport.
    pub fn ensure_visible(buf: &mut Buffer, visible_height: usize, margin: usize) {
        if visible_height == 0 {
            return;
        }
        let margin = margin.min(visible_height.saturating_sub(1) / 2);
        let line = buf.cursor.line;
        if line < buf.scroll_offset + margin {
            buf.scroll_offset = line.saturating_sub(margin);
        } else if line + margin >= buf.scroll_offset + visible_height {
            buf.scroll_offset = line + margin + 1 - visible_height;
        }
    }

    /// Center `line` in the viewport unless it is already visible.
    pub fn reveal_centered(buf: &mut Buffer, line: usize, visible_height: usize) {
        let visible = line >= buf.scroll_offset && line < buf.scroll_offset + visible_height;
        if !visible {
            buf.scroll_offset = line.saturating_sub(visible_height / 2);
        }
    }
}
