use anyhow::Result;
use ropey::Rope;
use std::fs;
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthChar;

use crate::position::{Position, Selection};

const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// A single open document.
///
/// Lines are split on `\n` only, so line indices agree with the search core.
#[derive(Debug, Clone)]
pub struct Buffer {
    text: Rope,
    /// Caret position; `character` is a char column in the line.
    pub cursor: Position,
    pub scroll_offset: usize,
    pub file_path: Option<PathBuf>,
    pub selection: Option<Selection>,
}

impl Buffer {
    pub fn from_text(content: &str) -> Self {
        Self {
            text: Rope::from_str(content),
            cursor: Position::default(),
            scroll_offset: 0,
            file_path: None,
            selection: None,
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path)?;
        if metadata.len() > MAX_FILE_SIZE {
            return Err(anyhow::anyhow!("File too large to open (max 10MB)"));
        }

        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                // invalid UTF-8 is treated as binary
                if e.kind() == std::io::ErrorKind::InvalidData {
                    return Err(anyhow::anyhow!("Cannot open binary file"));
                }
                return Err(e.into());
            }
        };

        if content.contains('\0') {
            return Err(anyhow::anyhow!("Cannot open binary file"));
        }

        let mut buffer = Self::from_text(&content);
        buffer.file_path = Some(path.to_path_buf());
        Ok(buffer)
    }

    pub fn content(&self) -> String {
        self.text.to_string()
    }

    pub fn filename(&self) -> String {
        self.file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| String::from("[untitled]"))
    }

    pub fn len_lines(&self) -> usize {
        self.text.len_lines()
    }

    /// Line text without its line feed.
    pub fn line(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.text.len_lines() {
            return None;
        }
        let line = self.text.line(line_idx).to_string();
        Some(line.strip_suffix('\n').unwrap_or(&line).to_string())
    }

    /// Length of a line in chars, not counting the line feed.
    pub fn line_len(&self, line_idx: usize) -> usize {
        if line_idx >= self.text.len_lines() {
            return 0;
        }
        let line = self.text.line(line_idx);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    /// Terminal cells taken by the first `character` chars of a line.
    pub fn display_column(&self, line_idx: usize, character: usize) -> usize {
        self.line(line_idx)
            .map(|line| line.chars().take(character).map(cell_width).sum())
            .unwrap_or(0)
    }

    /// Char column drawn at terminal cell `column` of a line. Cells past the
    /// end of the line map to the line length.
    pub fn char_at_column(&self, line_idx: usize, column: usize) -> usize {
        let Some(line) = self.line(line_idx) else {
            return 0;
        };
        let mut cells = 0;
        for (idx, ch) in line.chars().enumerate() {
            cells += cell_width(ch);
            if column < cells {
                return idx;
            }
        }
        line.chars().count()
    }

    /// Selection if one is set, otherwise an empty selection at the caret.
    pub fn primary_selection(&self) -> Selection {
        self.selection.unwrap_or_else(|| Selection::caret(self.cursor))
    }
}

fn cell_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_lines_follow_line_feeds() {
        let buf = Buffer::from_text("one\r\ntwo\n\nfour\n");
        assert_eq!(buf.len_lines(), 5);
        assert_eq!(buf.line(0).as_deref(), Some("one\r"));
        assert_eq!(buf.line(2).as_deref(), Some(""));
        assert_eq!(buf.line(4).as_deref(), Some(""));
        assert_eq!(buf.line(5), None);
        assert_eq!(buf.line_len(0), 4);
        assert_eq!(buf.line_len(3), 4);
    }

    #[test]
    fn test_line_len_counts_chars() {
        let buf = Buffer::from_text("héllo wörld");
        assert_eq!(buf.line_len(0), 11);
    }

    #[test]
    fn test_columns_follow_cell_width() {
        // each CJK char takes two cells
        let buf = Buffer::from_text("日本 go");
        assert_eq!(buf.display_column(0, 2), 4);
        assert_eq!(buf.display_column(0, 4), 6);
        assert_eq!(buf.char_at_column(0, 0), 0);
        assert_eq!(buf.char_at_column(0, 1), 0);
        assert_eq!(buf.char_at_column(0, 2), 1);
        assert_eq!(buf.char_at_column(0, 5), 3);
        assert_eq!(buf.char_at_column(0, 40), 5);
        assert_eq!(buf.char_at_column(3, 4), 0);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "alpha\nbeta").unwrap();
        let buf = Buffer::from_file(file.path()).unwrap();
        assert_eq!(buf.content(), "alpha\nbeta");
        assert_eq!(buf.len_lines(), 2);
        assert!(buf.file_path.is_some());
    }

    #[test]
    fn test_binary_file_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x66, 0x00, 0x6f]).unwrap();
        let err = Buffer::from_file(file.path()).unwrap_err();
        assert_eq!(err.to_string(), "Cannot open binary file");

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00]).unwrap();
        assert!(Buffer::from_file(file.path()).is_err());
    }

    #[test]
    fn test_primary_selection_defaults_to_caret() {
        let mut buf = Buffer::from_text("abc");
        buf.cursor = Position::new(0, 2);
        assert_eq!(buf.primary_selection(), Selection::caret(Position::new(0, 2)));
    }
}
