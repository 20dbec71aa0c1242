use super::buffer::Buffer;
use crate::position::{Position, TextRange};

/// Selection bookkeeping for a [`Buffer`].
pub struct SelectionOps;

impl SelectionOps {
    /// Select `range` with the caret at its start.
    pub fn select(buf: &mut Buffer, range: TextRange) {
        buf.selection = Some(range.into());
        buf.cursor = range.start;
    }

    pub fn clear_selection(buf: &mut Buffer) {
        buf.selection = None;
    }

    /// Normalized selection range (start always before end).
    pub fn selection_range(buf: &Buffer) -> Option<(Position, Position)> {
        buf.selection
            .filter(|sel| !sel.is_empty())
            .map(|sel| (sel.start(), sel.end()))
    }

    /// Selected char columns on `line`, if the selection touches it.
    pub fn columns_on_line(buf: &Buffer, line: usize) -> Option<(usize, usize)> {
        let (start, end) = Self::selection_range(buf)?;
        if line < start.line || line > end.line {
            return None;
        }
        let from = if line == start.line { start.character } else { 0 };
        let to = if line == end.line {
            end.character
        } else {
            buf.line_len(line)
        };
        Some((from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::{Selection, WordSpan};

    #[test]
    fn test_select_moves_caret_to_start() {
        let mut buf = Buffer::from_text("foo bar foo");
        SelectionOps::select(&mut buf, TextRange::on_line(0, WordSpan::new(8, 11)));
        assert_eq!(buf.cursor, Position::new(0, 8));
        assert_eq!(
            SelectionOps::selection_range(&buf),
            Some((Position::new(0, 8), Position::new(0, 11)))
        );

        SelectionOps::clear_selection(&mut buf);
        assert_eq!(SelectionOps::selection_range(&buf), None);
    }

    #[test]
    fn test_columns_on_multiline_selection() {
        let mut buf = Buffer::from_text("abcd\nefgh\nijkl");
        buf.selection = Some(Selection::new(Position::new(2, 1), Position::new(0, 2)));
        assert_eq!(SelectionOps::columns_on_line(&buf, 0), Some((2, 4)));
        assert_eq!(SelectionOps::columns_on_line(&buf, 1), Some((0, 4)));
        assert_eq!(SelectionOps::columns_on_line(&buf, 2), Some((0, 1)));
        assert_eq!(SelectionOps::columns_on_line(&buf, 3), None);
    }

    #[test]
    fn test_empty_selection_is_ignored() {
        let mut buf = Buffer::from_text("abc");
        buf.selection = Some(Selection::caret(Position::new(0, 1)));
        assert_eq!(SelectionOps::selection_range(&buf), None);
        assert_eq!(SelectionOps::columns_on_line(&buf, 0), None);
    }
}
