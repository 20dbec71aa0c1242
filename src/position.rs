use std::fmt::Display;

/// A location in a document: zero-based line index and zero-based character
/// offset within that line. Offsets count Unicode scalar values, not bytes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line: {}, character: {}", self.line, self.character)
    }
}

/// A span of character offsets `[start, end)` within a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan {
    pub start: usize,
    pub end: usize,
}

impl WordSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// True when `offset` lies inside the span. The end offset is excluded.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    pub fn shifted(self, by: usize) -> Self {
        Self::new(self.start + by, self.end + by)
    }
}

/// A document range between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRange {
    pub start: Position,
    pub end: Position,
}

impl TextRange {
    /// Range covering `span` on line `line`.
    pub fn on_line(line: usize, span: WordSpan) -> Self {
        Self {
            start: Position::new(line, span.start),
            end: Position::new(line, span.end),
        }
    }
}

impl Display for TextRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.start.line, self.start.character, self.end.line, self.end.character
        )
    }
}

/// An editor selection. `anchor` is where the selection began, `active` is
/// where the caret sits; either may come first in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: Position,
    pub active: Position,
}

impl Selection {
    pub fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// Empty selection with the caret at `position`.
    pub fn caret(position: Position) -> Self {
        Self::new(position, position)
    }

    pub fn start(&self) -> Position {
        self.anchor.min(self.active)
    }

    pub fn end(&self) -> Position {
        self.anchor.max(self.active)
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }
}

impl From<TextRange> for Selection {
    fn from(range: TextRange) -> Self {
        Self::new(range.start, range.end)
    }
}
