//! Previous/next occurrence scans over a document.
//!
//! Both scans look at the rest of the cursor's line first and only then walk
//! the other lines, nearest line first. On the cursor's line the match
//! closest to the cursor wins. On any other line the first match in reading
//! order wins, even when scanning backward.

use std::fmt::Display;

use tracing::debug;

use crate::error::{JumpError, Result};
use crate::position::{Position, TextRange};
use crate::word::{byte_offset, word_at, WordMatcher};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Previous,
    Next,
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Previous => write!(f, "Previous"),
            Self::Next => write!(f, "Next"),
        }
    }
}

/// Nearest whole-word occurrence of `word` strictly before `position`.
pub fn find_previous(text: &str, word: &str, position: Position) -> Option<TextRange> {
    let matcher = WordMatcher::new(word)?;
    let lines: Vec<&str> = text.split('\n').collect();
    let current = lines.get(position.line)?;

    let before = &current[..byte_offset(current, position.character)];
    if let Some(span) = matcher.last(before) {
        return Some(TextRange::on_line(position.line, span));
    }

    lines[..position.line]
        .iter()
        .enumerate()
        .rev()
        .find_map(|(idx, line)| matcher.first(line).map(|span| TextRange::on_line(idx, span)))
}

/// Nearest whole-word occurrence of `word` after `position`.
///
/// The current line is searched from one character past the cursor, so the
/// word the cursor sits on is never returned.
pub fn find_next(text: &str, word: &str, position: Position) -> Option<TextRange> {
    let matcher = WordMatcher::new(word)?;
    let lines: Vec<&str> = text.split('\n').collect();
    let current = lines.get(position.line)?;

    let skipped = position.character.saturating_add(1);
    let after = &current[byte_offset(current, skipped)..];
    if let Some(span) = matcher.first(after) {
        return Some(TextRange::on_line(position.line, span.shifted(skipped)));
    }

    lines
        .iter()
        .enumerate()
        .skip(position.line + 1)
        .find_map(|(idx, line)| matcher.first(line).map(|span| TextRange::on_line(idx, span)))
}

pub fn find_occurrence(
    text: &str,
    word: &str,
    position: Position,
    direction: Direction,
) -> Option<TextRange> {
    match direction {
        Direction::Previous => find_previous(text, word, position),
        Direction::Next => find_next(text, word, position),
    }
}

/// Take the word under `position` and find its neighbouring occurrence in
/// `direction`.
pub fn jump_target(text: &str, position: Position, direction: Direction) -> Result<TextRange> {
    let line = text
        .split('\n')
        .nth(position.line)
        .ok_or(JumpError::NoWordAtCursor)?;
    let word = word_at(line, position.character).ok_or(JumpError::NoWordAtCursor)?;

    let range = find_occurrence(text, word, position, direction)
        .ok_or(JumpError::OccurrenceNotFound { direction })?;
    debug!(%word, %position, %range, ?direction, "occurrence found");
    Ok(range)
}
