//! Jump the selection to the previous or next occurrence of the word under
//! the cursor.
//!
//! The search itself lives in [`word`] and [`occurrence`] and only works on
//! strings. [`jump`] wires it to any editor implementing [`host::EditorHost`];
//! [`app`], [`input`] and [`ui`] are the terminal editor shipped as the
//! `wordjump` binary.

pub mod app;
pub mod command;
pub mod config;
pub mod error;
pub mod host;
pub mod indicators;
pub mod input;
pub mod jump;
pub mod occurrence;
pub mod position;
pub mod theme;
pub mod ui;
pub mod word;

pub use error::JumpError;
pub use occurrence::{find_next, find_previous, jump_target, Direction};
pub use position::{Position, Selection, TextRange, WordSpan};
pub use word::word_range_at;
