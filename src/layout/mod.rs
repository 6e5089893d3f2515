//! The stages of a typesetting pass.
//!
//! Each stage consumes what the previous one produced:
//!
//! - [`split_paragraphs`] cuts the token stream at newline tokens
//! - [`LineFiller`] measures tokens and breaks each paragraph into [`Line`]s
//! - [`compose_line`] justifies a line, orders it for display and positions it
//! - [`line_number_tokens`] numbers the lines of the result
//!
//! [`Typesetter`](crate::Typesetter) drives all of them; they are public so
//! that they can be used and tested on their own.
//!
//! # Example
//!
//! ```
//! use glue_typeset::layout::{compose_line, Line, LineParams, PendingToken};
//! use glue_typeset::{Direction, Px, Token};
//!
//! let word = |s: &str| PendingToken {
//!     token: Token::text_in(s, "en"),
//!     width: Px(10.0 * s.len() as f64),
//!     lang: "en".to_string(),
//!     font: None,
//!     invisible: false,
//! };
//! let space = PendingToken {
//!     token: Token::glue(),
//!     width: Px(5.0),
//!     lang: String::new(),
//!     font: None,
//!     invisible: false,
//! };
//!
//! let line = Line { tokens: vec![word("ab"), space, word("cd")], last: false };
//! let params = LineParams {
//!     line_width: Px(100.0),
//!     direction: Direction::Ltr,
//!     line_number: 1,
//!     y: Px(16.0),
//!     justify: true,
//! };
//! let placed = compose_line(line, &params).expect("line is consistent");
//! assert_eq!(placed[2].x, Px(80.0));
//! ```

mod bidi;
mod compose;
mod filler;
mod line_numbers;
mod output;
mod paragraph;

#[cfg(test)]
pub(crate) mod testing;

pub use bidi::*;
pub use compose::*;
pub use filler::*;
pub use line_numbers::*;
pub use output::*;
pub use paragraph::*;
