//! A box-and-glue text layout engine.
//!
//! Text arrives as a flat list of [`Token`]s: words (text boxes) and the
//! spaces between them (glue). The [`Typesetter`] breaks that list into
//! paragraphs and lines, justifies the lines, reorders runs of text written
//! against the paragraph direction and returns every token with its final
//! position. Rendering the result is left to the caller.

mod direction;
pub use direction::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

/// The individual layout stages
pub mod layout;
pub use layout::{Status, TypesetToken};

mod measure;
pub use measure::*;

mod options;
pub use options::*;

mod token;
pub use token::*;

mod typesetter;
pub use typesetter::*;

mod units;
pub use units::*;
