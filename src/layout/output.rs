use crate::{Direction, FontSpec, Px, Token};

/// Whether a typeset token is drawn
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    /// Positioned and visible
    Set,
    /// Kept for bookkeeping only: zero width, never rendered
    Invisible,
}

/// A token together with everything the typesetter decided about it
#[derive(Debug, Clone, PartialEq)]
pub struct TypesetToken {
    /// The input token, unchanged
    pub token: Token,
    pub status: Status,
    /// The token's language tag, or the detected language for untagged text
    pub lang: String,
    /// The font text is drawn with; `None` for glue and invisible tokens
    pub font: Option<FontSpec>,
    pub width: Px,
    /// For left-to-right text, the left end of the baseline; for right-to-left
    /// text, the right end. For glue, always the left edge of the space.
    pub x: Px,
    /// Baseline of the line
    pub y: Px,
    /// 1-based line number
    pub line_number: u32,
    /// How many times this exact text has been seen so far on this line,
    /// counting this token. 0 for glue and invisible tokens.
    pub occurrence_in_line: u32,
    pub direction: Direction,
}

impl TypesetToken {
    pub fn is_visible(&self) -> bool {
        self.status == Status::Set
    }

    /// The text of a text token; `None` for glue
    pub fn text(&self) -> Option<&str> {
        self.token.as_text().map(|text| text.text())
    }

    pub fn is_glue(&self) -> bool {
        self.token.is_glue()
    }
}

/// A token that has been measured but not yet placed on a line
#[derive(Debug, Clone, PartialEq)]
pub struct PendingToken {
    pub token: Token,
    /// Measured text width or resolved glue width
    pub width: Px,
    pub lang: String,
    pub font: Option<FontSpec>,
    pub invisible: bool,
}

impl PendingToken {
    pub(crate) fn hidden(token: Token) -> PendingToken {
        let lang = token.lang().to_string();
        PendingToken {
            token,
            width: Px::ZERO,
            lang,
            font: None,
            invisible: true,
        }
    }

    pub(crate) fn hide(&mut self) {
        self.invisible = true;
        self.width = Px::ZERO;
    }
}

/// The tokens of one line, in logical order
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Line {
    pub tokens: Vec<PendingToken>,
    /// The final line of its paragraph, which is never justified
    pub last: bool,
}
