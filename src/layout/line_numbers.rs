use super::{Status, TypesetToken};
use crate::{Direction, FontSpec, MeasureError, NumeralStyle, Px, TextMeasurer, Token};
use std::collections::BTreeMap;

/// Settings for a run of line numbers
#[derive(Debug, Clone, PartialEq)]
pub struct LineNumbering {
    /// Number line 1 and every line that is a multiple of this
    pub frequency: u32,
    pub style: NumeralStyle,
    pub font: FontSpec,
    /// Base direction of the numbered text
    pub direction: Direction,
}

impl LineNumbering {
    fn is_numbered(&self, line: u32) -> bool {
        line == 1 || (self.frequency > 0 && line % self.frequency == 0)
    }
}

/// Baseline of every line holding at least one visible token
pub fn line_baselines(typeset: &[TypesetToken]) -> BTreeMap<u32, Px> {
    typeset
        .iter()
        .filter(|token| token.is_visible())
        .map(|token| (token.line_number, token.y))
        .collect()
}

/// Generate line number tokens for typeset text. Numbers sit on their line's
/// baseline: right-aligned in the margin left of the text (ending at x = 0)
/// for left-to-right text, and starting at x = 0 for right-to-left text.
pub fn line_number_tokens<M: TextMeasurer + ?Sized>(
    typeset: &[TypesetToken],
    numbering: &LineNumbering,
    measurer: &M,
) -> Result<Vec<TypesetToken>, MeasureError> {
    let mut numbers = Vec::new();
    for (line, y) in line_baselines(typeset) {
        if !numbering.is_numbered(line) {
            continue;
        }
        let label = numbering.style.format(line);
        let width = measurer.measure(&label, &numbering.font)?;
        numbers.push(TypesetToken {
            token: Token::text(label),
            status: Status::Set,
            lang: String::new(),
            font: Some(numbering.font.clone()),
            width,
            x: match numbering.direction {
                Direction::Rtl => Px::ZERO,
                Direction::Ltr => -width,
            },
            y,
            line_number: line,
            occurrence_in_line: 1,
            direction: Direction::Ltr,
        });
    }
    Ok(numbers)
}
