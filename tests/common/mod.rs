#![allow(dead_code)]

use glue_typeset::{FontSpec, MeasureError, Px, TextMeasurer, TypesetToken};
use std::cell::Cell;

/// Every character is 10px wide at 16px, scaling linearly with font size
pub struct FixedAdvance;

impl TextMeasurer for FixedAdvance {
    fn measure(&self, text: &str, font: &FontSpec) -> Result<Px, MeasureError> {
        Ok(Px(text.chars().count() as f64 * 10.0 * font.size.0 / 16.0))
    }
}

/// Measures correctly a fixed number of times, then fails
pub struct FlakyMeasurer {
    pub remaining: Cell<usize>,
}

impl TextMeasurer for FlakyMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> Result<Px, MeasureError> {
        match self.remaining.get() {
            0 => Err(MeasureError::Backend("canvas went away".to_string())),
            n => {
                self.remaining.set(n - 1);
                FixedAdvance.measure(text, font)
            }
        }
    }
}

pub fn close(a: Px, b: Px) -> bool {
    (a.0 - b.0).abs() <= 1e-6 * a.0.abs().max(b.0.abs()).max(1.0)
}

pub fn visible(tokens: &[TypesetToken]) -> Vec<&TypesetToken> {
    tokens.iter().filter(|t| t.is_visible()).collect()
}

pub fn lines(tokens: &[TypesetToken]) -> Vec<Vec<&TypesetToken>> {
    let mut out: Vec<Vec<&TypesetToken>> = Vec::new();
    for token in tokens {
        match out.last_mut() {
            Some(line) if line[0].line_number == token.line_number => line.push(token),
            _ => out.push(vec![token]),
        }
    }
    out
}
