//! Deterministic measurers for unit tests

use crate::{FontSpec, MeasureError, Px, TextMeasurer};

/// Every character is 10px wide at 16px, scaling linearly with font size
pub(crate) struct FixedAdvance;

impl TextMeasurer for FixedAdvance {
    fn measure(&self, text: &str, font: &FontSpec) -> Result<Px, MeasureError> {
        Ok(Px(text.chars().count() as f64 * 10.0 * font.size.0 / 16.0))
    }
}

pub(crate) struct FailingMeasurer;

impl TextMeasurer for FailingMeasurer {
    fn measure(&self, _text: &str, _font: &FontSpec) -> Result<Px, MeasureError> {
        Err(MeasureError::Backend("no canvas".to_string()))
    }
}
