//! Capabilities the typesetter borrows from its host: measuring rendered text
//! and guessing the language of untagged text.

use crate::{font::FontSpec, MeasureError, Px};
use unicode_script::{Script, UnicodeScript};

/// Measures the rendered width of a string in a given font
pub trait TextMeasurer {
    /// Rendered width of `text` in `font`, in pixels
    fn measure(&self, text: &str, font: &FontSpec) -> Result<Px, MeasureError>;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, font: &FontSpec) -> Result<Px, MeasureError> {
        (**self).measure(text, font)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for Box<T> {
    fn measure(&self, text: &str, font: &FontSpec) -> Result<Px, MeasureError> {
        (**self).measure(text, font)
    }
}

/// Guesses a language tag for text that was not given one
pub trait LanguageDetector {
    fn detect(&self, text: &str) -> String;
}

impl<T: LanguageDetector + ?Sized> LanguageDetector for &T {
    fn detect(&self, text: &str) -> String {
        (**self).detect(text)
    }
}

/// Detects the language of a string from the script of its first strongly
/// typed character. Only scripts that map to a single language of interest
/// are recognised; everything else is assumed to be the default language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptDetector {
    pub default_lang: String,
}

impl ScriptDetector {
    pub fn new<S: Into<String>>(default_lang: S) -> ScriptDetector {
        ScriptDetector {
            default_lang: default_lang.into(),
        }
    }
}

impl LanguageDetector for ScriptDetector {
    fn detect(&self, text: &str) -> String {
        let strong = text
            .chars()
            .map(|ch| ch.script())
            .find(|script| !matches!(script, Script::Common | Script::Inherited | Script::Unknown));

        match strong {
            Some(Script::Hebrew) => "he".to_string(),
            Some(Script::Arabic) => "ar".to_string(),
            Some(Script::Syriac) => "syr".to_string(),
            Some(Script::Greek) => "el".to_string(),
            _ => self.default_lang.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_by_script() {
        let detector = ScriptDetector::new("la");
        assert_eq!(detector.detect("שלום"), "he");
        assert_eq!(detector.detect("«سلام»"), "ar");
        assert_eq!(detector.detect("λόγος"), "el");
        assert_eq!(detector.detect("ܫܠܡܐ"), "syr");
        assert_eq!(detector.detect("veritas"), "la");
    }

    #[test]
    fn neutral_text_gets_default() {
        let detector = ScriptDetector::new("en");
        assert_eq!(detector.detect("1234, 56"), "en");
        assert_eq!(detector.detect(""), "en");
        assert_eq!(detector.detect("(3) שלום"), "he");
    }
}
