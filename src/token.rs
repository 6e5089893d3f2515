//! The input atoms of a layout: text boxes and glue.
//!
//! Tokens are plain values. The typesetter never changes them; everything it
//! computes is returned alongside them in a [`TypesetToken`](crate::TypesetToken).

use crate::font::FontSpec;
use crate::units::Px;

/// Font weight of a text token
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Font slant of a text token
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// Style overrides carried by a text token. Unset fields inherit from the
/// typesetter's default font.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Style {
    /// Multiplier applied to the default font size
    pub font_size_factor: Option<f64>,
    pub weight: Option<FontWeight>,
    pub style: Option<FontStyle>,
}

impl Style {
    /// Combine this overlay with a base font, yielding the font the token is
    /// measured and drawn with
    pub fn resolve(&self, base: &FontSpec) -> FontSpec {
        let size = match self.font_size_factor {
            Some(factor) if factor != 1.0 => base.size * factor,
            _ => base.size,
        };
        FontSpec {
            family: base.family.clone(),
            size,
            weight: self.weight.unwrap_or(base.weight),
            style: self.style.unwrap_or(base.style),
        }
    }
}

/// A box holding text
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TextToken {
    text: String,
    lang: Option<String>,
    style: Style,
}

impl TextToken {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The language tag the token was created with, or an empty string
    pub fn lang(&self) -> &str {
        self.lang.as_deref().unwrap_or_default()
    }

    pub fn has_lang(&self) -> bool {
        self.lang.is_some()
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Empty text and the paragraph-ending newline never take up space
    pub(crate) fn is_blank(&self) -> bool {
        self.text.is_empty() || self.is_newline()
    }

    pub(crate) fn is_newline(&self) -> bool {
        self.text == "\n"
    }
}

/// The nominal width of a piece of glue
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub enum Space {
    /// The paragraph's normal inter-word space
    #[default]
    Normal,
    /// An explicit width. Zero or negative widths collapse to nothing.
    Fixed(Px),
}

impl Space {
    pub fn resolve(self, normal_space: Px) -> Px {
        match self {
            Space::Normal => normal_space,
            Space::Fixed(width) => width,
        }
    }
}

/// Inter-word space
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct GlueToken {
    space: Space,
}

impl GlueToken {
    pub fn space(&self) -> Space {
        self.space
    }
}

/// A single layout atom
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Text(TextToken),
    Glue(GlueToken),
}

impl Token {
    /// A text box with no language; the typesetter detects one at layout time
    pub fn text<S: Into<String>>(text: S) -> Token {
        Token::Text(TextToken {
            text: text.into(),
            lang: None,
            style: Style::default(),
        })
    }

    /// A text box in the given language. An empty tag is the same as none.
    pub fn text_in<S: Into<String>, L: Into<String>>(text: S, lang: L) -> Token {
        let lang: String = lang.into();
        Token::Text(TextToken {
            text: text.into(),
            lang: if lang.is_empty() { None } else { Some(lang) },
            style: Style::default(),
        })
    }

    /// The paragraph terminator
    pub fn newline() -> Token {
        Token::text("\n")
    }

    /// Glue of normal width
    pub fn glue() -> Token {
        Token::Glue(GlueToken {
            space: Space::Normal,
        })
    }

    /// Glue of an explicit width
    pub fn glue_of(width: Px) -> Token {
        Token::Glue(GlueToken {
            space: Space::Fixed(width),
        })
    }

    /// Replace the width of a glue token. Has no effect on text.
    pub fn with_length(self, width: Px) -> Token {
        match self {
            Token::Glue(_) => Token::glue_of(width),
            text => text,
        }
    }

    pub fn bold(self) -> Token {
        self.map_style(|s| s.weight = Some(FontWeight::Bold))
    }

    pub fn normal_weight(self) -> Token {
        self.map_style(|s| s.weight = Some(FontWeight::Normal))
    }

    pub fn italic(self) -> Token {
        self.map_style(|s| s.style = Some(FontStyle::Italic))
    }

    pub fn normal_slant(self) -> Token {
        self.map_style(|s| s.style = Some(FontStyle::Normal))
    }

    /// Scale the font size relative to the default font size
    pub fn font_size(self, factor: f64) -> Token {
        self.map_style(|s| s.font_size_factor = Some(factor))
    }

    fn map_style(self, f: impl FnOnce(&mut Style)) -> Token {
        match self {
            Token::Text(mut text) => {
                f(&mut text.style);
                Token::Text(text)
            }
            glue => glue,
        }
    }

    pub fn is_glue(&self) -> bool {
        matches!(self, Token::Glue(_))
    }

    pub fn as_text(&self) -> Option<&TextToken> {
        match self {
            Token::Text(text) => Some(text),
            Token::Glue(_) => None,
        }
    }

    /// The language tag of a text token; empty for glue and untagged text
    pub fn lang(&self) -> &str {
        match self {
            Token::Text(text) => text.lang(),
            Token::Glue(_) => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_lang_is_empty_string() {
        assert_eq!(Token::text("abc").lang(), "");
        assert_eq!(Token::text_in("abc", "").lang(), "");
        assert_eq!(Token::text_in("abc", "en").lang(), "en");
        assert!(!Token::text_in("abc", "").as_text().is_some_and(TextToken::has_lang));
    }

    #[test]
    fn glue_defaults_to_normal_space() {
        let Token::Glue(glue) = Token::glue() else {
            panic!("expected glue");
        };
        assert_eq!(glue.space(), Space::Normal);
        assert_eq!(glue.space().resolve(Px(5.0)), Px(5.0));

        let Token::Glue(glue) = Token::glue().with_length(Px(-2.0)) else {
            panic!("expected glue");
        };
        assert_eq!(glue.space().resolve(Px(5.0)), Px(-2.0));
    }

    #[test]
    fn style_setters_compose() {
        let token = Token::text("x").bold().italic().font_size(1.5);
        let style = *token.as_text().expect("text").style();
        assert_eq!(style.weight, Some(FontWeight::Bold));
        assert_eq!(style.style, Some(FontStyle::Italic));
        assert_eq!(style.font_size_factor, Some(1.5));

        let token = token.normal_weight().normal_slant();
        let style = *token.as_text().expect("text").style();
        assert_eq!(style.weight, Some(FontWeight::Normal));
        assert_eq!(style.style, Some(FontStyle::Normal));
    }

    #[test]
    fn style_setters_ignore_glue() {
        assert_eq!(Token::glue().bold().font_size(2.0), Token::glue());
    }

    #[test]
    fn resolve_style_against_base() {
        let base = FontSpec::new("Helvetica", Px(16.0));
        let resolved = Style {
            font_size_factor: Some(0.5),
            weight: Some(FontWeight::Bold),
            style: None,
        }
        .resolve(&base);
        assert_eq!(resolved.size, Px(8.0));
        assert_eq!(resolved.weight, FontWeight::Bold);
        assert_eq!(resolved.style, FontStyle::Normal);
        assert_eq!(resolved.family, "Helvetica");

        assert_eq!(Style::default().resolve(&base), base);
    }

    #[test]
    fn blank_text() {
        assert!(Token::text("").as_text().is_some_and(TextToken::is_blank));
        assert!(Token::newline().as_text().is_some_and(TextToken::is_blank));
        assert!(!Token::text(" a").as_text().is_some_and(TextToken::is_blank));
    }
}
