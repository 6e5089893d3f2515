use crate::{ConfigError, Direction, FontSpec, Px};

/// How line numbers are written
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum NumeralStyle {
    /// ASCII digits 0-9
    #[default]
    Western,
    /// Arabic-Indic digits U+0660-U+0669
    Arabic,
}

impl NumeralStyle {
    /// Format a positive number in this numeral style
    pub fn format(self, number: u32) -> String {
        let western = number.to_string();
        match self {
            NumeralStyle::Western => western,
            NumeralStyle::Arabic => western
                .chars()
                .map(|d| {
                    d.to_digit(10)
                        .and_then(|d| char::from_u32(0x0660 + d))
                        .unwrap_or(d)
                })
                .collect(),
        }
    }
}

/// Layout parameters of a [`Typesetter`](crate::Typesetter)
#[derive(Debug, Clone, PartialEq)]
pub struct TypesetterOptions {
    /// Width every line is filled (and justified) to
    pub line_width: Px,
    pub default_font_family: String,
    pub default_font_size: Px,
    /// Distance between consecutive baselines
    pub line_height: Px,
    /// Base paragraph direction
    pub direction: Direction,
    /// Width of a normal space, as a fraction of the width of 'M'
    pub normal_space_width_em: f64,
    /// Stretch or shrink glue so that non-final lines fill the line width
    pub justify: bool,
    /// Extra vertical space after every paragraph
    pub space_between_paragraphs: Px,
    pub line_number_frequency: u32,
    pub line_number_style: NumeralStyle,
    /// Line number font size, relative to the default font size
    pub line_numbers_font_size_factor: f64,
    /// Language assumed for text whose language cannot be detected
    pub default_lang: String,
}

impl Default for TypesetterOptions {
    fn default() -> Self {
        TypesetterOptions {
            line_width: Px(700.0),
            default_font_family: "Helvetica".to_string(),
            default_font_size: Px(16.0),
            line_height: Px(32.0),
            direction: Direction::Ltr,
            normal_space_width_em: 0.33,
            justify: true,
            space_between_paragraphs: Px(0.0),
            line_number_frequency: 5,
            line_number_style: NumeralStyle::Western,
            line_numbers_font_size_factor: 0.8,
            default_lang: "la".to_string(),
        }
    }
}

impl TypesetterOptions {
    pub fn new() -> TypesetterOptions {
        TypesetterOptions::default()
    }

    pub fn with_line_width<P: Into<Px>>(mut self, width: P) -> Self {
        self.line_width = width.into();
        self
    }

    pub fn with_font<S: Into<String>, P: Into<Px>>(mut self, family: S, size: P) -> Self {
        self.default_font_family = family.into();
        self.default_font_size = size.into();
        self
    }

    pub fn with_line_height<P: Into<Px>>(mut self, height: P) -> Self {
        self.line_height = height.into();
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_normal_space_width_em(mut self, em: f64) -> Self {
        self.normal_space_width_em = em;
        self
    }

    pub fn with_justify(mut self, justify: bool) -> Self {
        self.justify = justify;
        self
    }

    pub fn with_space_between_paragraphs<P: Into<Px>>(mut self, space: P) -> Self {
        self.space_between_paragraphs = space.into();
        self
    }

    pub fn with_line_numbers(mut self, frequency: u32, style: NumeralStyle) -> Self {
        self.line_number_frequency = frequency;
        self.line_number_style = style;
        self
    }

    pub fn with_default_lang<S: Into<String>>(mut self, lang: S) -> Self {
        self.default_lang = lang.into();
        self
    }

    /// The regular default font
    pub fn default_font(&self) -> FontSpec {
        FontSpec::new(self.default_font_family.clone(), self.default_font_size)
    }

    /// Reject parameters the layout cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        // written as negations so that NaN is rejected too
        if !(self.line_width.0 > 0.0) {
            return Err(ConfigError::NonPositiveLineWidth(self.line_width.0));
        }
        if !(self.line_height.0 > 0.0) {
            return Err(ConfigError::NonPositiveLineHeight(self.line_height.0));
        }
        if !(self.default_font_size.0 > 0.0) {
            return Err(ConfigError::NonPositiveFontSize(self.default_font_size.0));
        }
        if self.line_number_frequency == 0 {
            return Err(ConfigError::ZeroLineNumberFrequency);
        }
        if self.default_font_family.trim().is_empty() {
            return Err(ConfigError::EmptyFontFamily);
        }
        Ok(())
    }
}
