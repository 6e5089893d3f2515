use crate::{
    layout::{
        compose_line, line_number_tokens, split_paragraphs, LineFiller, LineNumbering, LineParams,
        TypesetToken,
    },
    ConfigError, FontSpec, LanguageDetector, Px, ScriptDetector, TextMeasurer, Token,
    TypesetError, TypesetterOptions,
};

/// Lays out token streams into positioned lines.
///
/// A typesetter owns its options and its text measurer. Each call to
/// [`Typesetter::typeset`] takes its own tokens and returns its own result,
/// so one typesetter can serve any number of independent texts.
///
/// ```
/// use glue_typeset::{
///     FontSpec, MeasureError, Px, TextMeasurer, Token, Typesetter, TypesetterOptions,
/// };
///
/// struct Monospace;
///
/// impl TextMeasurer for Monospace {
///     fn measure(&self, text: &str, font: &FontSpec) -> Result<Px, MeasureError> {
///         Ok(Px(text.chars().count() as f64 * font.size.0 * 0.6))
///     }
/// }
///
/// let options = TypesetterOptions::new().with_line_width(Px(300.0));
/// let typesetter = Typesetter::new(options, Monospace).expect("valid options");
///
/// let tokens = vec![Token::text("Hello"), Token::glue(), Token::text("world")];
/// let laid_out = typesetter.typeset(tokens).expect("measurable");
///
/// assert_eq!(laid_out.len(), 3);
/// assert!(laid_out.iter().all(|t| t.line_number == 1));
/// ```
pub struct Typesetter<M, D = ScriptDetector> {
    options: TypesetterOptions,
    measurer: M,
    detector: D,
    em_size: Px,
    normal_space: Px,
}

impl<M: TextMeasurer> Typesetter<M, ScriptDetector> {
    /// Create a typesetter that detects the language of untagged text from
    /// its script
    pub fn new(options: TypesetterOptions, measurer: M) -> Result<Self, TypesetError> {
        let detector = ScriptDetector::new(options.default_lang.clone());
        Typesetter::with_detector(options, measurer, detector)
    }
}

impl<M: TextMeasurer, D: LanguageDetector> Typesetter<M, D> {
    pub fn with_detector(
        options: TypesetterOptions,
        measurer: M,
        detector: D,
    ) -> Result<Self, TypesetError> {
        options.validate()?;
        let em_size = measurer.measure("M", &options.default_font())?;
        let normal_space = em_size * options.normal_space_width_em;
        log::debug!("em size {em_size}, normal space {normal_space}");

        Ok(Typesetter {
            options,
            measurer,
            detector,
            em_size,
            normal_space,
        })
    }

    pub fn options(&self) -> &TypesetterOptions {
        &self.options
    }

    /// Width of 'M' in the default font
    pub fn em_size(&self) -> Px {
        self.em_size
    }

    /// Width that "normal" glue resolves to
    pub fn normal_space(&self) -> Px {
        self.normal_space
    }

    /// Lay out `tokens` with the configured default font size
    pub fn typeset(&self, tokens: Vec<Token>) -> Result<Vec<TypesetToken>, TypesetError> {
        self.typeset_with_font_size(tokens, self.options.default_font_size)
    }

    /// Lay out `tokens`, measuring text at `font_size` instead of the default
    /// font size. The returned tokens are in display order, line by line.
    ///
    /// A measurement failure fails the whole call. A line whose composition
    /// breaks an internal invariant is logged and left out.
    pub fn typeset_with_font_size(
        &self,
        tokens: Vec<Token>,
        font_size: Px,
    ) -> Result<Vec<TypesetToken>, TypesetError> {
        if !(font_size.0 > 0.0) {
            return Err(ConfigError::NonPositiveFontSize(font_size.0).into());
        }

        let base_font = FontSpec::new(self.options.default_font_family.clone(), font_size);
        let filler = LineFiller {
            measurer: &self.measurer,
            detector: &self.detector,
            line_width: self.options.line_width,
            normal_space: self.normal_space,
            base_font: &base_font,
        };

        let mut typeset = Vec::with_capacity(tokens.len());
        let mut y = font_size;
        let mut line_number = 1u32;

        for paragraph in split_paragraphs(tokens) {
            let lines = filler.fill(paragraph)?;
            log::debug!("paragraph starting at line {line_number} has {} lines", lines.len());

            for line in lines {
                let last = line.last;
                let params = LineParams {
                    line_width: self.options.line_width,
                    direction: self.options.direction,
                    line_number,
                    y,
                    justify: self.options.justify,
                };
                match compose_line(line, &params) {
                    Ok(tokens) => typeset.extend(tokens),
                    Err(err) => log::error!("abandoning line {line_number}: {err}"),
                }
                line_number += 1;
                if !last {
                    y += self.options.line_height;
                }
            }

            y += self.options.line_height + self.options.space_between_paragraphs;
        }

        Ok(typeset)
    }

    /// Line number tokens for typeset text, numbering line 1 and every
    /// `frequency`th line
    pub fn typeset_line_numbers(
        &self,
        typeset: &[TypesetToken],
        frequency: u32,
    ) -> Result<Vec<TypesetToken>, TypesetError> {
        if frequency == 0 {
            return Err(ConfigError::ZeroLineNumberFrequency.into());
        }
        let numbering = LineNumbering {
            frequency,
            style: self.options.line_number_style,
            font: FontSpec::new(
                self.options.default_font_family.clone(),
                self.options.default_font_size * self.options.line_numbers_font_size_factor,
            ),
            direction: self.options.direction,
        };
        Ok(line_number_tokens(typeset, &numbering, &self.measurer)?)
    }

    /// Line number tokens at the configured frequency
    pub fn line_numbers(
        &self,
        typeset: &[TypesetToken],
    ) -> Result<Vec<TypesetToken>, TypesetError> {
        self.typeset_line_numbers(typeset, self.options.line_number_frequency)
    }

    /// Estimated height of typeset text: the last baseline plus room for
    /// descenders
    pub fn text_height(&self, typeset: &[TypesetToken]) -> Px {
        typeset
            .iter()
            .rev()
            .find(|token| token.is_visible())
            .map(|token| token.y + self.options.default_font_size * 0.4)
            .unwrap_or_default()
    }

    pub fn text_width(&self) -> Px {
        self.options.line_width
    }
}
