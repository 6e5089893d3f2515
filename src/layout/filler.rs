use super::{Line, Paragraph, PendingToken};
use crate::{
    font::FontSpec,
    measure::{LanguageDetector, TextMeasurer},
    token::{TextToken, Token},
    MeasureError, Px,
};

/// Greedy first-fit line breaker. Tokens are added to the current line until
/// the next one would push the line past `line_width`; no backtracking.
pub struct LineFiller<'a, M: ?Sized, D: ?Sized> {
    pub measurer: &'a M,
    pub detector: &'a D,
    pub line_width: Px,
    pub normal_space: Px,
    /// Font text tokens are measured with before their own style is applied
    pub base_font: &'a FontSpec,
}

struct Bucket {
    tokens: Vec<PendingToken>,
    width: Px,
}

impl Bucket {
    fn new() -> Bucket {
        Bucket {
            tokens: Vec::new(),
            width: Px::ZERO,
        }
    }

    fn push(&mut self, token: PendingToken) {
        if !token.invisible {
            self.width += token.width;
        }
        self.tokens.push(token);
    }

    /// Nothing visible has been placed on the line yet
    fn is_blank(&self) -> bool {
        self.width <= Px::ZERO
    }

    /// Whether adding `width` more would exceed the line. A line holding no
    /// visible width never overflows, so an oversized token gets a line to
    /// itself instead of leaving an empty line behind.
    fn overflows(&self, width: Px, line_width: Px) -> bool {
        !self.is_blank() && self.width + width > line_width
    }

    fn close(&mut self, lines: &mut Vec<Line>) {
        lines.push(Line {
            tokens: std::mem::take(&mut self.tokens),
            last: false,
        });
        self.width = Px::ZERO;
    }
}

impl<M, D> LineFiller<'_, M, D>
where
    M: TextMeasurer + ?Sized,
    D: LanguageDetector + ?Sized,
{
    /// Break one paragraph into lines. Only the final line is flagged `last`.
    pub fn fill(&self, paragraph: Paragraph) -> Result<Vec<Line>, MeasureError> {
        let mut lines = Vec::new();
        let mut bucket = Bucket::new();

        for token in paragraph.tokens {
            match token {
                Token::Glue(glue) => {
                    let width = glue.space().resolve(self.normal_space);
                    // glue opening a line would be trimmed anyway; it takes no room
                    if width <= Px::ZERO || bucket.is_blank() {
                        bucket.push(PendingToken::hidden(Token::Glue(glue)));
                        continue;
                    }
                    if bucket.overflows(width, self.line_width) {
                        // the glue becomes the invisible end of the line it breaks
                        bucket.push(PendingToken::hidden(Token::Glue(glue)));
                        bucket.close(&mut lines);
                        continue;
                    }
                    bucket.push(PendingToken {
                        token: Token::Glue(glue),
                        width,
                        lang: String::new(),
                        font: None,
                        invisible: false,
                    });
                }
                Token::Text(text) if text.is_blank() => {
                    bucket.push(PendingToken::hidden(Token::Text(text)));
                }
                Token::Text(text) => {
                    let pending = self.measure(text)?;
                    if pending.width > self.line_width {
                        log::warn!(
                            "`{}` is {} wide, more than the line width of {}",
                            pending.token.as_text().map(TextToken::text).unwrap_or_default(),
                            pending.width,
                            self.line_width
                        );
                    }
                    if bucket.overflows(pending.width, self.line_width) {
                        bucket.close(&mut lines);
                    }
                    bucket.push(pending);
                }
            }
        }

        if !bucket.tokens.is_empty() {
            lines.push(Line {
                tokens: bucket.tokens,
                last: true,
            });
        }

        Ok(lines)
    }

    fn measure(&self, text: TextToken) -> Result<PendingToken, MeasureError> {
        let font = text.style().resolve(self.base_font);
        let width = self.measurer.measure(text.text(), &font)?;
        if !width.0.is_finite() {
            return Err(MeasureError::NonFiniteWidth {
                text: text.text().to_string(),
            });
        }
        let lang = if text.has_lang() {
            text.lang().to_string()
        } else {
            self.detector.detect(text.text())
        };
        Ok(PendingToken {
            token: Token::Text(text),
            width,
            lang,
            font: Some(font),
            invisible: false,
        })
    }
}
