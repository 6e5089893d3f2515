use super::{
    bidi::{display_order, BidiClass},
    Line, PendingToken, Status, TypesetToken,
};
use crate::{ConsistencyError, Direction, Px, Token};
use std::collections::HashMap;

/// Everything the compositor needs to know about the line it is placing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineParams {
    pub line_width: Px,
    pub direction: Direction,
    pub line_number: u32,
    /// Baseline of the line
    pub y: Px,
    pub justify: bool,
}

/// Hide glue at either end of the line. Invisible tokens (blank text, the
/// paragraph's newline) are stepped over; only visible text ends the trim.
fn trim_boundary_glue(tokens: &mut [PendingToken]) {
    fn hide_until_text<'a>(tokens: impl Iterator<Item = &'a mut PendingToken>) {
        for token in tokens {
            if token.token.is_glue() {
                token.hide();
            } else if !token.invisible {
                break;
            }
        }
    }

    hide_until_text(tokens.iter_mut());
    hide_until_text(tokens.iter_mut().rev());
}

/// How much every visible glue has to grow (or shrink, if negative) for the
/// line to fill its width. Zero for ragged lines and lines without glue.
pub fn glue_adjustment(
    tokens: &[PendingToken],
    line_width: Px,
    justify: bool,
    last: bool,
) -> Px {
    let (measured, glue_count) = tokens
        .iter()
        .filter(|token| !token.invisible)
        .fold((Px::ZERO, 0usize), |(width, glue), token| {
            let glue = glue + usize::from(token.token.is_glue());
            (width + token.width, glue)
        });

    if !justify || last || glue_count == 0 {
        return Px::ZERO;
    }
    (line_width - measured) / glue_count as f64
}

fn bidi_class(token: &PendingToken, direction: Direction) -> BidiClass {
    match token.token {
        Token::Glue(_) => BidiClass::Neutral,
        Token::Text(_) if token.invisible => BidiClass::Neutral,
        Token::Text(_) if Direction::of_lang(&token.lang) == direction => BidiClass::Same,
        Token::Text(_) => BidiClass::Opposite,
    }
}

/// Justify a line, put its tokens in display order and give each one its
/// final position. Tokens come back in display order.
pub fn compose_line(
    line: Line,
    params: &LineParams,
) -> Result<Vec<TypesetToken>, ConsistencyError> {
    let Line { mut tokens, last } = line;
    let direction = params.direction;

    trim_boundary_glue(&mut tokens);
    let adjustment = glue_adjustment(&tokens, params.line_width, params.justify, last);

    let classes: Vec<BidiClass> = tokens.iter().map(|t| bidi_class(t, direction)).collect();
    if classes.contains(&BidiClass::Opposite) {
        log::debug!("line {} mixes text directions", params.line_number);
    }
    let order = display_order(&classes)?;

    let mut slots: Vec<Option<PendingToken>> = tokens.into_iter().map(Some).collect();
    let mut placed = Vec::with_capacity(slots.len());
    let mut occurrences: HashMap<String, u32> = HashMap::new();
    let mut x = match direction {
        Direction::Rtl => params.line_width,
        Direction::Ltr => Px::ZERO,
    };

    for index in order {
        let pending = slots
            .get_mut(index)
            .and_then(Option::take)
            .ok_or(ConsistencyError::RepeatedToken { index })?;

        if pending.invisible {
            placed.push(TypesetToken {
                token: pending.token,
                status: Status::Invisible,
                lang: pending.lang,
                font: None,
                width: Px::ZERO,
                x,
                y: params.y,
                line_number: params.line_number,
                occurrence_in_line: 0,
                direction,
            });
            continue;
        }

        let PendingToken {
            token,
            width,
            lang,
            font,
            ..
        } = pending;

        match token {
            Token::Glue(_) => {
                let width = width + adjustment;
                let next = direction.advance(x, width);
                placed.push(TypesetToken {
                    token,
                    status: Status::Set,
                    lang,
                    font: None,
                    width,
                    // anchored at its left edge in either direction
                    x: if direction.is_rtl() { next } else { x },
                    y: params.y,
                    line_number: params.line_number,
                    occurrence_in_line: 0,
                    direction,
                });
                x = next;
            }
            Token::Text(ref text) => {
                let next = direction.advance(x, width);
                let occurrence = occurrences.entry(text.text().to_string()).or_insert(0);
                *occurrence += 1;
                let occurrence_in_line = *occurrence;
                let token_direction = Direction::of_lang(&lang);
                placed.push(TypesetToken {
                    token,
                    status: Status::Set,
                    lang,
                    font,
                    width,
                    x: if token_direction == direction { x } else { next },
                    y: params.y,
                    line_number: params.line_number,
                    occurrence_in_line,
                    direction: token_direction,
                });
                x = next;
            }
        }
    }

    Ok(placed)
}
