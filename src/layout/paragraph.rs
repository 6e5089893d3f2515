use crate::token::Token;

/// A run of tokens ending in a newline token or at the end of the input
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Paragraph {
    pub tokens: Vec<Token>,
}

/// Split a token stream into paragraphs. Each newline token stays at the end
/// of the paragraph it closes; whatever follows the last newline forms one
/// more paragraph.
pub fn split_paragraphs(tokens: Vec<Token>) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    let mut current = Vec::new();

    for token in tokens {
        let closes = token.as_text().is_some_and(|text| text.is_newline());
        current.push(token);
        if closes {
            paragraphs.push(Paragraph {
                tokens: std::mem::take(&mut current),
            });
        }
    }

    if !current.is_empty() {
        paragraphs.push(Paragraph { tokens: current });
    }

    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_paragraphs() {
        assert!(split_paragraphs(Vec::new()).is_empty());
    }

    #[test]
    fn newline_ends_paragraph() {
        let paragraphs = split_paragraphs(vec![
            Token::text("one"),
            Token::glue(),
            Token::text("two"),
            Token::newline(),
            Token::text("three"),
        ]);
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].tokens.len(), 4);
        assert_eq!(paragraphs[0].tokens.last(), Some(&Token::newline()));
        assert_eq!(paragraphs[1].tokens, vec![Token::text("three")]);
    }

    #[test]
    fn trailing_newline_adds_no_empty_paragraph() {
        let paragraphs = split_paragraphs(vec![Token::text("a"), Token::newline()]);
        assert_eq!(paragraphs.len(), 1);
    }

    #[test]
    fn lone_newlines_are_paragraphs() {
        let paragraphs = split_paragraphs(vec![Token::newline(), Token::newline()]);
        assert_eq!(paragraphs.len(), 2);
        assert!(paragraphs.iter().all(|p| p.tokens == vec![Token::newline()]));
    }

    #[test]
    fn text_containing_newline_is_not_a_break() {
        let paragraphs = split_paragraphs(vec![Token::text("a\nb"), Token::text("c")]);
        assert_eq!(paragraphs.len(), 1);
    }
}
