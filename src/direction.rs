/// Horizontal writing direction of a paragraph or a piece of text
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right
    #[default]
    Ltr,
    /// Right to left
    Rtl,
}

/// Primary language subtags written right to left
const RTL_LANGS: &[&str] = &["ar", "he", "fa", "ur", "yi", "syr"];

impl Direction {
    /// The direction implied by a language tag. Unknown and empty tags are
    /// left to right.
    pub fn of_lang(lang: &str) -> Direction {
        if is_rtl_lang(lang) {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }

    /// Move `x` by `delta` in this direction
    pub(crate) fn advance(self, x: crate::Px, delta: crate::Px) -> crate::Px {
        match self {
            Direction::Ltr => x + delta,
            Direction::Rtl => x - delta,
        }
    }
}

/// Whether text in the given language is written right to left. Only the
/// primary subtag is considered, so `ar-SA` and `he_IL` are right to left.
pub fn is_rtl_lang(lang: &str) -> bool {
    let primary = lang
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    RTL_LANGS.contains(&primary.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Px;

    #[test]
    fn rtl_languages() {
        assert!(is_rtl_lang("he"));
        assert!(is_rtl_lang("ar-SA"));
        assert!(is_rtl_lang("FA"));
        assert!(is_rtl_lang("syr"));
        assert!(!is_rtl_lang("la"));
        assert!(!is_rtl_lang(""));
        assert!(!is_rtl_lang("en-US"));
    }

    #[test]
    fn advance_follows_direction() {
        assert_eq!(Direction::Ltr.advance(Px(10.0), Px(4.0)), Px(14.0));
        assert_eq!(Direction::Rtl.advance(Px(10.0), Px(4.0)), Px(6.0));
        assert_eq!(Direction::of_lang("he"), Direction::Rtl);
    }
}
