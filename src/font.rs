use crate::{
    measure::TextMeasurer,
    token::{FontStyle, FontWeight},
    MeasureError, Px,
};
use id_arena::{Arena, Id};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use std::collections::HashMap;

/// The font a piece of text is measured and drawn with
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    /// Font size in pixels
    pub size: Px,
    pub weight: FontWeight,
    pub style: FontStyle,
}

impl FontSpec {
    /// A regular, upright font of the given family and size
    pub fn new<S: Into<String>>(family: S, size: Px) -> FontSpec {
        FontSpec {
            family: family.into(),
            size,
            weight: FontWeight::Normal,
            style: FontStyle::Normal,
        }
    }
}

/// A parsed TTF or OTF font face
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, MeasureError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Obtain the family name of the font, if the face declares one
    pub fn family(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    fn scaling(&self, size: Px) -> f64 {
        size.0 / self.face.as_face_ref().units_per_em() as f64
    }

    /// The glyph used for `ch`, falling back to the replacement character and then to '?'
    fn glyph_for(&self, ch: char) -> Option<GlyphId> {
        let face = self.face.as_face_ref();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
    }

    /// Calculate the width of a given string of text at the given font size
    pub fn width_of_text(&self, text: &str, size: Px) -> Px {
        let scaling = self.scaling(size);
        text.chars()
            .filter_map(|ch| self.glyph_for(ch))
            .map(|gid| {
                let advance = self.face.as_face_ref().glyph_hor_advance(gid);
                Px(scaling * advance.unwrap_or_default() as f64)
            })
            .sum()
    }
}

/// A collection of fonts keyed by family, weight and slant, usable as a
/// [`TextMeasurer`]. Requests for a weight or slant that was not loaded fall
/// back to the regular face of the family.
#[derive(Default)]
pub struct FontBook {
    pub fonts: Arena<Font>,
    faces: HashMap<(String, FontWeight, FontStyle), Id<Font>>,
}

impl FontBook {
    pub fn new() -> FontBook {
        FontBook::default()
    }

    /// Register a font under the given family name and variant, returning its id.
    /// A later registration of the same variant replaces the earlier one.
    pub fn add_font<S: Into<String>>(
        &mut self,
        family: S,
        weight: FontWeight,
        style: FontStyle,
        font: Font,
    ) -> Id<Font> {
        let id = self.fonts.alloc(font);
        self.faces.insert((family.into(), weight, style), id);
        id
    }

    /// Register a regular font under the family name declared inside the font file
    pub fn add_regular(&mut self, font: Font) -> Result<Id<Font>, MeasureError> {
        let family = font
            .family()
            .ok_or_else(|| MeasureError::Backend("font face has no family name".to_string()))?;
        Ok(self.add_font(family, FontWeight::Normal, FontStyle::Normal, font))
    }

    /// The font that best matches the given spec
    pub fn lookup(&self, spec: &FontSpec) -> Option<&Font> {
        self.faces
            .get(&(spec.family.clone(), spec.weight, spec.style))
            .or_else(|| {
                self.faces
                    .get(&(spec.family.clone(), FontWeight::Normal, FontStyle::Normal))
            })
            .and_then(|&id| self.fonts.get(id))
    }
}

impl TextMeasurer for FontBook {
    fn measure(&self, text: &str, font: &FontSpec) -> Result<Px, MeasureError> {
        let face = self.lookup(font).ok_or_else(|| MeasureError::MissingFont {
            family: font.family.clone(),
        })?;
        Ok(face.width_of_text(text, font.size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static DEJAVU_MONO: &[u8] = include_bytes!("../assets/DejaVuSansMono.ttf");

    fn book() -> FontBook {
        let font = Font::load(DEJAVU_MONO.to_vec()).expect("valid font");
        let mut book = FontBook::new();
        book.add_regular(font).expect("font has a family name");
        book
    }

    fn mono(size: f64) -> FontSpec {
        FontSpec::new("DejaVu Sans Mono", Px(size))
    }

    #[test]
    fn garbage_bytes_are_not_a_font() {
        let result = Font::load(b"definitely not a font".to_vec());
        assert!(matches!(result, Err(MeasureError::FaceParsing(_))));
    }

    #[test]
    fn unknown_family_is_reported() {
        let book = FontBook::new();
        let err = book
            .measure("abc", &FontSpec::new("Nope", Px(12.0)))
            .expect_err("no fonts loaded");
        assert!(matches!(err, MeasureError::MissingFont { family } if family == "Nope"));
    }

    #[test]
    fn family_is_read_from_the_face() {
        let font = Font::load(DEJAVU_MONO.to_vec()).expect("valid font");
        assert_eq!(font.family().as_deref(), Some("DejaVu Sans Mono"));
    }

    #[test]
    fn width_scales_with_size() {
        let book = book();
        let small = book.measure("abc", &mono(12.0)).expect("loaded");
        let large = book.measure("abc", &mono(24.0)).expect("loaded");
        assert!(small > Px::ZERO);
        assert!((large.0 - 2.0 * small.0).abs() < 1e-9);
        assert_eq!(book.measure("", &mono(12.0)).expect("loaded"), Px::ZERO);
    }

    #[test]
    fn missing_variant_uses_the_regular_face() {
        let book = book();
        let regular = book.measure("abc", &mono(16.0)).expect("loaded");
        let bold = FontSpec {
            weight: FontWeight::Bold,
            style: FontStyle::Italic,
            ..mono(16.0)
        };
        assert_eq!(book.measure("abc", &bold).expect("falls back"), regular);
    }

    #[test]
    fn unmapped_character_still_advances() {
        let book = book();
        let one = book.measure("a", &mono(16.0)).expect("loaded");
        let unmapped = book.measure("\u{10FFFD}", &mono(16.0)).expect("loaded");
        assert!(unmapped > Px::ZERO);
        // every glyph of a monospaced face has the same advance
        assert!((unmapped.0 - one.0).abs() < 1e-9);
    }

    #[test]
    fn registered_variant_is_preferred() {
        let mut book = book();
        let id = book.add_font(
            "DejaVu Sans Mono",
            FontWeight::Bold,
            FontStyle::Normal,
            Font::load(DEJAVU_MONO.to_vec()).expect("valid font"),
        );
        let bold = FontSpec {
            weight: FontWeight::Bold,
            ..mono(16.0)
        };
        let found = book.lookup(&bold).expect("registered");
        assert!(std::ptr::eq(found, &book.fonts[id]));
    }
}
