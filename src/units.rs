//! Physical and screen units.
//!
//! All layout happens in CSS pixels ([`Px`]). The other units exist so that
//! callers can express page geometry in whatever they have at hand and convert
//! losslessly, using the fixed relationships 96 px/in, 72 pt/in and 2.54 cm/in.
//!
//! ```
//! use glue_typeset::{Cm, Px, Pt};
//!
//! let margin: Px = Cm(2.54).into();
//! assert!((margin.0 - 96.0).abs() < 1e-9);
//!
//! let size: Px = Pt(12.0).into();
//! assert!((size.0 - 16.0).abs() < 1e-9);
//! ```

use derive_more::{
    Add, AddAssign, Display, Div, From, Into, Mul, MulAssign, Neg, Sub, SubAssign, Sum,
};

/// Pixels per inch
pub const PX_PER_IN: f64 = 96.0;
/// Points per inch
pub const PT_PER_IN: f64 = 72.0;
/// Centimetres per inch
pub const CM_PER_IN: f64 = 2.54;

/// A length in CSS pixels (1/96 in)
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Mul,
    MulAssign,
    Div,
    Neg,
    Sum,
    From,
    Into,
    Display,
)]
#[display("{_0}px")]
pub struct Px(pub f64);

/// A length in typographic points (1/72 in)
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    Mul,
    Div,
    Neg,
    From,
    Into,
    Display,
)]
#[display("{_0}pt")]
pub struct Pt(pub f64);

/// A length in centimetres
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    Mul,
    Div,
    Neg,
    From,
    Into,
    Display,
)]
#[display("{_0}cm")]
pub struct Cm(pub f64);

/// A length in inches
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    Mul,
    Div,
    Neg,
    From,
    Into,
    Display,
)]
#[display("{_0}in")]
pub struct In(pub f64);

impl Px {
    pub const ZERO: Px = Px(0.0);
}

/// Convert centimetres to pixels
pub fn cm2px(cm: f64) -> f64 {
    cm * PX_PER_IN / CM_PER_IN
}

/// Convert pixels to centimetres
pub fn px2cm(px: f64) -> f64 {
    px * CM_PER_IN / PX_PER_IN
}

/// Convert points to pixels
pub fn pt2px(pt: f64) -> f64 {
    pt * PX_PER_IN / PT_PER_IN
}

/// Convert pixels to points
pub fn px2pt(px: f64) -> f64 {
    px * PT_PER_IN / PX_PER_IN
}

impl From<Pt> for Px {
    fn from(value: Pt) -> Self {
        Px(pt2px(value.0))
    }
}

impl From<Px> for Pt {
    fn from(value: Px) -> Self {
        Pt(px2pt(value.0))
    }
}

impl From<Cm> for Px {
    fn from(value: Cm) -> Self {
        Px(cm2px(value.0))
    }
}

impl From<Px> for Cm {
    fn from(value: Px) -> Self {
        Cm(px2cm(value.0))
    }
}

impl From<In> for Px {
    fn from(value: In) -> Self {
        Px(value.0 * PX_PER_IN)
    }
}

impl From<Px> for In {
    fn from(value: Px) -> Self {
        In(value.0 / PX_PER_IN)
    }
}

impl From<In> for Pt {
    fn from(value: In) -> Self {
        Pt(value.0 * PT_PER_IN)
    }
}

impl From<Cm> for Pt {
    fn from(value: Cm) -> Self {
        Pt(value.0 * PT_PER_IN / CM_PER_IN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn conversions_are_inverse() {
        for x in [0.0, 1.0, -3.5, 12.25, 1e6, 0.001, 595.275590551] {
            assert!(close(px2cm(cm2px(x)), x), "cm round trip for {x}");
            assert!(close(px2pt(pt2px(x)), x), "pt round trip for {x}");
        }
    }

    #[test]
    fn known_values() {
        assert!(close(cm2px(1.0), 37.795275590551184));
        assert!(close(pt2px(3.0), 4.0));
        assert!(close(Px::from(In(1.0)).0, 96.0));
        assert!(close(Pt::from(Cm(2.54)).0, 72.0));
    }

    #[test]
    fn pixel_arithmetic() {
        let mut w = Px(10.0) + Px(5.0) - Px(3.0);
        w += Px(1.0);
        assert_eq!(w, Px(13.0));
        assert_eq!(w * 2.0, Px(26.0));
        assert_eq!(w / 2.0, Px(6.5));
        assert_eq!(-w, Px(-13.0));
        let total: Px = [Px(1.0), Px(2.0), Px(3.0)].into_iter().sum();
        assert_eq!(total, Px(6.0));
        assert_eq!(format!("{}", Px(4.5)), "4.5px");
    }
}
