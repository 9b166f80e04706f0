//! Physical units used throughout layout. Everything is ultimately expressed
//! in PDF points ([Pt], 1/72 inch); [In] and [Mm] exist so page geometry can
//! be written the way designers specify it.

use derive_more::{Add, AddAssign, Deref, Div, From, Into, Mul, MulAssign, Neg, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};

/// A length in PDF points
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
    Neg,
    Mul,
    MulAssign,
    Div,
    Sum,
    From,
    Into,
    Deref,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Pt(pub f32);

/// A length in inches
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct In(pub f32);

/// A length in millimetres
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm(pub f32);

impl From<In> for Pt {
    fn from(value: In) -> Self {
        Pt(value.0 * 72.0)
    }
}

impl From<Mm> for Pt {
    fn from(value: Mm) -> Self {
        Pt(value.0 * 72.0 / 25.4)
    }
}

impl Pt {
    /// The larger of two lengths
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }

    /// The smaller of two lengths
    pub fn min(self, other: Pt) -> Pt {
        Pt(self.0.min(other.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_convert_and_combine() {
        assert_eq!(Pt::from(In(1.0)), Pt(72.0));
        assert!((*Pt::from(Mm(25.4)) - 72.0).abs() < 1e-4);
        assert_eq!(-Pt(12.0), Pt(-12.0));
        assert_eq!(Pt(72.0) - -Pt(12.0), Pt(84.0));
        assert_eq!([Pt(1.0), Pt(2.5)].into_iter().sum::<Pt>(), Pt(3.5));
        assert_eq!(Pt(10.0) * 2.0 / 4.0, Pt(5.0));
    }
}
