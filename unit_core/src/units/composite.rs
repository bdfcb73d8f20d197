//! # Composite Units
//!
//! Two-part display units: a major unit carrying the whole part and a minor
//! unit carrying the remainder (feet + inches, meters + centimeters). The
//! adapter decomposes a canonical value into `{major, minor}` for display and
//! recomposes user-entered parts back into a canonical value.
//!
//! Switching between two composite systems always routes through the
//! canonical value; major and minor components are never converted directly
//! into one another's counterparts.

use serde::{Deserialize, Serialize};

use crate::errors::{ConvError, ConvResult};
use crate::units::table::{UnitDef, CENTIMETER, FOOT, INCH, METER};

/// Default number of decimals kept on the minor component for display.
pub const DEFAULT_MINOR_DECIMALS: u32 = 2;

/// A major+minor pairing of two units of the same kind.
///
/// The minor-per-major ratio is fixed and whole (12 in/ft, 100 cm/m). The
/// minor display precision varies between calculator fields, so it is a
/// per-composite parameter with a sensible default rather than a single
/// constant.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CompositeUnit {
    major: UnitDef,
    minor: UnitDef,
    ratio: f64,
    minor_decimals: u32,
}

/// A canonical value decomposed for two-part display.
///
/// Once normalized, `0 <= minor < ratio` (for non-negative inputs). The
/// minor component is already rounded to the composite's display precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeValue {
    /// Whole count of the major unit
    pub major: i64,
    /// Remainder in the minor unit, rounded for display
    pub minor: f64,
}

impl CompositeUnit {
    /// Pair two registered units into a composite.
    ///
    /// The units must share a kind and divide into a whole minor-per-major
    /// ratio of at least 2; anything else is a programmer error and fails
    /// loudly.
    pub fn new(major: UnitDef, minor: UnitDef) -> ConvResult<Self> {
        if major.kind != minor.kind {
            return Err(ConvError::mismatched_composite(
                major.symbol,
                minor.symbol,
                "units measure different quantity kinds",
            ));
        }
        let ratio = major.to_canonical / minor.to_canonical;
        if ratio < 2.0 || (ratio - ratio.round()).abs() > 1e-9 {
            return Err(ConvError::mismatched_composite(
                major.symbol,
                minor.symbol,
                format!("minor-per-major ratio {ratio} is not a whole number of at least 2"),
            ));
        }
        Ok(CompositeUnit {
            major,
            minor,
            ratio: ratio.round(),
            minor_decimals: DEFAULT_MINOR_DECIMALS,
        })
    }

    /// Override the minor display precision (builder pattern)
    pub fn with_minor_decimals(mut self, decimals: u32) -> Self {
        self.minor_decimals = decimals;
        self
    }

    /// The feet + inches composite (ratio 12)
    pub fn feet_inches() -> Self {
        CompositeUnit {
            major: FOOT,
            minor: INCH,
            ratio: 12.0,
            minor_decimals: DEFAULT_MINOR_DECIMALS,
        }
    }

    /// The meters + centimeters composite (ratio 100)
    pub fn meters_centimeters() -> Self {
        CompositeUnit {
            major: METER,
            minor: CENTIMETER,
            ratio: 100.0,
            minor_decimals: DEFAULT_MINOR_DECIMALS,
        }
    }

    /// Major unit of the pair
    pub fn major(&self) -> UnitDef {
        self.major
    }

    /// Minor unit of the pair
    pub fn minor(&self) -> UnitDef {
        self.minor
    }

    /// Whole minor units per major unit
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Decompose a canonical value into `{major, minor}` for display.
    ///
    /// Converts to the major unit, floors to get the whole part, then
    /// expresses the remainder in the minor unit rounded to the display
    /// precision. Rounding that reaches the ratio boundary carries into the
    /// major part, so the minor never displays as 12 in or 100 cm.
    ///
    /// The round trip through [`from_composite`](Self::from_composite) is
    /// lossy at display precision: the recomposed value lands within half a
    /// unit in the last kept decimal of the minor.
    ///
    /// # Example
    /// ```
    /// use unit_core::units::CompositeUnit;
    ///
    /// let ft_in = CompositeUnit::feet_inches();
    /// let parts = ft_in.to_composite(1.9558); // 6 ft 5 in
    /// assert_eq!(parts.major, 6);
    /// assert!((parts.minor - 5.0).abs() < 1e-9);
    /// ```
    pub fn to_composite(&self, canonical: f64) -> CompositeValue {
        let negative = canonical < 0.0;
        let in_major = canonical.abs() / self.major.to_canonical;
        let mut major = in_major.floor();
        let mut minor = (in_major - major) * self.ratio;

        let scale = 10f64.powi(self.minor_decimals as i32);
        minor = (minor * scale).round() / scale;
        if minor >= self.ratio {
            major += 1.0;
            minor = 0.0;
        }

        if negative {
            CompositeValue { major: -(major as i64), minor: -minor }
        } else {
            CompositeValue { major: major as i64, minor }
        }
    }

    /// Recompose major and minor parts into a canonical value.
    ///
    /// A missing or non-finite component defaults to zero rather than
    /// failing, matching how the calculators treat an empty field next to a
    /// filled one.
    pub fn from_composite(&self, major: Option<f64>, minor: Option<f64>) -> f64 {
        let major = major.filter(|v| v.is_finite()).unwrap_or(0.0);
        let minor = minor.filter(|v| v.is_finite()).unwrap_or(0.0);
        major * self.major.to_canonical + minor * self.minor.to_canonical
    }

    /// Recompose a previously decomposed value.
    pub fn recompose(&self, value: &CompositeValue) -> f64 {
        self.from_composite(Some(value.major as f64), Some(value.minor))
    }
}
