//! # Measurement
//!
//! The canonical-value abstraction at the center of the engine. A field that
//! keeps a display string and a separately maintained numeric value drifts
//! after unit-only changes; here the canonical value is the sole source of
//! truth and every display value is a re-derivable projection.
//!
//! A `Measurement` is immutable: re-entering a field produces a new
//! `Measurement`, never a mutation of an old one.

use serde::{Deserialize, Serialize};

use crate::errors::ConvResult;
use crate::units::{from_canonical, to_canonical, QuantityKind};

/// An immutable value normalized into its kind's canonical unit.
///
/// Constructors return `None` for non-finite raw input: an unparseable or
/// empty field is *absent*, which is distinct from a present zero when the
/// solver counts known slots.
///
/// # Example
/// ```
/// use unit_core::{Measurement, units::QuantityKind};
///
/// let span = Measurement::normalize(12.0, QuantityKind::Length, "ft").unwrap().unwrap();
/// assert!((span.canonical() - 3.6576).abs() < 1e-12);
/// assert!((span.value_in("in").unwrap() - 144.0).abs() < 1e-9);
///
/// // NaN input normalizes to absent, not zero and not an error
/// let absent = Measurement::normalize(f64::NAN, QuantityKind::Length, "ft").unwrap();
/// assert!(absent.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    kind: QuantityKind,
    canonical: f64,
}

impl Measurement {
    /// Normalize a raw value entered in a display unit.
    ///
    /// Non-finite input yields `Ok(None)`; an unregistered unit symbol is a
    /// loud error.
    pub fn normalize(value: f64, kind: QuantityKind, symbol: &str) -> ConvResult<Option<Self>> {
        let canonical = to_canonical(value, kind, symbol)?;
        Ok(Self::from_canonical(kind, canonical))
    }

    /// Wrap an already-canonical value; `None` when non-finite.
    pub fn from_canonical(kind: QuantityKind, canonical: f64) -> Option<Self> {
        if canonical.is_finite() {
            Some(Measurement { kind, canonical })
        } else {
            None
        }
    }

    /// The quantity kind this measurement belongs to
    pub fn kind(&self) -> QuantityKind {
        self.kind
    }

    /// The canonical value (meters, m², m³, kg, kg/m³, N, Pa, or radians)
    pub fn canonical(&self) -> f64 {
        self.canonical
    }

    /// Project the canonical value into a display unit of the same kind.
    pub fn value_in(&self, symbol: &str) -> ConvResult<f64> {
        from_canonical(self.canonical, self.kind, symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_and_project() {
        let m = Measurement::normalize(22.0, QuantityKind::Length, "ft")
            .unwrap()
            .unwrap();
        assert_eq!(m.kind(), QuantityKind::Length);
        assert!((m.canonical() - 6.7056).abs() < 1e-12);
        assert!((m.value_in("ft").unwrap() - 22.0).abs() < 1e-9);
        assert!((m.value_in("yd").unwrap() - 22.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_is_absent_not_zero() {
        assert!(Measurement::normalize(f64::NAN, QuantityKind::Mass, "lb")
            .unwrap()
            .is_none());
        assert!(Measurement::normalize(f64::INFINITY, QuantityKind::Mass, "lb")
            .unwrap()
            .is_none());

        // Present zero stays present
        let zero = Measurement::normalize(0.0, QuantityKind::Mass, "lb").unwrap();
        assert_eq!(zero.unwrap().canonical(), 0.0);
    }

    #[test]
    fn test_unknown_unit_is_loud() {
        assert!(Measurement::normalize(1.0, QuantityKind::Length, "league").is_err());
    }

    #[test]
    fn test_reentry_makes_a_new_measurement() {
        let first = Measurement::normalize(10.0, QuantityKind::Length, "ft")
            .unwrap()
            .unwrap();
        let second = Measurement::normalize(11.0, QuantityKind::Length, "ft")
            .unwrap()
            .unwrap();
        assert_ne!(first, second);
        assert!((first.value_in("ft").unwrap() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let m = Measurement::normalize(5.5, QuantityKind::Volume, "yd3")
            .unwrap()
            .unwrap();
        let json = serde_json::to_string(&m).unwrap();
        let roundtrip: Measurement = serde_json::from_str(&json).unwrap();
        assert_eq!(m, roundtrip);
    }
}
