//! # Conversion Kernel
//!
//! Pure scalar conversion between two units of one quantity kind. Every
//! conversion routes through the kind's canonical unit (multiply in, divide
//! out), so repeated dropdown changes never compound rounding error the way
//! chained display-unit conversions would.

use crate::errors::ConvResult;
use crate::units::table::unit;
use crate::units::QuantityKind;

/// Convert a value between two registered units of the same kind.
///
/// `canonical = value * factor[from]; result = canonical / factor[to]`.
/// The round trip `convert(convert(v, A, B), B, A)` reproduces `v` up to
/// floating-point epsilon. Pure function; the only failure mode is an
/// unregistered unit symbol.
///
/// # Example
/// ```
/// use unit_core::units::{convert, QuantityKind};
///
/// let inches = convert(2.5, QuantityKind::Length, "ft", "in").unwrap();
/// assert!((inches - 30.0).abs() < 1e-12);
/// ```
pub fn convert(value: f64, kind: QuantityKind, from: &str, to: &str) -> ConvResult<f64> {
    let from_unit = unit(kind, from)?;
    let to_unit = unit(kind, to)?;
    Ok(value * from_unit.to_canonical / to_unit.to_canonical)
}

/// Convert a display value into the kind's canonical unit.
pub fn to_canonical(value: f64, kind: QuantityKind, from: &str) -> ConvResult<f64> {
    Ok(value * unit(kind, from)?.to_canonical)
}

/// Convert a canonical value into a display unit.
pub fn from_canonical(value: f64, kind: QuantityKind, to: &str) -> ConvResult<f64> {
    Ok(value / unit(kind, to)?.to_canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::table::unit_catalog;

    #[test]
    fn test_known_conversions() {
        // 1 ft = 12 in
        let inches = convert(1.0, QuantityKind::Length, "ft", "in").unwrap();
        assert!((inches - 12.0).abs() < 1e-12);

        // 1 yd3 = 27 ft3
        let cubic_feet = convert(1.0, QuantityKind::Volume, "yd3", "ft3").unwrap();
        assert!((cubic_feet - 27.0).abs() < 1e-12);

        // 1 kip = 1000 lbf
        let lbf = convert(1.0, QuantityKind::Force, "kip", "lbf").unwrap();
        assert!((lbf - 1000.0).abs() < 1e-9);

        // 180 deg = pi rad
        let rad = convert(180.0, QuantityKind::Angle, "deg", "rad").unwrap();
        assert!((rad - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_round_trip_all_unit_pairs() {
        // convert(convert(v, A, B), B, A) == v within relative 1e-9,
        // for every pair of units of every kind
        let samples = [0.001, 1.0, 3.75, 12345.678];
        for kind in QuantityKind::ALL {
            let catalog = unit_catalog(kind);
            for a in catalog {
                for b in catalog {
                    for &v in &samples {
                        let there = convert(v, kind, a.symbol, b.symbol).unwrap();
                        let back = convert(there, kind, b.symbol, a.symbol).unwrap();
                        let rel = ((back - v) / v).abs();
                        assert!(
                            rel < 1e-9,
                            "{} {}->{}: {} came back as {}",
                            kind, a.symbol, b.symbol, v, back
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_path_independence() {
        // 1 cm via cm->in->ft->m equals cm->m directly (both 0.01 m)
        let direct = convert(1.0, QuantityKind::Length, "cm", "m").unwrap();
        let inches = convert(1.0, QuantityKind::Length, "cm", "in").unwrap();
        let feet = convert(inches, QuantityKind::Length, "in", "ft").unwrap();
        let chained = convert(feet, QuantityKind::Length, "ft", "m").unwrap();

        assert_eq!(direct, 0.01);
        assert!((chained - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_canonical_helpers_agree() {
        let canonical = to_canonical(8.5, QuantityKind::Length, "ft").unwrap();
        assert!((canonical - 2.5908).abs() < 1e-12);

        let back = from_canonical(canonical, QuantityKind::Length, "ft").unwrap();
        assert!((back - 8.5).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_unit_is_error() {
        assert!(convert(1.0, QuantityKind::Length, "ft", "smoot").is_err());
        assert!(convert(1.0, QuantityKind::Area, "ft", "m2").is_err());
    }

    #[test]
    fn test_zero_and_negative_values_are_total() {
        assert_eq!(convert(0.0, QuantityKind::Length, "ft", "m").unwrap(), 0.0);
        let v = convert(-3.0, QuantityKind::Angle, "deg", "rad").unwrap();
        assert!(v < 0.0);
    }
}
