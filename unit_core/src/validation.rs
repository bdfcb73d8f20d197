//! # Validation
//!
//! Advisory cross-field invariant checks: positivity of dimensions, ordering
//! of paired dimensions (outer vs inner), and fixed code-compliance maxima.
//!
//! Validation never blocks computation. The calculators render a zero or
//! blank result alongside the message, so every check returns an [`Outcome`]
//! value rather than an error.

use serde::{Deserialize, Serialize};

use crate::units::QuantityKind;

/// Code-compliance maximum for baluster spacing: 4 in, in canonical meters.
///
/// The sphere rule: a 4 in sphere must not pass between balusters.
pub const MAX_BALUSTER_SPACING_M: f64 = 0.1016;

/// Machine-readable reason for a failed check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReasonCode {
    /// Value must be strictly positive
    NotPositive,
    /// Value must not be negative
    Negative,
    /// Value must be finite
    NotFinite,
    /// Outer dimension must exceed the inner one
    InnerNotSmaller,
    /// Value exceeds half of its reference dimension
    ExceedsHalf,
    /// Value exceeds a fixed maximum
    ExceedsMaximum,
}

/// Result of a validation check.
///
/// ## JSON Example
///
/// ```json
/// { "status": "Invalid", "reason": "InnerNotSmaller",
///   "message": "Outer dimension 5 must exceed inner dimension 6" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum Outcome {
    /// The value(s) satisfy the rule
    Valid,
    /// The rule failed; computation may still proceed
    Invalid {
        reason: ReasonCode,
        message: String,
    },
}

impl Outcome {
    /// Create an Invalid outcome
    pub fn invalid(reason: ReasonCode, message: impl Into<String>) -> Self {
        Outcome::Invalid {
            reason,
            message: message.into(),
        }
    }

    /// Whether the check passed
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid)
    }

    /// The failure reason, if any
    pub fn reason(&self) -> Option<ReasonCode> {
        match self {
            Outcome::Valid => None,
            Outcome::Invalid { reason, .. } => Some(*reason),
        }
    }
}

/// Per-value rules for single-field checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueRule {
    /// Divisors and required dimensions: must be > 0
    StrictlyPositive,
    /// Optional dimensions (e.g., inner diameter of a solid shape): >= 0
    NonNegative,
}

/// Rules relating two values; the second argument is the reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationalRule {
    /// First value (outer) must strictly exceed the second (inner)
    OuterExceedsInner,
    /// First value must be at most half the second (border vs shorter side)
    AtMostHalfOf,
    /// First value must not exceed the second (a fixed maximum)
    AtMost,
}

/// Check a single value against its kind's default rule.
///
/// Dimensioned kinds are divisors and physical extents, so they must be
/// strictly positive; angles only need to be finite.
pub fn validate(kind: QuantityKind, value: f64) -> Outcome {
    if !value.is_finite() {
        return Outcome::invalid(
            ReasonCode::NotFinite,
            format!("{} must be a finite number", kind.description()),
        );
    }
    if kind.is_dimension() && value <= 0.0 {
        return Outcome::invalid(
            ReasonCode::NotPositive,
            format!("{} must be positive", kind.description()),
        );
    }
    Outcome::Valid
}

/// Check a single named field against an explicit rule.
pub fn validate_value(field: &str, value: f64, rule: ValueRule) -> Outcome {
    if !value.is_finite() {
        return Outcome::invalid(ReasonCode::NotFinite, format!("{field} must be a finite number"));
    }
    match rule {
        ValueRule::StrictlyPositive if value <= 0.0 => {
            Outcome::invalid(ReasonCode::NotPositive, format!("{field} must be positive"))
        }
        ValueRule::NonNegative if value < 0.0 => {
            Outcome::invalid(ReasonCode::Negative, format!("{field} must not be negative"))
        }
        _ => Outcome::Valid,
    }
}

/// Check a pair of values against a relational rule.
///
/// Both values are expected in the same (canonical) unit. For `AtMost` the
/// second value is the fixed maximum, e.g. [`MAX_BALUSTER_SPACING_M`].
///
/// # Example
/// ```
/// use unit_core::validation::{validate_relational, RelationalRule};
///
/// let bad = validate_relational(5.0, 6.0, RelationalRule::OuterExceedsInner);
/// assert!(!bad.is_valid());
///
/// let good = validate_relational(6.0, 5.0, RelationalRule::OuterExceedsInner);
/// assert!(good.is_valid());
/// ```
pub fn validate_relational(a: f64, b: f64, rule: RelationalRule) -> Outcome {
    if !a.is_finite() || !b.is_finite() {
        return Outcome::invalid(ReasonCode::NotFinite, "both values must be finite numbers");
    }
    match rule {
        RelationalRule::OuterExceedsInner if a <= b => Outcome::invalid(
            ReasonCode::InnerNotSmaller,
            format!("Outer dimension {a} must exceed inner dimension {b}"),
        ),
        RelationalRule::AtMostHalfOf if a > b / 2.0 => Outcome::invalid(
            ReasonCode::ExceedsHalf,
            format!("{a} exceeds half of {b}"),
        ),
        RelationalRule::AtMost if a > b => Outcome::invalid(
            ReasonCode::ExceedsMaximum,
            format!("{a} exceeds the maximum {b}"),
        ),
        _ => Outcome::Valid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_defaults() {
        assert!(validate(QuantityKind::Length, 2.5).is_valid());
        assert_eq!(
            validate(QuantityKind::Length, 0.0).reason(),
            Some(ReasonCode::NotPositive)
        );
        assert_eq!(
            validate(QuantityKind::Density, -3.0).reason(),
            Some(ReasonCode::NotPositive)
        );

        // Angles may be zero or negative, but not NaN
        assert!(validate(QuantityKind::Angle, 0.0).is_valid());
        assert!(validate(QuantityKind::Angle, -0.5).is_valid());
        assert_eq!(
            validate(QuantityKind::Angle, f64::NAN).reason(),
            Some(ReasonCode::NotFinite)
        );
    }

    #[test]
    fn test_optional_dimension_allows_zero() {
        // Inner diameter of a solid cylinder is optional: zero means solid
        assert!(validate_value("inner diameter", 0.0, ValueRule::NonNegative).is_valid());
        assert_eq!(
            validate_value("inner diameter", -1.0, ValueRule::NonNegative).reason(),
            Some(ReasonCode::Negative)
        );
        assert_eq!(
            validate_value("bag size", 0.0, ValueRule::StrictlyPositive).reason(),
            Some(ReasonCode::NotPositive)
        );
    }

    #[test]
    fn test_outer_exceeds_inner() {
        assert_eq!(
            validate_relational(5.0, 6.0, RelationalRule::OuterExceedsInner).reason(),
            Some(ReasonCode::InnerNotSmaller)
        );
        assert!(validate_relational(6.0, 5.0, RelationalRule::OuterExceedsInner).is_valid());
        // Equal is invalid too: a zero-thickness wall
        assert!(!validate_relational(5.0, 5.0, RelationalRule::OuterExceedsInner).is_valid());
    }

    #[test]
    fn test_border_at_most_half() {
        // Border thickness vs the shorter side of a slab
        assert!(validate_relational(0.5, 2.0, RelationalRule::AtMostHalfOf).is_valid());
        assert!(validate_relational(1.0, 2.0, RelationalRule::AtMostHalfOf).is_valid());
        assert_eq!(
            validate_relational(1.2, 2.0, RelationalRule::AtMostHalfOf).reason(),
            Some(ReasonCode::ExceedsHalf)
        );
    }

    #[test]
    fn test_baluster_spacing_maximum() {
        // 4 in spacing passes, 4.5 in does not
        let ok = validate_relational(0.1016, MAX_BALUSTER_SPACING_M, RelationalRule::AtMost);
        assert!(ok.is_valid());

        let bad = validate_relational(0.1143, MAX_BALUSTER_SPACING_M, RelationalRule::AtMost);
        assert_eq!(bad.reason(), Some(ReasonCode::ExceedsMaximum));
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = validate_relational(5.0, 6.0, RelationalRule::OuterExceedsInner);
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"status\":\"Invalid\""));
        let roundtrip: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, roundtrip);
    }
}
