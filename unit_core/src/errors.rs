//! # Error Types
//!
//! Structured error types for `unit_core`. Errors here represent programmer
//! contract violations (asking for a unit symbol that was never registered,
//! pairing incompatible units into a composite, addressing a relationship
//! slot that does not exist). Runtime outcomes a user can cause (an
//! underdetermined roof, a failed dimension check) are returned as plain
//! values (`SolveStatus`, `Outcome`), never as errors.
//!
//! ## Example
//!
//! ```rust
//! use unit_core::errors::{ConvError, ConvResult};
//! use unit_core::units::QuantityKind;
//!
//! fn require_feet(symbol: &str) -> ConvResult<()> {
//!     if symbol != "ft" {
//!         return Err(ConvError::unknown_unit(QuantityKind::Length, symbol));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::units::QuantityKind;

/// Result type alias for unit_core operations
pub type ConvResult<T> = Result<T, ConvError>;

/// Structured error type for conversion and solver contract violations.
///
/// Each variant provides specific context about what went wrong, enabling
/// programmatic handling by the calculator screens that consume the engine.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ConvError {
    /// Unit symbol is not registered for the given quantity kind
    #[error("Unknown unit '{symbol}' for kind {kind:?}")]
    UnknownUnit {
        kind: QuantityKind,
        symbol: String,
    },

    /// Two units cannot form a major/minor composite pair
    #[error("Cannot pair '{major}' with '{minor}' as a composite unit: {reason}")]
    MismatchedComposite {
        major: String,
        minor: String,
        reason: String,
    },

    /// A solve request addressed a slot the relationship does not declare
    #[error("Relationship '{relationship}' has no slot named '{slot}'")]
    UnknownSlot {
        relationship: String,
        slot: String,
    },

    /// A solve request supplied a measurement of the wrong quantity kind
    #[error("Slot '{slot}' of '{relationship}' expects {expected:?}, got {actual:?}")]
    KindMismatch {
        relationship: String,
        slot: String,
        expected: QuantityKind,
        actual: QuantityKind,
    },
}

impl ConvError {
    /// Create an UnknownUnit error
    pub fn unknown_unit(kind: QuantityKind, symbol: impl Into<String>) -> Self {
        ConvError::UnknownUnit {
            kind,
            symbol: symbol.into(),
        }
    }

    /// Create a MismatchedComposite error
    pub fn mismatched_composite(
        major: impl Into<String>,
        minor: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ConvError::MismatchedComposite {
            major: major.into(),
            minor: minor.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownSlot error
    pub fn unknown_slot(relationship: impl Into<String>, slot: impl Into<String>) -> Self {
        ConvError::UnknownSlot {
            relationship: relationship.into(),
            slot: slot.into(),
        }
    }

    /// Create a KindMismatch error
    pub fn kind_mismatch(
        relationship: impl Into<String>,
        slot: impl Into<String>,
        expected: QuantityKind,
        actual: QuantityKind,
    ) -> Self {
        ConvError::KindMismatch {
            relationship: relationship.into(),
            slot: slot.into(),
            expected,
            actual,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ConvError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            ConvError::MismatchedComposite { .. } => "MISMATCHED_COMPOSITE",
            ConvError::UnknownSlot { .. } => "UNKNOWN_SLOT",
            ConvError::KindMismatch { .. } => "KIND_MISMATCH",
        }
    }
}
