//! Quantity kind definitions
//!
//! Every measurement in the engine belongs to exactly one physical quantity
//! kind, and every kind has exactly one canonical unit through which all
//! conversions route.

use serde::{Deserialize, Serialize};

/// The physical quantity kinds the engine converts and solves over.
///
/// Each kind has a single canonical unit (SI base or derived). Display units
/// are registered against a kind in the unit table; converting between two
/// units of a kind always routes through the canonical unit.
///
/// # Example
/// ```
/// use unit_core::units::QuantityKind;
///
/// let length = QuantityKind::Length;
/// assert_eq!(length.canonical_symbol(), "m");
/// assert_eq!(length.description(), "Length");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantityKind {
    /// Canonical unit: meter (m)
    Length,
    /// Canonical unit: square meter (m2)
    Area,
    /// Canonical unit: cubic meter (m3)
    Volume,
    /// Canonical unit: kilogram (kg)
    Mass,
    /// Canonical unit: kilogram per cubic meter (kg/m3)
    Density,
    /// Canonical unit: newton (N)
    Force,
    /// Canonical unit: pascal (Pa)
    Stress,
    /// Canonical unit: radian (rad)
    Angle,
}

impl QuantityKind {
    /// All quantity kinds in standard order
    pub const ALL: [QuantityKind; 8] = [
        QuantityKind::Length,
        QuantityKind::Area,
        QuantityKind::Volume,
        QuantityKind::Mass,
        QuantityKind::Density,
        QuantityKind::Force,
        QuantityKind::Stress,
        QuantityKind::Angle,
    ];

    /// Symbol of the kind's canonical unit
    ///
    /// # Example
    /// ```
    /// use unit_core::units::QuantityKind;
    /// assert_eq!(QuantityKind::Stress.canonical_symbol(), "Pa");
    /// ```
    pub fn canonical_symbol(&self) -> &'static str {
        match self {
            QuantityKind::Length => "m",
            QuantityKind::Area => "m2",
            QuantityKind::Volume => "m3",
            QuantityKind::Mass => "kg",
            QuantityKind::Density => "kg/m3",
            QuantityKind::Force => "N",
            QuantityKind::Stress => "Pa",
            QuantityKind::Angle => "rad",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            QuantityKind::Length => "Length",
            QuantityKind::Area => "Area",
            QuantityKind::Volume => "Volume",
            QuantityKind::Mass => "Mass",
            QuantityKind::Density => "Density",
            QuantityKind::Force => "Force",
            QuantityKind::Stress => "Stress",
            QuantityKind::Angle => "Angle",
        }
    }

    /// Whether values of this kind are physical dimensions that must be
    /// positive to be meaningful (lengths, areas, masses, densities).
    ///
    /// Angles are the exception: a zero or negative angle is a legitimate
    /// input to the solver.
    pub fn is_dimension(&self) -> bool {
        !matches!(self, QuantityKind::Angle)
    }
}

impl std::fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
