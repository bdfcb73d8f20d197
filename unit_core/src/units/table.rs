//! # Unit Table
//!
//! Static registry of every display unit the calculators offer, keyed by
//! quantity kind and symbol. Each unit carries a single linear factor to the
//! kind's canonical unit; the conversion kernel multiplies on the way in and
//! divides on the way out, so no conversion ever chains through an
//! intermediate display unit.
//!
//! Factors use the exact international definitions (1 in = 0.0254 m,
//! 1 lb = 0.45359237 kg, ...). The per-kind catalogs are ordered the way the
//! selection dropdowns present them; `unit_catalog` is the only data the
//! presentation layer needs beyond the core operations.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::errors::{ConvError, ConvResult};
use crate::units::QuantityKind;

/// A display unit registered against a quantity kind.
///
/// `to_canonical` is strictly positive: `canonical = value * to_canonical`,
/// and the inverse divides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitDef {
    /// Quantity kind this unit measures
    pub kind: QuantityKind,
    /// Short symbol used as the lookup key (e.g., "ft", "kg/m3")
    pub symbol: &'static str,
    /// Human-readable label for selection controls
    pub label: &'static str,
    /// Linear factor to the kind's canonical unit
    pub to_canonical: f64,
}

// ============================================================================
// Length (canonical: meter)
// ============================================================================

pub const MILLIMETER: UnitDef = UnitDef { kind: QuantityKind::Length, symbol: "mm", label: "Millimeters", to_canonical: 0.001 };
pub const CENTIMETER: UnitDef = UnitDef { kind: QuantityKind::Length, symbol: "cm", label: "Centimeters", to_canonical: 0.01 };
pub const METER: UnitDef = UnitDef { kind: QuantityKind::Length, symbol: "m", label: "Meters", to_canonical: 1.0 };
pub const KILOMETER: UnitDef = UnitDef { kind: QuantityKind::Length, symbol: "km", label: "Kilometers", to_canonical: 1000.0 };
pub const INCH: UnitDef = UnitDef { kind: QuantityKind::Length, symbol: "in", label: "Inches", to_canonical: 0.0254 };
pub const FOOT: UnitDef = UnitDef { kind: QuantityKind::Length, symbol: "ft", label: "Feet", to_canonical: 0.3048 };
pub const YARD: UnitDef = UnitDef { kind: QuantityKind::Length, symbol: "yd", label: "Yards", to_canonical: 0.9144 };

// ============================================================================
// Area (canonical: square meter)
// ============================================================================

pub const SQ_CENTIMETER: UnitDef = UnitDef { kind: QuantityKind::Area, symbol: "cm2", label: "Square centimeters", to_canonical: 0.0001 };
pub const SQ_METER: UnitDef = UnitDef { kind: QuantityKind::Area, symbol: "m2", label: "Square meters", to_canonical: 1.0 };
pub const SQ_INCH: UnitDef = UnitDef { kind: QuantityKind::Area, symbol: "in2", label: "Square inches", to_canonical: 0.00064516 };
pub const SQ_FOOT: UnitDef = UnitDef { kind: QuantityKind::Area, symbol: "ft2", label: "Square feet", to_canonical: 0.09290304 };
pub const SQ_YARD: UnitDef = UnitDef { kind: QuantityKind::Area, symbol: "yd2", label: "Square yards", to_canonical: 0.83612736 };

// ============================================================================
// Volume (canonical: cubic meter)
// ============================================================================

pub const CU_CENTIMETER: UnitDef = UnitDef { kind: QuantityKind::Volume, symbol: "cm3", label: "Cubic centimeters", to_canonical: 0.000001 };
pub const LITER: UnitDef = UnitDef { kind: QuantityKind::Volume, symbol: "L", label: "Liters", to_canonical: 0.001 };
pub const CU_METER: UnitDef = UnitDef { kind: QuantityKind::Volume, symbol: "m3", label: "Cubic meters", to_canonical: 1.0 };
pub const CU_INCH: UnitDef = UnitDef { kind: QuantityKind::Volume, symbol: "in3", label: "Cubic inches", to_canonical: 0.000016387064 };
pub const CU_FOOT: UnitDef = UnitDef { kind: QuantityKind::Volume, symbol: "ft3", label: "Cubic feet", to_canonical: 0.028316846592 };
pub const CU_YARD: UnitDef = UnitDef { kind: QuantityKind::Volume, symbol: "yd3", label: "Cubic yards", to_canonical: 0.764554857984 };
pub const GALLON: UnitDef = UnitDef { kind: QuantityKind::Volume, symbol: "gal", label: "Gallons (US)", to_canonical: 0.003785411784 };

// ============================================================================
// Mass (canonical: kilogram)
// ============================================================================

pub const GRAM: UnitDef = UnitDef { kind: QuantityKind::Mass, symbol: "g", label: "Grams", to_canonical: 0.001 };
pub const KILOGRAM: UnitDef = UnitDef { kind: QuantityKind::Mass, symbol: "kg", label: "Kilograms", to_canonical: 1.0 };
pub const TONNE: UnitDef = UnitDef { kind: QuantityKind::Mass, symbol: "t", label: "Metric tons", to_canonical: 1000.0 };
pub const OUNCE: UnitDef = UnitDef { kind: QuantityKind::Mass, symbol: "oz", label: "Ounces", to_canonical: 0.028349523125 };
pub const POUND: UnitDef = UnitDef { kind: QuantityKind::Mass, symbol: "lb", label: "Pounds", to_canonical: 0.45359237 };
pub const SHORT_TON: UnitDef = UnitDef { kind: QuantityKind::Mass, symbol: "ton", label: "Tons (US short)", to_canonical: 907.18474 };

// ============================================================================
// Density (canonical: kilogram per cubic meter)
// ============================================================================

pub const KG_PER_CU_METER: UnitDef = UnitDef { kind: QuantityKind::Density, symbol: "kg/m3", label: "Kilograms per cubic meter", to_canonical: 1.0 };
pub const G_PER_CU_CENTIMETER: UnitDef = UnitDef { kind: QuantityKind::Density, symbol: "g/cm3", label: "Grams per cubic centimeter", to_canonical: 1000.0 };
pub const LB_PER_CU_FOOT: UnitDef = UnitDef { kind: QuantityKind::Density, symbol: "lb/ft3", label: "Pounds per cubic foot", to_canonical: 16.018463373960142 };
pub const LB_PER_CU_YARD: UnitDef = UnitDef { kind: QuantityKind::Density, symbol: "lb/yd3", label: "Pounds per cubic yard", to_canonical: 0.593276421257783 };

// ============================================================================
// Force (canonical: newton)
// ============================================================================

pub const NEWTON: UnitDef = UnitDef { kind: QuantityKind::Force, symbol: "N", label: "Newtons", to_canonical: 1.0 };
pub const KILONEWTON: UnitDef = UnitDef { kind: QuantityKind::Force, symbol: "kN", label: "Kilonewtons", to_canonical: 1000.0 };
pub const POUND_FORCE: UnitDef = UnitDef { kind: QuantityKind::Force, symbol: "lbf", label: "Pounds-force", to_canonical: 4.4482216152605 };
pub const KIP: UnitDef = UnitDef { kind: QuantityKind::Force, symbol: "kip", label: "Kips", to_canonical: 4448.2216152605 };

// ============================================================================
// Stress (canonical: pascal)
// ============================================================================

pub const PASCAL: UnitDef = UnitDef { kind: QuantityKind::Stress, symbol: "Pa", label: "Pascals", to_canonical: 1.0 };
pub const KILOPASCAL: UnitDef = UnitDef { kind: QuantityKind::Stress, symbol: "kPa", label: "Kilopascals", to_canonical: 1000.0 };
pub const MEGAPASCAL: UnitDef = UnitDef { kind: QuantityKind::Stress, symbol: "MPa", label: "Megapascals", to_canonical: 1000000.0 };
pub const PSF: UnitDef = UnitDef { kind: QuantityKind::Stress, symbol: "psf", label: "Pounds per square foot", to_canonical: 47.88025898033584 };
pub const PSI: UnitDef = UnitDef { kind: QuantityKind::Stress, symbol: "psi", label: "Pounds per square inch", to_canonical: 6894.757293168361 };
pub const KSI: UnitDef = UnitDef { kind: QuantityKind::Stress, symbol: "ksi", label: "Kips per square inch", to_canonical: 6894757.293168361 };

// ============================================================================
// Angle (canonical: radian)
// ============================================================================

pub const RADIAN: UnitDef = UnitDef { kind: QuantityKind::Angle, symbol: "rad", label: "Radians", to_canonical: 1.0 };
pub const DEGREE: UnitDef = UnitDef { kind: QuantityKind::Angle, symbol: "deg", label: "Degrees", to_canonical: std::f64::consts::PI / 180.0 };

// ============================================================================
// Catalogs
// ============================================================================

/// Length units in dropdown order
pub fn length_units() -> Vec<UnitDef> {
    vec![MILLIMETER, CENTIMETER, METER, KILOMETER, INCH, FOOT, YARD]
}

/// Area units in dropdown order
pub fn area_units() -> Vec<UnitDef> {
    vec![SQ_CENTIMETER, SQ_METER, SQ_INCH, SQ_FOOT, SQ_YARD]
}

/// Volume units in dropdown order
pub fn volume_units() -> Vec<UnitDef> {
    vec![CU_CENTIMETER, LITER, CU_METER, CU_INCH, CU_FOOT, CU_YARD, GALLON]
}

/// Mass units in dropdown order
pub fn mass_units() -> Vec<UnitDef> {
    vec![GRAM, KILOGRAM, TONNE, OUNCE, POUND, SHORT_TON]
}

/// Density units in dropdown order
pub fn density_units() -> Vec<UnitDef> {
    vec![KG_PER_CU_METER, G_PER_CU_CENTIMETER, LB_PER_CU_FOOT, LB_PER_CU_YARD]
}

/// Force units in dropdown order
pub fn force_units() -> Vec<UnitDef> {
    vec![NEWTON, KILONEWTON, POUND_FORCE, KIP]
}

/// Stress units in dropdown order
pub fn stress_units() -> Vec<UnitDef> {
    vec![PASCAL, KILOPASCAL, MEGAPASCAL, PSF, PSI, KSI]
}

/// Angle units in dropdown order
pub fn angle_units() -> Vec<UnitDef> {
    vec![RADIAN, DEGREE]
}

static CATALOGS: Lazy<HashMap<QuantityKind, Vec<UnitDef>>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert(QuantityKind::Length, length_units());
    map.insert(QuantityKind::Area, area_units());
    map.insert(QuantityKind::Volume, volume_units());
    map.insert(QuantityKind::Mass, mass_units());
    map.insert(QuantityKind::Density, density_units());
    map.insert(QuantityKind::Force, force_units());
    map.insert(QuantityKind::Stress, stress_units());
    map.insert(QuantityKind::Angle, angle_units());
    map
});

/// Look up a registered unit by kind and symbol.
///
/// An unregistered symbol is a programmer contract violation and fails
/// loudly with [`ConvError::UnknownUnit`]. Catalogs hold at most a handful
/// of units, so the lookup is a scan of the kind's catalog.
///
/// # Example
/// ```
/// use unit_core::units::{unit, QuantityKind};
///
/// let ft = unit(QuantityKind::Length, "ft").unwrap();
/// assert_eq!(ft.to_canonical, 0.3048);
/// assert!(unit(QuantityKind::Length, "parsec").is_err());
/// ```
pub fn unit(kind: QuantityKind, symbol: &str) -> ConvResult<UnitDef> {
    unit_catalog(kind)
        .iter()
        .find(|unit| unit.symbol == symbol)
        .copied()
        .ok_or_else(|| ConvError::unknown_unit(kind, symbol))
}

/// The ordered unit catalog for a kind, for populating selection controls.
pub fn unit_catalog(kind: QuantityKind) -> &'static [UnitDef] {
    CATALOGS
        .get(&kind)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
