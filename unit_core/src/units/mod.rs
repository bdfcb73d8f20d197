//! # Units
//!
//! Quantity kinds, the static unit table, the scalar conversion kernel, and
//! the composite (major+minor) display adapter.
//!
//! ## Design
//!
//! Every unit declares one linear factor to its kind's canonical unit, and
//! every conversion routes through that canonical unit. The table is built
//! once at first use and never mutated, so it is freely shareable across
//! threads.
//!
//! ## Example
//!
//! ```rust
//! use unit_core::units::{convert, unit_catalog, QuantityKind};
//!
//! // Populate a dropdown
//! for unit in unit_catalog(QuantityKind::Length) {
//!     let _ = (unit.symbol, unit.label);
//! }
//!
//! // Convert between any two units of a kind
//! let meters = convert(10.0, QuantityKind::Length, "ft", "m").unwrap();
//! assert!((meters - 3.048).abs() < 1e-12);
//! ```

pub mod composite;
pub mod convert;
pub mod kind;
pub mod table;

pub use composite::{CompositeUnit, CompositeValue, DEFAULT_MINOR_DECIMALS};
pub use convert::{convert, from_canonical, to_canonical};
pub use kind::QuantityKind;
pub use table::{unit, unit_catalog, UnitDef};
