//! # unit_core - Measurement & Derived-Quantity Engine
//!
//! `unit_core` is the computational heart of Groundwork's construction
//! calculators: unit conversion without precision drift, two-part composite
//! units like feet-and-inches, small geometric relationship solving, and
//! advisory cross-field validation. The calculator screens hand it a raw
//! value, a quantity kind, and a unit symbol, and get back converted or
//! solved canonical values; everything is JSON-serializable for the
//! presentation layers.
//!
//! ## Design Philosophy
//!
//! - **Canonical first**: every kind has one canonical unit; all conversion
//!   routes through it, so repeated unit changes never compound error
//! - **Stateless**: pure functions over immutable values; the only shared
//!   state is the static unit and relationship configuration
//! - **Outcomes as values**: solver statuses and validation results are
//!   returned, never thrown; errors are reserved for contract violations
//!
//! ## Quick Start
//!
//! ```rust
//! use unit_core::{convert, Measurement, QuantityKind};
//! use unit_core::solver::{solve, relationship_named, SolveRequest};
//!
//! // Convert between registered units
//! let meters = convert(22.0, QuantityKind::Length, "ft", "m").unwrap();
//! assert!((meters - 6.7056).abs() < 1e-12);
//!
//! // Solve a roof from a partial set of measurements
//! let rel = relationship_named("right-triangle").unwrap();
//! let result = solve(rel, &SolveRequest::new()
//!     .with("run", Measurement::normalize(12.0, QuantityKind::Length, "ft").unwrap().unwrap())
//!     .with("angle", Measurement::normalize(30.0, QuantityKind::Angle, "deg").unwrap().unwrap()))
//!     .unwrap();
//! assert!(result.is_solved());
//! ```
//!
//! ## Modules
//!
//! - [`units`] - Quantity kinds, the unit table, conversion, composites
//! - [`measurement`] - The canonical-value Measurement abstraction
//! - [`solver`] - Relationship declarations and the generic solve loop
//! - [`validation`] - Advisory positivity, ordering, and code-maximum checks
//! - [`shapes`] - Closed-form areas and volumes over canonical meters
//! - [`errors`] - Structured error types for contract violations

pub mod errors;
pub mod measurement;
pub mod shapes;
pub mod solver;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use errors::{ConvError, ConvResult};
pub use measurement::Measurement;
pub use solver::{SolveRequest, SolveResult, SolveStatus};
pub use units::{convert, unit_catalog, CompositeUnit, QuantityKind, UnitDef};
pub use validation::{validate, validate_relational, Outcome};
