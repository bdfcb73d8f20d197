//! # Derived-Quantity Solver
//!
//! Resolves a relationship, a declared family of closed-form equations over
//! named slots, from a partial set of known measurements. The solve loop is
//! generic; each relationship contributes only its declarations (see
//! [`relationship`] and the built-in roof families in [`roof`]).
//!
//! ## Outcomes
//!
//! Solver outcomes are values, never errors:
//!
//! - `Solved` - every slot derived or given.
//! - `Underdetermined` - not enough known slots; derived slots are present
//!   in the result, unresolved slots stay absent, and the caller renders
//!   blanks or zeros.
//! - `Inconsistent` - a redundant derivation path disagreed with a given or
//!   earlier-derived value beyond tolerance. The first derivation is kept,
//!   never averaged, and the disagreement is recorded as a
//!   [`Conflict`] so a screen can surface a correction hint.
//!
//! Errors (`Err`) are reserved for programmer contract violations: an
//! unknown slot name or a measurement of the wrong quantity kind.
//!
//! ## Example
//!
//! ```rust
//! use unit_core::{Measurement, units::QuantityKind};
//! use unit_core::solver::{solve, SolveRequest, SolveStatus, roof};
//!
//! let rel = roof::right_triangle();
//! let request = SolveRequest::new()
//!     .with("run", Measurement::normalize(4.0, QuantityKind::Length, "m").unwrap().unwrap())
//!     .with("rise", Measurement::normalize(3.0, QuantityKind::Length, "m").unwrap().unwrap());
//!
//! let result = solve(&rel, &request).unwrap();
//! assert_eq!(result.status, SolveStatus::Solved);
//! assert!((result.get("rafter").unwrap() - 5.0).abs() < 1e-9);
//! ```

pub mod relationship;
pub mod roof;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{ConvError, ConvResult};
use crate::measurement::Measurement;
use crate::solver::relationship::{DerivationRule, Relationship};

/// Terminal status of a solve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveStatus {
    /// Every slot is known
    Solved,
    /// Too few knowns; unresolved slots stay absent
    Underdetermined,
    /// Redundant derivation paths disagreed beyond tolerance
    Inconsistent,
}

/// A disagreement between a redundant derivation and the value already held.
///
/// The held value wins; the conflict is advisory, for correction hints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    /// Slot the derivation disagreed on
    pub slot: String,
    /// Value kept (given, or derived first)
    pub kept: f64,
    /// Value the redundant path produced
    pub derived: f64,
    /// Human-readable equation of the disagreeing rule
    pub equation: String,
}

/// Partial assignment of canonical measurements to relationship slots.
///
/// Absent is distinct from zero: an empty or unparseable field never enters
/// the request at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolveRequest {
    entries: HashMap<String, Measurement>,
}

impl SolveRequest {
    /// Empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a known slot (builder pattern)
    pub fn with(mut self, slot: impl Into<String>, measurement: Measurement) -> Self {
        self.entries.insert(slot.into(), measurement);
        self
    }

    /// Set a slot that may be absent; `None` leaves it unknown
    pub fn with_optional(self, slot: impl Into<String>, measurement: Option<Measurement>) -> Self {
        match measurement {
            Some(m) => self.with(slot, m),
            None => self,
        }
    }

    /// Known slot names and measurements
    pub fn entries(&self) -> &HashMap<String, Measurement> {
        &self.entries
    }
}

/// Completed (or partially completed) slot assignment plus status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveResult {
    /// Terminal status
    pub status: SolveStatus,
    /// Canonical value per known or derived slot; unresolved slots absent
    pub values: HashMap<String, f64>,
    /// First redundant-path disagreement, when status is Inconsistent
    pub conflict: Option<Conflict>,
}

impl SolveResult {
    /// Canonical value of a slot, if known
    pub fn get(&self, slot: &str) -> Option<f64> {
        self.values.get(slot).copied()
    }

    /// Whether every slot resolved
    pub fn is_solved(&self) -> bool {
        self.status == SolveStatus::Solved
    }
}

/// Resolve a relationship from a partial set of known measurements.
///
/// 1. Knowns are checked against the relationship's slot declarations
///    (unknown names and kind mismatches fail loudly).
/// 2. The first sufficient subset, in declared priority order, whose
///    slots are all present contributes its seed equations. Seeds only fill
///    absent slots; they never override an explicit input.
/// 3. The shared derivation rules run to a fixed point in priority order.
///    The first derivation of a slot wins; every later rule that can
///    recompute an already-known slot acts as a redundant consistency path,
///    and a disagreement beyond tolerance records a conflict.
/// 4. Status: any conflict is `Inconsistent` (contradictory input is
///    reported as such even when incomplete); otherwise `Solved` when every
///    slot is known, else `Underdetermined`.
pub fn solve(relationship: &Relationship, request: &SolveRequest) -> ConvResult<SolveResult> {
    let mut known: HashMap<&'static str, f64> = HashMap::new();
    for (name, measurement) in request.entries() {
        let slot = relationship
            .slot(name)
            .ok_or_else(|| ConvError::unknown_slot(relationship.name, name.as_str()))?;
        if slot.kind != measurement.kind() {
            return Err(ConvError::kind_mismatch(
                relationship.name,
                name.as_str(),
                slot.kind,
                measurement.kind(),
            ));
        }
        known.insert(slot.name, measurement.canonical());
    }

    let mut conflict: Option<Conflict> = None;

    // Method-convention seeds from the first matching sufficient set
    if let Some(set) = relationship
        .sufficient_sets
        .iter()
        .find(|set| set.slots.iter().all(|slot| known.contains_key(slot)))
    {
        for seed in &set.seeds {
            if !known.contains_key(seed.target) {
                apply_rule(seed, &mut known, &mut conflict, relationship.tolerance);
            }
        }
    }

    // Shared rules to a fixed point
    loop {
        let mut filled = false;
        for rule in &relationship.rules {
            filled |= apply_rule(rule, &mut known, &mut conflict, relationship.tolerance);
        }
        if !filled {
            break;
        }
    }

    let status = if conflict.is_some() {
        SolveStatus::Inconsistent
    } else if relationship.slots.iter().all(|slot| known.contains_key(slot.name)) {
        SolveStatus::Solved
    } else {
        SolveStatus::Underdetermined
    };

    Ok(SolveResult {
        status,
        values: known
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect(),
        conflict,
    })
}

/// Fire one rule if its inputs are known. Returns true when a new slot was
/// filled. A known target is recomputed and checked instead of overwritten;
/// only the first disagreement is recorded.
fn apply_rule(
    rule: &DerivationRule,
    known: &mut HashMap<&'static str, f64>,
    conflict: &mut Option<Conflict>,
    tolerance: f64,
) -> bool {
    let mut args = Vec::with_capacity(rule.inputs.len());
    for input in rule.inputs {
        match known.get(input) {
            Some(&value) => args.push(value),
            None => return false,
        }
    }

    let derived = (rule.eval)(&args);
    if !derived.is_finite() {
        return false;
    }

    match known.get(rule.target) {
        Some(&kept) => {
            let scale = kept.abs().max(1.0);
            if (kept - derived).abs() > tolerance * scale && conflict.is_none() {
                *conflict = Some(Conflict {
                    slot: rule.target.to_string(),
                    kept,
                    derived,
                    equation: rule.equation.to_string(),
                });
            }
            false
        }
        None => {
            known.insert(rule.target, derived);
            true
        }
    }
}

pub use roof::{
    gambrel_half_circle, gambrel_two_pitch, relationship_named, relationship_names, right_triangle,
};
