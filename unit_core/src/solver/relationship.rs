//! # Relationship Declarations
//!
//! A relationship is a named formula family: a set of variable slots plus
//! the closed-form equations connecting them. Each relationship declares:
//!
//! - its slots, each with a name and quantity kind;
//! - an ordered list of minimal sufficient slot subsets, checked in priority
//!   order against the caller's known slots (a subset may carry seed
//!   equations for method conventions that only apply when that subset is
//!   the entry point);
//! - a priority-ordered list of derivation rules, each a closed-form
//!   equation with a human-readable form for display and audit.
//!
//! The generic solve loop in [`crate::solver`] is shared by every
//! relationship; the declarations here are plain data built once at process
//! start.

use crate::units::QuantityKind;

/// A named variable slot within a relationship
#[derive(Debug, Clone, Copy)]
pub struct SlotSpec {
    /// Slot name used in solve requests (e.g., "upperRun")
    pub name: &'static str,
    /// Quantity kind the slot's measurements must carry
    pub kind: QuantityKind,
    /// Human-readable label for result display
    pub label: &'static str,
}

/// A closed-form equation deriving one slot from others.
///
/// `eval` receives the input values in the order `inputs` declares them and
/// returns the target value. A non-finite result means the rule does not
/// apply for these inputs (a vertical angle, a negative square root) and is
/// discarded by the solver.
#[derive(Debug, Clone, Copy)]
pub struct DerivationRule {
    /// Slot this rule derives
    pub target: &'static str,
    /// Human-readable equation (e.g., "rise = run * tan(angle)")
    pub equation: &'static str,
    /// Slots the equation reads, in argument order
    pub inputs: &'static [&'static str],
    /// The closed-form equation itself
    pub eval: fn(&[f64]) -> f64,
}

impl DerivationRule {
    /// Declare a rule
    pub fn new(
        target: &'static str,
        equation: &'static str,
        inputs: &'static [&'static str],
        eval: fn(&[f64]) -> f64,
    ) -> Self {
        DerivationRule {
            target,
            equation,
            inputs,
            eval,
        }
    }
}

/// A minimal set of known slots from which the relationship solves,
/// optionally carrying method-convention seed equations.
///
/// Seeds fire once, before the shared rules, and only fill slots the caller
/// left absent; a convention never overrides or contradicts an explicit
/// input.
#[derive(Debug, Clone)]
pub struct SufficientSet {
    /// Slots that must all be present for this set to apply
    pub slots: &'static [&'static str],
    /// Convention equations applied when this set is the entry point
    pub seeds: Vec<DerivationRule>,
}

impl SufficientSet {
    /// Declare a sufficient set with no seeds
    pub fn new(slots: &'static [&'static str]) -> Self {
        SufficientSet {
            slots,
            seeds: Vec::new(),
        }
    }

    /// Add a seed equation (builder pattern)
    pub fn with_seed(mut self, seed: DerivationRule) -> Self {
        self.seeds.push(seed);
        self
    }
}

/// A named formula family the solver can resolve.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Registry name (e.g., "gambrel-two-pitch")
    pub name: &'static str,
    /// All variable slots
    pub slots: Vec<SlotSpec>,
    /// Minimal sufficient subsets in priority order
    pub sufficient_sets: Vec<SufficientSet>,
    /// Derivation rules in priority order
    pub rules: Vec<DerivationRule>,
    /// Relative tolerance for redundant-path consistency checks
    pub tolerance: f64,
}

impl Relationship {
    /// Look up a slot declaration by name
    pub fn slot(&self, name: &str) -> Option<&SlotSpec> {
        self.slots.iter().find(|s| s.name == name)
    }

    /// The smallest number of known slots any sufficient set requires
    pub fn min_known(&self) -> usize {
        self.sufficient_sets
            .iter()
            .map(|s| s.slots.len())
            .min()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double(args: &[f64]) -> f64 {
        args[0] * 2.0
    }

    #[test]
    fn test_rule_evaluates() {
        let rule = DerivationRule::new("b", "b = 2a", &["a"], double);
        assert_eq!((rule.eval)(&[3.0]), 6.0);
        assert_eq!(rule.target, "b");
    }

    #[test]
    fn test_relationship_slot_lookup() {
        let rel = Relationship {
            name: "test",
            slots: vec![
                SlotSpec { name: "a", kind: QuantityKind::Length, label: "A" },
                SlotSpec { name: "b", kind: QuantityKind::Length, label: "B" },
            ],
            sufficient_sets: vec![SufficientSet::new(&["a"])],
            rules: vec![DerivationRule::new("b", "b = 2a", &["a"], double)],
            tolerance: 1e-6,
        };
        assert!(rel.slot("a").is_some());
        assert!(rel.slot("c").is_none());
        assert_eq!(rel.min_known(), 1);
    }
}
