//! # Roof Relationships
//!
//! Built-in relationship declarations for the roof calculators, registered
//! by name. Each family declares its slots, sufficient subsets, and
//! closed-form equations once; the generic solve loop in [`crate::solver`]
//! does the rest.
//!
//! ## Families
//!
//! - `right-triangle` - single-pitch run/rise/angle/rafter.
//! - `gambrel-two-pitch` - two roof segments meeting at a break, closed by
//!   the runs summing to the half-width and the rises to the total height.
//! - `gambrel-half-circle` - both segments are chords of a semicircle over
//!   the building width. Under the two-chord profile the lower pitch always
//!   sits exactly 45 degrees above the upper, and the break point is at
//!   circle angle 90 degrees minus twice the upper pitch.

use std::collections::HashMap;
use std::f64::consts::{FRAC_PI_4, PI};

use once_cell::sync::Lazy;

use crate::solver::relationship::{DerivationRule, Relationship, SlotSpec, SufficientSet};
use crate::units::QuantityKind;

// ============================================================================
// Equation bodies
//
// Argument order matches each rule's declared inputs.
// ============================================================================

fn rise_from_run_angle(a: &[f64]) -> f64 {
    a[0] * a[1].tan()
}

fn run_from_rise_angle(a: &[f64]) -> f64 {
    a[0] / a[1].tan()
}

fn leg_cos(a: &[f64]) -> f64 {
    a[0] * a[1].cos()
}

fn leg_sin(a: &[f64]) -> f64 {
    a[0] * a[1].sin()
}

fn hypotenuse(a: &[f64]) -> f64 {
    a[0].hypot(a[1])
}

fn other_leg(a: &[f64]) -> f64 {
    (a[0] * a[0] - a[1] * a[1]).sqrt()
}

fn angle_from_rise_run(a: &[f64]) -> f64 {
    a[0].atan2(a[1])
}

fn angle_from_rise_hyp(a: &[f64]) -> f64 {
    (a[0] / a[1]).asin()
}

fn hyp_from_run_angle(a: &[f64]) -> f64 {
    a[0] / a[1].cos()
}

fn sum(a: &[f64]) -> f64 {
    a[0] + a[1]
}

fn difference(a: &[f64]) -> f64 {
    a[0] - a[1]
}

fn half(a: &[f64]) -> f64 {
    a[0] / 2.0
}

fn double(a: &[f64]) -> f64 {
    a[0] * 2.0
}

fn same(a: &[f64]) -> f64 {
    a[0]
}

fn plus_eighth_turn(a: &[f64]) -> f64 {
    a[0] + FRAC_PI_4
}

fn minus_eighth_turn(a: &[f64]) -> f64 {
    a[0] - FRAC_PI_4
}

fn chord_run(a: &[f64]) -> f64 {
    // Break point of the semicircular profile sits at circle angle
    // 90deg - 2*pitch, so the horizontal run of the upper chord is
    // r * sin(2 * pitch)
    a[1] * (2.0 * a[0]).sin()
}

fn pitch_from_chord_run(a: &[f64]) -> f64 {
    (a[0] / a[1]).asin() / 2.0
}

fn sagitta(a: &[f64]) -> f64 {
    // rise = r - sqrt(r^2 - run^2)
    a[0] - (a[0] * a[0] - a[1] * a[1]).sqrt()
}

fn semicircle_area(a: &[f64]) -> f64 {
    PI * a[0] * a[0] / 2.0
}

fn semicircle_arc_area(a: &[f64]) -> f64 {
    PI * a[0] * a[1]
}

fn product(a: &[f64]) -> f64 {
    a[0] * a[1]
}

// ============================================================================
// right-triangle
// ============================================================================

/// Single-pitch roof: run, rise, pitch angle, rafter length.
///
/// Any two slots determine the rest. Angle-based derivations are declared
/// ahead of the Pythagorean ones, so an angle plus one side is the
/// preferred path when several apply.
pub fn right_triangle() -> Relationship {
    Relationship {
        name: "right-triangle",
        slots: vec![
            SlotSpec { name: "run", kind: QuantityKind::Length, label: "Run" },
            SlotSpec { name: "rise", kind: QuantityKind::Length, label: "Rise" },
            SlotSpec { name: "angle", kind: QuantityKind::Angle, label: "Pitch angle" },
            SlotSpec { name: "rafter", kind: QuantityKind::Length, label: "Rafter length" },
        ],
        sufficient_sets: vec![
            SufficientSet::new(&["run", "angle"]),
            SufficientSet::new(&["rise", "angle"]),
            SufficientSet::new(&["rafter", "angle"]),
            SufficientSet::new(&["run", "rise"]),
            SufficientSet::new(&["run", "rafter"]),
            SufficientSet::new(&["rise", "rafter"]),
        ],
        rules: vec![
            DerivationRule::new("rise", "rise = run * tan(angle)", &["run", "angle"], rise_from_run_angle),
            DerivationRule::new("run", "run = rise / tan(angle)", &["rise", "angle"], run_from_rise_angle),
            DerivationRule::new("run", "run = rafter * cos(angle)", &["rafter", "angle"], leg_cos),
            DerivationRule::new("rise", "rise = rafter * sin(angle)", &["rafter", "angle"], leg_sin),
            DerivationRule::new("rafter", "rafter = sqrt(run^2 + rise^2)", &["run", "rise"], hypotenuse),
            DerivationRule::new("angle", "angle = atan(rise / run)", &["rise", "run"], angle_from_rise_run),
            DerivationRule::new("rise", "rise = sqrt(rafter^2 - run^2)", &["rafter", "run"], other_leg),
            DerivationRule::new("run", "run = sqrt(rafter^2 - rise^2)", &["rafter", "rise"], other_leg),
            DerivationRule::new("rafter", "rafter = run / cos(angle)", &["run", "angle"], hyp_from_run_angle),
            DerivationRule::new("angle", "angle = asin(rise / rafter)", &["rise", "rafter"], angle_from_rise_hyp),
        ],
        tolerance: 1e-6,
    }
}

// ============================================================================
// gambrel-two-pitch
// ============================================================================

/// Gambrel roof, two-pitch method: a steep lower segment and a shallow
/// upper segment per side, closed by `upperRun + lowerRun = halfWidth` and
/// `upperRise + lowerRise = totalHeight`, with each segment obeying
/// `tan(angle) = rise / run` and `rafter^2 = run^2 + rise^2`.
///
/// When only the total height and the two pitches are known the method
/// splits the rise equally between segments; an explicitly entered rise or
/// run always takes precedence over that convention.
pub fn gambrel_two_pitch() -> Relationship {
    Relationship {
        name: "gambrel-two-pitch",
        slots: vec![
            SlotSpec { name: "halfWidth", kind: QuantityKind::Length, label: "Half building width" },
            SlotSpec { name: "totalHeight", kind: QuantityKind::Length, label: "Total roof height" },
            SlotSpec { name: "upperAngle", kind: QuantityKind::Angle, label: "Upper pitch angle" },
            SlotSpec { name: "lowerAngle", kind: QuantityKind::Angle, label: "Lower pitch angle" },
            SlotSpec { name: "upperRun", kind: QuantityKind::Length, label: "Upper run" },
            SlotSpec { name: "upperRise", kind: QuantityKind::Length, label: "Upper rise" },
            SlotSpec { name: "upperRafter", kind: QuantityKind::Length, label: "Upper rafter length" },
            SlotSpec { name: "lowerRun", kind: QuantityKind::Length, label: "Lower run" },
            SlotSpec { name: "lowerRise", kind: QuantityKind::Length, label: "Lower rise" },
            SlotSpec { name: "lowerRafter", kind: QuantityKind::Length, label: "Lower rafter length" },
        ],
        sufficient_sets: vec![
            SufficientSet::new(&["totalHeight", "upperAngle", "lowerAngle"]).with_seed(
                DerivationRule::new("upperRise", "upperRise = totalHeight / 2", &["totalHeight"], half),
            ),
            SufficientSet::new(&["halfWidth", "totalHeight", "upperAngle"]).with_seed(
                DerivationRule::new("upperRise", "upperRise = totalHeight / 2", &["totalHeight"], half),
            ),
            SufficientSet::new(&["upperRun", "upperRise", "lowerRun", "lowerRise"]),
            SufficientSet::new(&["upperRafter", "upperAngle", "lowerRafter", "lowerAngle"]),
            SufficientSet::new(&["upperRun", "upperAngle", "lowerRun", "lowerAngle"]),
        ],
        rules: vec![
            // Upper segment
            DerivationRule::new("upperRise", "upperRise = upperRun * tan(upperAngle)", &["upperRun", "upperAngle"], rise_from_run_angle),
            DerivationRule::new("upperRun", "upperRun = upperRise / tan(upperAngle)", &["upperRise", "upperAngle"], run_from_rise_angle),
            DerivationRule::new("upperRun", "upperRun = upperRafter * cos(upperAngle)", &["upperRafter", "upperAngle"], leg_cos),
            DerivationRule::new("upperRise", "upperRise = upperRafter * sin(upperAngle)", &["upperRafter", "upperAngle"], leg_sin),
            DerivationRule::new("upperRafter", "upperRafter = sqrt(upperRun^2 + upperRise^2)", &["upperRun", "upperRise"], hypotenuse),
            DerivationRule::new("upperAngle", "upperAngle = atan(upperRise / upperRun)", &["upperRise", "upperRun"], angle_from_rise_run),
            DerivationRule::new("upperRise", "upperRise = sqrt(upperRafter^2 - upperRun^2)", &["upperRafter", "upperRun"], other_leg),
            // Lower segment
            DerivationRule::new("lowerRise", "lowerRise = lowerRun * tan(lowerAngle)", &["lowerRun", "lowerAngle"], rise_from_run_angle),
            DerivationRule::new("lowerRun", "lowerRun = lowerRise / tan(lowerAngle)", &["lowerRise", "lowerAngle"], run_from_rise_angle),
            DerivationRule::new("lowerRun", "lowerRun = lowerRafter * cos(lowerAngle)", &["lowerRafter", "lowerAngle"], leg_cos),
            DerivationRule::new("lowerRise", "lowerRise = lowerRafter * sin(lowerAngle)", &["lowerRafter", "lowerAngle"], leg_sin),
            DerivationRule::new("lowerRafter", "lowerRafter = sqrt(lowerRun^2 + lowerRise^2)", &["lowerRun", "lowerRise"], hypotenuse),
            DerivationRule::new("lowerAngle", "lowerAngle = atan(lowerRise / lowerRun)", &["lowerRise", "lowerRun"], angle_from_rise_run),
            DerivationRule::new("lowerRise", "lowerRise = sqrt(lowerRafter^2 - lowerRun^2)", &["lowerRafter", "lowerRun"], other_leg),
            // Closure across segments
            DerivationRule::new("halfWidth", "halfWidth = upperRun + lowerRun", &["upperRun", "lowerRun"], sum),
            DerivationRule::new("upperRun", "upperRun = halfWidth - lowerRun", &["halfWidth", "lowerRun"], difference),
            DerivationRule::new("lowerRun", "lowerRun = halfWidth - upperRun", &["halfWidth", "upperRun"], difference),
            DerivationRule::new("totalHeight", "totalHeight = upperRise + lowerRise", &["upperRise", "lowerRise"], sum),
            DerivationRule::new("upperRise", "upperRise = totalHeight - lowerRise", &["totalHeight", "lowerRise"], difference),
            DerivationRule::new("lowerRise", "lowerRise = totalHeight - upperRise", &["totalHeight", "upperRise"], difference),
        ],
        tolerance: 1e-6,
    }
}

// ============================================================================
// gambrel-half-circle
// ============================================================================

/// Gambrel roof, half-circle method: the profile inscribes a semicircle of
/// radius `width / 2`, approximated by one chord per segment. Fixing the
/// upper pitch places the break point at circle angle `90deg - 2*upperAngle`,
/// which makes `lowerAngle = upperAngle + 45deg` hold exactly. Profile area,
/// roof surface, and attic volume come from the closed forms of the
/// semicircle and the building length.
pub fn gambrel_half_circle() -> Relationship {
    Relationship {
        name: "gambrel-half-circle",
        slots: vec![
            SlotSpec { name: "buildingWidth", kind: QuantityKind::Length, label: "Building width" },
            SlotSpec { name: "buildingLength", kind: QuantityKind::Length, label: "Building length" },
            SlotSpec { name: "totalHeight", kind: QuantityKind::Length, label: "Total roof height" },
            SlotSpec { name: "radius", kind: QuantityKind::Length, label: "Profile radius" },
            SlotSpec { name: "upperAngle", kind: QuantityKind::Angle, label: "Upper pitch angle" },
            SlotSpec { name: "lowerAngle", kind: QuantityKind::Angle, label: "Lower pitch angle" },
            SlotSpec { name: "upperRun", kind: QuantityKind::Length, label: "Upper run" },
            SlotSpec { name: "upperRise", kind: QuantityKind::Length, label: "Upper rise" },
            SlotSpec { name: "upperRafter", kind: QuantityKind::Length, label: "Upper rafter length" },
            SlotSpec { name: "lowerRun", kind: QuantityKind::Length, label: "Lower run" },
            SlotSpec { name: "lowerRise", kind: QuantityKind::Length, label: "Lower rise" },
            SlotSpec { name: "lowerRafter", kind: QuantityKind::Length, label: "Lower rafter length" },
            SlotSpec { name: "profileArea", kind: QuantityKind::Area, label: "Profile cross-section area" },
            SlotSpec { name: "roofArea", kind: QuantityKind::Area, label: "Roof surface area" },
            SlotSpec { name: "atticVolume", kind: QuantityKind::Volume, label: "Attic volume" },
        ],
        sufficient_sets: vec![
            SufficientSet::new(&["buildingWidth", "upperAngle", "buildingLength"]),
            SufficientSet::new(&["buildingWidth", "lowerAngle", "buildingLength"]),
            SufficientSet::new(&["totalHeight", "upperAngle", "buildingLength"]),
            SufficientSet::new(&["buildingWidth", "upperRun", "buildingLength"]),
        ],
        rules: vec![
            // Semicircular profile
            DerivationRule::new("totalHeight", "totalHeight = buildingWidth / 2", &["buildingWidth"], half),
            DerivationRule::new("buildingWidth", "buildingWidth = 2 * totalHeight", &["totalHeight"], double),
            DerivationRule::new("radius", "radius = totalHeight", &["totalHeight"], same),
            DerivationRule::new("totalHeight", "totalHeight = radius", &["radius"], same),
            DerivationRule::new("lowerAngle", "lowerAngle = upperAngle + 45deg", &["upperAngle"], plus_eighth_turn),
            DerivationRule::new("upperAngle", "upperAngle = lowerAngle - 45deg", &["lowerAngle"], minus_eighth_turn),
            // Chord geometry
            DerivationRule::new("upperRun", "upperRun = radius * sin(2 * upperAngle)", &["upperAngle", "radius"], chord_run),
            DerivationRule::new("upperAngle", "upperAngle = asin(upperRun / radius) / 2", &["upperRun", "radius"], pitch_from_chord_run),
            DerivationRule::new("upperRise", "upperRise = radius - sqrt(radius^2 - upperRun^2)", &["radius", "upperRun"], sagitta),
            DerivationRule::new("lowerRun", "lowerRun = radius - upperRun", &["radius", "upperRun"], difference),
            DerivationRule::new("lowerRise", "lowerRise = totalHeight - upperRise", &["totalHeight", "upperRise"], difference),
            DerivationRule::new("upperRafter", "upperRafter = sqrt(upperRun^2 + upperRise^2)", &["upperRun", "upperRise"], hypotenuse),
            DerivationRule::new("lowerRafter", "lowerRafter = sqrt(lowerRun^2 + lowerRise^2)", &["lowerRun", "lowerRise"], hypotenuse),
            // Redundant slope paths for consistency checking
            DerivationRule::new("upperAngle", "upperAngle = atan(upperRise / upperRun)", &["upperRise", "upperRun"], angle_from_rise_run),
            DerivationRule::new("lowerAngle", "lowerAngle = atan(lowerRise / lowerRun)", &["lowerRise", "lowerRun"], angle_from_rise_run),
            // Areas and volume from the semicircular profile
            DerivationRule::new("profileArea", "profileArea = pi * radius^2 / 2", &["radius"], semicircle_area),
            DerivationRule::new("roofArea", "roofArea = pi * radius * buildingLength", &["radius", "buildingLength"], semicircle_arc_area),
            DerivationRule::new("atticVolume", "atticVolume = profileArea * buildingLength", &["profileArea", "buildingLength"], product),
        ],
        tolerance: 1e-6,
    }
}

// ============================================================================
// Registry
// ============================================================================

static REGISTRY: Lazy<HashMap<&'static str, Relationship>> = Lazy::new(|| {
    [right_triangle(), gambrel_two_pitch(), gambrel_half_circle()]
        .into_iter()
        .map(|rel| (rel.name, rel))
        .collect()
});

/// Look up a built-in relationship by registry name.
pub fn relationship_named(name: &str) -> Option<&'static Relationship> {
    REGISTRY.get(name)
}

/// Registry names of the built-in relationships, in presentation order.
pub fn relationship_names() -> [&'static str; 3] {
    ["right-triangle", "gambrel-two-pitch", "gambrel-half-circle"]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::Measurement;
    use crate::solver::{solve, SolveRequest, SolveStatus};
    use crate::units::convert;

    fn length_m(value: f64) -> Measurement {
        Measurement::from_canonical(QuantityKind::Length, value).unwrap()
    }

    fn length_ft(value: f64) -> Measurement {
        Measurement::normalize(value, QuantityKind::Length, "ft")
            .unwrap()
            .unwrap()
    }

    fn angle_deg(value: f64) -> Measurement {
        Measurement::normalize(value, QuantityKind::Angle, "deg")
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_registry_lookup() {
        for name in relationship_names() {
            let rel = relationship_named(name).unwrap();
            assert_eq!(rel.name, name);
        }
        assert!(relationship_named("mansard").is_none());
    }

    #[test]
    fn test_right_triangle_from_run_and_angle() {
        let rel = right_triangle();
        let request = SolveRequest::new()
            .with("run", length_m(4.0))
            .with("angle", angle_deg(45.0));
        let result = solve(&rel, &request).unwrap();

        assert!(result.is_solved());
        assert!((result.get("rise").unwrap() - 4.0).abs() < 1e-9);
        assert!((result.get("rafter").unwrap() - 4.0 * 2f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_right_triangle_from_legs() {
        let rel = right_triangle();
        let request = SolveRequest::new()
            .with("run", length_m(4.0))
            .with("rise", length_m(3.0));
        let result = solve(&rel, &request).unwrap();

        assert!(result.is_solved());
        assert!((result.get("rafter").unwrap() - 5.0).abs() < 1e-9);
        assert!((result.get("angle").unwrap() - (3f64 / 4.0).atan()).abs() < 1e-9);
    }

    #[test]
    fn test_right_triangle_from_rafter_and_rise() {
        let rel = right_triangle();
        let request = SolveRequest::new()
            .with("rafter", length_m(5.0))
            .with("rise", length_m(3.0));
        let result = solve(&rel, &request).unwrap();

        assert!(result.is_solved());
        assert!((result.get("run").unwrap() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_two_pitch_from_height_and_both_angles() {
        let rel = gambrel_two_pitch();
        let request = SolveRequest::new()
            .with("totalHeight", length_m(3.0))
            .with("upperAngle", angle_deg(30.0))
            .with("lowerAngle", angle_deg(60.0));
        let result = solve(&rel, &request).unwrap();

        assert_eq!(result.status, SolveStatus::Solved);

        // Equal rise split, runs from the pitches
        assert!((result.get("upperRise").unwrap() - 1.5).abs() < 1e-9);
        assert!((result.get("lowerRise").unwrap() - 1.5).abs() < 1e-9);
        assert!((result.get("upperRun").unwrap() - 1.5 / (PI / 6.0).tan()).abs() < 1e-9);
        assert!((result.get("lowerRun").unwrap() - 1.5 / (PI / 3.0).tan()).abs() < 1e-9);

        // Closure sums hold
        let run_sum = result.get("upperRun").unwrap() + result.get("lowerRun").unwrap();
        assert!((run_sum - result.get("halfWidth").unwrap()).abs() < 1e-9);
        let rise_sum = result.get("upperRise").unwrap() + result.get("lowerRise").unwrap();
        assert!((rise_sum - result.get("totalHeight").unwrap()).abs() < 1e-9);
    }

    #[test]
    fn test_two_pitch_explicit_rise_beats_equal_split() {
        // An entered rise takes precedence over the equal-split convention
        let rel = gambrel_two_pitch();
        let request = SolveRequest::new()
            .with("totalHeight", length_m(3.0))
            .with("upperAngle", angle_deg(30.0))
            .with("lowerAngle", angle_deg(60.0))
            .with("upperRise", length_m(1.0));
        let result = solve(&rel, &request).unwrap();

        assert_eq!(result.status, SolveStatus::Solved);
        assert!((result.get("upperRise").unwrap() - 1.0).abs() < 1e-9);
        assert!((result.get("lowerRise").unwrap() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_two_pitch_single_angle_is_underdetermined() {
        let rel = gambrel_two_pitch();
        let request = SolveRequest::new().with("upperAngle", angle_deg(30.0));
        let result = solve(&rel, &request).unwrap();

        assert_eq!(result.status, SolveStatus::Underdetermined);
        assert!(result.get("upperAngle").is_some());
        assert!(result.get("upperRun").is_none());
        assert!(result.get("halfWidth").is_none());
    }

    #[test]
    fn test_two_pitch_contradictory_segment_is_inconsistent() {
        // atan(4/3) is about 53.13deg, so a stated 30deg pitch contradicts
        // the given run and rise
        let rel = gambrel_two_pitch();
        let request = SolveRequest::new()
            .with("upperRun", length_m(3.0))
            .with("upperRise", length_m(4.0))
            .with("upperAngle", angle_deg(30.0));
        let result = solve(&rel, &request).unwrap();

        assert_eq!(result.status, SolveStatus::Inconsistent);

        // The given values are kept, never averaged
        assert!((result.get("upperAngle").unwrap() - PI / 6.0).abs() < 1e-12);
        assert!((result.get("upperRise").unwrap() - 4.0).abs() < 1e-12);

        let conflict = result.conflict.unwrap();
        assert!(!conflict.equation.is_empty());
    }

    #[test]
    fn test_half_circle_end_to_end() {
        // Building width 22 ft, upper pitch 15deg, length 30 ft
        let rel = gambrel_half_circle();
        let request = SolveRequest::new()
            .with("buildingWidth", length_ft(22.0))
            .with("upperAngle", angle_deg(15.0))
            .with("buildingLength", length_ft(30.0));
        let result = solve(&rel, &request).unwrap();

        assert_eq!(result.status, SolveStatus::Solved);

        let in_feet = |slot: &str| {
            convert(result.get(slot).unwrap(), QuantityKind::Length, "m", "ft").unwrap()
        };

        assert!((in_feet("totalHeight") - 11.0).abs() < 1e-9);
        assert!((in_feet("radius") - 11.0).abs() < 1e-9);

        let lower_deg =
            convert(result.get("lowerAngle").unwrap(), QuantityKind::Angle, "rad", "deg").unwrap();
        assert!((lower_deg - 60.0).abs() < 1e-9);

        // Break point at circle angle 60deg: run = 11 * sin(30deg),
        // rise = 11 * (1 - cos(30deg))
        assert!((in_feet("upperRun") - 5.5).abs() < 1e-9);
        assert!((in_feet("upperRise") - 11.0 * (1.0 - (PI / 6.0).cos())).abs() < 1e-9);
        assert!((in_feet("lowerRun") - 5.5).abs() < 1e-9);

        // rise = r - sqrt(r^2 - run^2) holds on the solved values
        let r = result.get("radius").unwrap();
        let run = result.get("upperRun").unwrap();
        let rise = result.get("upperRise").unwrap();
        assert!((rise - (r - (r * r - run * run).sqrt())).abs() < 1e-9);

        // Areas and volume from the semicircular profile
        let profile_ft2 =
            convert(result.get("profileArea").unwrap(), QuantityKind::Area, "m2", "ft2").unwrap();
        assert!((profile_ft2 - PI * 121.0 / 2.0).abs() < 1e-6);

        let roof_ft2 =
            convert(result.get("roofArea").unwrap(), QuantityKind::Area, "m2", "ft2").unwrap();
        assert!((roof_ft2 - PI * 11.0 * 30.0).abs() < 1e-6);

        let attic_ft3 =
            convert(result.get("atticVolume").unwrap(), QuantityKind::Volume, "m3", "ft3").unwrap();
        assert!((attic_ft3 - PI * 121.0 / 2.0 * 30.0).abs() < 1e-5);
    }

    #[test]
    fn test_half_circle_without_length_is_partial() {
        let rel = gambrel_half_circle();
        let request = SolveRequest::new()
            .with("buildingWidth", length_ft(22.0))
            .with("upperAngle", angle_deg(15.0));
        let result = solve(&rel, &request).unwrap();

        // Geometry resolves, the length-dependent slots stay absent
        assert_eq!(result.status, SolveStatus::Underdetermined);
        assert!(result.get("upperRun").is_some());
        assert!(result.get("profileArea").is_some());
        assert!(result.get("roofArea").is_none());
        assert!(result.get("atticVolume").is_none());
    }

    #[test]
    fn test_half_circle_height_must_be_half_width() {
        let rel = gambrel_half_circle();
        let request = SolveRequest::new()
            .with("buildingWidth", length_ft(22.0))
            .with("totalHeight", length_ft(10.0))
            .with("upperAngle", angle_deg(15.0))
            .with("buildingLength", length_ft(30.0));
        let result = solve(&rel, &request).unwrap();

        assert_eq!(result.status, SolveStatus::Inconsistent);
        let conflict = result.conflict.as_ref().unwrap();
        assert_eq!(conflict.slot, "totalHeight");
        // Entered height is kept
        assert!((result.get("totalHeight").unwrap() - 3.048).abs() < 1e-9);
    }

    #[test]
    fn test_half_circle_from_run_instead_of_angle() {
        // Entering the upper run recovers the pitch through the chord
        let rel = gambrel_half_circle();
        let request = SolveRequest::new()
            .with("buildingWidth", length_ft(22.0))
            .with("upperRun", length_ft(5.5))
            .with("buildingLength", length_ft(30.0));
        let result = solve(&rel, &request).unwrap();

        assert_eq!(result.status, SolveStatus::Solved);
        let upper_deg =
            convert(result.get("upperAngle").unwrap(), QuantityKind::Angle, "rad", "deg").unwrap();
        assert!((upper_deg - 15.0).abs() < 1e-9);
    }
}
