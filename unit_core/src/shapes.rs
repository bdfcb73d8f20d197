//! # Shape Helpers
//!
//! Closed-form areas and volumes the calculators need once their inputs are
//! normalized to canonical meters. All functions are pure and total over the
//! finite reals; ordering invariants (outer diameter exceeding inner) are
//! the validation layer's advisory concern, not enforced here.

use std::f64::consts::PI;

/// Volume of a rectangular prism (slab, footing, pad): L * W * T, in m³.
pub fn rectangular_volume(length: f64, width: f64, thickness: f64) -> f64 {
    length * width * thickness
}

/// Area of a circle from its diameter, in m².
pub fn circle_area(diameter: f64) -> f64 {
    let r = diameter / 2.0;
    PI * r * r
}

/// Area of a triangle from base and height, in m².
pub fn triangle_area(base: f64, height: f64) -> f64 {
    base * height / 2.0
}

/// Volume of a solid cylinder (pier, column, sonotube) from diameter and
/// height, in m³.
pub fn cylinder_volume(diameter: f64, height: f64) -> f64 {
    circle_area(diameter) * height
}

/// Volume of a hollow cylinder (pipe, tube, well casing) from outer and
/// inner diameters and height, in m³.
pub fn hollow_cylinder_volume(outer_diameter: f64, inner_diameter: f64, height: f64) -> f64 {
    (circle_area(outer_diameter) - circle_area(inner_diameter)) * height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{convert, QuantityKind};

    #[test]
    fn test_rectangular_volume() {
        // 4 m x 3 m slab, 150 mm thick
        let v = rectangular_volume(4.0, 3.0, 0.15);
        assert!((v - 1.8).abs() < 1e-12);
    }

    #[test]
    fn test_cylinder_volume() {
        // 1 m diameter, 2 m tall: pi * 0.25 * 2
        let v = cylinder_volume(1.0, 2.0);
        assert!((v - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_triangle_area() {
        assert!((triangle_area(3.0, 4.0) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_hollow_cylinder_end_to_end() {
        // Outer diameter 12 in, inner diameter 6 in, height 3 ft
        let outer = convert(12.0, QuantityKind::Length, "in", "m").unwrap();
        let inner = convert(6.0, QuantityKind::Length, "in", "m").unwrap();
        let height = convert(3.0, QuantityKind::Length, "ft", "m").unwrap();
        assert!((outer - 0.3048).abs() < 1e-12);
        assert!((inner - 0.1524).abs() < 1e-12);
        assert!((height - 0.9144).abs() < 1e-12);

        let v = hollow_cylinder_volume(outer, inner, height);
        let expected = PI * (0.1524_f64.powi(2) - 0.0762_f64.powi(2)) * 0.9144;
        assert!((v - expected).abs() < 1e-12);

        // And back out in the caller's display unit
        let cubic_feet = convert(v, QuantityKind::Volume, "m3", "ft3").unwrap();
        assert!((cubic_feet - 1.76715).abs() < 1e-4);
    }

    #[test]
    fn test_solid_cylinder_is_hollow_with_zero_inner() {
        let solid = cylinder_volume(0.3, 1.2);
        let hollow = hollow_cylinder_volume(0.3, 0.0, 1.2);
        assert!((solid - hollow).abs() < 1e-15);
    }
}
