/////////////////////////////////////////////////////////////////////////////////////////////
//
// Adds coordinate transforms used to project electrode positions onto fitting meshes.
//
// Created on: 14 Aug 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # geometry
//!
//! Coordinate transforms for projecting 3D electrode positions onto the 2D
//! fitting meshes of the sock and torso topologies.

use serde::{Deserialize, Serialize};

/// A 3D electrode position in rig coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Position {
        Position { x, y, z }
    }
}

/// A rigid transform `p' = R p + t` applied to electrode positions before
/// projection, used to align a sock rig with the axes of its prolate
/// spheroidal coordinate system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearTransformation {
    pub translation: [f32; 3],
    pub rotation: [[f32; 3]; 3],
}

impl LinearTransformation {
    pub fn identity() -> LinearTransformation {
        LinearTransformation {
            translation: [0.0; 3],
            rotation: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    pub fn apply(&self, p: Position) -> Position {
        let r = &self.rotation;
        let t = &self.translation;
        Position {
            x: r[0][0] * p.x + r[0][1] * p.y + r[0][2] * p.z + t[0],
            y: r[1][0] * p.x + r[1][1] * p.y + r[1][2] * p.z + t[1],
            z: r[2][0] * p.x + r[2][1] * p.y + r[2][2] * p.z + t[2],
        }
    }
}

impl Default for LinearTransformation {
    fn default() -> Self {
        Self::identity()
    }
}

/// Converts cartesian coordinates to prolate spheroidal coordinates
/// `(lambda, mu, theta)` with foci at `(+-focus, 0, 0)`:
///
/// ```text
/// x = focus cosh(lambda) cos(mu)
/// y = focus sinh(lambda) sin(mu) cos(theta)
/// z = focus sinh(lambda) sin(mu) sin(theta)
/// ```
///
/// `mu` lies in `[0, pi]` and `theta` is normalised to `[0, 2 pi)`.
pub fn cartesian_to_prolate_spheroidal(x: f64, y: f64, z: f64, focus: f64) -> (f64, f64, f64) {
    let r1 = ((x + focus) * (x + focus) + y * y + z * z).sqrt();
    let r2 = ((x - focus) * (x - focus) + y * y + z * z).sqrt();
    let lambda = ((r1 + r2) / (2.0 * focus)).max(1.0).acosh();
    let mu = ((r1 - r2) / (2.0 * focus)).clamp(-1.0, 1.0).acos();
    let mut theta = z.atan2(y);
    if theta < 0.0 {
        theta += 2.0 * std::f64::consts::PI;
    }
    (lambda, mu, theta)
}

/// Converts cartesian coordinates to cylindrical polar coordinates
/// `(r, theta, z)` with `theta = atan2(y, x)` in `[-pi, pi]`.
pub fn cartesian_to_cylindrical_polar(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let r = (x * x + y * y).sqrt();
    let theta = y.atan2(x);
    (r, theta, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn prolate_to_cartesian(lambda: f64, mu: f64, theta: f64, focus: f64) -> (f64, f64, f64) {
        (
            focus * lambda.cosh() * mu.cos(),
            focus * lambda.sinh() * mu.sin() * theta.cos(),
            focus * lambda.sinh() * mu.sin() * theta.sin(),
        )
    }

    #[test]
    fn prolate_spheroidal_inverts_forward_transform() {
        let focus = 35.0;
        for &(lambda, mu, theta) in &[
            (0.5, 0.3, 0.7),
            (1.2, 1.5, 3.9),
            (0.8, 2.8, 5.5),
            (1.7, 0.1, 0.0),
        ] {
            let (x, y, z) = prolate_to_cartesian(lambda, mu, theta, focus);
            let (l2, m2, t2) = cartesian_to_prolate_spheroidal(x, y, z, focus);
            assert!((l2 - lambda).abs() < 1e-9, "lambda {} vs {}", l2, lambda);
            assert!((m2 - mu).abs() < 1e-9, "mu {} vs {}", m2, mu);
            assert!((t2 - theta).abs() < 1e-9, "theta {} vs {}", t2, theta);
        }
    }

    #[test]
    fn prolate_spheroidal_handles_the_poles() {
        // On the axis beyond the focus both mu = 0 and theta are degenerate
        // but lambda is still recovered.
        let focus = 10.0;
        let (lambda, mu, _) = cartesian_to_prolate_spheroidal(20.0, 0.0, 0.0, focus);
        assert!((lambda - 2.0f64.acosh()).abs() < 1e-12);
        assert!(mu.abs() < 1e-9);
        // Between the foci the surface degenerates to lambda = 0.
        let (lambda, mu, _) = cartesian_to_prolate_spheroidal(0.0, 0.0, 0.0, focus);
        assert_eq!(lambda, 0.0);
        assert!((mu - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn theta_is_normalised_to_a_full_turn() {
        let focus = 1.0;
        let (_, _, theta) = cartesian_to_prolate_spheroidal(0.0, 1.0, -0.001, focus);
        assert!(theta > PI);
        assert!(theta < 2.0 * PI);
    }

    #[test]
    fn cylindrical_polar_angle_and_radius() {
        let (r, theta, z) = cartesian_to_cylindrical_polar(1.0, 1.0, 5.0);
        assert!((r - 2.0f64.sqrt()).abs() < 1e-12);
        assert!((theta - PI / 4.0).abs() < 1e-12);
        assert_eq!(z, 5.0);
        let (_, theta, _) = cartesian_to_cylindrical_polar(-1.0, -1.0, 0.0);
        assert!((theta + 3.0 * PI / 4.0).abs() < 1e-12);
    }

    #[test]
    fn linear_transformation_applies_rotation_then_translation() {
        let t = LinearTransformation {
            translation: [1.0, 2.0, 3.0],
            rotation: [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
        };
        let p = t.apply(Position::new(1.0, 0.0, 0.0));
        assert_eq!(p, Position::new(1.0, 3.0, 3.0));
    }
}
