/////////////////////////////////////////////////////////////////////////////////////////////
//
// Provides test fields and synthetic rig builders for validating map fitting quality.
//
// Created on: 14 Aug 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! Known analytic fields and synthetic electrode rigs, used in tests and
//! examples to exercise the fitting pipeline end to end.

use std::sync::Arc;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::geometry::Position;
use crate::rig::{
    Channel, Device, DeviceType, Region, RegionGeometry, Rig, Signal, SignalBuffer,
    SignalStatus, SignalValues,
};

/// Struct that implements various 2D fields to generate electrode values for
/// testing map fitting.
pub struct MapTestFunctions;

impl MapTestFunctions {
    /// A planar field, `f(x, y) = 1 + 2x + 3y`. Bicubic Hermite elements
    /// reproduce it exactly, so fitted values and derivatives can be checked
    /// against closed forms.
    pub fn linear_2d(x: f32, y: f32) -> f32 {
        1.0 + 2.0 * x + 3.0 * y
    }

    /// Franke's two-dimensional test function on the unit square.
    pub fn franke_2d(x: f32, y: f32) -> f32 {
        let nx = 9.0 * x;
        let ny = 9.0 * y;
        let term1 = 0.75 * (-((nx - 2.0).powi(2) + (ny - 2.0).powi(2)) / 4.0).exp();
        let term2 = 0.75 * (-(nx + 1.0).powi(2) / 49.0 - (ny + 1.0).powi(2) / 10.0).exp();
        let term3 = 0.5 * (-((nx - 7.0).powi(2) + (ny - 3.0).powi(2)) / 4.0).exp();
        let term4 = -0.2 * (-(nx - 4.0).powi(2) - (ny - 7.0).powi(2)).exp();
        term1 + term2 + term3 + term4
    }
}

/// One electrode carrying a single-sample potential recording, so that a
/// `Potential { time_ms: 0.0 }` map reads back exactly `value`.
fn potential_electrode(name: String, position: Position, value: f32) -> Device {
    let buffer = Arc::new(SignalBuffer {
        times: vec![0],
        frequency: 1000.0,
        number_of_signals: 1,
        values: SignalValues::Float(vec![value]),
    });
    Device {
        name,
        device_type: DeviceType::Electrode,
        region: 0,
        position,
        channel: Channel::default(),
        signal: Signal {
            buffer,
            index: 0,
            status: SignalStatus::Accepted,
            events: Vec::new(),
        },
    }
}

/// Builds a single patch-region rig with `nx` by `ny` electrodes on a regular
/// grid over the unit square, each carrying `field(x, y)` as its potential.
pub fn potential_patch_rig<F>(nx: usize, ny: usize, field: F) -> Rig
where
    F: Fn(f32, f32) -> f32,
{
    assert!(nx >= 2 && ny >= 2);
    let mut devices = Vec::with_capacity(nx * ny);
    for j in 0..ny {
        for i in 0..nx {
            let x = (i as f32) / ((nx - 1) as f32);
            let y = (j as f32) / ((ny - 1) as f32);
            devices.push(potential_electrode(
                format!("e{}_{}", i, j),
                Position::new(x, y, 0.0),
                field(x, y),
            ));
        }
    }
    Rig {
        name: "synthetic patch".to_string(),
        regions: vec![Region {
            name: "patch".to_string(),
            geometry: RegionGeometry::Patch,
        }],
        devices,
    }
}

/// Builds a patch rig with `n` electrodes scattered uniformly over the unit
/// square using a seeded generator.
pub fn scattered_patch_rig<F>(n: usize, seed: u64, field: F) -> Rig
where
    F: Fn(f32, f32) -> f32,
{
    let mut rng = StdRng::seed_from_u64(seed);
    let mut devices = Vec::with_capacity(n);
    for i in 0..n {
        let x: f32 = rng.random_range(0.0..1.0);
        let y: f32 = rng.random_range(0.0..1.0);
        devices.push(potential_electrode(
            format!("e{}", i),
            Position::new(x, y, 0.0),
            field(x, y),
        ));
    }
    Rig {
        name: "scattered patch".to_string(),
        regions: vec![Region {
            name: "patch".to_string(),
            geometry: RegionGeometry::Patch,
        }],
        devices,
    }
}

/// Builds a sock-region rig with electrodes on a prolate spheroidal shell
/// (`lambda = 1`), `n_theta` around the azimuth by `n_mu` rings up from near
/// the apex, each carrying `field(theta, mu)` as its potential.
pub fn potential_sock_rig<F>(n_theta: usize, n_mu: usize, focus: f32, field: F) -> Rig
where
    F: Fn(f32, f32) -> f32,
{
    assert!(n_theta >= 3 && n_mu >= 2);
    let lambda = 1.0f64;
    let mut devices = Vec::with_capacity(n_theta * n_mu);
    for ring in 1..=n_mu {
        let mu = 2.5 * (ring as f64) / (n_mu as f64);
        for spoke in 0..n_theta {
            let theta = 2.0 * std::f64::consts::PI * (spoke as f64) / (n_theta as f64);
            let x = (focus as f64) * lambda.cosh() * mu.cos();
            let y = (focus as f64) * lambda.sinh() * mu.sin() * theta.cos();
            let z = (focus as f64) * lambda.sinh() * mu.sin() * theta.sin();
            devices.push(potential_electrode(
                format!("s{}_{}", spoke, ring),
                Position::new(x as f32, y as f32, z as f32),
                field(theta as f32, mu as f32),
            ));
        }
    }
    Rig {
        name: "synthetic sock".to_string(),
        regions: vec![Region {
            name: "sock".to_string(),
            geometry: RegionGeometry::Sock {
                focus,
                transformation: crate::geometry::LinearTransformation::identity(),
            },
        }],
        devices,
    }
}

/// Builds a torso-region rig with electrodes on a cylinder of the given
/// radius, `n_theta` around the circumference by `n_z` rings over the unit
/// height, each carrying `field(theta, z)` as its potential. `theta` is the
/// projected angle in `[-pi, pi]`.
pub fn potential_torso_rig<F>(n_theta: usize, n_z: usize, radius: f32, field: F) -> Rig
where
    F: Fn(f32, f32) -> f32,
{
    assert!(n_theta >= 3 && n_z >= 2);
    let mut devices = Vec::with_capacity(n_theta * n_z);
    for ring in 0..n_z {
        let z = (ring as f64) / ((n_z - 1) as f64);
        for spoke in 0..n_theta {
            let angle = 2.0 * std::f64::consts::PI * (spoke as f64) / (n_theta as f64);
            let x = (radius as f64) * angle.cos();
            let y = (radius as f64) * angle.sin();
            let theta = y.atan2(x);
            devices.push(potential_electrode(
                format!("t{}_{}", spoke, ring),
                Position::new(x as f32, y as f32, z as f32),
                field(theta as f32, z as f32),
            ));
        }
    }
    Rig {
        name: "synthetic torso".to_string(),
        regions: vec![Region {
            name: "torso".to_string(),
            geometry: RegionGeometry::Torso,
        }],
        devices,
    }
}
