/////////////////////////////////////////////////////////////////////////////////////////////
//
// Exposes the public API and high-level documentation for finite element map fitting.
//
// Created on: 14 Aug 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # Finite element surface fitting for electrical mapping.
//!
//! Electrode rigs used in cardiac mapping record potentials at scattered,
//! irregularly placed sites. Turning those recordings into a smooth map over
//! the whole recording surface requires a fitting step: this crate performs a
//! weighted least squares fit of a bicubic Hermite finite element surface to
//! the per-electrode values, regularised by membrane and plate bending
//! smoothing energies.
//!
//! Three recording surface topologies are supported:
//!
//! - **Patch** - a flat rectangular grid of elements with no wraparound.
//! - **Sock** - a closed surface over the ventricles. Electrode positions are
//!   projected into prolate spheroidal coordinates; the fitted mesh wraps in
//!   the azimuthal direction and collapses to a single apex node at the bottom
//!   row.
//! - **Torso** - a cylinder open at top and bottom. Electrode positions are
//!   projected into cylindrical polar coordinates and the mesh wraps in the
//!   angular direction.
//!
//! The fit produces an [`InterpolationFunction`] holding nodal values and
//! derivatives (f, df/dx, df/dy, d2f/dxdy) on the fitting mesh, which can be
//! evaluated anywhere on the mesh and saved to or loaded from disk.
//!
//! # Examples
//!
//! ```
//! use epimap::{
//!     fit_map, FitSettings, MapVariant,
//!     test_fields::{potential_patch_rig, MapTestFunctions},
//! };
//!
//! // Build a rig of electrodes on a regular 6 x 6 patch carrying potentials
//! // sampled from a planar field.
//! let rig = potential_patch_rig(6, 6, |x, y| MapTestFunctions::linear_2d(x, y));
//!
//! let settings = FitSettings::builder()
//!     .mesh_rows(2)
//!     .mesh_columns(2)
//!     .membrane_smoothing(1e-6)
//!     .plate_bending_smoothing(1e-6)
//!     .build();
//!
//! let map = MapVariant::Potential { time_ms: 0.0 };
//! let function = fit_map(&rig, 0, &map, &settings, None).unwrap();
//!
//! // A bicubic Hermite surface reproduces a planar field almost exactly.
//! let fitted = function.evaluate(0.5, 0.5).unwrap();
//! let expected = MapTestFunctions::linear_2d(0.5, 0.5);
//! assert!((fitted - expected).abs() < 1e-3);
//! ```
//!
//! # References
//! 1. C. P. Bradley, A. J. Pullan, P. J. Hunter. Geometric modeling of the human
//!    torso using cubic Hermite elements. Ann. Biomed. Eng. 25:96-111, 1997.
//! 2. G. Dierckx. Curve and Surface Fitting with Splines. Oxford University Press, 1993.

pub mod config;

pub mod geometry;

pub mod mesh;

pub mod progress;

pub mod rig;

pub mod sampling;

pub mod test_fields;

mod assembly;

mod basis;

mod common;

mod fit;

mod solver;

pub use {
    common::{nodal_values_to_csv, samples_from_csv},
    config::{FitSettings, FitSettingsBuilder},
    fit::{fit_map, FitError, InterpolationFunction, ModelIOError, NodalKind},
    geometry::{LinearTransformation, Position},
    mesh::{Mesh, RegionType},
    rig::{
        Channel, Device, DeviceType, Event, Region, RegionGeometry, Rig, Signal,
        SignalBuffer, SignalStatus, SignalValues,
    },
    sampling::{extract_samples, MapVariant, Sample},
};
