/////////////////////////////////////////////////////////////////////////////////////////////
//
// Declares configuration types controlling the fitting mesh and smoothing weights.
//
// Created on: 14 Aug 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! Declares configuration types controlling the fitting mesh and smoothing weights.

use serde::{Deserialize, Serialize};

/// Parameters controlling a map fit.
///
/// The two smoothing weights regularise the least squares fit. The membrane
/// term penalises first derivatives (surface stretching) and the plate
/// bending term penalises second derivatives (surface curvature). Larger
/// values produce smoother maps that follow the data less closely; with both
/// set to zero the fit degenerates to unregularised least squares, which is
/// singular whenever the data does not constrain every nodal unknown.
///
/// ### Default Values
/// - `mesh_rows`: `8`
/// - `mesh_columns`: `8`
/// - `membrane_smoothing`: `1e-5`
/// - `plate_bending_smoothing`: `1e-5`
/// - `undecided_accepted`: `false`
#[derive(Clone, Copy, Serialize, Deserialize, Debug)]
pub struct FitSettings {
    /// Number of element rows in the fitting mesh.
    pub mesh_rows: usize,

    /// Number of element columns in the fitting mesh.
    pub mesh_columns: usize,

    /// Weight of the membrane (first derivative) smoothing energy.
    pub membrane_smoothing: f32,

    /// Weight of the plate bending (second derivative) smoothing energy.
    pub plate_bending_smoothing: f32,

    /// Whether signals and events still marked undecided are treated as
    /// accepted when selecting data points.
    pub undecided_accepted: bool,
}

impl Default for FitSettings {
    fn default() -> Self {
        FitSettings {
            mesh_rows: 8,
            mesh_columns: 8,
            membrane_smoothing: 1e-5,
            plate_bending_smoothing: 1e-5,
            undecided_accepted: false,
        }
    }
}

impl FitSettings {
    /// Returns a new [`FitSettingsBuilder`] initialised with the defaults.
    pub fn builder() -> FitSettingsBuilder {
        FitSettingsBuilder::new()
    }
}

/// A convenience builder for constructing a [`FitSettings`] instance.
///
/// The builder should be called via the [`FitSettings::builder`] method.
///
/// See [`FitSettings`] for details on each field.
#[derive(Debug, Clone)]
pub struct FitSettingsBuilder {
    settings: FitSettings,
}

impl FitSettingsBuilder {
    /// Creates a new builder initialised with the default settings.
    pub fn new() -> FitSettingsBuilder {
        FitSettingsBuilder {
            settings: FitSettings::default(),
        }
    }

    pub fn mesh_rows(mut self, mesh_rows: usize) -> Self {
        self.settings.mesh_rows = mesh_rows;
        self
    }

    pub fn mesh_columns(mut self, mesh_columns: usize) -> Self {
        self.settings.mesh_columns = mesh_columns;
        self
    }

    pub fn membrane_smoothing(mut self, membrane_smoothing: f32) -> Self {
        self.settings.membrane_smoothing = membrane_smoothing;
        self
    }

    pub fn plate_bending_smoothing(mut self, plate_bending_smoothing: f32) -> Self {
        self.settings.plate_bending_smoothing = plate_bending_smoothing;
        self
    }

    pub fn undecided_accepted(mut self, undecided_accepted: bool) -> Self {
        self.settings.undecided_accepted = undecided_accepted;
        self
    }

    /// Builds the [`FitSettings`] instance from the parameters defined in
    /// the builder.
    pub fn build(self) -> FitSettings {
        self.settings
    }
}

impl Default for FitSettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let settings = FitSettings::builder()
            .mesh_rows(4)
            .membrane_smoothing(0.01)
            .undecided_accepted(true)
            .build();
        assert_eq!(settings.mesh_rows, 4);
        assert_eq!(settings.mesh_columns, 8);
        assert_eq!(settings.membrane_smoothing, 0.01);
        assert!(settings.undecided_accepted);
    }
}
