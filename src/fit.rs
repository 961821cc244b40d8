/////////////////////////////////////////////////////////////////////////////////////////////
//
// Implements the map fitting driver and the fitted interpolation function it produces.
//
// Created on: 14 Aug 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # fit
//!
//! The top level fitting driver. [`fit_map`] extracts data points from a rig,
//! lays a fitting mesh over their spatial range, assembles and solves the
//! regularised least squares system, and returns the fitted surface as an
//! [`InterpolationFunction`].

use std::error::Error as StdError;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::assembly::assemble;
use crate::basis::{corner_basis, KIND_D2FDXDY, KIND_DFDX, KIND_DFDY, KIND_F};
use crate::config::FitSettings;
use crate::mesh::{node_grid_positions, Mesh, RegionType};
use crate::progress::{ProgressMsg, ProgressSink};
use crate::rig::Rig;
use crate::sampling::{extract_samples, MapVariant, Sample};
use crate::solver::CroutLu;

/// Errors that can occur while fitting a map.
#[derive(Debug, PartialEq, Eq)]
pub enum FitError {
    /// A parameter was out of range or inconsistent.
    InvalidArgument(&'static str),
    /// No device in the region produced a data point for this map.
    NoData,
    /// The fitting system does not determine every nodal unknown, typically
    /// because both smoothing weights are zero and the data is too sparse.
    SingularMatrix,
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitError::InvalidArgument(what) => write!(f, "invalid argument: {}", what),
            FitError::NoData => write!(f, "no data points qualify for the fit"),
            FitError::SingularMatrix => write!(f, "singular fitting matrix"),
        }
    }
}

impl StdError for FitError {}

/// One of the four nodal value kinds a fit solves for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodalKind {
    F,
    DfDx,
    DfDy,
    D2fDxDy,
}

/// A fitted bicubic Hermite surface.
///
/// Nodal values are stored on the full unwrapped
/// `(rows + 1) x (columns + 1)` grid in row major order, with seam nodes of
/// wrapped topologies duplicated so evaluation never needs topology-aware
/// indexing. Produced by [`fit_map`]; can be saved to and loaded from a JSON
/// model file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpolationFunction {
    region_type: RegionType,
    mesh: Mesh,
    f: Vec<f32>,
    dfdx: Vec<f32>,
    dfdy: Vec<f32>,
    d2fdxdy: Vec<f32>,
    f_min: f32,
    f_max: f32,
}

impl InterpolationFunction {
    pub fn region_type(&self) -> RegionType {
        self.region_type
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Number of grid nodes the fitted values are stored on. Seam duplicates
    /// of wrapped topologies are counted.
    pub fn number_of_nodes(&self) -> usize {
        (self.mesh.rows() + 1) * (self.mesh.columns() + 1)
    }

    /// Fitted nodal values of one kind, in row major grid order.
    pub fn nodal_values(&self, kind: NodalKind) -> &[f32] {
        match kind {
            NodalKind::F => &self.f,
            NodalKind::DfDx => &self.dfdx,
            NodalKind::DfDy => &self.dfdy,
            NodalKind::D2fDxDy => &self.d2fdxdy,
        }
    }

    /// Smallest fitted value seen at a node or a data point.
    pub fn f_min(&self) -> f32 {
        self.f_min
    }

    /// Largest fitted value seen at a node or a data point.
    pub fn f_max(&self) -> f32 {
        self.f_max
    }

    /// Evaluates the fitted surface, or `None` if the point lies outside the
    /// mesh.
    pub fn evaluate(&self, x: f32, y: f32) -> Option<f32> {
        let (row, column) = self.mesh.locate(x, y)?;
        let columns = self.mesh.columns();
        let x_left = self.mesh.x()[column - 1] as f64;
        let y_bottom = self.mesh.y()[row - 1] as f64;
        let width = self.mesh.x()[column] as f64 - x_left;
        let height = self.mesh.y()[row] as f64 - y_bottom;
        let u = (x as f64 - x_left) / width;
        let v = (y as f64 - y_bottom) / height;
        let basis = corner_basis(u, width, v, height);

        let grid = |r: usize, c: usize| r * (columns + 1) + c;
        let corners = [
            grid(row - 1, column - 1),
            grid(row, column - 1),
            grid(row, column),
            grid(row - 1, column),
        ];
        let mut total = 0.0f64;
        for (corner, &node) in corners.iter().enumerate() {
            total += self.f[node] as f64 * basis.values[corner][KIND_F]
                + self.dfdx[node] as f64 * basis.values[corner][KIND_DFDX]
                + self.dfdy[node] as f64 * basis.values[corner][KIND_DFDY]
                + self.d2fdxdy[node] as f64 * basis.values[corner][KIND_D2FDXDY];
        }
        Some(total as f32)
    }

    /// Saves this function to `path` as JSON.
    ///
    /// The on-disk format is versioned via `JSON_FORMAT_NAME` and
    /// `JSON_VERSION`.
    ///
    /// # Errors
    /// - Returns `ModelIOError::{Create, Serialize, Flush}` on I/O or
    ///   serialization failures.
    pub fn save_model<P: AsRef<Path>>(&self, path: P) -> ModelIOResult<()> {
        let path_ref = path.as_ref();
        let file = File::create(path_ref).map_err(|e| ModelIOError::Create {
            path: path_ref.to_path_buf(),
            source: e,
        })?;
        let mut writer = BufWriter::new(file);
        let envelope = JsonEnvelopeRef {
            format: JSON_FORMAT_NAME,
            version: JSON_VERSION,
            model: self,
        };
        serde_json::to_writer_pretty(&mut writer, &envelope).map_err(|e| {
            ModelIOError::Serialize {
                path: path_ref.to_path_buf(),
                source: e,
            }
        })?;
        writer.flush().map_err(|e| ModelIOError::Flush {
            path: path_ref.to_path_buf(),
            source: e,
        })?;
        Ok(())
    }

    /// Loads a function previously written by
    /// [`InterpolationFunction::save_model`].
    ///
    /// - Fails if `format != JSON_FORMAT_NAME` or `version != JSON_VERSION`.
    ///
    /// # Errors
    /// - Returns `ModelIOError::{Open, Parse, FormatMismatch,
    ///   VersionMismatch}` as appropriate.
    pub fn load_model<P: AsRef<Path>>(path: P) -> ModelIOResult<InterpolationFunction> {
        let path_ref = path.as_ref();
        let file = File::open(path_ref).map_err(|e| ModelIOError::Open {
            path: path_ref.to_path_buf(),
            source: e,
        })?;
        let reader = BufReader::new(file);
        let envelope: JsonEnvelopeOwned<InterpolationFunction> =
            serde_json::from_reader(reader).map_err(|e| ModelIOError::Parse {
                path: path_ref.to_path_buf(),
                source: e,
            })?;
        if envelope.format != JSON_FORMAT_NAME {
            return Err(ModelIOError::FormatMismatch {
                path: path_ref.to_path_buf(),
                found: envelope.format,
                expected: JSON_FORMAT_NAME,
            });
        }
        if envelope.version != JSON_VERSION {
            return Err(ModelIOError::VersionMismatch {
                path: path_ref.to_path_buf(),
                found: envelope.version,
                expected: JSON_VERSION,
            });
        }
        Ok(envelope.model)
    }
}

/// Fits a bicubic Hermite surface to the values one map variant extracts
/// from a region of a rig.
///
/// The fitting mesh spans the spatial range of the extracted data, except in
/// the wrapped directions: a sock mesh always spans the full azimuth
/// `[0, 2 pi]` with `mu` starting at the apex, and a torso mesh always spans
/// the full angle `[-pi, pi]`.
///
/// Data points that fall outside the mesh are excluded and reported through
/// the progress sink, as are the residual statistics of the completed fit.
///
/// # Errors
/// - [`FitError::InvalidArgument`] if the mesh has no elements, the region
///   index is out of range, the map parameters are malformed, or the data
///   spans no area.
/// - [`FitError::NoData`] if no device produces a data point.
/// - [`FitError::SingularMatrix`] if the system cannot be solved.
pub fn fit_map(
    rig: &Rig,
    region_index: usize,
    map: &MapVariant,
    settings: &FitSettings,
    progress: Option<&Arc<dyn ProgressSink>>,
) -> Result<InterpolationFunction, FitError> {
    if settings.mesh_rows < 1 || settings.mesh_columns < 1 {
        return Err(FitError::InvalidArgument(
            "fitting mesh needs at least one row and one column of elements",
        ));
    }

    let samples = extract_samples(rig, region_index, map, settings.undecided_accepted)?;
    if samples.is_empty() {
        return Err(FitError::NoData);
    }

    let region_type = rig.regions[region_index].geometry.region_type();
    let (x_min, x_max, y_min, y_max) = data_bounds(region_type, &samples)?;

    let mesh = Mesh::uniform(
        settings.mesh_rows,
        settings.mesh_columns,
        x_min,
        x_max,
        y_min,
        y_max,
    );

    let system = assemble(
        region_type,
        &mesh,
        &samples,
        settings.membrane_smoothing,
        settings.plate_bending_smoothing,
        progress,
    );
    let lu = CroutLu::try_new(system.matrix).map_err(|_| FitError::SingularMatrix)?;
    let solution = lu.solve(&system.rhs);

    let rows = mesh.rows();
    let columns = mesh.columns();
    let grid_nodes = (rows + 1) * (columns + 1);
    let mut f = vec![0.0f32; grid_nodes];
    let mut dfdx = vec![0.0f32; grid_nodes];
    let mut dfdy = vec![0.0f32; grid_nodes];
    let mut d2fdxdy = vec![0.0f32; grid_nodes];
    for node in 0..region_type.number_of_nodes(rows, columns) {
        for (row, column) in node_grid_positions(region_type, rows, columns, node) {
            let at = row * (columns + 1) + column;
            f[at] = solution[(4 * node, 0)] as f32;
            dfdx[at] = solution[(4 * node + 1, 0)] as f32;
            dfdy[at] = solution[(4 * node + 2, 0)] as f32;
            d2fdxdy[at] = solution[(4 * node + 3, 0)] as f32;
        }
    }

    let mut function = InterpolationFunction {
        region_type,
        mesh,
        f,
        dfdx,
        dfdy,
        d2fdxdy,
        f_min: 0.0,
        f_max: 0.0,
    };

    let mut f_min = function.f[0];
    let mut f_max = f_min;
    for &value in &function.f {
        f_min = f_min.min(value);
        f_max = f_max.max(value);
    }

    // Residual statistics over the data points that landed in the mesh; the
    // fitted values at the data also extend the reported range.
    let mut located = 0usize;
    let mut total_error = 0.0f64;
    let mut max_error = 0.0f32;
    for sample in &samples {
        if let Some(fitted) = function.evaluate(sample.x, sample.y) {
            located += 1;
            let error = (fitted - sample.value).abs();
            total_error += error as f64;
            max_error = max_error.max(error);
            f_min = f_min.min(fitted);
            f_max = f_max.max(fitted);
        }
    }
    function.f_min = f_min;
    function.f_max = f_max;

    if let Some(sink) = progress {
        if let MapVariant::Potential { time_ms } = map {
            sink.emit(ProgressMsg::Message {
                message: format!("frame time = {} ms", time_ms),
            });
        }
        if located > 0 {
            sink.emit(ProgressMsg::FitStatistics {
                average_absolute_error: (total_error / located as f64) as f32,
                maximum_absolute_error: max_error,
            });
        }
    }

    Ok(function)
}

/// Spatial range the fitting mesh must span, from the data and the
/// topology's wraparound overrides.
fn data_bounds(
    region_type: RegionType,
    samples: &[Sample],
) -> Result<(f32, f32, f32, f32), FitError> {
    let mut x_min = samples[0].x;
    let mut x_max = x_min;
    let mut y_min = samples[0].y;
    let mut y_max = y_min;
    for sample in &samples[1..] {
        x_min = x_min.min(sample.x);
        x_max = x_max.max(sample.x);
        y_min = y_min.min(sample.y);
        y_max = y_max.max(sample.y);
    }
    match region_type {
        RegionType::Patch => {}
        RegionType::Sock => {
            x_min = 0.0;
            x_max = 2.0 * std::f32::consts::PI;
            y_min = 0.0;
        }
        RegionType::Torso => {
            x_min = -std::f32::consts::PI;
            x_max = std::f32::consts::PI;
        }
    }
    if x_min >= x_max || y_min >= y_max {
        return Err(FitError::InvalidArgument("data spans no area"));
    }
    Ok((x_min, x_max, y_min, y_max))
}

const JSON_FORMAT_NAME: &str = "epimap.json";
const JSON_VERSION: u32 = 1;

/// Borrowing envelope for SAVE (no clone of the model).
#[derive(Serialize)]
struct JsonEnvelopeRef<'a, T: ?Sized> {
    format: &'static str,
    version: u32,
    #[serde(flatten)]
    model: &'a T,
}

/// Owning envelope for LOAD (generic over the concrete model).
#[derive(Serialize, Deserialize)]
struct JsonEnvelopeOwned<T> {
    format: String,
    version: u32,
    #[serde(flatten)]
    model: T,
}

type ModelIOResult<T> = std::result::Result<T, ModelIOError>;

/// Errors that can occur when saving or loading an [`InterpolationFunction`]
/// model.
#[derive(Debug)]
pub enum ModelIOError {
    /// Failed to create the target file before writing a model.
    Create { path: PathBuf, source: io::Error },
    /// Failed to open an existing model file for reading.
    Open { path: PathBuf, source: io::Error },
    /// Failed to flush buffered output when finishing a write.
    Flush { path: PathBuf, source: io::Error },
    /// Error serializing the in-memory model to JSON.
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Error parsing JSON when reading a model from disk.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The JSON `format` field does not match the expected model format.
    FormatMismatch {
        path: PathBuf,
        found: String,
        expected: &'static str,
    },
    /// The JSON `version` field does not match the supported version.
    VersionMismatch {
        path: PathBuf,
        found: u32,
        expected: u32,
    },
}

impl fmt::Display for ModelIOError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelIOError::Create { path, source } => {
                write!(f, "creating {}: {}", path.display(), source)
            }
            ModelIOError::Open { path, source } => {
                write!(f, "opening {}: {}", path.display(), source)
            }
            ModelIOError::Flush { path, source } => {
                write!(f, "flushing {}: {}", path.display(), source)
            }
            ModelIOError::Serialize { path, source } => {
                write!(f, "serializing JSON to {}: {}", path.display(), source)
            }
            ModelIOError::Parse { path, source } => {
                write!(f, "parsing JSON in {}: {}", path.display(), source)
            }
            ModelIOError::FormatMismatch {
                path,
                found,
                expected,
            } => write!(
                f,
                "unsupported format {:?} (expected {:?}) in {}",
                found,
                expected,
                path.display()
            ),
            ModelIOError::VersionMismatch {
                path,
                found,
                expected,
            } => write!(
                f,
                "unsupported version {} (expected {}) in {}",
                found,
                expected,
                path.display()
            ),
        }
    }
}

impl StdError for ModelIOError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ModelIOError::Create { source, .. }
            | ModelIOError::Open { source, .. }
            | ModelIOError::Flush { source, .. } => Some(source),
            ModelIOError::Serialize { source, .. } | ModelIOError::Parse { source, .. } => {
                Some(source)
            }
            ModelIOError::FormatMismatch { .. } | ModelIOError::VersionMismatch { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::CollectingSink;
    use crate::test_fields::{
        potential_patch_rig, potential_sock_rig, potential_torso_rig, scattered_patch_rig,
        MapTestFunctions,
    };

    fn settings(rows: usize, columns: usize, smoothing: f32) -> FitSettings {
        FitSettings::builder()
            .mesh_rows(rows)
            .mesh_columns(columns)
            .membrane_smoothing(smoothing)
            .plate_bending_smoothing(smoothing)
            .build()
    }

    const POTENTIAL: MapVariant = MapVariant::Potential { time_ms: 0.0 };

    #[test]
    fn planar_field_is_reproduced_with_exact_derivatives() {
        let rig = potential_patch_rig(5, 5, |x, y| x + y);
        let function = fit_map(&rig, 0, &POTENTIAL, &settings(2, 2, 1e-7), None).unwrap();

        let mesh = function.mesh().clone();
        let columns = mesh.columns();
        for (row, &y) in mesh.y().iter().enumerate() {
            for (column, &x) in mesh.x().iter().enumerate() {
                let node = row * (columns + 1) + column;
                let f = function.nodal_values(NodalKind::F)[node];
                assert!((f - (x + y)).abs() < 1e-3, "f at ({}, {}) = {}", x, y, f);
                let dfdx = function.nodal_values(NodalKind::DfDx)[node];
                assert!((dfdx - 1.0).abs() < 1e-3, "dfdx = {}", dfdx);
                let dfdy = function.nodal_values(NodalKind::DfDy)[node];
                assert!((dfdy - 1.0).abs() < 1e-3, "dfdy = {}", dfdy);
                let d2 = function.nodal_values(NodalKind::D2fDxDy)[node];
                assert!(d2.abs() < 1e-3, "d2fdxdy = {}", d2);
            }
        }

        let fitted = function.evaluate(0.3, 0.7).unwrap();
        assert!((fitted - 1.0).abs() < 1e-3);
        assert!(function.evaluate(1.5, 0.5).is_none());
        assert!(function.f_min() >= -1e-3);
        assert!(function.f_max() <= 2.0 + 1e-3);
    }

    #[test]
    fn scattered_data_fits_a_planar_field() {
        let rig = scattered_patch_rig(40, 7, |x, y| MapTestFunctions::linear_2d(x, y));
        let function = fit_map(&rig, 0, &POTENTIAL, &settings(2, 3, 1e-6), None).unwrap();
        // Probe well inside the data's spatial range.
        for &(x, y) in &[(0.3, 0.4), (0.5, 0.5), (0.6, 0.2)] {
            if let Some(fitted) = function.evaluate(x, y) {
                let expected = MapTestFunctions::linear_2d(x, y);
                assert!(
                    (fitted - expected).abs() < 1e-2,
                    "at ({}, {}): {} vs {}",
                    x,
                    y,
                    fitted,
                    expected
                );
            }
        }
    }

    #[test]
    fn sock_fit_duplicates_seam_and_apex_values() {
        let rig = potential_sock_rig(8, 4, 1.0, |_, mu| 10.0 + mu);
        let function = fit_map(&rig, 0, &POTENTIAL, &settings(3, 4, 1e-4), None).unwrap();
        let columns = function.mesh().columns();
        let rows = function.mesh().rows();
        let f = function.nodal_values(NodalKind::F);
        // The azimuthal seam carries the same values on both sides.
        for row in 0..=rows {
            let left = f[row * (columns + 1)];
            let right = f[row * (columns + 1) + columns];
            assert_eq!(left, right, "seam mismatch on row {}", row);
        }
        // The whole bottom grid row is the single apex node.
        for column in 1..=columns {
            assert_eq!(f[0], f[column]);
        }
    }

    #[test]
    fn torso_fit_duplicates_seam_values() {
        let rig = potential_torso_rig(12, 5, 1.0, |theta, z| 5.0 + 2.0 * z + theta.cos());
        let function = fit_map(&rig, 0, &POTENTIAL, &settings(2, 4, 1e-4), None).unwrap();
        let columns = function.mesh().columns();
        let rows = function.mesh().rows();
        let f = function.nodal_values(NodalKind::F);
        // The angular seam carries the same values on both sides.
        for row in 0..=rows {
            let left = f[row * (columns + 1)];
            let right = f[row * (columns + 1) + columns];
            assert_eq!(left, right, "seam mismatch on row {}", row);
        }
        let fitted = function.evaluate(0.0, 0.5).unwrap();
        assert!((fitted - 7.0).abs() < 0.2, "fitted {}", fitted);
    }

    #[test]
    fn mesh_must_have_elements() {
        let rig = potential_patch_rig(3, 3, |x, _| x);
        let bad = FitSettings::builder().mesh_rows(0).build();
        assert_eq!(
            fit_map(&rig, 0, &POTENTIAL, &bad, None),
            Err(FitError::InvalidArgument(
                "fitting mesh needs at least one row and one column of elements",
            ))
        );
    }

    #[test]
    fn no_qualifying_devices_is_reported_as_no_data() {
        let mut rig = potential_patch_rig(3, 3, |x, _| x);
        for device in &mut rig.devices {
            device.signal.status = crate::rig::SignalStatus::Rejected;
        }
        assert_eq!(
            fit_map(&rig, 0, &POTENTIAL, &settings(2, 2, 1e-5), None),
            Err(FitError::NoData)
        );
    }

    #[test]
    fn unregularised_sparse_fit_is_singular() {
        // Four corner data points cannot determine 4 unknowns per node
        // without smoothing.
        let rig = potential_patch_rig(2, 2, |x, y| x + y);
        let result = fit_map(&rig, 0, &POTENTIAL, &settings(2, 2, 0.0), None);
        assert_eq!(result, Err(FitError::SingularMatrix));
    }

    #[test]
    fn fit_statistics_are_emitted() {
        let rig = potential_patch_rig(4, 4, |x, y| x * y);
        let sink = Arc::new(CollectingSink::new());
        let as_sink: Arc<dyn ProgressSink> = sink.clone();
        fit_map(&rig, 0, &POTENTIAL, &settings(2, 2, 1e-5), Some(&as_sink)).unwrap();
        let messages = sink.take();
        let mut saw_frame_time = false;
        let mut saw_statistics = false;
        for message in &messages {
            match message {
                ProgressMsg::Message { message } => {
                    saw_frame_time |= message.contains("frame time");
                }
                ProgressMsg::FitStatistics {
                    average_absolute_error,
                    maximum_absolute_error,
                } => {
                    saw_statistics = true;
                    assert!(*average_absolute_error <= *maximum_absolute_error);
                    assert!(*maximum_absolute_error < 0.1);
                }
                _ => {}
            }
        }
        assert!(saw_frame_time);
        assert!(saw_statistics);
    }

    #[test]
    fn model_save_load_round_trip() {
        let rig = potential_patch_rig(4, 4, |x, y| x - y);
        let function = fit_map(&rig, 0, &POTENTIAL, &settings(2, 2, 1e-5), None).unwrap();

        let path = std::env::temp_dir().join(format!(
            "epimap_model_{}_{}.json",
            std::process::id(),
            "round_trip"
        ));
        function.save_model(&path).unwrap();
        let loaded = InterpolationFunction::load_model(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.region_type(), function.region_type());
        assert_eq!(loaded.number_of_nodes(), function.number_of_nodes());
        let original = function.evaluate(0.4, 0.6).unwrap();
        let reloaded = loaded.evaluate(0.4, 0.6).unwrap();
        assert_eq!(original, reloaded);
    }

    #[test]
    fn load_rejects_other_formats() {
        let rig = potential_patch_rig(3, 3, |x, y| x + y);
        let function = fit_map(&rig, 0, &POTENTIAL, &settings(1, 1, 1e-5), None).unwrap();
        let path = std::env::temp_dir().join(format!(
            "epimap_model_{}_{}.json",
            std::process::id(),
            "bad_format"
        ));
        function.save_model(&path).unwrap();
        let tampered = std::fs::read_to_string(&path)
            .unwrap()
            .replace("epimap.json", "something_else.json");
        std::fs::write(&path, tampered).unwrap();
        let result = InterpolationFunction::load_model(&path);
        std::fs::remove_file(&path).ok();
        match result {
            Err(ModelIOError::FormatMismatch { found, .. }) => {
                assert_eq!(found, "something_else.json");
            }
            other => panic!("expected format mismatch, got {:?}", other.map(|_| ())),
        }
    }
}
