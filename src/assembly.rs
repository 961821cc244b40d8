/////////////////////////////////////////////////////////////////////////////////////////////
//
// Assembles the least squares fitting system from smoothing integrals and data points.
//
// Created on: 14 Aug 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # assembly
//!
//! Builds the normal equations of the regularised least squares fit. The
//! system matrix is the sum of two contributions:
//!
//! - per-element smoothing blocks, integrating membrane (first derivative)
//!   and plate bending (second derivative) energies analytically using the
//!   Hermite inner product tables, and
//! - per-point data blocks, the weighted outer products of the element basis
//!   evaluated at each data point.
//!
//! Equations are blocked four per node in the fixed kind order f, df/dx,
//! df/dy, d2f/dxdy. Nodal derivative unknowns are held in physical
//! coordinates, so each basis row is scaled by the element width and height
//! as it is assembled.

use std::sync::Arc;

use faer::Mat;
use rayon::prelude::*;

use crate::basis::{basis_ids, corner_basis, nodal_scale, DH, D2H, H};
use crate::mesh::{element_nodes, ElementNodes, Mesh, RegionType};
use crate::progress::{ProgressMsg, ProgressSink};
use crate::sampling::Sample;

/// The assembled normal equations `matrix * solution = rhs`.
pub(crate) struct AugmentedSystem {
    pub matrix: Mat<f64>,
    pub rhs: Mat<f64>,
}

/// Assembles the fitting system for a mesh over the given samples.
///
/// Samples that fall outside the mesh are excluded from the fit; each one is
/// reported through the progress sink.
pub(crate) fn assemble(
    region_type: RegionType,
    mesh: &Mesh,
    samples: &[Sample],
    membrane_smoothing: f32,
    plate_bending_smoothing: f32,
    progress: Option<&Arc<dyn ProgressSink>>,
) -> AugmentedSystem {
    let rows = mesh.rows();
    let columns = mesh.columns();
    let n = region_type.number_of_equations(rows, columns);
    let mut matrix = Mat::<f64>::zeros(n, n);
    let mut rhs = Mat::<f64>::zeros(n, 1);

    if membrane_smoothing != 0.0 || plate_bending_smoothing != 0.0 {
        add_smoothing(
            region_type,
            mesh,
            membrane_smoothing as f64,
            plate_bending_smoothing as f64,
            &mut matrix,
        );
    }
    add_data(
        region_type,
        mesh,
        samples,
        &mut matrix,
        &mut rhs,
        progress,
    );

    AugmentedSystem { matrix, rhs }
}

/// The 16 x 16 smoothing block of one element, indexed by
/// `corner * 4 + kind` on both axes.
fn element_smoothing_block(
    width: f64,
    height: f64,
    membrane: f64,
    plate_bending: f64,
) -> [[f64; 16]; 16] {
    // Geometric factors from mapping the integrals onto the unit square.
    let membrane_u = height / width;
    let membrane_v = width / height;
    let plate_uu = height / (width * width * width);
    let plate_uv = 1.0 / (width * height);
    let plate_vv = width / (height * height * height);

    let mut block = [[0.0; 16]; 16];
    for corner_a in 0..4 {
        for kind_a in 0..4 {
            let (ua, va) = basis_ids(corner_a, kind_a);
            let scale_a = nodal_scale(kind_a, width, height);
            for corner_b in 0..4 {
                for kind_b in 0..4 {
                    let (ub, vb) = basis_ids(corner_b, kind_b);
                    let scale_b = nodal_scale(kind_b, width, height);
                    let membrane_energy =
                        DH[ua][ub] * H[va][vb] * membrane_u + H[ua][ub] * DH[va][vb] * membrane_v;
                    let plate_energy = D2H[ua][ub] * H[va][vb] * plate_uu
                        + DH[ua][ub] * DH[va][vb] * plate_uv
                        + H[ua][ub] * D2H[va][vb] * plate_vv;
                    block[corner_a * 4 + kind_a][corner_b * 4 + kind_b] =
                        (membrane * membrane_energy + plate_bending * plate_energy)
                            * scale_a
                            * scale_b;
                }
            }
        }
    }
    block
}

/// Adds the smoothing energy of every element to the system matrix. Blocks
/// are computed per element in parallel, then scattered serially.
fn add_smoothing(
    region_type: RegionType,
    mesh: &Mesh,
    membrane: f64,
    plate_bending: f64,
    matrix: &mut Mat<f64>,
) {
    let rows = mesh.rows();
    let columns = mesh.columns();
    let elements: Vec<(usize, usize)> = (1..=rows)
        .flat_map(|row| (1..=columns).map(move |column| (row, column)))
        .collect();

    let blocks: Vec<(ElementNodes, [[f64; 16]; 16])> = elements
        .par_iter()
        .map(|&(row, column)| {
            let width = (mesh.x()[column] - mesh.x()[column - 1]) as f64;
            let height = (mesh.y()[row] - mesh.y()[row - 1]) as f64;
            let nodes = element_nodes(region_type, columns, row, column);
            (
                nodes,
                element_smoothing_block(width, height, membrane, plate_bending),
            )
        })
        .collect();

    for (nodes, block) in &blocks {
        let corners = nodes.corners();
        for corner_a in 0..4 {
            for kind_a in 0..4 {
                let row = 4 * corners[corner_a] + kind_a;
                for corner_b in 0..4 {
                    for kind_b in 0..4 {
                        let column = 4 * corners[corner_b] + kind_b;
                        matrix[(row, column)] +=
                            block[corner_a * 4 + kind_a][corner_b * 4 + kind_b];
                    }
                }
            }
        }
    }
}

/// Adds the weighted outer product of the element basis at each data point.
/// Points outside the mesh are reported and skipped.
fn add_data(
    region_type: RegionType,
    mesh: &Mesh,
    samples: &[Sample],
    matrix: &mut Mat<f64>,
    rhs: &mut Mat<f64>,
    progress: Option<&Arc<dyn ProgressSink>>,
) {
    let columns = mesh.columns();
    for (index, sample) in samples.iter().enumerate() {
        let Some((row, column)) = mesh.locate(sample.x, sample.y) else {
            if let Some(sink) = progress {
                sink.emit(ProgressMsg::OutOfMeshPoint {
                    index,
                    x: sample.x,
                    y: sample.y,
                });
            }
            continue;
        };

        let x_left = mesh.x()[column - 1] as f64;
        let y_bottom = mesh.y()[row - 1] as f64;
        let width = mesh.x()[column] as f64 - x_left;
        let height = mesh.y()[row] as f64 - y_bottom;
        let u = (sample.x as f64 - x_left) / width;
        let v = (sample.y as f64 - y_bottom) / height;
        let corner = corner_basis(u, width, v, height);

        let nodes = element_nodes(region_type, columns, row, column);
        let corners = nodes.corners();
        let mut indices = [0usize; 16];
        let mut values = [0.0f64; 16];
        for corner_index in 0..4 {
            for kind in 0..4 {
                indices[corner_index * 4 + kind] = 4 * corners[corner_index] + kind;
                values[corner_index * 4 + kind] = corner.values[corner_index][kind];
            }
        }

        let weight = sample.weight as f64;
        let value = sample.value as f64;
        for a in 0..16 {
            let weighted = weight * values[a];
            for b in 0..16 {
                matrix[(indices[a], indices[b])] += weighted * values[b];
            }
            rhs[(indices[a], 0)] += weighted * value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basis::{KIND_D2FDXDY, KIND_DFDX, KIND_DFDY, KIND_F};

    fn unit_mesh() -> Mesh {
        Mesh::uniform(1, 1, 0.0, 1.0, 0.0, 1.0)
    }

    #[test]
    fn smoothing_block_is_symmetric() {
        let block = element_smoothing_block(0.5, 2.0, 1.0, 1.0);
        for a in 0..16 {
            for b in 0..16 {
                assert!(
                    (block[a][b] - block[b][a]).abs() < 1e-12,
                    "block[{}][{}] = {} vs {}",
                    a,
                    b,
                    block[a][b],
                    block[b][a]
                );
            }
        }
    }

    #[test]
    fn smoothing_energy_of_a_constant_field_is_zero() {
        // A constant surface has no stretching or bending energy, so the
        // coefficient vector (f = 1, derivatives = 0) must be in the null
        // space of the smoothing block.
        let block = element_smoothing_block(1.5, 0.75, 1.0, 1.0);
        for row in 0..16 {
            let mut total = 0.0;
            for corner in 0..4 {
                total += block[row][corner * 4 + KIND_F];
            }
            assert!(total.abs() < 1e-12, "row {} residual {}", row, total);
        }
    }

    #[test]
    fn membrane_energy_of_a_plane_matches_closed_form() {
        // f(x, y) = x on a unit element: energy = integral of fx^2 = 1.
        // The nodal vector has f = x at the corners and dfdx = 1.
        let block = element_smoothing_block(1.0, 1.0, 1.0, 0.0);
        let mut coefficients = [0.0; 16];
        // Corners: bottom-left (0, 0), top-left (0, 1), top-right (1, 1),
        // bottom-right (1, 0).
        let corner_x = [0.0, 0.0, 1.0, 1.0];
        for corner in 0..4 {
            coefficients[corner * 4 + KIND_F] = corner_x[corner];
            coefficients[corner * 4 + KIND_DFDX] = 1.0;
        }
        let mut energy = 0.0;
        for a in 0..16 {
            for b in 0..16 {
                energy += coefficients[a] * block[a][b] * coefficients[b];
            }
        }
        assert!((energy - 1.0).abs() < 1e-12, "energy {}", energy);
    }

    #[test]
    fn plate_energy_of_a_plane_is_zero() {
        let block = element_smoothing_block(2.0, 0.5, 0.0, 1.0);
        let mut coefficients = [0.0; 16];
        let corner_x = [0.0, 0.0, 2.0, 2.0];
        let corner_y = [0.0, 0.5, 0.5, 0.0];
        for corner in 0..4 {
            coefficients[corner * 4 + KIND_F] = 3.0 + corner_x[corner] - 2.0 * corner_y[corner];
            coefficients[corner * 4 + KIND_DFDX] = 1.0;
            coefficients[corner * 4 + KIND_DFDY] = -2.0;
        }
        let mut energy = 0.0;
        for a in 0..16 {
            for b in 0..16 {
                energy += coefficients[a] * block[a][b] * coefficients[b];
            }
        }
        assert!(energy.abs() < 1e-10, "energy {}", energy);
    }

    #[test]
    fn data_pass_accumulates_outer_products() {
        let mesh = unit_mesh();
        let samples = [Sample {
            x: 0.0,
            y: 0.0,
            value: 5.0,
            weight: 2.0,
        }];
        let system = assemble(RegionType::Patch, &mesh, &samples, 0.0, 0.0, None);
        // At the bottom-left corner only that node's value basis is nonzero,
        // so the matrix gets weight * 1 * 1 at the (f, f) diagonal entry of
        // node 0 and the rhs gets weight * value.
        assert_eq!(system.matrix[(KIND_F, KIND_F)], 2.0);
        assert_eq!(system.rhs[(KIND_F, 0)], 10.0);
        // Derivative rows of node 0 see nothing from a corner sample.
        assert_eq!(system.matrix[(KIND_DFDX, KIND_DFDX)], 0.0);
        assert_eq!(system.rhs[(KIND_D2FDXDY, 0)], 0.0);
    }

    #[test]
    fn out_of_mesh_samples_are_reported_and_skipped() {
        use crate::progress::CollectingSink;
        let mesh = unit_mesh();
        let samples = [
            Sample {
                x: 0.5,
                y: 0.5,
                value: 1.0,
                weight: 1.0,
            },
            Sample {
                x: 2.0,
                y: 0.5,
                value: 9.0,
                weight: 1.0,
            },
        ];
        let sink: Arc<CollectingSink> = Arc::new(CollectingSink::new());
        let as_sink: Arc<dyn ProgressSink> = sink.clone();
        let with_stray = assemble(
            RegionType::Patch,
            &mesh,
            &samples,
            0.0,
            0.0,
            Some(&as_sink),
        );
        let without_stray =
            assemble(RegionType::Patch, &mesh, &samples[..1], 0.0, 0.0, None);

        let reported = sink.take();
        assert_eq!(reported.len(), 1);
        match &reported[0] {
            ProgressMsg::OutOfMeshPoint { index, x, .. } => {
                assert_eq!(*index, 1);
                assert_eq!(*x, 2.0);
            }
            other => panic!("unexpected message {:?}", other),
        }
        // The stray sample contributes nothing to the system.
        let n = with_stray.matrix.nrows();
        for i in 0..n {
            for j in 0..n {
                assert_eq!(with_stray.matrix[(i, j)], without_stray.matrix[(i, j)]);
            }
            assert_eq!(with_stray.rhs[(i, 0)], without_stray.rhs[(i, 0)]);
        }
    }

    #[test]
    fn wrapped_corners_accumulate_into_shared_nodes() {
        // On a sock, the bottom row corners all collapse onto the apex node,
        // so a data point near the bottom edge must write into equation
        // block 0 twice (bottom-left and bottom-right corners).
        let mesh = Mesh::uniform(2, 3, 0.0, 6.28, 0.0, 1.0);
        let samples = [Sample {
            x: 1.0,
            y: 0.1,
            value: 1.0,
            weight: 1.0,
        }];
        let system = assemble(RegionType::Sock, &mesh, &samples, 0.0, 0.0, None);
        // The apex f row sums both corner value bases, which together with
        // the top corners' bases partition unity.
        assert!(system.matrix[(0, 0)] > 0.0);
        let n = RegionType::Sock.number_of_equations(2, 3);
        assert_eq!(system.matrix.nrows(), n);
    }

    #[test]
    fn smoothing_is_skipped_when_both_weights_are_zero() {
        let mesh = unit_mesh();
        let system = assemble(RegionType::Patch, &mesh, &[], 0.0, 0.0, None);
        for i in 0..system.matrix.nrows() {
            for j in 0..system.matrix.ncols() {
                assert_eq!(system.matrix[(i, j)], 0.0);
            }
        }
    }
}
