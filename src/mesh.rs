/////////////////////////////////////////////////////////////////////////////////////////////
//
// Defines the fitting mesh, surface topologies, and element to node index mappings.
//
// Created on: 14 Aug 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! Fitting mesh and surface topology definitions.

use serde::{Deserialize, Serialize};

/// Topology of the recording surface the fitting mesh is laid over.
///
/// The topology controls how many distinct nodes the mesh has and how element
/// corners share nodes across seams:
///
/// - [`RegionType::Patch`] meshes are open rectangles; every grid point is a
///   distinct node.
/// - [`RegionType::Sock`] meshes wrap in x and collapse the entire bottom grid
///   row into a single apex node.
/// - [`RegionType::Torso`] meshes wrap in x only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionType {
    Patch,
    Sock,
    Torso,
}

impl RegionType {
    /// Number of distinct mesh nodes for a mesh of `rows` by `columns`
    /// elements.
    pub fn number_of_nodes(&self, rows: usize, columns: usize) -> usize {
        match self {
            RegionType::Patch => (rows + 1) * (columns + 1),
            RegionType::Sock => rows * columns + 1,
            RegionType::Torso => (rows + 1) * columns,
        }
    }

    /// Number of fitting equations. Each node carries four unknowns:
    /// f, df/dx, df/dy and d2f/dxdy.
    pub fn number_of_equations(&self, rows: usize, columns: usize) -> usize {
        4 * self.number_of_nodes(rows, columns)
    }
}

/// A rectangular grid of bicubic Hermite elements with monotonically
/// increasing element boundaries in x and y.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    x: Vec<f32>,
    y: Vec<f32>,
}

impl Mesh {
    /// Builds a uniform mesh of `rows` by `columns` elements spanning the
    /// given bounds. The last boundary in each direction is set to the exact
    /// maximum so that points on the far edges always locate inside the mesh.
    pub fn uniform(
        rows: usize,
        columns: usize,
        x_min: f32,
        x_max: f32,
        y_min: f32,
        y_max: f32,
    ) -> Mesh {
        let dx = (x_max - x_min) / (columns as f32);
        let dy = (y_max - y_min) / (rows as f32);
        let mut x: Vec<f32> = (0..columns).map(|i| x_min + (i as f32) * dx).collect();
        x.push(x_max);
        let mut y: Vec<f32> = (0..rows).map(|i| y_min + (i as f32) * dy).collect();
        y.push(y_max);
        Mesh { x, y }
    }

    /// Builds a mesh from explicit element boundaries.
    pub fn from_boundaries(x: Vec<f32>, y: Vec<f32>) -> Mesh {
        assert!(x.len() >= 2 && y.len() >= 2, "mesh needs at least one element");
        assert!(
            x.windows(2).all(|w| w[0] < w[1]) && y.windows(2).all(|w| w[0] < w[1]),
            "mesh boundaries must be strictly increasing"
        );
        Mesh { x, y }
    }

    pub fn rows(&self) -> usize {
        self.y.len() - 1
    }

    pub fn columns(&self) -> usize {
        self.x.len() - 1
    }

    /// Element boundaries along x.
    pub fn x(&self) -> &[f32] {
        &self.x
    }

    /// Element boundaries along y.
    pub fn y(&self) -> &[f32] {
        &self.y
    }

    /// Locates the element containing the point, returning 1-based
    /// (row, column) element indices, or `None` if the point lies outside
    /// the mesh.
    pub(crate) fn locate(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let columns = self.columns();
        let mut column = 0;
        while column < columns && x >= self.x[column] {
            column += 1;
        }
        if column == 0 || x > self.x[column] {
            return None;
        }
        let rows = self.rows();
        let mut row = 0;
        while row < rows && y >= self.y[row] {
            row += 1;
        }
        if row == 0 || y > self.y[row] {
            return None;
        }
        Some((row, column))
    }
}

/// Node indices at the four corners of one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ElementNodes {
    pub bottom_left: usize,
    pub top_left: usize,
    pub top_right: usize,
    pub bottom_right: usize,
}

impl ElementNodes {
    /// Corner nodes in the fixed corner order used throughout assembly:
    /// bottom-left, top-left, top-right, bottom-right.
    pub fn corners(&self) -> [usize; 4] {
        [
            self.bottom_left,
            self.top_left,
            self.top_right,
            self.bottom_right,
        ]
    }
}

/// Maps a 1-based element (row, column) to the node indices at its corners,
/// applying the wraparound and apex sharing rules of the topology.
pub(crate) fn element_nodes(
    region_type: RegionType,
    columns: usize,
    row: usize,
    column: usize,
) -> ElementNodes {
    match region_type {
        RegionType::Patch => ElementNodes {
            bottom_left: (row - 1) * (columns + 1) + column - 1,
            top_left: row * (columns + 1) + column - 1,
            top_right: row * (columns + 1) + column,
            bottom_right: (row - 1) * (columns + 1) + column,
        },
        RegionType::Sock => {
            if row == 1 {
                // Bottom row elements collapse onto the apex node.
                ElementNodes {
                    bottom_left: 0,
                    top_left: column,
                    top_right: if column == columns { 1 } else { column + 1 },
                    bottom_right: 0,
                }
            } else {
                ElementNodes {
                    bottom_left: (row - 2) * columns + column,
                    top_left: (row - 1) * columns + column,
                    top_right: if column == columns {
                        (row - 1) * columns + 1
                    } else {
                        (row - 1) * columns + column + 1
                    },
                    bottom_right: if column == columns {
                        (row - 2) * columns + 1
                    } else {
                        (row - 2) * columns + column + 1
                    },
                }
            }
        }
        RegionType::Torso => ElementNodes {
            bottom_left: (row - 1) * columns + column - 1,
            top_left: row * columns + column - 1,
            top_right: if column == columns {
                row * columns
            } else {
                row * columns + column
            },
            bottom_right: if column == columns {
                (row - 1) * columns
            } else {
                (row - 1) * columns + column
            },
        },
    }
}

/// Grid positions on the full unwrapped (rows + 1) by (columns + 1) grid that
/// a node's fitted values are written to. Wrapped topologies duplicate seam
/// nodes; the sock apex node fans out across the whole bottom grid row.
pub(crate) fn node_grid_positions(
    region_type: RegionType,
    rows: usize,
    columns: usize,
    node: usize,
) -> Vec<(usize, usize)> {
    match region_type {
        RegionType::Patch => vec![(node / (columns + 1), node % (columns + 1))],
        RegionType::Sock => {
            if node == 0 {
                (0..=columns).map(|column| (0, column)).collect()
            } else {
                let row = (node - 1) / columns + 1;
                let column = (node - 1) % columns;
                debug_assert!(row <= rows);
                if column == 0 {
                    vec![(row, 0), (row, columns)]
                } else {
                    vec![(row, column)]
                }
            }
        }
        RegionType::Torso => {
            let row = node / columns;
            let column = node % columns;
            debug_assert!(row <= rows);
            if column == 0 {
                vec![(row, 0), (row, columns)]
            } else {
                vec![(row, column)]
            }
        }
    }
}
