/////////////////////////////////////////////////////////////////////////////////////////////
//
// Adds a dense LU solver with scaled partial pivoting used to solve the fitting system.
//
// Created on: 14 Aug 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # solver
//!
//! Dense LU factorisation with implicit row scaling and scaled partial
//! pivoting. Pivoting is tracked through a logical row permutation rather
//! than physical row swaps, so the factors stay in the storage of the
//! original matrix.

use std::error::Error;
use std::fmt;

use faer::Mat;

/// The fitting matrix could not be factorised.
#[derive(Debug, PartialEq, Eq)]
pub enum SolveError {
    /// A zero row or a zero pivot was encountered, meaning the system does
    /// not determine every unknown.
    SingularMatrix,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::SingularMatrix => write!(f, "singular fitting matrix"),
        }
    }
}

impl Error for SolveError {}

/// LU factors of a square matrix, with the unit lower triangle and the upper
/// triangle packed into one matrix and the pivot order kept as a permutation
/// of row indices.
pub(crate) struct CroutLu {
    lu: Mat<f64>,
    perm: Vec<usize>,
}

impl CroutLu {
    /// Factorises the matrix in place.
    ///
    /// Rows are implicitly scaled by their largest magnitude entry when
    /// choosing pivots, which keeps the pivot choice meaningful when rows
    /// have very different scales (value rows versus cross derivative rows).
    ///
    /// # Errors
    /// Returns [`SolveError::SingularMatrix`] on a structurally empty row or
    /// an exactly zero pivot.
    pub fn try_new(mut a: Mat<f64>) -> Result<CroutLu, SolveError> {
        let n = a.nrows();
        assert_eq!(n, a.ncols(), "square matrix required");

        let mut row_scale = vec![0.0f64; n];
        for i in 0..n {
            let mut largest = 0.0f64;
            for j in 0..n {
                largest = largest.max(a[(i, j)].abs());
            }
            if largest == 0.0 {
                return Err(SolveError::SingularMatrix);
            }
            row_scale[i] = 1.0 / largest;
        }

        let mut perm: Vec<usize> = (0..n).collect();
        for j in 0..n {
            for i in 0..j {
                let pi = perm[i];
                let mut sum = a[(pi, j)];
                for k in 0..i {
                    sum -= a[(pi, k)] * a[(perm[k], j)];
                }
                a[(pi, j)] = sum;
            }
            let mut best_weight = 0.0f64;
            let mut pivot = j;
            for i in j..n {
                let pi = perm[i];
                let mut sum = a[(pi, j)];
                for k in 0..j {
                    sum -= a[(pi, k)] * a[(perm[k], j)];
                }
                a[(pi, j)] = sum;
                let weight = row_scale[pi] * sum.abs();
                if weight >= best_weight {
                    best_weight = weight;
                    pivot = i;
                }
            }
            perm.swap(j, pivot);
            let diagonal = a[(perm[j], j)];
            if diagonal == 0.0 {
                return Err(SolveError::SingularMatrix);
            }
            for i in j + 1..n {
                let pi = perm[i];
                a[(pi, j)] /= diagonal;
            }
        }

        Ok(CroutLu { lu: a, perm })
    }

    /// Solves for one right hand side, returning the solution in natural
    /// unknown order.
    pub fn solve(&self, rhs: &Mat<f64>) -> Mat<f64> {
        let n = self.lu.nrows();
        assert_eq!(rhs.nrows(), n);

        let mut x = rhs.clone();
        // Forward substitution through the unit lower triangle, addressing
        // rows through the permutation.
        for i in 1..n {
            let pi = self.perm[i];
            let mut sum = x[(pi, 0)];
            for j in 0..i {
                sum -= self.lu[(pi, j)] * x[(self.perm[j], 0)];
            }
            x[(pi, 0)] = sum;
        }
        // Back substitution through the upper triangle.
        for i in (0..n).rev() {
            let pi = self.perm[i];
            let mut sum = x[(pi, 0)];
            for j in i + 1..n {
                sum -= self.lu[(pi, j)] * x[(self.perm[j], 0)];
            }
            x[(pi, 0)] = sum / self.lu[(pi, i)];
        }

        Mat::from_fn(n, 1, |i, _| x[(self.perm[i], 0)])
    }
}
