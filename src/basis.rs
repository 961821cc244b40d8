/////////////////////////////////////////////////////////////////////////////////////////////
//
// Defines the cubic Hermite basis functions and their exact inner product tables.
//
// Created on: 14 Aug 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # basis
//!
//! One dimensional cubic Hermite basis functions on the unit interval, the
//! tensor product corner basis used when scattering data points into the
//! fitting system, and exact tables of basis inner products used by the
//! smoothing integrals.
//!
//! The four basis functions, indexed 0..4 throughout:
//!
//! - `h01(t) = 1 - 3t^2 + 2t^3` - value at the left end
//! - `h02(t) = 3t^2 - 2t^3`     - value at the right end
//! - `h11(t) = t(t - 1)^2`      - derivative at the left end
//! - `h12(t) = t^2(t - 1)`      - derivative at the right end

/// Value basis function for the left end of the interval.
#[inline]
pub(crate) fn h01(t: f64) -> f64 {
    (2.0 * t - 3.0) * t * t + 1.0
}

/// Value basis function for the right end of the interval.
#[inline]
pub(crate) fn h02(t: f64) -> f64 {
    (3.0 - 2.0 * t) * t * t
}

/// Derivative basis function for the left end of the interval.
#[inline]
pub(crate) fn h11(t: f64) -> f64 {
    t * (t - 1.0) * (t - 1.0)
}

/// Derivative basis function for the right end of the interval.
#[inline]
pub(crate) fn h12(t: f64) -> f64 {
    t * t * (t - 1.0)
}

/// `H[i][j] = integral over [0, 1] of h_i h_j`.
pub(crate) const H: [[f64; 4]; 4] = [
    [13.0 / 35.0, 9.0 / 70.0, 11.0 / 210.0, -13.0 / 420.0],
    [9.0 / 70.0, 13.0 / 35.0, 13.0 / 420.0, -11.0 / 210.0],
    [11.0 / 210.0, 13.0 / 420.0, 1.0 / 105.0, -1.0 / 140.0],
    [-13.0 / 420.0, -11.0 / 210.0, -1.0 / 140.0, 1.0 / 105.0],
];

/// `DH[i][j] = integral over [0, 1] of h_i' h_j'`.
pub(crate) const DH: [[f64; 4]; 4] = [
    [6.0 / 5.0, -6.0 / 5.0, 1.0 / 10.0, 1.0 / 10.0],
    [-6.0 / 5.0, 6.0 / 5.0, -1.0 / 10.0, -1.0 / 10.0],
    [1.0 / 10.0, -1.0 / 10.0, 2.0 / 15.0, -1.0 / 30.0],
    [1.0 / 10.0, -1.0 / 10.0, -1.0 / 30.0, 2.0 / 15.0],
];

/// `D2H[i][j] = integral over [0, 1] of h_i'' h_j''`.
pub(crate) const D2H: [[f64; 4]; 4] = [
    [12.0, -12.0, 6.0, 6.0],
    [-12.0, 12.0, -6.0, -6.0],
    [6.0, -6.0, 4.0, 2.0],
    [6.0, -6.0, 2.0, 4.0],
];

/// Nodal value kinds, in the fixed order used for equation blocks:
/// f, df/dx, df/dy, d2f/dxdy.
pub(crate) const KIND_F: usize = 0;
pub(crate) const KIND_DFDX: usize = 1;
pub(crate) const KIND_DFDY: usize = 2;
pub(crate) const KIND_D2FDXDY: usize = 3;

/// 1-D basis function ids in the u and v directions for the basis attached to
/// a given (corner, nodal kind) pair. Corners are numbered bottom-left 0,
/// top-left 1, top-right 2, bottom-right 3.
#[inline]
pub(crate) fn basis_ids(corner: usize, kind: usize) -> (usize, usize) {
    let u_deriv = (kind == KIND_DFDX || kind == KIND_D2FDXDY) as usize;
    let v_deriv = (kind == KIND_DFDY || kind == KIND_D2FDXDY) as usize;
    let u_right = (corner == 2 || corner == 3) as usize;
    let v_top = (corner == 1 || corner == 2) as usize;
    (2 * u_deriv + u_right, 2 * v_deriv + v_top)
}

/// Scale factor that converts a nodal derivative from element-local
/// coordinates to physical coordinates.
#[inline]
pub(crate) fn nodal_scale(kind: usize, width: f64, height: f64) -> f64 {
    match kind {
        KIND_DFDX => width,
        KIND_DFDY => height,
        KIND_D2FDXDY => width * height,
        _ => 1.0,
    }
}

/// Values of all sixteen element basis functions at a point, indexed
/// `[corner][kind]`, with the derivative bases already scaled by the element
/// width and height so that nodal derivatives are with respect to physical
/// coordinates.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CornerBasis {
    pub values: [[f64; 4]; 4],
}

/// Evaluates the scaled tensor product basis at local coordinates
/// `(u, v)` within an element of the given physical width and height.
pub(crate) fn corner_basis(u: f64, width: f64, v: f64, height: f64) -> CornerBasis {
    let h01_u = h01(u);
    let h02_u = h02(u);
    let h11_u = width * h11(u);
    let h12_u = width * h12(u);
    let h01_v = h01(v);
    let h02_v = h02(v);
    let h11_v = height * h11(v);
    let h12_v = height * h12(v);

    // u basis per corner (left for corners 0 and 1, right for 2 and 3),
    // then v basis per corner (bottom for corners 0 and 3, top for 1 and 2).
    let value_u = [h01_u, h01_u, h02_u, h02_u];
    let deriv_u = [h11_u, h11_u, h12_u, h12_u];
    let value_v = [h01_v, h02_v, h02_v, h01_v];
    let deriv_v = [h11_v, h12_v, h12_v, h11_v];

    let mut values = [[0.0; 4]; 4];
    for corner in 0..4 {
        values[corner][KIND_F] = value_u[corner] * value_v[corner];
        values[corner][KIND_DFDX] = deriv_u[corner] * value_v[corner];
        values[corner][KIND_DFDY] = value_u[corner] * deriv_v[corner];
        values[corner][KIND_D2FDXDY] = deriv_u[corner] * deriv_v[corner];
    }
    CornerBasis { values }
}
