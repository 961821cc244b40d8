/////////////////////////////////////////////////////////////////////////////////////////////
//
// Adds CSV helpers for loading scattered data points and exporting fitted nodal values.
//
// Created on: 14 Aug 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use std::error::Error;
use std::fs::File;

use csv::{ReaderBuilder, Writer};

use crate::fit::{InterpolationFunction, NodalKind};
use crate::sampling::Sample;

/// Reads scattered data points from a CSV file with columns
/// `x, y, value[, weight]`. The weight defaults to 1 when the column is
/// absent.
pub fn samples_from_csv(file_path: &str, has_headers: bool) -> Result<Vec<Sample>, Box<dyn Error>> {
    let file = File::open(file_path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(has_headers)
        .from_reader(file);

    let mut samples = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.len() != 3 && record.len() != 4 {
            return Err("expected 3 or 4 columns per CSV record".into());
        }
        let mut fields = record.iter();
        let mut parse = |name: &str| -> Result<f32, Box<dyn Error>> {
            fields
                .next()
                .ok_or_else(|| format!("missing {} column", name))?
                .trim()
                .parse::<f32>()
                .map_err(|e| e.into())
        };
        let x = parse("x")?;
        let y = parse("y")?;
        let value = parse("value")?;
        let weight = if record.len() == 4 { parse("weight")? } else { 1.0 };
        samples.push(Sample {
            x,
            y,
            value,
            weight,
        });
    }
    Ok(samples)
}

/// Writes the fitted nodal values of a function to a CSV file, one record
/// per grid node with columns `X, Y, F, DFDX, DFDY, D2FDXDY`.
pub fn nodal_values_to_csv(
    function: &InterpolationFunction,
    filename: &str,
) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(filename)?;

    let headers = vec!["X", "Y", "F", "DFDX", "DFDY", "D2FDXDY"];
    wtr.write_record(&headers)?;

    let mesh = function.mesh();
    let columns = mesh.columns();
    let f = function.nodal_values(NodalKind::F);
    let dfdx = function.nodal_values(NodalKind::DfDx);
    let dfdy = function.nodal_values(NodalKind::DfDy);
    let d2fdxdy = function.nodal_values(NodalKind::D2fDxDy);
    for (row, &y) in mesh.y().iter().enumerate() {
        for (column, &x) in mesh.x().iter().enumerate() {
            let node = row * (columns + 1) + column;
            let record = vec![
                x.to_string(),
                y.to_string(),
                f[node].to_string(),
                dfdx[node].to_string(),
                dfdy[node].to_string(),
                d2fdxdy[node].to_string(),
            ];
            wtr.write_record(&record)?;
        }
    }

    wtr.flush()?;
    Ok(())
}
