/////////////////////////////////////////////////////////////////////////////////////////////
//
// Extracts per-electrode data points for each map variant and projects them onto the mesh.
//
// Created on: 14 Aug 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # sampling
//!
//! Turns the signals of an electrode rig into the scattered `(x, y, value,
//! weight)` data points that the surface is fitted to. The map variant
//! selects both which devices qualify and how each device's signal is reduced
//! to a single value; the region geometry determines how the electrode's 3D
//! position is projected onto the 2D fitting mesh.

use serde::{Deserialize, Serialize};

use crate::fit::FitError;
use crate::geometry::{cartesian_to_cylindrical_polar, cartesian_to_prolate_spheroidal};
use crate::rig::{Device, DeviceType, Event, Region, RegionGeometry, Rig};

/// One scattered data point on the fitting mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f32,
    pub y: f32,
    pub value: f32,
    pub weight: f32,
}

/// The quantity a map displays, and therefore the per-electrode value the
/// surface is fitted to.
///
/// Times are in milliseconds; sample positions index into the signal
/// buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MapVariant {
    /// Activation time of one numbered event, in ms relative to the datum
    /// sample.
    SingleActivation { event_number: i32, datum: usize },

    /// Peak to peak signal amplitude in a window centred on one numbered
    /// event.
    ActivationPotential {
        event_number: i32,
        /// Half width of the search window, in ms.
        half_peak_to_peak_width_ms: f32,
    },

    /// Of all accepted events on a signal, the activation time closest after
    /// the datum (or the least negative when none follow it), in ms.
    MultipleActivation { datum: usize },

    /// Signal potential at a fixed time, linearly interpolated between
    /// samples.
    Potential { time_ms: f32 },

    /// Time integral of the calibrated signal over a sample interval.
    Integral { start: usize, end: usize },
}

/// Extracts the data points a map fit would use for one region of a rig.
///
/// Only electrodes in the region qualify, subject to the per-variant status
/// rules: activation maps check the status of the event itself, while
/// potential and integral maps check the status of the whole signal. Devices
/// whose signals cannot produce a value (missing event, time outside the
/// recorded range) are skipped.
///
/// # Errors
/// Returns [`FitError::InvalidArgument`] if the region index is out of range
/// or the map variant's parameters are malformed.
pub fn extract_samples(
    rig: &Rig,
    region_index: usize,
    map: &MapVariant,
    undecided_accepted: bool,
) -> Result<Vec<Sample>, FitError> {
    let region = rig
        .regions
        .get(region_index)
        .ok_or(FitError::InvalidArgument("region index out of range"))?;
    match map {
        MapVariant::SingleActivation { event_number, .. }
        | MapVariant::ActivationPotential { event_number, .. } => {
            if *event_number < 1 {
                return Err(FitError::InvalidArgument("event number must be positive"));
            }
        }
        MapVariant::Integral { start, end } => {
            if start > end {
                return Err(FitError::InvalidArgument(
                    "integral interval must not be empty",
                ));
            }
        }
        MapVariant::MultipleActivation { .. } | MapVariant::Potential { .. } => {}
    }

    let mut samples = Vec::new();
    for device in &rig.devices {
        if device.device_type != DeviceType::Electrode || device.region != region_index {
            continue;
        }
        if let Some(value) = map_value(device, map, undecided_accepted) {
            let (x, y) = project(region, device);
            samples.push(Sample {
                x,
                y,
                value,
                weight: 1.0,
            });
        }
    }
    Ok(samples)
}

/// Projects a device position onto the region's fitting mesh coordinates.
fn project(region: &Region, device: &Device) -> (f32, f32) {
    match &region.geometry {
        RegionGeometry::Patch => (device.position.x, device.position.y),
        RegionGeometry::Sock {
            focus,
            transformation,
        } => {
            let p = transformation.apply(device.position);
            let (_, mu, theta) = cartesian_to_prolate_spheroidal(
                p.x as f64,
                p.y as f64,
                p.z as f64,
                *focus as f64,
            );
            (theta as f32, mu as f32)
        }
        RegionGeometry::Torso => {
            let p = device.position;
            let (_, theta, z) =
                cartesian_to_cylindrical_polar(p.x as f64, p.y as f64, p.z as f64);
            (theta as f32, z as f32)
        }
    }
}

/// Finds the event with the given number, relying on events being ordered by
/// increasing number.
fn find_event(events: &[Event], event_number: i32) -> Option<&Event> {
    events
        .iter()
        .find(|e| e.number >= event_number)
        .filter(|e| e.number == event_number)
}

/// Reduces one device's signal to the value the map displays, or `None` if
/// the device does not qualify for this map.
fn map_value(device: &Device, map: &MapVariant, undecided_accepted: bool) -> Option<f32> {
    let signal = &device.signal;
    let buffer = &signal.buffer;
    let times = &buffer.times;
    let number_of_samples = buffer.number_of_samples();
    match map {
        MapVariant::SingleActivation { event_number, datum } => {
            let event = find_event(&signal.events, *event_number)?;
            if !event.status.qualifies(undecided_accepted)
                || event.time >= number_of_samples
                || *datum >= times.len()
            {
                return None;
            }
            Some((times[event.time] - times[*datum]) as f32 * 1000.0 / buffer.frequency)
        }
        MapVariant::ActivationPotential {
            event_number,
            half_peak_to_peak_width_ms,
        } => {
            let event = find_event(&signal.events, *event_number)?;
            if !event.status.qualifies(undecided_accepted) || event.time >= number_of_samples {
                return None;
            }
            let half_width = if *half_peak_to_peak_width_ms > 0.0 {
                (buffer.frequency * half_peak_to_peak_width_ms / 1000.0 + 0.5) as usize
            } else {
                0
            };
            let start = event.time.saturating_sub(half_width);
            let end = (event.time + half_width).min(number_of_samples - 1);
            let mut peak_min = buffer.raw_value(start, signal.index);
            let mut peak_max = peak_min;
            for sample in start + 1..=end {
                let value = buffer.raw_value(sample, signal.index);
                if value < peak_min {
                    peak_min = value;
                } else if value > peak_max {
                    peak_max = value;
                }
            }
            Some((peak_max - peak_min) * device.channel.gain)
        }
        MapVariant::MultipleActivation { datum } => {
            if *datum >= times.len() {
                return None;
            }
            let mut closest: Option<f32> = None;
            for event in &signal.events {
                if !event.status.qualifies(undecided_accepted) || event.time >= times.len() {
                    continue;
                }
                let u = (times[*datum] - times[event.time]) as f32 * 1000.0 / buffer.frequency;
                closest = match closest {
                    None => Some(u),
                    Some(v) if (v < 0.0 && v < u) || (v >= 0.0 && 0.0 <= u && u < v) => Some(u),
                    Some(v) => Some(v),
                };
            }
            closest
        }
        MapVariant::Potential { time_ms } => {
            if !signal.status.qualifies(undecided_accepted) || number_of_samples == 0 {
                return None;
            }
            let first = times[0] as f32 * 1000.0 / buffer.frequency;
            let last = times[number_of_samples - 1] as f32 * 1000.0 / buffer.frequency;
            if *time_ms < first || *time_ms > last {
                return None;
            }
            let potential_time_freq = time_ms * buffer.frequency / 1000.0;
            let mut before = 0;
            let mut after = number_of_samples - 1;
            while before + 1 < after {
                let middle = (before + after) / 2;
                if potential_time_freq < times[middle] as f32 {
                    after = middle;
                } else {
                    before = middle;
                }
            }
            let proportion = if before == after {
                0.5
            } else {
                (times[after] as f32 - potential_time_freq)
                    / (times[after] - times[before]) as f32
            };
            let value = proportion * buffer.raw_value(before, signal.index)
                + (1.0 - proportion) * buffer.raw_value(after, signal.index);
            Some((value - device.channel.offset) * device.channel.gain)
        }
        MapVariant::Integral { start, end } => {
            if !signal.status.qualifies(undecided_accepted) || *end >= number_of_samples {
                return None;
            }
            let samples_in_interval = (end - start + 1) as f64;
            let mut integral = -(device.channel.offset as f64) * samples_in_interval;
            for sample in *start..=*end {
                integral += buffer.raw_value(sample, signal.index) as f64;
            }
            integral *= (device.channel.gain as f64) / (buffer.frequency as f64);
            Some(integral as f32)
        }
    }
}
