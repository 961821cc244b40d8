/////////////////////////////////////////////////////////////////////////////////////////////
//
// Defines electrode rigs: regions, devices, signal buffers, and annotated events.
//
// Created on: 14 Aug 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # rig
//!
//! In-memory model of an electrode rig: the recording regions, the devices
//! attached to them, and the sampled signals the devices point into.
//!
//! Signal storage follows the acquisition layout: one shared
//! [`SignalBuffer`] holds all channels interleaved sample by sample, and each
//! device's [`Signal`] carries its channel index into that buffer. Buffers are
//! shared between devices through [`Arc`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::geometry::{LinearTransformation, Position};
use crate::mesh::RegionType;

/// Review status of a signal or of a single annotated event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalStatus {
    Accepted,
    Rejected,
    Undecided,
}

impl SignalStatus {
    /// Whether this status qualifies for fitting, optionally counting
    /// undecided signals or events as accepted.
    pub(crate) fn qualifies(&self, undecided_accepted: bool) -> bool {
        match self {
            SignalStatus::Accepted => true,
            SignalStatus::Undecided => undecided_accepted,
            SignalStatus::Rejected => false,
        }
    }
}

/// The kind of device. Only electrodes carry a position and participate in
/// map fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceType {
    Electrode,
    Auxiliary,
}

/// An annotated activation event on a signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event number within the search, starting from 1. Events on a signal
    /// are ordered by increasing number.
    pub number: i32,
    /// Sample index of the event within the signal buffer.
    pub time: usize,
    pub status: SignalStatus,
}

/// Raw sample storage for a buffer, either as acquired 16 bit integers or as
/// calibrated floats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SignalValues {
    ShortInt(Vec<i16>),
    Float(Vec<f32>),
}

/// A block of sampled data shared by a group of devices.
///
/// Values are interleaved: the value of signal `k` at sample `t` is stored at
/// `t * number_of_signals + k`. `times` maps sample indices to acquisition
/// sample numbers; dividing by `frequency` converts to seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalBuffer {
    pub times: Vec<i32>,
    /// Sampling frequency in Hz.
    pub frequency: f32,
    pub number_of_signals: usize,
    pub values: SignalValues,
}

impl SignalBuffer {
    pub fn number_of_samples(&self) -> usize {
        let len = match &self.values {
            SignalValues::ShortInt(v) => v.len(),
            SignalValues::Float(v) => v.len(),
        };
        len / self.number_of_signals
    }

    /// Raw (uncalibrated) value of one signal at one sample.
    pub fn raw_value(&self, sample: usize, signal_index: usize) -> f32 {
        let at = sample * self.number_of_signals + signal_index;
        match &self.values {
            SignalValues::ShortInt(v) => v[at] as f32,
            SignalValues::Float(v) => v[at],
        }
    }
}

/// One device's view into a signal buffer, along with its review status and
/// annotated events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    pub buffer: Arc<SignalBuffer>,
    /// Channel index of this device within the buffer.
    pub index: usize,
    pub status: SignalStatus,
    pub events: Vec<Event>,
}

/// Calibration for a recording channel. Calibrated values are
/// `(raw - offset) * gain`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Channel {
    pub offset: f32,
    pub gain: f32,
}

impl Default for Channel {
    fn default() -> Self {
        Channel {
            offset: 0.0,
            gain: 1.0,
        }
    }
}

/// A recording device within a rig.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub name: String,
    pub device_type: DeviceType,
    /// Index of the region this device belongs to.
    pub region: usize,
    pub position: Position,
    pub channel: Channel,
    pub signal: Signal,
}

/// Geometry of a recording region, determining the mesh topology and how
/// electrode positions are projected onto it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RegionGeometry {
    /// A flat rectangular patch; electrode x and y are used directly.
    Patch,
    /// A sock over the ventricles. Positions are aligned by the transform and
    /// projected into prolate spheroidal coordinates with the given focus.
    Sock {
        focus: f32,
        transformation: LinearTransformation,
    },
    /// A cylinder around the torso; positions are projected into cylindrical
    /// polar coordinates.
    Torso,
}

impl RegionGeometry {
    pub fn region_type(&self) -> RegionType {
        match self {
            RegionGeometry::Patch => RegionType::Patch,
            RegionGeometry::Sock { .. } => RegionType::Sock,
            RegionGeometry::Torso => RegionType::Torso,
        }
    }
}

/// A named recording region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub geometry: RegionGeometry,
}

/// An electrode rig: its regions and every device attached to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rig {
    pub name: String,
    pub regions: Vec<Region>,
    pub devices: Vec<Device>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_values_are_interleaved_by_sample() {
        let buffer = SignalBuffer {
            times: vec![0, 1, 2],
            frequency: 1000.0,
            number_of_signals: 2,
            values: SignalValues::ShortInt(vec![10, 20, 11, 21, 12, 22]),
        };
        assert_eq!(buffer.number_of_samples(), 3);
        assert_eq!(buffer.raw_value(0, 0), 10.0);
        assert_eq!(buffer.raw_value(0, 1), 20.0);
        assert_eq!(buffer.raw_value(2, 0), 12.0);
        assert_eq!(buffer.raw_value(2, 1), 22.0);
    }

    #[test]
    fn status_qualification() {
        assert!(SignalStatus::Accepted.qualifies(false));
        assert!(!SignalStatus::Undecided.qualifies(false));
        assert!(SignalStatus::Undecided.qualifies(true));
        assert!(!SignalStatus::Rejected.qualifies(true));
    }
}
