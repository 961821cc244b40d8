/////////////////////////////////////////////////////////////////////////////////////////////
//
// Defines progress reporting messages, sinks, and helper functions for long-running fits.
//
// Created on: 14 Aug 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! Progress and diagnostic reporting for map fitting.

use std::fmt::Debug;
use std::sync::{mpsc, Arc};
use std::thread;

/// Events emitted while fitting a map.
#[derive(Debug, Clone)]
pub enum ProgressMsg {
    /// A data point fell outside the fitting mesh and was excluded from the
    /// fit. `index` is the position of the point in the extracted sample set.
    OutOfMeshPoint { index: usize, x: f32, y: f32 },

    /// Residual statistics of the completed fit over the data points that
    /// landed inside the mesh.
    FitStatistics {
        average_absolute_error: f32,
        maximum_absolute_error: f32,
    },

    /// Arbitrary informational message.
    Message { message: String },
}

/// Sink that consumes progress messages.
pub trait ProgressSink: Send + Sync + Debug {
    fn emit(&self, msg: ProgressMsg);
}

/// Progress sink that forwards messages over a channel. Sending blocks when
/// the channel is full, so out-of-mesh reports and statistics are never
/// dropped under backpressure.
#[derive(Debug)]
pub struct ClosureSink {
    tx: mpsc::SyncSender<ProgressMsg>,
}

impl ProgressSink for ClosureSink {
    #[inline]
    fn emit(&self, msg: ProgressMsg) {
        let _ = self.tx.send(msg);
    }
}

/// Spawns a listener thread that runs a handler closure for each progress message.
pub fn closure_sink<F>(
    buffer: usize,
    mut handler: F,
) -> (Arc<dyn ProgressSink>, thread::JoinHandle<()>)
where
    F: FnMut(ProgressMsg) + Send + 'static,
{
    let (tx, rx) = mpsc::sync_channel::<ProgressMsg>(buffer.max(1));
    let sink: Arc<dyn ProgressSink> = Arc::new(ClosureSink { tx });

    let handle = thread::spawn(move || {
        while let Ok(msg) = rx.recv() {
            handler(msg);
        }
    });

    (sink, handle)
}

/// Progress sink that collects every message into a mutex guarded vector.
/// Useful in tests and for post-fit inspection of diagnostics.
#[derive(Debug, Default)]
pub struct CollectingSink {
    messages: std::sync::Mutex<Vec<ProgressMsg>>,
}

impl CollectingSink {
    pub fn new() -> CollectingSink {
        CollectingSink::default()
    }

    pub fn take(&self) -> Vec<ProgressMsg> {
        std::mem::take(&mut self.messages.lock().unwrap())
    }
}

impl ProgressSink for CollectingSink {
    fn emit(&self, msg: ProgressMsg) {
        self.messages.lock().unwrap().push(msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn closure_sink_delivers_every_message_under_backpressure() {
        let received = Arc::new(Mutex::new(Vec::new()));
        let collected = received.clone();
        // A one-slot channel forces the sender to wait for the handler.
        let (sink, handle) = closure_sink(1, move |msg| {
            collected.lock().unwrap().push(msg);
        });
        for index in 0..64 {
            sink.emit(ProgressMsg::OutOfMeshPoint {
                index,
                x: index as f32,
                y: 0.0,
            });
        }
        drop(sink);
        handle.join().unwrap();
        let messages = received.lock().unwrap();
        assert_eq!(messages.len(), 64);
        for (expected, message) in messages.iter().enumerate() {
            match message {
                ProgressMsg::OutOfMeshPoint { index, .. } => assert_eq!(*index, expected),
                other => panic!("unexpected message {:?}", other),
            }
        }
    }
}
