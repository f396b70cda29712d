// Copyright 2026 the Dashcam Viewer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and JSON export for dashcam viewer
//! diagnostics.
//!
//! This crate provides [`TraceSink`](dashcam_core::trace::TraceSink)
//! implementations for development and post-mortem analysis on the host:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: in-memory recording of owned
//!   [`recorder::RecordedEvent`]s.
//! - [`json::export`]: writes a recorded session as a JSON array.

pub mod json;
pub mod pretty;
pub mod recorder;
