// Copyright 2026 the Dashcam Viewer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console trace output.
//!
//! [`ConsoleSink`] implements [`TraceSink`] and writes one line per event with
//! `console.log`, or `console.error` for failures.

use alloc::format;
use alloc::string::String;

use dashcam_core::format::{format_duration, format_file_size, format_resolution};
use dashcam_core::trace::{
    ClearedEvent, CommandEvent, ErrorEvent, FileLoadedEvent, MetadataEvent, ReadyEvent,
    SyncEvent, TraceSink, UrlEvent,
};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Writes trace events to the browser console.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink {
    /// Also log object URL creation and revocation.
    pub verbose: bool,
}

impl ConsoleSink {
    /// Creates a sink that skips object URL events.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink that logs every event.
    #[must_use]
    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

fn log(line: &str) {
    console::log_1(&JsValue::from_str(line));
}

/// Formats the ready line.
pub(crate) fn ready_line(e: &ReadyEvent) -> String {
    format!(
        "Dashcam Viewer initialized successfully! ({}, {} slot{})",
        e.mode,
        e.capacity,
        if e.capacity == 1 { "" } else { "s" },
    )
}

impl TraceSink for ConsoleSink {
    fn on_ready(&mut self, e: &ReadyEvent) {
        log(&ready_line(e));
    }

    fn on_file_loaded(&mut self, e: &FileLoadedEvent<'_>) {
        log(&format!(
            "[load] slot={:?} {} ({})",
            e.slot,
            e.name,
            format_file_size(e.size),
        ));
    }

    fn on_url_created(&mut self, e: &UrlEvent<'_>) {
        if self.verbose {
            log(&format!("[url:create] slot={:?} {}", e.slot, e.url.as_str()));
        }
    }

    fn on_url_revoked(&mut self, e: &UrlEvent<'_>) {
        if self.verbose {
            log(&format!("[url:revoke] slot={:?} {}", e.slot, e.url.as_str()));
        }
    }

    fn on_metadata(&mut self, e: &MetadataEvent) {
        log(&format!(
            "[metadata] slot={:?} {} {}",
            e.slot,
            format_duration(e.metadata.duration),
            format_resolution(e.metadata.width, e.metadata.height),
        ));
    }

    fn on_command(&mut self, e: &CommandEvent) {
        log(&format!("[{}] videos={}", e.command.as_str(), e.targets));
    }

    fn on_sync(&mut self, e: &SyncEvent) {
        log(&format!(
            "[sync:{}] reference={:.3}s corrected={}",
            e.phase.as_str(),
            e.reference,
            e.corrected,
        ));
    }

    fn on_cleared(&mut self, e: &ClearedEvent) {
        log(&format!("[clear] revoked={}", e.revoked));
    }

    fn on_error(&mut self, e: &ErrorEvent<'_>) {
        console::error_1(&JsValue::from_str(&format!(
            "[error] {}: {}",
            e.context, e.message
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashcam_core::config::ViewerMode;

    #[test]
    fn only_verbose_sinks_log_urls() {
        assert!(!ConsoleSink::new().verbose);
        assert!(ConsoleSink::verbose().verbose);
    }

    #[test]
    fn ready_line_mentions_mode_and_capacity() {
        let line = ready_line(&ReadyEvent {
            mode: ViewerMode::PanoramicRow,
            capacity: 6,
        });
        assert_eq!(
            line,
            "Dashcam Viewer initialized successfully! (panoramic-row, 6 slots)"
        );
        let single = ready_line(&ReadyEvent {
            mode: ViewerMode::Single,
            capacity: 1,
        });
        assert!(single.ends_with("(single, 1 slot)"));
    }
}
