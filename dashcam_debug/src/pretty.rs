// Copyright 2026 the Dashcam Viewer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Sizes,
//! durations and resolutions use the same formatting as the info panel.

use std::io::Write;

use dashcam_core::format::{format_duration, format_file_size, format_resolution};
use dashcam_core::trace::{
    ClearedEvent, CommandEvent, ErrorEvent, FileLoadedEvent, MetadataEvent, ReadyEvent,
    SyncEvent, TraceSink, UrlEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the destination.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_ready(&mut self, e: &ReadyEvent) {
        let _ = writeln!(self.writer, "[ready] mode={} capacity={}", e.mode, e.capacity);
    }

    fn on_file_loaded(&mut self, e: &FileLoadedEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[load] slot={:?} name={:?} size={}",
            e.slot,
            e.name,
            format_file_size(e.size),
        );
    }

    fn on_url_created(&mut self, e: &UrlEvent<'_>) {
        let _ = writeln!(self.writer, "[url:create] slot={:?} {}", e.slot, e.url.as_str());
    }

    fn on_url_revoked(&mut self, e: &UrlEvent<'_>) {
        let _ = writeln!(self.writer, "[url:revoke] slot={:?} {}", e.slot, e.url.as_str());
    }

    fn on_metadata(&mut self, e: &MetadataEvent) {
        let _ = writeln!(
            self.writer,
            "[metadata] slot={:?} duration={} resolution={}",
            e.slot,
            format_duration(e.metadata.duration),
            format_resolution(e.metadata.width, e.metadata.height),
        );
    }

    fn on_command(&mut self, e: &CommandEvent) {
        let _ = writeln!(
            self.writer,
            "[command] {} targets={}",
            e.command.as_str(),
            e.targets
        );
    }

    fn on_sync(&mut self, e: &SyncEvent) {
        let _ = writeln!(
            self.writer,
            "[sync:{}] reference={:.3}s corrected={}",
            e.phase.as_str(),
            e.reference,
            e.corrected,
        );
    }

    fn on_cleared(&mut self, e: &ClearedEvent) {
        let _ = writeln!(self.writer, "[clear] revoked={}", e.revoked);
    }

    fn on_error(&mut self, e: &ErrorEvent<'_>) {
        let _ = writeln!(self.writer, "[error] {}: {}", e.context, e.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashcam_core::config::ViewerMode;
    use dashcam_core::trace::{Command, SyncPhase};

    fn output(sink: PrettyPrintSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).expect("utf-8")
    }

    #[test]
    fn pretty_print_ready_and_command() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_ready(&ReadyEvent {
            mode: ViewerMode::Panoramic,
            capacity: 9,
        });
        sink.on_command(&CommandEvent {
            command: Command::Play,
            targets: 3,
        });
        let output = output(sink);
        assert!(output.contains("[ready] mode=panoramic capacity=9"), "got: {output}");
        assert!(output.contains("[command] play targets=3"), "got: {output}");
    }

    #[test]
    fn pretty_print_sync_and_error() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_sync(&SyncEvent {
            phase: SyncPhase::Resynced,
            reference: 12.5,
            corrected: 1,
        });
        sink.on_error(&ErrorEvent {
            context: "load",
            message: "quota exceeded",
        });
        let output = output(sink);
        assert_eq!(
            output,
            "[sync:resynced] reference=12.500s corrected=1\n[error] load: quota exceeded\n"
        );
    }
}
