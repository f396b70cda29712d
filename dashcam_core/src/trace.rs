// Copyright 2026 the Dashcam Viewer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for viewer actions.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! viewer's handlers call as they load files, juggle object URLs and run
//! commands. All method bodies default to no-ops, so implementing only the
//! events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! Events borrow their strings from the caller. Sinks that keep events around
//! copy what they need.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::config::ViewerMode;
use crate::grid::{ObjectUrl, SlotId, VideoMetadata};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// A toolbar command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Play every loaded video.
    Play,
    /// Pause every loaded video.
    Pause,
    /// Enter fullscreen.
    Fullscreen,
    /// Align loaded videos.
    Sync,
    /// Unload everything.
    ClearAll,
}

impl Command {
    /// Returns a short lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Fullscreen => "fullscreen",
            Self::Sync => "sync",
            Self::ClearAll => "clear-all",
        }
    }
}

/// Which synchronization pass ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SyncPhase {
    /// The immediate pass: every follower seeked to the leader.
    Aligned,
    /// The deferred pass: only drifted followers corrected.
    Resynced,
}

impl SyncPhase {
    /// Returns a short lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aligned => "aligned",
            Self::Resynced => "resynced",
        }
    }
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted once the viewer is wired up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReadyEvent {
    /// Which variant started.
    pub mode: ViewerMode,
    /// Maximum number of slots.
    pub capacity: u32,
}

/// Emitted after a file is loaded into a slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FileLoadedEvent<'a> {
    /// The slot's new handle.
    pub slot: SlotId,
    /// File name.
    pub name: &'a str,
    /// File size in bytes.
    pub size: u64,
}

/// Emitted when an object URL is created or revoked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UrlEvent<'a> {
    /// The slot the URL belongs (or belonged) to.
    pub slot: SlotId,
    /// The URL.
    pub url: &'a ObjectUrl,
}

/// Emitted when a video reports its metadata.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetadataEvent {
    /// The slot.
    pub slot: SlotId,
    /// What the video reported.
    pub metadata: VideoMetadata,
}

/// Emitted when a toolbar command runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandEvent {
    /// The command.
    pub command: Command,
    /// How many videos it was applied to.
    pub targets: u32,
}

/// Emitted after a synchronization pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SyncEvent {
    /// Which pass.
    pub phase: SyncPhase,
    /// The leader's position in seconds.
    pub reference: f64,
    /// Followers that were seeked.
    pub corrected: u32,
}

/// Emitted after "clear all".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClearedEvent {
    /// Object URLs released.
    pub revoked: u32,
}

/// Emitted when an action fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ErrorEvent<'a> {
    /// What was being done, e.g. `"load"`.
    pub context: &'a str,
    /// Human-readable failure.
    pub message: &'a str,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the viewer.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called once the viewer is ready.
    fn on_ready(&mut self, e: &ReadyEvent) {
        _ = e;
    }

    /// Called after a file is loaded.
    fn on_file_loaded(&mut self, e: &FileLoadedEvent<'_>) {
        _ = e;
    }

    /// Called after an object URL is created.
    fn on_url_created(&mut self, e: &UrlEvent<'_>) {
        _ = e;
    }

    /// Called after an object URL is revoked.
    fn on_url_revoked(&mut self, e: &UrlEvent<'_>) {
        _ = e;
    }

    /// Called when a video reports metadata.
    fn on_metadata(&mut self, e: &MetadataEvent) {
        _ = e;
    }

    /// Called when a toolbar command runs.
    fn on_command(&mut self, e: &CommandEvent) {
        _ = e;
    }

    /// Called after a synchronization pass.
    fn on_sync(&mut self, e: &SyncEvent) {
        _ = e;
    }

    /// Called after "clear all".
    fn on_cleared(&mut self, e: &ClearedEvent) {
        _ = e;
    }

    /// Called when an action fails.
    fn on_error(&mut self, e: &ErrorEvent<'_>) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

/// Expands to a `Tracer` method that forwards one event to the sink.
macro_rules! forward {
    ($(#[$doc:meta])* $name:ident => $hook:ident($ty:ty)) => {
        $(#[$doc])*
        #[inline]
        pub fn $name(&mut self, e: &$ty) {
            #[cfg(feature = "trace")]
            if let Some(s) = &mut self.sink {
                s.$hook(e);
            }
            #[cfg(not(feature = "trace"))]
            {
                _ = e;
            }
        }
    };
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    forward!(
        /// Emits a [`ReadyEvent`].
        ready => on_ready(ReadyEvent)
    );
    forward!(
        /// Emits a [`FileLoadedEvent`].
        file_loaded => on_file_loaded(FileLoadedEvent<'_>)
    );
    forward!(
        /// Emits a [`UrlEvent`] for a created URL.
        url_created => on_url_created(UrlEvent<'_>)
    );
    forward!(
        /// Emits a [`UrlEvent`] for a revoked URL.
        url_revoked => on_url_revoked(UrlEvent<'_>)
    );
    forward!(
        /// Emits a [`MetadataEvent`].
        metadata => on_metadata(MetadataEvent)
    );
    forward!(
        /// Emits a [`CommandEvent`].
        command => on_command(CommandEvent)
    );
    forward!(
        /// Emits a [`SyncEvent`].
        sync => on_sync(SyncEvent)
    );
    forward!(
        /// Emits a [`ClearedEvent`].
        cleared => on_cleared(ClearedEvent)
    );
    forward!(
        /// Emits an [`ErrorEvent`].
        error => on_error(ErrorEvent<'_>)
    );
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
