// Copyright 2026 the Dashcam Viewer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and copies every event into an
//! owned [`RecordedEvent`], so a session can be inspected or exported after
//! the borrowed strings of the original events are gone.

use dashcam_core::config::ViewerMode;
use dashcam_core::grid::{SlotId, VideoMetadata};
use dashcam_core::trace::{
    ClearedEvent, Command, CommandEvent, ErrorEvent, FileLoadedEvent, MetadataEvent, ReadyEvent,
    SyncEvent, SyncPhase, TraceSink, UrlEvent,
};

/// An owned copy of one trace event.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// See [`ReadyEvent`].
    Ready {
        /// Viewer variant.
        mode: ViewerMode,
        /// Maximum number of slots.
        capacity: u32,
    },
    /// See [`FileLoadedEvent`].
    FileLoaded {
        /// Slot handle after the load.
        slot: SlotId,
        /// File name.
        name: String,
        /// File size in bytes.
        size: u64,
    },
    /// An object URL was created.
    UrlCreated {
        /// Owning slot.
        slot: SlotId,
        /// The URL.
        url: String,
    },
    /// An object URL was revoked.
    UrlRevoked {
        /// Former owning slot.
        slot: SlotId,
        /// The URL.
        url: String,
    },
    /// See [`MetadataEvent`].
    Metadata {
        /// Slot handle.
        slot: SlotId,
        /// Reported metadata.
        metadata: VideoMetadata,
    },
    /// See [`CommandEvent`].
    Command {
        /// The command.
        command: Command,
        /// Videos affected.
        targets: u32,
    },
    /// See [`SyncEvent`].
    Sync {
        /// Which pass.
        phase: SyncPhase,
        /// Leader position in seconds.
        reference: f64,
        /// Followers seeked.
        corrected: u32,
    },
    /// See [`ClearedEvent`].
    Cleared {
        /// URLs released.
        revoked: u32,
    },
    /// See [`ErrorEvent`].
    Error {
        /// What was being done.
        context: String,
        /// Failure description.
        message: String,
    },
}

impl RecordedEvent {
    /// Returns a short name for the event kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Ready { .. } => "ready",
            Self::FileLoaded { .. } => "load",
            Self::UrlCreated { .. } => "url-create",
            Self::UrlRevoked { .. } => "url-revoke",
            Self::Metadata { .. } => "metadata",
            Self::Command { .. } => "command",
            Self::Sync { .. } => "sync",
            Self::Cleared { .. } => "clear",
            Self::Error { .. } => "error",
        }
    }
}

/// A [`TraceSink`] that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in arrival order.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Returns the number of URLs created minus the number revoked.
    #[must_use]
    pub fn outstanding_urls(&self) -> i64 {
        self.events.iter().fold(0, |n, e| match e {
            RecordedEvent::UrlCreated { .. } => n + 1,
            RecordedEvent::UrlRevoked { .. } => n - 1,
            RecordedEvent::Cleared { revoked } => n - i64::from(*revoked),
            _ => n,
        })
    }
}

impl TraceSink for RecorderSink {
    fn on_ready(&mut self, e: &ReadyEvent) {
        self.events.push(RecordedEvent::Ready {
            mode: e.mode,
            capacity: e.capacity,
        });
    }

    fn on_file_loaded(&mut self, e: &FileLoadedEvent<'_>) {
        self.events.push(RecordedEvent::FileLoaded {
            slot: e.slot,
            name: e.name.to_owned(),
            size: e.size,
        });
    }

    fn on_url_created(&mut self, e: &UrlEvent<'_>) {
        self.events.push(RecordedEvent::UrlCreated {
            slot: e.slot,
            url: e.url.as_str().to_owned(),
        });
    }

    fn on_url_revoked(&mut self, e: &UrlEvent<'_>) {
        self.events.push(RecordedEvent::UrlRevoked {
            slot: e.slot,
            url: e.url.as_str().to_owned(),
        });
    }

    fn on_metadata(&mut self, e: &MetadataEvent) {
        self.events.push(RecordedEvent::Metadata {
            slot: e.slot,
            metadata: e.metadata,
        });
    }

    fn on_command(&mut self, e: &CommandEvent) {
        self.events.push(RecordedEvent::Command {
            command: e.command,
            targets: e.targets,
        });
    }

    fn on_sync(&mut self, e: &SyncEvent) {
        self.events.push(RecordedEvent::Sync {
            phase: e.phase,
            reference: e.reference,
            corrected: e.corrected,
        });
    }

    fn on_cleared(&mut self, e: &ClearedEvent) {
        self.events.push(RecordedEvent::Cleared { revoked: e.revoked });
    }

    fn on_error(&mut self, e: &ErrorEvent<'_>) {
        self.events.push(RecordedEvent::Error {
            context: e.context.to_owned(),
            message: e.message.to_owned(),
        });
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use dashcam_core::backend::UrlRegistry;
    use dashcam_core::error::ViewerError;
    use dashcam_core::grid::{FileInfo, ObjectUrl, SlotGrid};
    use dashcam_core::layout::Layout;
    use dashcam_core::sync::SyncRequest;
    use dashcam_core::trace::Tracer;

    #[derive(Default)]
    struct CountingUrls {
        next: u32,
    }

    impl UrlRegistry for CountingUrls {
        type Source = str;

        fn create(&mut self, source: &str) -> Result<ObjectUrl, ViewerError> {
            self.next += 1;
            Ok(ObjectUrl::new(format!("blob:{}:{source}", self.next)))
        }

        fn revoke(&mut self, _url: &ObjectUrl) {}
    }

    /// Drives a small panoramic session through a tracer and returns the
    /// recording.
    pub(crate) fn sample_session() -> RecorderSink {
        let mut sink = RecorderSink::new();
        let mut grid = SlotGrid::new(Layout::Strip, 6);
        let mut urls = CountingUrls::default();
        {
            let mut tracer = Tracer::new(&mut sink);
            tracer.ready(&ReadyEvent {
                mode: ViewerMode::PanoramicRow,
                capacity: grid.capacity(),
            });

            for (i, name) in ["front.mp4", "rear.mp4", "front-2.mp4"].iter().enumerate() {
                let index = if i == 2 { 0 } else { u32::try_from(i).expect("small") };
                let outcome = grid
                    .load(index, FileInfo::new(*name, 1024), *name, &mut urls)
                    .expect("load");
                if let Some(old) = &outcome.replaced {
                    tracer.url_revoked(&UrlEvent {
                        slot: outcome.slot,
                        url: old,
                    });
                }
                tracer.url_created(&UrlEvent {
                    slot: outcome.slot,
                    url: &outcome.url,
                });
                tracer.file_loaded(&FileLoadedEvent {
                    slot: outcome.slot,
                    name: *name,
                    size: 1024,
                });
            }

            let request = SyncRequest::capture(&grid, |_| 2.0).expect("two videos");
            tracer.sync(&SyncEvent {
                phase: SyncPhase::Aligned,
                reference: request.reference(),
                corrected: u32::try_from(request.initial_seeks().len()).expect("small"),
            });

            let revoked = grid.clear_all(&mut urls);
            tracer.cleared(&ClearedEvent { revoked });
        }
        sink
    }

    #[test]
    fn records_events_in_order() {
        let sink = sample_session();
        let kinds: Vec<_> = sink.events().iter().map(RecordedEvent::kind).collect();
        assert_eq!(
            kinds,
            [
                "ready",
                "url-create",
                "load",
                "url-create",
                "load",
                "url-revoke",
                "url-create",
                "load",
                "sync",
                "clear",
            ]
        );
    }

    #[test]
    fn replacing_and_clearing_leaves_no_urls() {
        let sink = sample_session();
        assert_eq!(sink.outstanding_urls(), 0);
        assert!(matches!(
            sink.events().last(),
            Some(RecordedEvent::Cleared { revoked: 2 })
        ));
    }

    #[test]
    fn replacement_revokes_the_first_url() {
        let sink = sample_session();
        let urls: Vec<(&str, &str)> = sink
            .events()
            .iter()
            .filter_map(|e| match e {
                RecordedEvent::UrlCreated { url, .. } => Some(("create", url.as_str())),
                RecordedEvent::UrlRevoked { url, .. } => Some(("revoke", url.as_str())),
                _ => None,
            })
            .collect();
        assert_eq!(
            urls,
            [
                ("create", "blob:1:front.mp4"),
                ("create", "blob:2:rear.mp4"),
                ("revoke", "blob:1:front.mp4"),
                ("create", "blob:3:front-2.mp4"),
            ]
        );
    }

    #[test]
    fn strings_are_copied() {
        let mut sink = RecorderSink::new();
        {
            let message = String::from("denied");
            sink.on_error(&ErrorEvent {
                context: "load",
                message: &message,
            });
        }
        assert_eq!(
            sink.into_events(),
            [RecordedEvent::Error {
                context: "load".into(),
                message: "denied".into(),
            }]
        );
    }
}
