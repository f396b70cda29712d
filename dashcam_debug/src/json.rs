// Copyright 2026 the Dashcam Viewer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded sessions.
//!
//! [`export`] writes the events of a [`RecorderSink`](super::recorder::RecorderSink)
//! as a JSON array, one object per event with an `"event"` kind and
//! `"seq"` position. Slots are written as `{ "index", "generation" }`.

use std::io::{self, Write};

use serde_json::{Value, json};

use dashcam_core::grid::SlotId;

use crate::recorder::RecordedEvent;

/// Exports recorded events as a pretty-printed JSON array.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let values: Vec<Value> = events
        .iter()
        .enumerate()
        .map(|(seq, event)| to_value(seq, event))
        .collect();
    serde_json::to_writer_pretty(&mut *writer, &values).map_err(io::Error::from)?;
    writeln!(writer)
}

/// Converts one event to its JSON object.
#[must_use]
pub fn to_value(seq: usize, event: &RecordedEvent) -> Value {
    let mut value = match event {
        RecordedEvent::Ready { mode, capacity } => json!({
            "mode": mode.as_str(),
            "capacity": capacity,
        }),
        RecordedEvent::FileLoaded { slot, name, size } => json!({
            "slot": slot_value(*slot),
            "name": name,
            "size": size,
        }),
        RecordedEvent::UrlCreated { slot, url } | RecordedEvent::UrlRevoked { slot, url } => {
            json!({
                "slot": slot_value(*slot),
                "url": url,
            })
        }
        RecordedEvent::Metadata { slot, metadata } => json!({
            "slot": slot_value(*slot),
            // NaN and infinities have no JSON form.
            "duration": metadata.duration.is_finite().then_some(metadata.duration),
            "width": metadata.width,
            "height": metadata.height,
        }),
        RecordedEvent::Command { command, targets } => json!({
            "command": command.as_str(),
            "targets": targets,
        }),
        RecordedEvent::Sync {
            phase,
            reference,
            corrected,
        } => json!({
            "phase": phase.as_str(),
            "reference": reference.is_finite().then_some(*reference),
            "corrected": corrected,
        }),
        RecordedEvent::Cleared { revoked } => json!({ "revoked": revoked }),
        RecordedEvent::Error { context, message } => json!({
            "context": context,
            "message": message,
        }),
    };
    if let Value::Object(map) = &mut value {
        map.insert("event".into(), Value::from(event.kind()));
        map.insert("seq".into(), Value::from(seq));
    }
    value
}

fn slot_value(slot: SlotId) -> Value {
    json!({
        "index": slot.index(),
        "generation": slot.generation(),
    })
}
