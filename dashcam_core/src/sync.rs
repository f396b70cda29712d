// Copyright 2026 the Dashcam Viewer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seek planning for keeping several videos on one media time.
//!
//! Synchronizing is a two-pass affair. When the user asks for it, every
//! loaded video is seeked to the leader's position (the leader is the first
//! filled slot). Seeks and play requests complete asynchronously, so the
//! videos drift apart again by a few frames; a single deferred re-sync
//! ([`SyncConfig::resync_delay_ms`] later) re-reads the leader and corrects
//! followers that ended up further than [`SyncConfig::tolerance`] away.
//!
//! The deferred pass works from [`SlotId`] handles captured in a
//! [`SyncRequest`]. If a video is replaced or the grid is cleared while the
//! timer is pending, its handle goes stale and the video is left alone.

use alloc::vec::Vec;

use crate::grid::{SlotGrid, SlotId};

/// Timing and tolerance for the deferred re-sync.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SyncConfig {
    /// Delay between the alignment pass and the re-sync pass, in milliseconds.
    pub resync_delay_ms: u32,
    /// Drift in seconds tolerated by the re-sync pass.
    pub tolerance: f64,
}

impl SyncConfig {
    /// Half a second of settling time, a tenth of a second of tolerance.
    pub const DEFAULT: Self = Self {
        resync_delay_ms: 500,
        tolerance: 0.1,
    };
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Moves one video to a media time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeekCommand {
    /// The video to seek.
    pub slot: SlotId,
    /// Target position in seconds.
    pub to: f64,
}

/// Plans seeks that bring every position within `tolerance` of `reference`.
///
/// Non-finite positions are always corrected. A non-finite reference (the
/// leader has no usable position yet) plans nothing.
#[must_use]
pub fn plan_alignment(
    reference: f64,
    positions: impl IntoIterator<Item = (SlotId, f64)>,
    tolerance: f64,
) -> Vec<SeekCommand> {
    if !reference.is_finite() {
        return Vec::new();
    }
    positions
        .into_iter()
        .filter(|&(_, at)| !at.is_finite() || (at - reference).abs() > tolerance)
        .map(|(slot, _)| SeekCommand {
            slot,
            to: reference,
        })
        .collect()
}

/// Result of the deferred re-sync pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Resync {
    /// The leader's position when the pass ran.
    pub reference: f64,
    /// Followers that drifted too far.
    pub seeks: Vec<SeekCommand>,
}

/// Leader and followers captured when synchronization was requested.
#[derive(Clone, Debug, PartialEq)]
pub struct SyncRequest {
    leader: SlotId,
    reference: f64,
    followers: Vec<SlotId>,
}

impl SyncRequest {
    /// Captures the current leader and followers.
    ///
    /// `position` reads a video's current media time. Returns `None` unless
    /// at least two videos are loaded.
    pub fn capture(grid: &SlotGrid, mut position: impl FnMut(SlotId) -> f64) -> Option<Self> {
        let mut filled = grid.filled().map(|(id, _)| id);
        let leader = filled.next()?;
        let followers: Vec<SlotId> = filled.collect();
        if followers.is_empty() {
            return None;
        }
        Some(Self {
            leader,
            reference: position(leader),
            followers,
        })
    }

    /// Returns the leader.
    #[must_use]
    pub fn leader(&self) -> SlotId {
        self.leader
    }

    /// Returns the leader's position at capture time.
    #[must_use]
    pub fn reference(&self) -> f64 {
        self.reference
    }

    /// Returns the followers in grid order.
    #[must_use]
    pub fn followers(&self) -> &[SlotId] {
        &self.followers
    }

    /// Plans the immediate alignment: every follower to the captured
    /// reference, regardless of how close it already is.
    #[must_use]
    pub fn initial_seeks(&self) -> Vec<SeekCommand> {
        if !self.reference.is_finite() {
            return Vec::new();
        }
        self.followers
            .iter()
            .map(|&slot| SeekCommand {
                slot,
                to: self.reference,
            })
            .collect()
    }

    /// Plans the deferred re-sync against the leader's current position.
    ///
    /// Returns `None` if the leader's video is gone. Followers whose handles
    /// went stale are skipped.
    pub fn resync(
        &self,
        grid: &SlotGrid,
        mut position: impl FnMut(SlotId) -> f64,
        tolerance: f64,
    ) -> Option<Resync> {
        if !grid.is_alive(self.leader) {
            return None;
        }
        let reference = position(self.leader);
        let live = self
            .followers
            .iter()
            .copied()
            .filter(|&id| grid.is_alive(id))
            .map(|id| (id, position(id)))
            .collect::<Vec<_>>();
        Some(Resync {
            reference,
            seeks: plan_alignment(reference, live, tolerance),
        })
    }
}
