// Copyright 2026 the Dashcam Viewer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Array-backed slot storage with object URL lifecycle management.
//!
//! A [`SlotGrid`] holds one [`Slot`] per grid position. Slots are created
//! lazily: growable layouts always keep exactly one empty slot after the last
//! filled one (until capacity is reached), and [`clear_all`](SlotGrid::clear_all)
//! destroys every slot in bulk before recreating a single empty one.
//!
//! Every slot that holds a video also holds the object URL its video element
//! plays from. The grid revokes that URL through the [`UrlRegistry`] before
//! the slot is overwritten, unloaded or cleared, so each created URL is
//! released exactly once.
//!
//! Mutations are not pushed to the backend directly. They accumulate as raw
//! slot indices and are drained with [`take_changes`](SlotGrid::take_changes),
//! which backends consume through [`Presenter::apply`].
//!
//! [`Presenter::apply`]: crate::backend::Presenter::apply

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::backend::UrlRegistry;
use crate::error::ViewerError;
use crate::layout::{GridTemplate, Layout};

/// A handle to the content of one grid slot.
///
/// Contains both the slot index and a generation counter. The generation
/// changes whenever the slot's content changes or the slot is destroyed, so
/// handles captured by deferred work (metadata callbacks, re-sync timers) can
/// detect that the video they refer to is gone.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId {
    pub(crate) idx: u32,
    pub(crate) generation: u32,
}

impl SlotId {
    /// Returns the raw slot index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// Returns the generation counter.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotId({}@gen{})", self.idx, self.generation)
    }
}

/// Name and size of a user-selected file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileInfo {
    /// File name as reported by the file picker.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
}

impl FileInfo {
    /// Creates a new file description.
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// A playable URL created for a local file (a `blob:` URL on the web).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    /// Wraps a URL returned by the platform.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Returns the URL text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectUrl({})", self.0)
    }
}

/// Properties read from a video element once its metadata has loaded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VideoMetadata {
    /// Duration in seconds. Non-finite for streams of unknown length.
    pub duration: f64,
    /// Intrinsic width in pixels.
    pub width: u32,
    /// Intrinsic height in pixels.
    pub height: u32,
}

/// Contents of one grid position.
#[derive(Clone, Debug, Default)]
pub struct Slot {
    file: Option<FileInfo>,
    url: Option<ObjectUrl>,
    metadata: Option<VideoMetadata>,
}

impl Slot {
    /// Returns the loaded file, if any.
    #[must_use]
    pub fn file(&self) -> Option<&FileInfo> {
        self.file.as_ref()
    }

    /// Returns the object URL the slot's video plays from, if any.
    #[must_use]
    pub fn url(&self) -> Option<&ObjectUrl> {
        self.url.as_ref()
    }

    /// Returns the metadata reported for the current video, if loaded yet.
    #[must_use]
    pub fn metadata(&self) -> Option<VideoMetadata> {
        self.metadata
    }

    /// Returns whether the slot holds a video.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.url.is_some()
    }
}

/// The set of changes drained by a single [`SlotGrid::take_changes`] call.
///
/// Indices are raw slot positions. Backends apply removals first, then
/// additions, then content updates; an index may appear in both `removed`
/// and `added` when a slot was destroyed and recreated (e.g. by
/// [`SlotGrid::clear_all`]).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridChanges {
    /// Slots created since the last drain.
    pub added: Vec<u32>,
    /// Slots destroyed since the last drain.
    pub removed: Vec<u32>,
    /// Slots that received a new video.
    pub loaded: Vec<u32>,
    /// Slots whose video was removed without destroying the slot.
    pub unloaded: Vec<u32>,
    /// Slots whose metadata arrived.
    pub metadata: Vec<u32>,
    /// Whether the grid template differs from the previous drain.
    pub layout_changed: bool,
}

impl GridChanges {
    /// Returns `true` if nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
            && self.removed.is_empty()
            && self.loaded.is_empty()
            && self.unloaded.is_empty()
            && self.metadata.is_empty()
            && !self.layout_changed
    }

    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.added.clear();
        self.removed.clear();
        self.loaded.clear();
        self.unloaded.clear();
        self.metadata.clear();
        self.layout_changed = false;
    }
}

/// What a successful [`SlotGrid::load`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadOutcome {
    /// Handle to the newly loaded content.
    pub slot: SlotId,
    /// The URL created for the new file.
    pub url: ObjectUrl,
    /// The URL that was revoked because the slot already held a video.
    pub replaced: Option<ObjectUrl>,
    /// Whether a trailing empty slot was appended.
    pub grew: bool,
}

/// Slot storage for one viewer.
#[derive(Debug)]
pub struct SlotGrid {
    layout: Layout,
    capacity: u32,
    slots: Vec<Slot>,
    // Indexed by slot position; never shrinks, so a recreated slot does not
    // reuse a generation a stale handle might still carry.
    generation: Vec<u32>,
    pending: GridChanges,
    presented_template: Option<GridTemplate>,
}

impl SlotGrid {
    /// Creates a grid holding one empty slot.
    ///
    /// `capacity` is clamped to at least 1; [`Layout::Single`] always has a
    /// capacity of 1.
    #[must_use]
    pub fn new(layout: Layout, capacity: u32) -> Self {
        let capacity = if layout.grows() { capacity.max(1) } else { 1 };
        let mut grid = Self {
            layout,
            capacity,
            slots: Vec::new(),
            generation: Vec::new(),
            pending: GridChanges::default(),
            presented_template: None,
        };
        grid.push_slot();
        grid
    }

    /// Returns the layout.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns the maximum number of slots.
    #[must_use]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the number of slots, empty ones included.
    #[must_use]
    pub fn slot_count(&self) -> u32 {
        to_index(self.slots.len())
    }

    /// Returns the number of slots holding a video.
    #[must_use]
    pub fn filled_count(&self) -> u32 {
        to_index(self.slots.iter().filter(|s| s.is_filled()).count())
    }

    /// Returns `true` if every slot up to capacity holds a video.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.filled_count() == self.capacity
    }

    /// Returns the current grid template.
    #[must_use]
    pub fn template(&self) -> GridTemplate {
        self.layout.template(self.slot_count())
    }

    /// Returns the slot at `index`.
    #[must_use]
    pub fn slot(&self, index: u32) -> Option<&Slot> {
        self.slots.get(index as usize)
    }

    /// Returns a handle to the current content of the slot at `index`.
    #[must_use]
    pub fn slot_id(&self, index: u32) -> Option<SlotId> {
        (index < self.slot_count()).then(|| SlotId {
            idx: index,
            generation: self.generation[index as usize],
        })
    }

    /// Returns whether `id` still refers to the current content of its slot.
    #[must_use]
    pub fn is_alive(&self, id: SlotId) -> bool {
        id.idx < self.slot_count() && self.generation[id.idx as usize] == id.generation
    }

    /// Returns the slot `id` refers to, if the handle is still alive.
    #[must_use]
    pub fn get(&self, id: SlotId) -> Option<&Slot> {
        if self.is_alive(id) {
            self.slots.get(id.idx as usize)
        } else {
            None
        }
    }

    /// Iterates over filled slots in grid order.
    pub fn filled(&self) -> impl Iterator<Item = (SlotId, &Slot)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_filled())
            .map(|(i, slot)| {
                (
                    SlotId {
                        idx: to_index(i),
                        generation: self.generation[i],
                    },
                    slot,
                )
            })
    }

    /// Returns the first filled slot, which acts as the sync leader.
    #[must_use]
    pub fn first_filled(&self) -> Option<SlotId> {
        self.filled().next().map(|(id, _)| id)
    }

    /// Returns the index of the first empty slot.
    #[must_use]
    pub fn first_empty(&self) -> Option<u32> {
        self.slots
            .iter()
            .position(|s| !s.is_filled())
            .map(to_index)
    }

    /// Loads a file into the slot at `index`.
    ///
    /// The new URL is created first; if the slot already held a video its URL
    /// is revoked afterwards, so a failed creation leaves the slot untouched.
    /// Loading into the trailing slot of a growable layout appends a new empty
    /// slot unless the grid is at capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::SlotOutOfRange`] for an index past the end, or
    /// the registry's error if URL creation fails.
    pub fn load<R: UrlRegistry>(
        &mut self,
        index: u32,
        file: FileInfo,
        source: &R::Source,
        urls: &mut R,
    ) -> Result<LoadOutcome, ViewerError> {
        let len = self.slot_count();
        if index >= len {
            return Err(ViewerError::SlotOutOfRange { index, len });
        }

        let url = urls.create(source)?;
        let slot = &mut self.slots[index as usize];
        let replaced = slot.url.take();
        if let Some(old) = &replaced {
            urls.revoke(old);
        }
        slot.file = Some(file);
        slot.url = Some(url.clone());
        slot.metadata = None;

        self.generation[index as usize] += 1;
        remove_index(&mut self.pending.unloaded, index);
        remove_index(&mut self.pending.metadata, index);
        push_unique(&mut self.pending.loaded, index);

        let grew = self.layout.grows() && index + 1 == len && len < self.capacity;
        if grew {
            self.push_slot();
        }

        Ok(LoadOutcome {
            slot: SlotId {
                idx: index,
                generation: self.generation[index as usize],
            },
            url,
            replaced,
            grew,
        })
    }

    /// Removes the video from one slot and returns its revoked URL.
    ///
    /// Surplus empty slots at the end of the grid are destroyed so that
    /// exactly one trailing empty slot remains.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::StaleSlot`] if `id` no longer refers to the
    /// slot's content and [`ViewerError::EmptySlot`] if there is nothing to
    /// unload.
    pub fn unload<R: UrlRegistry>(
        &mut self,
        id: SlotId,
        urls: &mut R,
    ) -> Result<ObjectUrl, ViewerError> {
        if !self.is_alive(id) {
            return Err(ViewerError::StaleSlot(id));
        }
        let slot = &mut self.slots[id.idx as usize];
        let Some(url) = slot.url.take() else {
            return Err(ViewerError::EmptySlot(id));
        };
        urls.revoke(&url);
        slot.file = None;
        slot.metadata = None;

        self.generation[id.idx as usize] += 1;
        remove_index(&mut self.pending.loaded, id.idx);
        remove_index(&mut self.pending.metadata, id.idx);
        push_unique(&mut self.pending.unloaded, id.idx);

        self.trim_trailing();
        Ok(url)
    }

    /// Revokes every object URL and destroys all slots, leaving a single
    /// empty slot. Returns the number of URLs revoked.
    pub fn clear_all<R: UrlRegistry>(&mut self, urls: &mut R) -> u32 {
        let mut revoked = 0;
        while let Some(slot) = self.slots.pop() {
            if let Some(url) = &slot.url {
                urls.revoke(url);
                revoked += 1;
            }
            let idx = self.slots.len();
            self.retire(to_index(idx));
        }
        self.push_slot();
        revoked
    }

    /// Records metadata for the video `id` refers to.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::StaleSlot`] if the video was replaced or
    /// cleared since `id` was taken, and [`ViewerError::EmptySlot`] if the
    /// slot holds no video.
    pub fn set_metadata(&mut self, id: SlotId, metadata: VideoMetadata) -> Result<(), ViewerError> {
        if !self.is_alive(id) {
            return Err(ViewerError::StaleSlot(id));
        }
        let slot = &mut self.slots[id.idx as usize];
        if !slot.is_filled() {
            return Err(ViewerError::EmptySlot(id));
        }
        slot.metadata = Some(metadata);
        push_unique(&mut self.pending.metadata, id.idx);
        Ok(())
    }

    /// Drains the changes accumulated since the previous call.
    pub fn take_changes(&mut self) -> GridChanges {
        let template = self.template();
        self.pending.layout_changed = self.presented_template != Some(template);
        self.presented_template = Some(template);
        core::mem::take(&mut self.pending)
    }

    fn push_slot(&mut self) {
        let idx = self.slots.len();
        if self.generation.len() <= idx {
            self.generation.push(0);
        }
        self.slots.push(Slot::default());
        push_unique(&mut self.pending.added, to_index(idx));
    }

    /// Bookkeeping for a slot that was just popped off the end.
    fn retire(&mut self, idx: u32) {
        self.generation[idx as usize] += 1;
        remove_index(&mut self.pending.loaded, idx);
        remove_index(&mut self.pending.unloaded, idx);
        remove_index(&mut self.pending.metadata, idx);
        // A slot created and destroyed within one drain never reached the
        // presenter.
        if !remove_index(&mut self.pending.added, idx) {
            push_unique(&mut self.pending.removed, idx);
        }
    }

    fn trim_trailing(&mut self) {
        while self.slots.len() > 1 {
            let n = self.slots.len();
            if self.slots[n - 1].is_filled() || self.slots[n - 2].is_filled() {
                break;
            }
            self.slots.pop();
            self.retire(to_index(n - 1));
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "slot counts are bounded by a u32 capacity"
)]
const fn to_index(i: usize) -> u32 {
    i as u32
}

fn push_unique(list: &mut Vec<u32>, idx: u32) {
    if !list.contains(&idx) {
        list.push(idx);
    }
}

fn remove_index(list: &mut Vec<u32>, idx: u32) -> bool {
    let before = list.len();
    list.retain(|&i| i != idx);
    list.len() != before
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString as _;
    use alloc::vec;

    /// Registry double that hands out `blob:N` URLs and records revocations.
    #[derive(Debug, Default)]
    pub(crate) struct MockUrls {
        pub(crate) created: Vec<String>,
        pub(crate) revoked: Vec<String>,
        pub(crate) fail_next: bool,
    }

    impl MockUrls {
        pub(crate) fn live(&self) -> usize {
            self.created.len() - self.revoked.len()
        }
    }

    impl UrlRegistry for MockUrls {
        type Source = str;

        fn create(&mut self, source: &str) -> Result<ObjectUrl, ViewerError> {
            if self.fail_next {
                self.fail_next = false;
                return Err(ViewerError::ObjectUrl("quota".to_string()));
            }
            let url = format!("blob:{}:{source}", self.created.len());
            self.created.push(url.clone());
            Ok(ObjectUrl::new(url))
        }

        fn revoke(&mut self, url: &ObjectUrl) {
            self.revoked.push(url.as_str().to_string());
        }
    }

    pub(crate) fn load(grid: &mut SlotGrid, urls: &mut MockUrls, index: u32, name: &str) -> SlotId {
        grid.load(index, FileInfo::new(name, 1024), name, urls)
            .expect("load succeeds")
            .slot
    }

    #[test]
    fn new_grid_has_one_empty_slot() {
        let mut grid = SlotGrid::new(Layout::Rows { columns: 3 }, 9);
        assert_eq!(grid.slot_count(), 1);
        assert_eq!(grid.filled_count(), 0);
        assert_eq!(grid.first_empty(), Some(0));

        let changes = grid.take_changes();
        assert_eq!(changes.added, vec![0]);
        assert!(changes.layout_changed, "first drain reports the template");
        assert!(grid.take_changes().is_empty());
    }

    #[test]
    fn loading_trailing_slot_grows_grid() {
        let mut grid = SlotGrid::new(Layout::Strip, 6);
        let mut urls = MockUrls::default();
        let _ = grid.take_changes();

        let outcome = grid
            .load(0, FileInfo::new("front.mp4", 10), "front", &mut urls)
            .expect("load");
        assert!(outcome.grew);
        assert_eq!(outcome.replaced, None);
        assert_eq!(grid.slot_count(), 2);
        assert!(!grid.slot(1).expect("trailing slot").is_filled());

        let changes = grid.take_changes();
        assert_eq!(changes.loaded, vec![0]);
        assert_eq!(changes.added, vec![1]);
        assert!(changes.layout_changed);
    }

    #[test]
    fn replacing_revokes_previous_url_first() {
        let mut grid = SlotGrid::new(Layout::Rows { columns: 2 }, 4);
        let mut urls = MockUrls::default();
        let first = load(&mut grid, &mut urls, 0, "a");

        let outcome = grid
            .load(0, FileInfo::new("b.mp4", 5), "b", &mut urls)
            .expect("replace");
        assert_eq!(outcome.replaced.as_ref().map(ObjectUrl::as_str), Some("blob:0:a"));
        assert_eq!(urls.revoked, vec!["blob:0:a"]);
        assert!(!outcome.grew, "replacing does not grow");
        assert_eq!(grid.slot_count(), 2);
        assert!(!grid.is_alive(first), "old handle goes stale");
        assert_eq!(
            grid.get(outcome.slot).and_then(Slot::file).map(|f| f.name.as_str()),
            Some("b.mp4")
        );
    }

    #[test]
    fn failed_creation_leaves_slot_untouched() {
        let mut grid = SlotGrid::new(Layout::Strip, 3);
        let mut urls = MockUrls::default();
        let id = load(&mut grid, &mut urls, 0, "a");

        urls.fail_next = true;
        let err = grid
            .load(0, FileInfo::new("b.mp4", 5), "b", &mut urls)
            .expect_err("registry failure propagates");
        assert!(matches!(err, ViewerError::ObjectUrl(_)));
        assert!(grid.is_alive(id));
        assert!(urls.revoked.is_empty(), "old URL kept when creation fails");
        assert_eq!(grid.slot_count(), 2);
    }

    #[test]
    fn capacity_stops_growth() {
        let mut grid = SlotGrid::new(Layout::Rows { columns: 2 }, 2);
        let mut urls = MockUrls::default();
        load(&mut grid, &mut urls, 0, "a");
        let outcome = grid
            .load(1, FileInfo::new("b", 1), "b", &mut urls)
            .expect("load");
        assert!(!outcome.grew);
        assert_eq!(grid.slot_count(), 2);
        assert!(grid.is_full());
        assert_eq!(grid.first_empty(), None);
    }

    #[test]
    fn single_layout_never_grows() {
        let mut grid = SlotGrid::new(Layout::Single, 8);
        let mut urls = MockUrls::default();
        assert_eq!(grid.capacity(), 1);
        load(&mut grid, &mut urls, 0, "a");
        load(&mut grid, &mut urls, 0, "b");
        assert_eq!(grid.slot_count(), 1);
        assert_eq!(urls.live(), 1);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut grid = SlotGrid::new(Layout::Strip, 4);
        let mut urls = MockUrls::default();
        let err = grid
            .load(3, FileInfo::new("x", 1), "x", &mut urls)
            .expect_err("index past the end");
        assert_eq!(err, ViewerError::SlotOutOfRange { index: 3, len: 1 });
        assert!(urls.created.is_empty(), "no URL created for a bad index");
    }

    #[test]
    fn clear_all_revokes_everything_and_resets() {
        let mut grid = SlotGrid::new(Layout::Rows { columns: 3 }, 9);
        let mut urls = MockUrls::default();
        let a = load(&mut grid, &mut urls, 0, "a");
        load(&mut grid, &mut urls, 1, "b");
        load(&mut grid, &mut urls, 2, "c");
        let _ = grid.take_changes();

        let revoked = grid.clear_all(&mut urls);
        assert_eq!(revoked, 3);
        assert_eq!(urls.live(), 0);
        assert_eq!(grid.slot_count(), 1);
        assert_eq!(grid.filled_count(), 0);
        assert!(!grid.is_alive(a), "handles from before the clear are stale");

        let changes = grid.take_changes();
        assert_eq!(changes.removed, vec![3, 2, 1, 0]);
        assert_eq!(changes.added, vec![0]);
        assert!(changes.loaded.is_empty());
        assert!(changes.layout_changed);
    }

    #[test]
    fn clear_before_drain_cancels_pending_work() {
        let mut grid = SlotGrid::new(Layout::Strip, 4);
        let mut urls = MockUrls::default();
        let _ = grid.take_changes();
        load(&mut grid, &mut urls, 0, "a");
        grid.clear_all(&mut urls);

        let changes = grid.take_changes();
        // Slot 1 was created and destroyed before the presenter saw it.
        assert_eq!(changes.removed, vec![0]);
        assert_eq!(changes.added, vec![0]);
        assert!(changes.loaded.is_empty());
    }

    #[test]
    fn unload_trims_to_one_trailing_slot() {
        let mut grid = SlotGrid::new(Layout::Strip, 6);
        let mut urls = MockUrls::default();
        load(&mut grid, &mut urls, 0, "a");
        let b = load(&mut grid, &mut urls, 1, "b");
        assert_eq!(grid.slot_count(), 3);
        let _ = grid.take_changes();

        let url = grid.unload(b, &mut urls).expect("unload");
        assert_eq!(url.as_str(), "blob:1:b");
        assert_eq!(grid.slot_count(), 2);
        assert!(grid.slot(0).expect("slot 0").is_filled());
        assert!(!grid.slot(1).expect("slot 1").is_filled());

        let changes = grid.take_changes();
        assert_eq!(changes.unloaded, vec![1]);
        assert_eq!(changes.removed, vec![2]);
    }

    #[test]
    fn unload_in_the_middle_leaves_a_hole() {
        let mut grid = SlotGrid::new(Layout::Rows { columns: 3 }, 9);
        let mut urls = MockUrls::default();
        load(&mut grid, &mut urls, 0, "a");
        let b = load(&mut grid, &mut urls, 1, "b");
        load(&mut grid, &mut urls, 2, "c");

        grid.unload(b, &mut urls).expect("unload");
        assert_eq!(grid.slot_count(), 4);
        assert_eq!(grid.first_empty(), Some(1));

        let refill = grid
            .load(1, FileInfo::new("d", 1), "d", &mut urls)
            .expect("refill hole");
        assert!(!refill.grew, "filling a hole does not grow");
        assert_eq!(grid.slot_count(), 4);
    }

    #[test]
    fn unloading_everything_returns_to_one_slot() {
        let mut grid = SlotGrid::new(Layout::Strip, 6);
        let mut urls = MockUrls::default();
        let a = load(&mut grid, &mut urls, 0, "a");
        let b = load(&mut grid, &mut urls, 1, "b");
        grid.unload(a, &mut urls).expect("unload a");
        grid.unload(b, &mut urls).expect("unload b");
        assert_eq!(grid.slot_count(), 1);
        assert_eq!(urls.live(), 0);
    }

    #[test]
    fn unload_rejects_stale_and_empty() {
        let mut grid = SlotGrid::new(Layout::Strip, 6);
        let mut urls = MockUrls::default();
        let a = load(&mut grid, &mut urls, 0, "a");
        grid.unload(a, &mut urls).expect("first unload");
        assert_eq!(grid.unload(a, &mut urls), Err(ViewerError::StaleSlot(a)));

        let empty = grid.slot_id(0).expect("slot 0");
        assert_eq!(grid.unload(empty, &mut urls), Err(ViewerError::EmptySlot(empty)));
        assert_eq!(urls.revoked.len(), 1, "revoked exactly once");
    }

    #[test]
    fn metadata_is_tied_to_a_generation() {
        let mut grid = SlotGrid::new(Layout::Strip, 6);
        let mut urls = MockUrls::default();
        let a = load(&mut grid, &mut urls, 0, "a");
        let meta = VideoMetadata {
            duration: 61.0,
            width: 1920,
            height: 1080,
        };
        grid.set_metadata(a, meta).expect("metadata");
        assert_eq!(grid.slot(0).and_then(Slot::metadata), Some(meta));

        let b = load(&mut grid, &mut urls, 0, "b");
        assert_eq!(grid.slot(0).and_then(Slot::metadata), None, "reset on replace");
        assert_eq!(grid.set_metadata(a, meta), Err(ViewerError::StaleSlot(a)));
        grid.set_metadata(b, meta).expect("current handle accepted");
    }

    #[test]
    fn metadata_on_empty_slot_is_rejected() {
        let mut grid = SlotGrid::new(Layout::Strip, 6);
        let id = grid.slot_id(0).expect("slot 0");
        let meta = VideoMetadata {
            duration: 1.0,
            width: 1,
            height: 1,
        };
        assert_eq!(grid.set_metadata(id, meta), Err(ViewerError::EmptySlot(id)));
    }

    #[test]
    fn every_created_url_is_revoked_exactly_once() {
        let mut grid = SlotGrid::new(Layout::Rows { columns: 3 }, 4);
        let mut urls = MockUrls::default();
        for round in 0..3 {
            for index in 0..4 {
                let name = format!("r{round}s{index}");
                load(&mut grid, &mut urls, index, &name);
            }
            // Replace one slot mid-round.
            load(&mut grid, &mut urls, 2, "swap");
            if round == 1 {
                let id = grid.slot_id(3).expect("slot 3");
                grid.unload(id, &mut urls).expect("unload");
            }
            grid.clear_all(&mut urls);
        }

        let mut created = urls.created.clone();
        let mut revoked = urls.revoked.clone();
        created.sort();
        revoked.sort();
        assert_eq!(created, revoked);
    }

    #[test]
    fn filled_iterates_in_grid_order() {
        let mut grid = SlotGrid::new(Layout::Strip, 6);
        let mut urls = MockUrls::default();
        load(&mut grid, &mut urls, 0, "a");
        load(&mut grid, &mut urls, 1, "b");
        load(&mut grid, &mut urls, 2, "c");
        let b = grid.slot_id(1).expect("slot 1");
        grid.unload(b, &mut urls).expect("unload");

        let names: Vec<_> = grid
            .filled()
            .filter_map(|(_, s)| s.file().map(|f| f.name.as_str()))
            .collect();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(grid.first_filled().map(SlotId::index), Some(0));
    }
}
