// Copyright 2026 the Dashcam Viewer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform-independent state for a grid of locally loaded dashcam videos.
//!
//! `dashcam_core` owns the bookkeeping behind the viewer: which grid position
//! holds which file, when an object URL has to be released, which toolbar
//! controls are enabled, and how far each video has to seek to line up with
//! the others. It is `no_std` compatible (with `alloc`) and never touches a
//! browser API directly; backends plug in through the traits in [`backend`].
//!
//! # Architecture
//!
//! ```text
//!   DOM event (change / click / loadedmetadata / timeout)
//!       │
//!       ▼
//!   SlotGrid::load() / unload() / clear_all() ◄──► UrlRegistry
//!       │
//!       ▼
//!   SlotGrid::take_changes() ──► GridChanges ──► Presenter::apply()
//!       │
//!       ▼
//!   ControlState::derive() ──► toolbar
//! ```
//!
//! **[`grid`]**: Array-backed slots with generational [`SlotId`](grid::SlotId)
//! handles. Keeps one trailing empty slot after the last filled one and
//! revokes object URLs before they are overwritten or cleared.
//!
//! **[`layout`]**: Single, multi-row and single-row grid templates.
//!
//! **[`controls`]**: Enabled/disabled toolbar state derived from the grid.
//!
//! **[`format`]**: Human-readable file size, duration and resolution.
//!
//! **[`sync`]**: Seek planning for aligning several videos on one media time.
//!
//! **[`config`]**: Viewer modes and their preset configurations.
//!
//! **[`backend`]**: The [`UrlRegistry`](backend::UrlRegistry) and
//! [`Presenter`](backend::Presenter) traits that platform backends implement.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! viewer instrumentation, with a zero-overhead [`Tracer`](trace::Tracer).
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod config;
pub mod controls;
pub mod error;
pub mod format;
pub mod grid;
pub mod layout;
pub mod sync;
pub mod trace;
