// Copyright 2026 the Dashcam Viewer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for the dashcam viewer.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`BrowserUrls`]: `URL.createObjectURL` registry for local files
//! - [`GridPresenter`]: DOM cells (file picker, `<video>`, info block) per slot
//! - [`media`]: play, pause, seek and metadata on `<video>` elements
//! - [`fullscreen`]: fullscreen requests with vendor-prefixed fallbacks
//! - [`Timeout`]: one-shot `setTimeout` handle for the deferred re-sync
//! - [`ConsoleSink`]: trace events to the browser console

#![no_std]

extern crate alloc;

mod console;
pub mod fullscreen;
pub mod media;
mod object_url;
mod presenter;
mod timeout;

pub use console::ConsoleSink;
pub use dashcam_core::backend::Presenter;
pub use object_url::BrowserUrls;
pub use presenter::{CellOptions, FileHandler, GridPresenter, MetadataHandler};
pub use timeout::Timeout;

use web_sys::{File, HtmlInputElement};

/// Returns the first file selected in `input`, if any.
#[must_use]
pub fn first_file(input: &HtmlInputElement) -> Option<File> {
    input.files()?.get(0)
}
