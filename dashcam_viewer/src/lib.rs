// Copyright 2026 the Dashcam Viewer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser dashcam viewer.
//!
//! Loads local video files into a grid of `<video>` elements and plays,
//! pauses, synchronizes and fullscreens them together. One wasm module serves
//! three pages; `<body data-viewer="...">` picks the variant:
//!
//! | Page | `data-viewer` | Layout |
//! |------|---------------|--------|
//! | `index.html` | `single` | one video with native controls |
//! | `panoramic.html` | `panoramic` | three columns, up to nine cameras |
//! | `panoramic-row.html` | `panoramic-row` | one row, up to six cameras |
//!
//! Further `data-*` attributes (and the page's query string) override the
//! preset; see [`ViewerConfig::apply_setting`].
//!
//! Build with: `wasm-pack build --target web dashcam_viewer`
//!
//! Then serve `dashcam_viewer/` and open one of the pages in a browser.
//!
//! [`ViewerConfig::apply_setting`]: dashcam_core::config::ViewerConfig::apply_setting

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

mod settings;
mod shell;
mod viewer;

use dashcam_backend_web::ConsoleSink;
use wasm_bindgen::prelude::*;

use crate::viewer::Viewer;

/// Entry point, called automatically by `wasm_bindgen(start)`.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;

    let query = window.location().search().unwrap_or_default();
    let page = settings::read(|name| body.get_attribute(name), &query);

    let sink = if page.verbose {
        ConsoleSink::verbose()
    } else {
        ConsoleSink::new()
    };
    let viewer = Viewer::mount(&document, &body, page.config, sink)?;
    {
        let mut v = viewer.borrow_mut();
        for err in &page.errors {
            v.report("config", err);
        }
        v.ready();
    }

    // Keep the viewer alive; there is no teardown on the web.
    core::mem::forget(viewer);

    Ok(())
}
