// Copyright 2026 the Dashcam Viewer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fullscreen requests with vendor-prefixed fallbacks.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::Element;

/// Method names tried in order.
pub const METHODS: [&str; 3] = [
    "requestFullscreen",
    "webkitRequestFullscreen",
    "msRequestFullscreen",
];

/// Asks the browser to show `element` fullscreen.
///
/// Calls the first of [`METHODS`] the element implements and returns its
/// name, or `None` if the browser supports none of them. The returned promise
/// (standard API only) is dropped.
pub fn request(element: &Element) -> Option<&'static str> {
    let target: &JsValue = element.as_ref();
    METHODS.into_iter().find(|&name| {
        Reflect::get(target, &JsValue::from_str(name))
            .ok()
            .and_then(|method| method.dyn_into::<Function>().ok())
            .is_some_and(|method| method.call0(target).is_ok())
    })
}
