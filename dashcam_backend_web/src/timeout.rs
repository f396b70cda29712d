// Copyright 2026 the Dashcam Viewer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot `setTimeout` handle.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::Cell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

// Direct global bindings instead of `web_sys::Window` methods.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "setTimeout")]
    fn set_timeout(callback: &JsValue, delay_ms: i32) -> i32;

    #[wasm_bindgen(js_name = "clearTimeout")]
    fn clear_timeout(id: i32);
}

/// A pending `setTimeout` callback.
///
/// Dropping the handle cancels the callback if it has not run yet. The JS
/// closure lives as long as the handle, so a handle must not be dropped from
/// inside its own callback; let the next [`Timeout::new`] replace it instead.
pub struct Timeout {
    id: i32,
    fired: Rc<Cell<bool>>,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    /// Schedules `callback` to run once after `delay_ms` milliseconds.
    pub fn new(delay_ms: u32, callback: impl FnOnce() + 'static) -> Self {
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        let mut callback = Some(callback);
        let closure = Closure::wrap(Box::new(move || {
            flag.set(true);
            if let Some(callback) = callback.take() {
                callback();
            }
        }) as Box<dyn FnMut()>);

        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        let id = set_timeout(closure.as_ref().unchecked_ref(), delay);
        Self {
            id,
            fired,
            _closure: closure,
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if !self.fired.get() {
            clear_timeout(self.id);
        }
    }
}

impl core::fmt::Debug for Timeout {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Timeout")
            .field("id", &self.id)
            .field("fired", &self.fired.get())
            .finish_non_exhaustive()
    }
}
