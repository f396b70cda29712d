// Copyright 2026 the Dashcam Viewer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static page structure: title, toolbar and grid host.

use alloc::format;

use dashcam_core::config::ViewerMode;
use dashcam_core::controls::ControlState;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlButtonElement, HtmlElement};

/// Toolbar buttons and the status line.
#[derive(Debug)]
pub(crate) struct Toolbar {
    pub(crate) play: HtmlButtonElement,
    pub(crate) pause: HtmlButtonElement,
    pub(crate) sync: HtmlButtonElement,
    pub(crate) fullscreen: HtmlButtonElement,
    pub(crate) clear_all: HtmlButtonElement,
    status: HtmlElement,
}

impl Toolbar {
    /// Enables and disables buttons and shows or hides the status line.
    pub(crate) fn set_state(&self, state: ControlState, loaded: u32, capacity: u32) {
        self.play.set_disabled(!state.play);
        self.pause.set_disabled(!state.pause);
        self.sync.set_disabled(!state.sync);
        self.fullscreen.set_disabled(!state.fullscreen);
        self.clear_all.set_disabled(!state.clear_all);

        if state.info_visible {
            self.status
                .set_text_content(Some(&format!("{loaded} of {capacity} loaded")));
            let _ = self.status.style().remove_property("display");
        } else {
            let _ = self.status.style().set_property("display", "none");
        }
    }
}

/// Elements the viewer binds to.
#[derive(Debug)]
pub(crate) struct Shell {
    pub(crate) toolbar: Toolbar,
    pub(crate) grid_host: HtmlElement,
}

/// Page title for each variant.
pub(crate) const fn title(mode: ViewerMode) -> &'static str {
    match mode {
        ViewerMode::Single => "Dashcam Viewer",
        ViewerMode::Panoramic => "Panoramic Dashcam Viewer",
        ViewerMode::PanoramicRow => "Panoramic Row Dashcam Viewer",
    }
}

/// Builds the shell inside `root`.
///
/// The single viewer has no sync button: there is nothing to align.
pub(crate) fn build(doc: &Document, root: &HtmlElement, mode: ViewerMode) -> Result<Shell, JsValue> {
    let app = create(doc, "main", "dashcam-viewer")?;
    app.set_attribute("data-mode", mode.as_str())?;

    let heading = doc.create_element("h1")?;
    heading.set_text_content(Some(title(mode)));
    app.append_child(&heading)?;

    let bar = create(doc, "div", "dashcam-toolbar")?;
    let play = button(doc, &bar, "Play")?;
    let pause = button(doc, &bar, "Pause")?;
    let sync = button(doc, &bar, "Sync")?;
    let fullscreen = button(doc, &bar, "Fullscreen")?;
    let clear_all = button(doc, &bar, "Clear all")?;
    if mode == ViewerMode::Single {
        let _ = sync.style().set_property("display", "none");
    }
    let status = create(doc, "span", "dashcam-status")?;
    bar.append_child(&status)?;
    app.append_child(&bar)?;

    let grid_host = create(doc, "div", &format!("dashcam-grid dashcam-grid--{mode}"))?;
    app.append_child(&grid_host)?;
    root.append_child(&app)?;

    let toolbar = Toolbar {
        play,
        pause,
        sync,
        fullscreen,
        clear_all,
        status,
    };
    toolbar.set_state(ControlState::DISABLED, 0, 0);
    Ok(Shell { toolbar, grid_host })
}

fn create(doc: &Document, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = doc.create_element(tag)?.unchecked_into();
    el.set_class_name(class);
    Ok(el)
}

fn button(doc: &Document, bar: &HtmlElement, text: &str) -> Result<HtmlButtonElement, JsValue> {
    let el: HtmlButtonElement = doc.create_element("button")?.unchecked_into();
    el.set_type("button");
    el.set_text_content(Some(text));
    bar.append_child(&el)?;
    Ok(el)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_differ_per_mode() {
        assert_eq!(title(ViewerMode::Single), "Dashcam Viewer");
        assert_ne!(title(ViewerMode::Panoramic), title(ViewerMode::PanoramicRow));
    }
}
