// Copyright 2026 the Dashcam Viewer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM cells for the slot grid.
//!
//! Translates [`SlotGrid`] state into one cell per slot (label, file picker,
//! `<video>` and info block) by applying incremental updates from
//! [`GridChanges`].

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use alloc::vec::Vec;

use dashcam_core::backend::Presenter;
use dashcam_core::format::{format_duration, format_file_size, format_resolution};
use dashcam_core::grid::{GridChanges, SlotGrid};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, File, HtmlElement, HtmlInputElement, HtmlVideoElement};

use crate::first_file;
use crate::media;

/// Placeholder shown until a video reports its metadata.
const PENDING: &str = "-";

/// Receives `(slot index, file)` when the user picks a file.
pub type FileHandler = Rc<dyn Fn(u32, File)>;

/// Receives the slot index when a video's metadata is available.
pub type MetadataHandler = Rc<dyn Fn(u32)>;

/// How new cells are set up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellOptions {
    /// Start videos muted.
    pub muted: bool,
    /// Loop videos at the end.
    pub looping: bool,
    /// Show native playback controls on each video.
    pub controls: bool,
    /// Label cells "Camera N" rather than "Video file".
    pub numbered: bool,
}

/// Maps a [`SlotGrid`] to live DOM cells, applying incremental updates from
/// [`GridChanges`].
///
/// The presenter owns a container `HtmlElement` to which cells are appended
/// in slot order and removed from the end. Call [`apply`](Presenter::apply)
/// after every grid mutation with the drained changes.
pub struct GridPresenter {
    document: Document,
    container: HtmlElement,
    cells: Vec<Option<Cell>>,
    options: CellOptions,
    on_file: FileHandler,
    on_metadata: MetadataHandler,
    error: Option<JsValue>,
}

impl core::fmt::Debug for GridPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridPresenter")
            .field("container", &"HtmlElement")
            .field("cells_len", &self.cells.len())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl GridPresenter {
    /// Creates a presenter that manages the cells inside `container`.
    ///
    /// `on_file` and `on_metadata` are invoked from the cells' `change` and
    /// `loadedmetadata` listeners.
    #[must_use]
    pub fn new(
        document: Document,
        container: HtmlElement,
        options: CellOptions,
        on_file: FileHandler,
        on_metadata: MetadataHandler,
    ) -> Self {
        Self {
            document,
            container,
            cells: Vec::new(),
            options,
            on_file,
            on_metadata,
            error: None,
        }
    }

    /// Returns the container element.
    #[must_use]
    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    /// Returns the `<video>` element for the given slot index, if it exists.
    #[must_use]
    pub fn video(&self, idx: u32) -> Option<&HtmlVideoElement> {
        self.cell(idx).map(|cell| &cell.video)
    }

    /// Returns the first DOM error hit while building cells, if any.
    pub fn take_error(&mut self) -> Option<JsValue> {
        self.error.take()
    }

    fn cell(&self, idx: u32) -> Option<&Cell> {
        self.cells.get(idx as usize).and_then(Option::as_ref)
    }

    /// Takes a cell out of the slot, leaving `None`.
    fn take_cell(&mut self, idx: u32) -> Option<Cell> {
        self.cells.get_mut(idx as usize)?.take()
    }

    /// Stores a cell at the given slot index, growing the vec if needed.
    fn put_cell(&mut self, idx: u32, cell: Cell) {
        let slot = idx as usize;
        if self.cells.len() <= slot {
            self.cells.resize_with(slot + 1, || None);
        }
        self.cells[slot] = Some(cell);
    }

    fn build_cell(&self, idx: u32) -> Result<Cell, JsValue> {
        let doc = &self.document;
        let root = create(doc, "div", "video-cell")?;

        let label = create(doc, "label", "video-cell-label")?;
        label.set_text_content(Some(&if self.options.numbered {
            format!("Camera {}", idx + 1)
        } else {
            "Video file".into()
        }));

        let input: HtmlInputElement = doc.create_element("input")?.unchecked_into();
        input.set_type("file");
        input.set_accept("video/*");
        label.append_child(&input)?;

        let video: HtmlVideoElement = doc.create_element("video")?.unchecked_into();
        video.set_class_name("video-cell-player");
        video.set_muted(self.options.muted);
        video.set_loop(self.options.looping);
        video.set_controls(self.options.controls);
        video.set_attribute("playsinline", "")?;
        video.set_attribute("preload", "metadata")?;

        let info = create(doc, "div", "video-cell-info")?;
        let _ = info.style().set_property("display", "none");
        let name = info_row(doc, &info, "File")?;
        let size = info_row(doc, &info, "Size")?;
        let duration = info_row(doc, &info, "Duration")?;
        let resolution = info_row(doc, &info, "Resolution")?;

        root.append_child(&label)?;
        root.append_child(&video)?;
        root.append_child(&info)?;

        let on_file = Rc::clone(&self.on_file);
        let picker = input.clone();
        let change = Closure::wrap(Box::new(move |_: Event| {
            if let Some(file) = first_file(&picker) {
                on_file(idx, file);
            }
        }) as Box<dyn FnMut(Event)>);
        input.add_event_listener_with_callback("change", change.as_ref().unchecked_ref())?;

        let on_metadata = Rc::clone(&self.on_metadata);
        let loaded_metadata = Closure::wrap(Box::new(move |_: Event| {
            on_metadata(idx);
        }) as Box<dyn FnMut(Event)>);
        video.add_event_listener_with_callback(
            "loadedmetadata",
            loaded_metadata.as_ref().unchecked_ref(),
        )?;

        Ok(Cell {
            root,
            input,
            video,
            info,
            name,
            size,
            duration,
            resolution,
            change,
            loaded_metadata,
        })
    }

    fn record(&mut self, result: Result<(), JsValue>) {
        if let Err(err) = result
            && self.error.is_none()
        {
            self.error = Some(err);
        }
    }
}

impl Presenter for GridPresenter {
    /// Applies incremental changes from a [`GridChanges`] to the DOM.
    ///
    /// Cells are only ever removed from toolbar handlers, never from their
    /// own listeners, so no listener is dropped while it runs.
    fn apply(&mut self, grid: &SlotGrid, changes: &GridChanges) {
        // 1. Removals
        for &idx in &changes.removed {
            if let Some(cell) = self.take_cell(idx) {
                cell.destroy();
            }
        }

        // 2. Additions
        for &idx in &changes.added {
            let built = self.build_cell(idx).and_then(|cell| {
                self.container.append_child(&cell.root)?;
                Ok(cell)
            });
            match built {
                Ok(cell) => self.put_cell(idx, cell),
                Err(err) => self.record(Err(err)),
            }
        }

        // 3. Loads
        for &idx in &changes.loaded {
            let (Some(cell), Some(slot)) = (self.cell(idx), grid.slot(idx)) else {
                continue;
            };
            if let (Some(file), Some(url)) = (slot.file(), slot.url()) {
                cell.video.set_src(url.as_str());
                cell.name.set_text_content(Some(&file.name));
                cell.size.set_text_content(Some(&format_file_size(file.size)));
                cell.duration.set_text_content(Some(PENDING));
                cell.resolution.set_text_content(Some(PENDING));
                let _ = cell.info.style().remove_property("display");
            }
        }

        // 4. Unloads
        for &idx in &changes.unloaded {
            if let Some(cell) = self.cell(idx) {
                media::unset_source(&cell.video);
                cell.input.set_value("");
                let _ = cell.info.style().set_property("display", "none");
            }
        }

        // 5. Metadata
        for &idx in &changes.metadata {
            let (Some(cell), Some(meta)) =
                (self.cell(idx), grid.slot(idx).and_then(|slot| slot.metadata()))
            else {
                continue;
            };
            cell.duration
                .set_text_content(Some(&format_duration(meta.duration)));
            cell.resolution
                .set_text_content(Some(&format_resolution(meta.width, meta.height)));
        }

        // 6. Grid template
        if changes.layout_changed {
            let template = grid.template();
            let s = self.container.style();
            let _ = s.set_property("display", "grid");
            let _ = s.set_property("grid-template-columns", &template.css_columns());
            let _ = s.set_property("grid-template-rows", &template.css_rows());
        }
    }
}

/// One grid position in the DOM.
struct Cell {
    root: HtmlElement,
    input: HtmlInputElement,
    video: HtmlVideoElement,
    info: HtmlElement,
    name: HtmlElement,
    size: HtmlElement,
    duration: HtmlElement,
    resolution: HtmlElement,
    change: Closure<dyn FnMut(Event)>,
    loaded_metadata: Closure<dyn FnMut(Event)>,
}

impl Cell {
    /// Detaches listeners, releases the media source and removes the cell.
    fn destroy(self) {
        let _ = self
            .input
            .remove_event_listener_with_callback("change", self.change.as_ref().unchecked_ref());
        let _ = self.video.remove_event_listener_with_callback(
            "loadedmetadata",
            self.loaded_metadata.as_ref().unchecked_ref(),
        );
        media::unset_source(&self.video);
        self.root.remove();
    }
}

fn create(doc: &Document, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = doc.create_element(tag)?.unchecked_into();
    el.set_class_name(class);
    Ok(el)
}

/// Appends `<p><strong>{caption}:</strong> <span></span></p>` and returns the
/// value span.
fn info_row(doc: &Document, info: &HtmlElement, caption: &str) -> Result<HtmlElement, JsValue> {
    let row = create(doc, "p", "video-cell-info-row")?;
    let title = doc.create_element("strong")?;
    title.set_text_content(Some(&format!("{caption}: ")));
    let value = create(doc, "span", "video-cell-info-value")?;
    row.append_child(&title)?;
    row.append_child(&value)?;
    info.append_child(&row)?;
    Ok(value)
}
