// Copyright 2026 the Dashcam Viewer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewer controller: DOM events in, grid mutations and media commands
//! out.

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::{Rc, Weak};
use alloc::string::ToString as _;
use alloc::vec::Vec;
use core::cell::RefCell;

use dashcam_backend_web::{
    BrowserUrls, CellOptions, ConsoleSink, GridPresenter, Presenter as _, Timeout, fullscreen,
    media,
};
use dashcam_core::config::{ViewerConfig, ViewerMode};
use dashcam_core::controls::ControlState;
use dashcam_core::error::ViewerError;
use dashcam_core::grid::{FileInfo, SlotGrid, SlotId};
use dashcam_core::sync::{SeekCommand, SyncRequest};
use dashcam_core::trace::{
    ClearedEvent, Command, CommandEvent, ErrorEvent, FileLoadedEvent, MetadataEvent, ReadyEvent,
    SyncEvent, SyncPhase, Tracer, UrlEvent,
};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, File, HtmlButtonElement, HtmlElement};

use crate::shell::{self, Toolbar};

/// Shared handle used by every listener.
pub(crate) type ViewerHandle = Rc<RefCell<Viewer>>;

pub(crate) struct Viewer {
    this: Weak<RefCell<Self>>,
    config: ViewerConfig,
    grid: SlotGrid,
    urls: BrowserUrls,
    presenter: GridPresenter,
    toolbar: Toolbar,
    sink: ConsoleSink,
    resync: Option<Timeout>,
}

impl core::fmt::Debug for Viewer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Viewer")
            .field("config", &self.config)
            .field("grid", &self.grid)
            .field("live_urls", &self.urls.live())
            .field("resync_pending", &self.resync.is_some())
            .finish_non_exhaustive()
    }
}

impl Viewer {
    /// Builds the page under `root` and wires every listener.
    pub(crate) fn mount(
        doc: &Document,
        root: &HtmlElement,
        config: ViewerConfig,
        sink: ConsoleSink,
    ) -> Result<ViewerHandle, JsValue> {
        let shell = shell::build(doc, root, config.mode)?;
        let options = CellOptions {
            muted: config.muted,
            looping: config.looping,
            controls: config.mode == ViewerMode::Single,
            numbered: config.mode != ViewerMode::Single,
        };

        let viewer = Rc::new_cyclic(|this: &Weak<RefCell<Self>>| {
            let on_file = {
                let this = Weak::clone(this);
                Rc::new(move |idx: u32, file: File| {
                    if let Some(viewer) = this.upgrade() {
                        viewer.borrow_mut().load_file(idx, &file);
                    }
                })
            };
            let on_metadata = {
                let this = Weak::clone(this);
                Rc::new(move |idx: u32| {
                    if let Some(viewer) = this.upgrade() {
                        viewer.borrow_mut().metadata_loaded(idx);
                    }
                })
            };
            let presenter =
                GridPresenter::new(doc.clone(), shell.grid_host, options, on_file, on_metadata);

            RefCell::new(Self {
                this: Weak::clone(this),
                config,
                grid: SlotGrid::new(config.layout, config.capacity),
                urls: BrowserUrls::new(),
                presenter,
                toolbar: shell.toolbar,
                sink,
                resync: None,
            })
        });

        {
            let v = viewer.borrow();
            bind(&viewer, &v.toolbar.play, Self::play);
            bind(&viewer, &v.toolbar.pause, Self::pause);
            bind(&viewer, &v.toolbar.sync, Self::sync);
            bind(&viewer, &v.toolbar.fullscreen, Self::fullscreen);
            bind(&viewer, &v.toolbar.clear_all, Self::clear_all);
        }
        viewer.borrow_mut().present();
        Ok(viewer)
    }

    /// Logs the ready event.
    pub(crate) fn ready(&mut self) {
        Tracer::new(&mut self.sink).ready(&ReadyEvent {
            mode: self.config.mode,
            capacity: self.grid.capacity(),
        });
    }

    /// Logs a failure.
    pub(crate) fn report(&mut self, context: &str, err: &ViewerError) {
        let message = err.to_string();
        Tracer::new(&mut self.sink).error(&ErrorEvent {
            context,
            message: &message,
        });
    }

    fn load_file(&mut self, idx: u32, file: &File) {
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "File.size is a non-negative integral byte count"
        )]
        let size = file.size() as u64;
        let name = file.name();

        let info = FileInfo::new(name.clone(), size);
        let outcome = match self.grid.load(idx, info, file, &mut self.urls) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.report("load", &err);
                return;
            }
        };

        let mut tracer = Tracer::new(&mut self.sink);
        if let Some(old) = &outcome.replaced {
            tracer.url_revoked(&UrlEvent {
                slot: outcome.slot,
                url: old,
            });
        }
        tracer.url_created(&UrlEvent {
            slot: outcome.slot,
            url: &outcome.url,
        });
        tracer.file_loaded(&FileLoadedEvent {
            slot: outcome.slot,
            name: &name,
            size,
        });
        self.present();
    }

    fn metadata_loaded(&mut self, idx: u32) {
        let (Some(slot), Some(video)) = (self.grid.slot_id(idx), self.presenter.video(idx)) else {
            return;
        };
        let metadata = media::read_metadata(video);
        match self.grid.set_metadata(slot, metadata) {
            Ok(()) => {
                Tracer::new(&mut self.sink).metadata(&MetadataEvent { slot, metadata });
                self.present();
            }
            // The video was unloaded before its metadata arrived.
            Err(ViewerError::EmptySlot(_)) => {}
            Err(err) => self.report("metadata", &err),
        }
    }

    fn play(&mut self) {
        let targets = self.for_each_video(media::play);
        self.command(Command::Play, targets);
        // Starting playback lands each video on a slightly different frame.
        if let Some(request) = SyncRequest::capture(&self.grid, |id| self.position(id)) {
            self.schedule_resync(request);
        }
    }

    fn pause(&mut self) {
        let targets = self.for_each_video(media::pause);
        self.command(Command::Pause, targets);
    }

    fn sync(&mut self) {
        let Some(request) = SyncRequest::capture(&self.grid, |id| self.position(id)) else {
            return;
        };
        let seeks = request.initial_seeks();
        self.seek_all(&seeks);
        let leader_playing = self
            .presenter
            .video(request.leader().index())
            .is_some_and(|video| !media::is_paused(video));
        if leader_playing {
            self.for_each_video(media::play);
        }
        self.command(Command::Sync, count(request.followers().len() + 1));
        Tracer::new(&mut self.sink).sync(&SyncEvent {
            phase: SyncPhase::Aligned,
            reference: request.reference(),
            corrected: count(seeks.len()),
        });
        self.schedule_resync(request);
    }

    fn fullscreen(&mut self) {
        let target: Option<Element> = match self.config.mode {
            ViewerMode::Single => self
                .grid
                .first_filled()
                .and_then(|id| self.presenter.video(id.index()))
                .map(|video| video.clone().unchecked_into()),
            ViewerMode::Panoramic | ViewerMode::PanoramicRow => {
                Some(self.presenter.container().clone().unchecked_into())
            }
        };
        let Some(target) = target else {
            return;
        };
        self.command(Command::Fullscreen, self.grid.filled_count());
        if fullscreen::request(&target).is_none() {
            Tracer::new(&mut self.sink).error(&ErrorEvent {
                context: "fullscreen",
                message: "not supported by this browser",
            });
        }
    }

    fn clear_all(&mut self) {
        // Cancels the timer unless it already ran; never called from inside it.
        self.resync = None;
        let revoked = self.grid.clear_all(&mut self.urls);
        self.command(Command::ClearAll, revoked);
        Tracer::new(&mut self.sink).cleared(&ClearedEvent { revoked });
        self.present();
    }

    /// Arms the deferred re-sync, replacing any pending one.
    fn schedule_resync(&mut self, request: SyncRequest) {
        let this = Weak::clone(&self.this);
        let timer = Timeout::new(self.config.sync.resync_delay_ms, move || {
            if let Some(viewer) = this.upgrade() {
                viewer.borrow_mut().resync(&request);
            }
        });
        self.resync = Some(timer);
    }

    /// Runs from the timer callback; must leave `self.resync` alone.
    fn resync(&mut self, request: &SyncRequest) {
        let Some(plan) =
            request.resync(&self.grid, |id| self.position(id), self.config.sync.tolerance)
        else {
            return;
        };
        self.seek_all(&plan.seeks);
        Tracer::new(&mut self.sink).sync(&SyncEvent {
            phase: SyncPhase::Resynced,
            reference: plan.reference,
            corrected: count(plan.seeks.len()),
        });
    }

    fn position(&self, id: SlotId) -> f64 {
        self.presenter
            .video(id.index())
            .map_or(f64::NAN, media::current_time)
    }

    fn seek_all(&self, seeks: &[SeekCommand]) {
        for seek in seeks {
            if let Some(video) = self.presenter.video(seek.slot.index()) {
                media::seek(video, seek.to);
            }
        }
    }

    /// Runs `f` on the video of every filled slot and returns how many there
    /// were.
    fn for_each_video(&self, f: fn(&web_sys::HtmlVideoElement)) -> u32 {
        let videos: Vec<_> = self
            .grid
            .filled()
            .filter_map(|(id, _)| self.presenter.video(id.index()))
            .collect();
        for video in &videos {
            f(video);
        }
        count(videos.len())
    }

    fn command(&mut self, command: Command, targets: u32) {
        Tracer::new(&mut self.sink).command(&CommandEvent { command, targets });
    }

    /// Pushes pending grid changes to the DOM and refreshes the toolbar.
    fn present(&mut self) {
        let changes = self.grid.take_changes();
        self.presenter.apply(&self.grid, &changes);
        if let Some(err) = self.presenter.take_error() {
            let message = format!("{err:?}");
            Tracer::new(&mut self.sink).error(&ErrorEvent {
                context: "render",
                message: &message,
            });
        }
        self.toolbar.set_state(
            ControlState::derive(&self.grid),
            self.grid.filled_count(),
            self.grid.capacity(),
        );
    }
}

/// Calls `action` on click. The listener lives as long as the page.
fn bind(viewer: &ViewerHandle, button: &HtmlButtonElement, action: fn(&mut Viewer)) {
    let this = Rc::downgrade(viewer);
    let closure = Closure::wrap(Box::new(move || {
        if let Some(viewer) = this.upgrade() {
            action(&mut viewer.borrow_mut());
        }
    }) as Box<dyn FnMut()>);
    button.set_onclick(Some(closure.as_ref().unchecked_ref()));
    closure.forget();
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "bounded by the grid capacity"
)]
fn count(n: usize) -> u32 {
    n as u32
}
