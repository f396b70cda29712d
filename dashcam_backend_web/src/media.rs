// Copyright 2026 the Dashcam Viewer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Commands on `<video>` elements.
//!
//! Playback requests are fire-and-forget. The promise returned by `play()`
//! is dropped; it rejects when the browser blocks autoplay.

use dashcam_core::grid::VideoMetadata;
use web_sys::HtmlVideoElement;

/// Starts playback.
pub fn play(video: &HtmlVideoElement) {
    let _ = video.play();
}

/// Pauses playback.
pub fn pause(video: &HtmlVideoElement) {
    let _ = video.pause();
}

/// Moves the playhead to `seconds`.
pub fn seek(video: &HtmlVideoElement, seconds: f64) {
    video.set_current_time(seconds);
}

/// Returns the playhead position in seconds.
#[must_use]
pub fn current_time(video: &HtmlVideoElement) -> f64 {
    video.current_time()
}

/// Returns `true` if the video is paused.
#[must_use]
pub fn is_paused(video: &HtmlVideoElement) -> bool {
    video.paused()
}

/// Reads duration and intrinsic size.
///
/// Only meaningful once `loadedmetadata` has fired; before that the duration
/// is `NaN` and the size is zero.
#[must_use]
pub fn read_metadata(video: &HtmlVideoElement) -> VideoMetadata {
    VideoMetadata {
        duration: video.duration(),
        width: video.video_width(),
        height: video.video_height(),
    }
}

/// Detaches the source and releases the decoder.
pub fn unset_source(video: &HtmlVideoElement) {
    let _ = video.pause();
    let _ = video.remove_attribute("src");
    video.load();
}
