// Copyright 2026 the Dashcam Viewer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `URL.createObjectURL` / `URL.revokeObjectURL` registry.

use alloc::format;

use dashcam_core::backend::UrlRegistry;
use dashcam_core::error::ViewerError;
use dashcam_core::grid::ObjectUrl;
use web_sys::{File, Url};

/// Creates `blob:` URLs for user-selected files.
///
/// Ownership of each URL is tracked by the grid; the registry only counts how
/// many are outstanding so leaks show up in diagnostics.
#[derive(Debug, Default)]
pub struct BrowserUrls {
    live: u32,
}

impl BrowserUrls {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of URLs created and not yet revoked.
    #[must_use]
    pub fn live(&self) -> u32 {
        self.live
    }
}

impl UrlRegistry for BrowserUrls {
    type Source = File;

    fn create(&mut self, source: &File) -> Result<ObjectUrl, ViewerError> {
        let url = Url::create_object_url_with_blob(source)
            .map_err(|err| ViewerError::ObjectUrl(format!("{err:?}")))?;
        self.live += 1;
        Ok(ObjectUrl::new(url))
    }

    fn revoke(&mut self, url: &ObjectUrl) {
        // Revoking an unknown URL is a no-op in every browser.
        let _ = Url::revoke_object_url(url.as_str());
        self.live = self.live.saturating_sub(1);
    }
}
