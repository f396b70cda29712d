// Copyright 2026 the Dashcam Viewer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page configuration from `data-*` attributes and the query string.
//!
//! `<body data-viewer="panoramic" data-capacity="6">` picks the preset and
//! overrides fields; `?capacity=4&muted=false` in the page URL overrides them
//! again. Unknown query parameters are left alone.
//!
//! `data-verbose` (or `?verbose=true`) also logs object URL traffic to the
//! console.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use dashcam_core::config::{SETTING_KEYS, ViewerConfig, ViewerMode, split_setting};
use dashcam_core::error::ViewerError;

/// Attribute naming the viewer mode.
pub(crate) const MODE_ATTRIBUTE: &str = "data-viewer";

/// Console logging switch, read alongside the config settings.
const VERBOSE_KEY: &str = "verbose";

/// The configuration a page asked for, plus everything that could not be
/// applied.
#[derive(Debug)]
pub(crate) struct PageSettings {
    pub(crate) config: ViewerConfig,
    pub(crate) verbose: bool,
    pub(crate) errors: Vec<ViewerError>,
}

/// Reads the configuration.
///
/// `attribute` looks up an attribute on `<body>`; `query` is
/// `location.search`, with or without the leading `?`. An unknown mode falls
/// back to the single viewer.
pub(crate) fn read(attribute: impl Fn(&str) -> Option<String>, query: &str) -> PageSettings {
    let mut errors = Vec::new();

    let mode = match attribute(MODE_ATTRIBUTE) {
        Some(name) => name.parse().unwrap_or_else(|err| {
            errors.push(err);
            ViewerMode::default()
        }),
        None => ViewerMode::default(),
    };
    let mut config = ViewerConfig::for_mode(mode);

    for key in SETTING_KEYS {
        if let Some(value) = attribute(&format!("data-{key}"))
            && let Err(err) = config.apply_setting(key, &value)
        {
            errors.push(err);
        }
    }

    let mut verbose = false;
    if let Some(value) = attribute(&format!("data-{VERBOSE_KEY}")) {
        apply_verbose(&mut verbose, &value, &mut errors);
    }

    let query = query.strip_prefix('?').unwrap_or(query);
    for (key, value) in query.split('&').filter_map(split_setting) {
        if key == VERBOSE_KEY {
            apply_verbose(&mut verbose, value, &mut errors);
        } else if SETTING_KEYS.contains(&key)
            && let Err(err) = config.apply_setting(key, value)
        {
            errors.push(err);
        }
    }

    PageSettings {
        config,
        verbose,
        errors,
    }
}

/// A bare `data-verbose` attribute counts as `true`.
fn apply_verbose(verbose: &mut bool, value: &str, errors: &mut Vec<ViewerError>) {
    match value.trim() {
        "" | "true" => *verbose = true,
        "false" => *verbose = false,
        other => errors.push(ViewerError::InvalidSetting {
            key: String::from(VERBOSE_KEY),
            value: String::from(other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashcam_core::layout::Layout;

    fn attrs<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| String::from(*value))
        }
    }

    #[test]
    fn missing_mode_is_single() {
        let settings = read(attrs(&[]), "");
        assert_eq!(settings.config, ViewerConfig::single());
        assert!(!settings.verbose);
        assert!(settings.errors.is_empty());
    }

    #[test]
    fn verbose_from_bare_attribute_or_query() {
        assert!(read(attrs(&[("data-verbose", "")]), "").verbose);
        assert!(read(attrs(&[]), "?verbose=true").verbose);
        assert!(!read(attrs(&[("data-verbose", "")]), "verbose=false").verbose);

        let settings = read(attrs(&[]), "verbose=loud");
        assert!(!settings.verbose);
        assert_eq!(
            settings.errors,
            [ViewerError::InvalidSetting {
                key: "verbose".into(),
                value: "loud".into(),
            }]
        );
    }

    #[test]
    fn mode_and_overrides_from_attributes() {
        let settings = read(
            attrs(&[("data-viewer", "panoramic"), ("data-columns", "2")]),
            "",
        );
        assert_eq!(settings.config.mode, ViewerMode::Panoramic);
        assert_eq!(settings.config.layout, Layout::Rows { columns: 2 });
        assert_eq!(settings.config.capacity, 9);
    }

    #[test]
    fn query_overrides_attributes() {
        let settings = read(
            attrs(&[("data-viewer", "panoramic-row"), ("data-capacity", "4")]),
            "?capacity=3&utm_source=mail&muted=false",
        );
        assert_eq!(settings.config.capacity, 3);
        assert!(!settings.config.muted);
        assert!(settings.errors.is_empty(), "{:?}", settings.errors);
    }

    #[test]
    fn bad_values_are_reported_and_skipped() {
        let settings = read(
            attrs(&[("data-viewer", "quad"), ("data-muted", "maybe")]),
            "tolerance=-2",
        );
        assert_eq!(settings.config, ViewerConfig::single());
        assert_eq!(
            settings.errors,
            [
                ViewerError::UnknownMode("quad".into()),
                ViewerError::InvalidSetting {
                    key: "muted".into(),
                    value: "maybe".into(),
                },
                ViewerError::InvalidSetting {
                    key: "tolerance".into(),
                    value: "-2".into(),
                },
            ]
        );
    }
}
