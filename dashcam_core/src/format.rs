// Copyright 2026 the Dashcam Viewer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable strings for the info panel.

use alloc::format;
use alloc::string::String;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Formats a byte count with base-1024 units.
///
/// Two decimals at most, halves rounded up, trailing zeros dropped. Sizes past the largest unit
/// stay in gigabytes.
///
/// ```
/// use dashcam_core::format::format_file_size;
/// assert_eq!(format_file_size(0), "0 Bytes");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// assert_eq!(format_file_size(1_073_741_824), "1 GB");
/// ```
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return String::from("0 Bytes");
    }

    // Integer unit selection; a float logarithm lands just below exact
    // powers of 1024.
    let mut unit = 0;
    let mut scale = 1_u64;
    while unit + 1 < SIZE_UNITS.len() && bytes / scale >= 1024 {
        scale *= 1024;
        unit += 1;
    }

    // Hundredths, rounding halves up.
    let scale = u128::from(scale);
    let hundredths = (u128::from(bytes) * 100 + scale / 2) / scale;
    let whole = hundredths / 100;
    let frac = hundredths % 100;
    let unit = SIZE_UNITS[unit];
    if frac == 0 {
        format!("{whole} {unit}")
    } else if frac % 10 == 0 {
        format!("{whole}.{} {unit}", frac / 10)
    } else {
        format!("{whole}.{frac:02} {unit}")
    }
}

/// Formats seconds as `H:MM:SS`, or `M:SS` under an hour.
///
/// Non-finite and negative inputs (unknown or live durations) render as
/// `--:--`.
///
/// ```
/// use dashcam_core::format::format_duration;
/// assert_eq!(format_duration(75.9), "1:15");
/// assert_eq!(format_duration(3725.0), "1:02:05");
/// ```
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return String::from("--:--");
    }

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "finite and non-negative; the cast truncates to whole seconds"
    )]
    let total = seconds as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Formats a video resolution as `W × H`.
#[must_use]
pub fn format_resolution(width: u32, height: u32) -> String {
    format!("{width} \u{d7} {height}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_sizes() {
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(500), "500 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1280), "1.25 KB");
        assert_eq!(format_file_size(1_048_576), "1 MB");
        assert_eq!(format_file_size(157_286_400), "150 MB");
        assert_eq!(format_file_size(2_684_354_560), "2.5 GB");
    }

    #[test]
    fn rounding_keeps_two_decimals() {
        // 1.333... KB
        assert_eq!(format_file_size(1365), "1.33 KB");
        // Rounds up to the unit boundary without switching units.
        assert_eq!(format_file_size(1_048_575), "1024 KB");
    }

    #[test]
    fn halves_round_up() {
        // 1.125 KB
        assert_eq!(format_file_size(1152), "1.13 KB");
        // 3.0049 KB
        assert_eq!(format_file_size(3_072 + 5), "3 KB");
        // 2.5 exactly, one decimal kept.
        assert_eq!(format_file_size(2_560), "2.5 KB");
    }

    #[test]
    fn terabytes_stay_in_gigabytes() {
        assert_eq!(format_file_size(1_099_511_627_776), "1024 GB");
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(0.0), "0:00");
        assert_eq!(format_duration(9.99), "0:09");
        assert_eq!(format_duration(60.0), "1:00");
        assert_eq!(format_duration(3599.5), "59:59");
        assert_eq!(format_duration(3600.0), "1:00:00");
        assert_eq!(format_duration(36_061.0), "10:01:01");
        assert_eq!(format_duration(59.999), "0:59");
    }

    #[test]
    fn unknown_durations() {
        assert_eq!(format_duration(f64::NAN), "--:--");
        assert_eq!(format_duration(f64::INFINITY), "--:--");
        assert_eq!(format_duration(-1.0), "--:--");
    }

    #[test]
    fn resolution() {
        assert_eq!(format_resolution(1920, 1080), "1920 \u{d7} 1080");
    }
}
