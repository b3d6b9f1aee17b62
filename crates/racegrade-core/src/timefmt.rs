// ABOUTME: Race-time codec converting between MM:SS / H:MM:SS text and seconds
// ABOUTME: Lenient parsing for scraped result strings, canonical formatting for output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 racegrade contributors

//! # Race-Time Codec
//!
//! Results sites publish finish times as `MM:SS` (under an hour) or
//! `H:MM:SS`, sometimes with a single trailing marker letter (`"25:30c"` for
//! chip-timed results) and `"--"` for a missing time. Parsing is total: any
//! unusable input maps to `None`, never to a panic, because a single
//! malformed row must not sink a whole profile.
//!
//! Formatting is the inverse for canonical strings:
//! `parse_time(&format_time(s)) == Some(s)` for every `s`.

/// Parse a race-time string into whole seconds.
///
/// Accepts `MM:SS` and `H:MM:SS` / `HH:MM:SS`. Surrounding whitespace and a
/// single trailing letter are tolerated; the empty string, the `"--"`
/// placeholder, any other segment count, and non-numeric components all yield
/// `None`.
///
/// # Examples
///
/// ```rust
/// use racegrade_core::timefmt::parse_time;
///
/// assert_eq!(parse_time("25:30"), Some(1530));
/// assert_eq!(parse_time("1:23:45"), Some(5025));
/// assert_eq!(parse_time("25:30c"), Some(1530));
/// assert_eq!(parse_time("--"), None);
/// ```
#[must_use]
pub fn parse_time(text: &str) -> Option<u32> {
    if text.is_empty() || text == "--" {
        return None;
    }

    let mut cleaned = text.trim();

    // Chip-time and assisted-run markers, e.g. "25:30c".
    if let Some(last) = cleaned.chars().last() {
        if last.is_ascii_alphabetic() {
            cleaned = &cleaned[..cleaned.len() - last.len_utf8()];
        }
    }

    let fields: Vec<&str> = cleaned.split(':').collect();
    match fields.as_slice() {
        [minutes, seconds] => {
            let minutes: u32 = minutes.parse().ok()?;
            let seconds: u32 = seconds.parse().ok()?;
            minutes.checked_mul(60)?.checked_add(seconds)
        }
        [hours, minutes, seconds] => {
            let hours: u32 = hours.parse().ok()?;
            let minutes: u32 = minutes.parse().ok()?;
            let seconds: u32 = seconds.parse().ok()?;
            hours
                .checked_mul(3600)?
                .checked_add(minutes.checked_mul(60)?)?
                .checked_add(seconds)
        }
        _ => None,
    }
}

/// Format whole seconds as a race-time string.
///
/// Times under an hour render as `M:SS` (minutes un-padded); an hour or more
/// renders as `H:MM:SS` (hours un-padded). This matches the canonical form
/// used by results sites, so formatting then parsing is lossless.
#[must_use]
pub fn format_time(seconds: u32) -> String {
    if seconds >= 3600 {
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        let minutes = seconds / 60;
        let secs = seconds % 60;
        format!("{minutes}:{secs:02}")
    }
}
