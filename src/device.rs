// SPDX-FileCopyrightText: The release-checksums authors
// SPDX-License-Identifier: MPL-2.0

//! Device names

/// Placeholder for files that cannot be attributed to a device.
pub const UNKNOWN_DEVICE: &str = "Unknown Device";

/// Leading markdown noise: heading markers, bullets and emphasis.
fn is_leading_noise(c: char) -> bool {
    matches!(c, '#' | '*' | '-') || c.is_whitespace()
}

fn is_trailing_noise(c: char) -> bool {
    c == ':' || c.is_whitespace()
}

/// Turn a raw header label into a display-ready device name.
///
/// Strips markdown heading/bullet noise from the start and colons from
/// the end, e.g. `"### Pixel 9 Pro :"` becomes `"Pixel 9 Pro"`.
///
/// Missing input or a label that consists only of noise yields
/// [`UNKNOWN_DEVICE`].
#[must_use]
pub fn sanitize_name(raw: Option<&str>) -> String {
    let sanitized = raw
        .unwrap_or_default()
        .trim_start_matches(is_leading_noise)
        .trim_end_matches(is_trailing_noise)
        .trim();
    if sanitized.is_empty() {
        return UNKNOWN_DEVICE.to_owned();
    }
    sanitized.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_markdown_heading_and_trailing_colon() {
        assert_eq!("Pixel 9 Pro", sanitize_name(Some("### Pixel 9 Pro :")));
        assert_eq!("Pixel 8", sanitize_name(Some("* Pixel 8::")));
        assert_eq!("Pixel 8a", sanitize_name(Some(" - Pixel 8a")));
        assert_eq!("Pixel 7", sanitize_name(Some("\t*Pixel 7 ::  ")));
    }

    #[test]
    fn preserve_inner_punctuation() {
        assert_eq!("Pixel 6 - Pro", sanitize_name(Some("# Pixel 6 - Pro")));
        assert_eq!("Pixel Fold", sanitize_name(Some("Pixel Fold")));
    }

    #[test]
    fn missing_or_empty_label_is_unknown() {
        assert_eq!(UNKNOWN_DEVICE, sanitize_name(None));
        assert_eq!(UNKNOWN_DEVICE, sanitize_name(Some("")));
        assert_eq!(UNKNOWN_DEVICE, sanitize_name(Some("## ")));
        assert_eq!(UNKNOWN_DEVICE, sanitize_name(Some(" :: ")));
    }
}
