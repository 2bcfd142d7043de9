//! Text helpers for view rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string to fit within a maximum display width, adding ellipsis if needed.
///
/// Collapsed card previews sit in a fixed-width box, so the limit is in
/// display columns rather than chars: a CJK synopsis counts two columns per
/// wide character and gets cut as early as a Latin one of the same width.
/// If the string fits within `max_width`, it is returned unchanged.
///
/// # Example
///
/// ```rust
/// use narrativenet::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Hello", 10), "Hello");
/// assert_eq!(truncate_to_width("Hello World", 6), "Hello…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    // Reserve 1 column for the ellipsis
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width_no_truncation() {
        assert_eq!(truncate_to_width("Hello", 10), "Hello");
        assert_eq!(truncate_to_width("Hello", 5), "Hello");
    }

    #[test]
    fn test_truncate_to_width_with_truncation() {
        assert_eq!(truncate_to_width("Hello World", 6), "Hello…");
        assert_eq!(truncate_to_width("Hello World", 7), "Hello …");
    }

    #[test]
    fn test_truncate_to_width_empty() {
        assert_eq!(truncate_to_width("", 5), "");
    }

    #[test]
    fn test_truncate_to_width_zero_width() {
        assert_eq!(truncate_to_width("Hello", 0), "…");
    }

    #[test]
    fn test_truncate_to_width_wide_chars() {
        // Each kana is two columns wide.
        assert_eq!(truncate_to_width("ものがたり", 5), "もの…");
    }
}
