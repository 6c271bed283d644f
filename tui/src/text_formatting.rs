use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Truncate to terminal display width (Unicode-aware), without padding.
pub(crate) fn truncate_to_display_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut width = 0usize;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width {
            break;
        }
        out.push(ch);
        width += ch_width;
        if width == max_width {
            break;
        }
    }
    out
}

/// Truncate to display width, appending `suffix` when truncation occurs.
///
/// If `max_width` is too small to include `suffix`, this falls back to plain
/// width truncation without suffix.
pub(crate) fn truncate_to_display_width_with_suffix(
    text: &str,
    max_width: usize,
    suffix: &str,
) -> String {
    if max_width == 0 {
        return String::new();
    }
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }

    let suffix_width = UnicodeWidthStr::width(suffix);
    if suffix_width == 0 || max_width <= suffix_width {
        return truncate_to_display_width(text, max_width);
    }

    let mut out = truncate_to_display_width(text, max_width.saturating_sub(suffix_width));
    out.push_str(suffix);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate_to_display_width("abc", 10), "abc");
        assert_eq!(truncate_to_display_width_with_suffix("abc", 10, "…"), "abc");
    }

    #[test]
    fn truncates_at_width_boundary() {
        assert_eq!(truncate_to_display_width("abcdef", 4), "abcd");
        assert_eq!(truncate_to_display_width("abcdef", 0), "");
    }

    #[test]
    fn suffix_fits_within_budget() {
        assert_eq!(truncate_to_display_width_with_suffix("abcdef", 4, "…"), "abc…");
    }

    #[test]
    fn wide_chars_are_not_split() {
        // "你" is two cells wide; a 3-cell budget fits one plus a 1-cell suffix.
        assert_eq!(truncate_to_display_width("你好吗", 3), "你");
        assert_eq!(truncate_to_display_width_with_suffix("你好吗", 3, "…"), "你…");
    }
}
