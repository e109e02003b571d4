//! Display-width aware string helpers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn display_width(text: &str) -> u16 {
    text.width().min(u16::MAX as usize) as u16
}

/// Cut `text` to at most `max` columns, ending in `…` when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Left-align `text` in a field of `width` columns.
pub fn pad(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("Agents", 10), "Agents");
        assert_eq!(truncate("Agents", 6), "Agents");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate("Code Generation", 8), "Code Ge…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_pad_fills_to_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcdef", 4), "abc…");
    }

    #[test]
    fn test_wide_chars_count_double() {
        assert_eq!(display_width("日本"), 4);
        assert_eq!(truncate("日本語", 5), "日本…");
    }
}
