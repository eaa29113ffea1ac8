//! Normalization - Fixed Character Replacements
//!
//! Applies the fixed replacement table to raw corpus text before anything
//! else touches it: vocabularies, line splitting, and filtering all operate
//! on normalized text. The table is not configurable.
//!
//! @version 0.1.0
//! @author `SeqPrep` Development Team

/// The fixed replacement table, applied in order.
///
/// Tab becomes a plain space, three dash-like code points collapse to the
/// en-dash, the zero-width space disappears, and the no-break space becomes
/// a plain space.
pub const REPLACE: [(&str, &str); 6] = [
    ("\t", " "),
    ("\u{2014}", "\u{2013}"), // em-dash
    ("\u{2015}", "\u{2013}"), // horizontal bar
    ("\u{2212}", "\u{2013}"), // minus sign
    ("\u{200b}", ""),         // zero-width space
    ("\u{a0}", " "),          // no-break space
];

/// Applies the replacement table to raw corpus text.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let mut text = raw.to_string();
    for (from, to) in REPLACE {
        if text.contains(from) {
            text = text.replace(from, to);
        }
    }
    text
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_becomes_space() {
        assert_eq!(normalize("a\tb"), "a b");
    }

    #[test]
    fn test_dashes_collapse_to_en_dash() {
        assert_eq!(normalize("a\u{2014}b\u{2015}c\u{2212}d"), "a–b–c–d");
    }

    #[test]
    fn test_zero_width_space_removed() {
        assert_eq!(normalize("a\u{200b}b"), "ab");
    }

    #[test]
    fn test_no_break_space() {
        assert_eq!(normalize("a\u{a0}b"), "a b");
    }

    #[test]
    fn test_plain_text_untouched() {
        let text = "Xin chào thế giới\n";
        assert_eq!(normalize(text), text);
    }
}
