use unicode_segmentation::UnicodeSegmentation;

/// OVP (Optimal Viewing Position) anchor calculation.
///
/// The anchor sits slightly left of the visual centre, at one third of the
/// word length, where the leading letters carry most of the recognition work:
/// - 0-1 graphemes → position 0
/// - otherwise → floor(len / 3), clamped to the last grapheme
///
/// Returns the 0-based grapheme index the renderer should emphasise.
pub fn calculate_anchor_position(word: &str) -> usize {
    let len = word.graphemes(true).count();
    match len {
        0..=1 => 0,
        _ => (len / 3).min(len - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_anchor_position_single_char() {
        let result = calculate_anchor_position("a");
        assert_eq!(result, 0, "Single char word should return position 0");
        assert_eq!(calculate_anchor_position("I"), 0);
        assert_eq!(calculate_anchor_position("."), 0);
    }

    #[test]
    fn test_calculate_anchor_position_empty_string() {
        let result = calculate_anchor_position("");
        assert_eq!(result, 0, "Empty string should return position 0");
    }

    #[test]
    fn test_calculate_anchor_position_two_chars() {
        assert_eq!(calculate_anchor_position("am"), 0);
    }

    #[test]
    fn test_calculate_anchor_position_three_chars() {
        assert_eq!(calculate_anchor_position("cat"), 1);
    }

    #[test]
    fn test_calculate_anchor_position_eight_chars() {
        assert_eq!(calculate_anchor_position("elephant"), 2);
    }

    #[test]
    fn test_calculate_anchor_position_counts_punctuation() {
        assert_eq!(calculate_anchor_position("One."), 1);
        assert_eq!(calculate_anchor_position("three!"), 2);
    }

    #[test]
    fn test_calculate_anchor_position_long_word() {
        assert_eq!(calculate_anchor_position("Antidisestablishmentarianism"), 9);
    }

    #[test]
    fn test_calculate_anchor_position_combining_marks() {
        // "cafe" + combining acute is four graphemes, not five chars
        assert_eq!(calculate_anchor_position("cafe\u{301}s"), 1);
    }

    #[test]
    fn test_calculate_anchor_position_always_in_range() {
        for len in 1..40 {
            let word = "x".repeat(len);
            assert!(calculate_anchor_position(&word) < len);
        }
    }
}
