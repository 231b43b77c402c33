use crate::engine::config::TimingConfig;
use crate::reading::Token;

/// Base on-screen time for one word at the given speed, before any
/// punctuation pause is applied.
pub fn wpm_to_milliseconds(wpm: f64) -> f64 {
    60_000.0 / wpm.max(1.0)
}

/// Picks the pause multiplier from a word's final character only.
/// Multipliers never stack.
pub fn punctuation_multiplier(trailing: Option<char>, config: &TimingConfig) -> f64 {
    match trailing {
        Some('.') => config.period_multiplier,
        Some('!' | '?') => config.exclamation_multiplier,
        Some(';' | ':') => config.semicolon_multiplier,
        Some(',') => config.comma_multiplier,
        _ => 1.0,
    }
}

pub fn calculate_word_delay(token: &Token, base_delay_ms: f64, config: &TimingConfig) -> u64 {
    let delay_ms = base_delay_ms * punctuation_multiplier(token.trailing_char(), config);
    delay_ms.round() as u64
}

/// Splits text on runs of whitespace into the reading sequence.
///
/// Token text is kept verbatim. Blank input yields an empty sequence; the
/// controller is responsible for refusing to start on it.
pub fn tokenize_text(text: &str) -> Vec<Token> {
    text.split_whitespace().map(Token::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delay_for(word: &str, base_delay_ms: f64, config: &TimingConfig) -> u64 {
        calculate_word_delay(&Token::new(word), base_delay_ms, config)
    }

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_wpm_to_milliseconds_300() {
        // 300 WPM = 200ms per word (60,000 / 300 = 200)
        assert_eq!(wpm_to_milliseconds(300.0), 200.0);
    }

    #[test]
    fn test_wpm_to_milliseconds_600() {
        assert_eq!(wpm_to_milliseconds(600.0), 100.0);
    }

    #[test]
    fn test_wpm_to_milliseconds_keeps_fraction() {
        // 350 WPM = 171.428... ms, rounding only happens on the final delay
        let result = wpm_to_milliseconds(350.0);
        assert!((result - 171.428).abs() < 0.001);
    }

    #[test]
    fn test_word_delay_period() {
        let config = TimingConfig::default();
        assert_eq!(delay_for("end.", 500.0, &config), 1250);
    }

    #[test]
    fn test_word_delay_comma() {
        let config = TimingConfig::default();
        assert_eq!(delay_for("wait,", 500.0, &config), 900);
    }

    #[test]
    fn test_word_delay_semicolon_and_colon() {
        let config = TimingConfig::default();
        assert_eq!(delay_for("yes;", 500.0, &config), 1000);
        assert_eq!(delay_for("note:", 500.0, &config), 1000);
    }

    #[test]
    fn test_word_delay_exclamation_and_question() {
        let config = TimingConfig::default();
        assert_eq!(delay_for("run!", 500.0, &config), 1100);
        assert_eq!(delay_for("why?", 500.0, &config), 1100);
    }

    #[test]
    fn test_word_delay_plain_word() {
        let config = TimingConfig::default();
        assert_eq!(delay_for("word", 500.0, &config), 500);
    }

    #[test]
    fn test_word_delay_only_trailing_char_counts() {
        let config = TimingConfig::default();
        // Inner punctuation is ignored and trailing marks never stack
        assert_eq!(delay_for("e.g", 500.0, &config), 500);
        assert_eq!(delay_for("what?!", 500.0, &config), 1100);
        assert_eq!(delay_for("wait...,", 500.0, &config), 900);
        assert_eq!(delay_for("\"quoted.\"", 500.0, &config), 500);
    }

    #[test]
    fn test_punctuation_multiplier_without_trailing_char() {
        let config = TimingConfig::default();
        assert_eq!(punctuation_multiplier(None, &config), 1.0);
        assert_eq!(punctuation_multiplier(Some(';'), &config), 2.0);
    }

    #[test]
    fn test_word_delay_uses_configured_multipliers() {
        let config = TimingConfig {
            period_multiplier: 4.0,
            ..TimingConfig::default()
        };
        assert_eq!(delay_for("end.", 100.0, &config), 400);
    }

    #[test]
    fn test_tokenize_trims_and_collapses_whitespace() {
        let tokens = tokenize_text("  hello   world  ");
        assert_eq!(texts(&tokens), vec!["hello", "world"]);
    }

    #[test]
    fn test_tokenize_empty_and_blank() {
        assert!(tokenize_text("").is_empty());
        assert!(tokenize_text(" \t\n  \r\n").is_empty());
    }

    #[test]
    fn test_tokenize_newlines_and_tabs() {
        let tokens = tokenize_text("one\ttwo\nthree\r\n\nfour");
        assert_eq!(texts(&tokens), vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn test_tokenize_preserves_punctuation() {
        let tokens = tokenize_text("One. Two, three!");
        assert_eq!(texts(&tokens), vec!["One.", "Two,", "three!"]);
    }

    #[test]
    fn test_tokenize_unicode_whitespace() {
        let tokens = tokenize_text("left\u{00A0}right\u{2003}end");
        assert_eq!(texts(&tokens), vec!["left", "right", "end"]);
    }

    #[test]
    fn test_tokenize_never_yields_empty_tokens() {
        let tokens = tokenize_text("a  \n\n  b \t c");
        assert!(tokens.iter().all(|t| !t.text.is_empty()));
    }
}
