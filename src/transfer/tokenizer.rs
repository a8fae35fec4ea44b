use crate::config::TokenizerConfig;
use super::Token;

/// Splits analyzer output (`^stem<tag><tag>$ ...`) into tokens
#[derive(Debug, Clone)]
pub struct Tokenizer {
    sentence_marker: String,
    strip_quotes: bool,
}

impl Tokenizer {
    pub fn new(config: &TokenizerConfig) -> Self {
        Self {
            sentence_marker: config.sentence_marker.clone(),
            strip_quotes: config.strip_quotes,
        }
    }

    /// Tokenize one line. Sentence-marker units and untagged units are dropped.
    ///
    /// A unit is treated as a sentence marker when its raw text merely contains
    /// the marker substring, so `^present<n>$` is dropped along with `^.<sent>$`.
    pub fn tokenize(&self, line: &str) -> Vec<Token> {
        let cleaned;
        let line = if self.strip_quotes && line.contains(['\'', '"']) {
            cleaned = line.replace(['\'', '"'], "");
            cleaned.as_str()
        } else {
            line
        };

        line.split('^')
            .filter(|unit| !unit.is_empty() && !unit.contains(self.sentence_marker.as_str()))
            .filter_map(|unit| {
                let unit = unit.trim();
                let unit = unit.strip_suffix('$').unwrap_or(unit);
                let tag_start = unit.find('<')?;
                Some(Token::new(&unit[..tag_start], &unit[tag_start..]))
            })
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(&TokenizerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(line: &str) -> Vec<Token> {
        Tokenizer::default().tokenize(line)
    }

    #[test]
    fn test_tokenize_sentence() {
        let tokens = tokenize("^The<det><def><sp>$ ^text<n><sg>$ ^of<pr>$^.<sent>$");
        assert_eq!(
            tokens,
            vec![
                Token::new("The", "<det><def><sp>"),
                Token::new("text", "<n><sg>"),
                Token::new("of", "<pr>"),
            ]
        );
    }

    #[test]
    fn test_untagged_units_are_dropped() {
        let tokens = tokenize("^*hustler$ ^who<prn><itg><m><sp>$ ^*weighted$");
        assert_eq!(tokens, vec![Token::new("who", "<prn><itg><m><sp>")]);
    }

    #[test]
    fn test_empty_stem_is_kept() {
        let tokens = tokenize("^<cm>$ ^and<cnjcoo>$");
        assert_eq!(tokens[0], Token::new("", "<cm>"));
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_marker_substring_drops_unrelated_unit() {
        let tokens = tokenize("^present<n><sg>$ ^gift<n><sg>$");
        assert_eq!(tokens, vec![Token::new("gift", "<n><sg>")]);
    }

    #[test]
    fn test_quotes_are_stripped() {
        let tokens = tokenize("^road<n><sg>$ ^'s<gen>$ ^\"quote<n>$");
        assert_eq!(tokens[1], Token::new("s", "<gen>"));
        assert_eq!(tokens[2], Token::new("quote", "<n>"));
    }

    #[test]
    fn test_quotes_kept_when_disabled() {
        let config = TokenizerConfig {
            strip_quotes: false,
            ..TokenizerConfig::default()
        };
        let tokens = Tokenizer::new(&config).tokenize("^'s<gen>$");
        assert_eq!(tokens, vec![Token::new("'s", "<gen>")]);
    }

    #[test]
    fn test_custom_sentence_marker() {
        let config = TokenizerConfig {
            sentence_marker: "<eos>".to_string(),
            ..TokenizerConfig::default()
        };
        let tokens = Tokenizer::new(&config).tokenize("^present<n>$^.<eos>$");
        assert_eq!(tokens, vec![Token::new("present", "<n>")]);
    }
}
