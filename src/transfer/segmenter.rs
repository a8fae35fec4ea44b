use crate::tables::TranslationTable;
use super::Token;

/// Longest token run a structural pattern may cover
pub const MAX_CHUNK_LEN: usize = 6;

/// Split `tokens` into chunks, preferring the longest known pattern at each position.
///
/// Returns strictly increasing boundaries starting at 0 and ending at `tokens.len()`.
/// A position where no window matches becomes a chunk of one token.
pub fn segment(tokens: &[Token], patterns: &TranslationTable) -> Vec<usize> {
    let mut boundaries = vec![0];
    let mut current = 0;

    while current < tokens.len() {
        let max_len = MAX_CHUNK_LEN.min(tokens.len() - current);
        let step = (1..=max_len)
            .rev()
            .find(|&len| patterns.contains_key(&chunk_key(&tokens[current..current + len])))
            .unwrap_or(1);
        current += step;
        boundaries.push(current);
    }

    boundaries
}

/// Tag strings of `tokens` joined by single spaces
pub fn chunk_key(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.tags.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(tags: &[&str]) -> Vec<Token> {
        tags.iter().map(|tags| Token::new("w", *tags)).collect()
    }

    fn table(keys: &[&str]) -> TranslationTable {
        keys.iter().map(|key| (*key, "<x>")).collect()
    }

    #[test]
    fn test_prefers_longest_match() {
        let tokens = tokens(&["<det>", "<adj>", "<n>", "<pr>"]);
        let patterns = table(&["<det>", "<det> <adj>", "<det> <adj> <n>", "<pr>"]);
        assert_eq!(segment(&tokens, &patterns), vec![0, 3, 4]);
    }

    #[test]
    fn test_single_full_pattern_gives_one_chunk() {
        let tokens = tokens(&["<det><def><sp>", "<n><sg>"]);
        let patterns = table(&["<det><def><sp> <n><sg>", "<n><sg>"]);
        assert_eq!(segment(&tokens, &patterns), vec![0, 2]);
    }

    #[test]
    fn test_no_match_advances_one_token_at_a_time() {
        let tokens = tokens(&["<a>", "<b>", "<c>", "<d>", "<e>", "<f>", "<g>", "<h>"]);
        let boundaries = segment(&tokens, &TranslationTable::new());
        assert_eq!(boundaries, (0..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_window_is_bounded() {
        let tags = ["<n>"; 7];
        let tokens = tokens(&tags);
        let seven = tags.join(" ");
        let six = tags[..6].join(" ");
        let patterns = table(&[seven.as_str(), six.as_str()]);
        // The seven-token pattern is never probed
        assert_eq!(segment(&tokens, &patterns), vec![0, 6, 7]);
    }

    #[test]
    fn test_window_shrinks_near_end() {
        let tokens = tokens(&["<pr>", "<det>", "<n>"]);
        let patterns = table(&["<pr>", "<det> <n>"]);
        assert_eq!(segment(&tokens, &patterns), vec![0, 1, 3]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(segment(&[], &table(&["<n>"])), vec![0]);
    }

    #[test]
    fn test_chunk_key() {
        let tokens = tokens(&["<det><def><sp>", "<n><sg>"]);
        assert_eq!(chunk_key(&tokens), "<det><def><sp> <n><sg>");
    }
}
