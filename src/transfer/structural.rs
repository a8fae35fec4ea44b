use crate::tables::TranslationTable;
use super::{Chunk, Token, UNKNOWN_TAGS};

/// Turn segmenter boundaries into chunks with their target tags
pub fn build_chunks(
    tokens: &[Token],
    boundaries: &[usize],
    patterns: &TranslationTable,
    filler_stem: &str,
) -> Vec<Chunk> {
    boundaries
        .windows(2)
        .map(|bounds| transfer_chunk(&tokens[bounds[0]..bounds[1]], patterns, filler_stem))
        .collect()
}

/// Look up the target tags of one chunk and pad its stems to cover them.
///
/// A chunk without a pattern gets the single `<unknown_tags>` sentinel as its
/// target. Afterwards `stems.len() >= target_tags.len()`.
pub fn transfer_chunk(tokens: &[Token], patterns: &TranslationTable, filler_stem: &str) -> Chunk {
    let stems: Vec<String> = tokens.iter().map(|token| token.stem.clone()).collect();
    let source_tags: Vec<String> = tokens.iter().map(|token| token.tags.clone()).collect();

    let target_tags = match patterns.get(&source_tags.join(" ")) {
        Some(target) => target.split_whitespace().map(str::to_string).collect(),
        None => vec![UNKNOWN_TAGS.to_string()],
    };

    let mut chunk = Chunk {
        stems,
        source_tags,
        target_tags,
    };
    pad_stems(&mut chunk, filler_stem);
    chunk
}

fn pad_stems(chunk: &mut Chunk, filler_stem: &str) {
    if chunk.stems.len() < chunk.target_tags.len() {
        chunk.stems.resize(chunk.target_tags.len(), filler_stem.to_string());
    }
}
