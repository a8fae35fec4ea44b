use crate::tables::TranslationTable;
use super::{Chunk, UNKNOWN_WORD};

/// Translate one stem. Spaces inside a multi-word entry become `joiner` so the
/// entry stays a single word until the assembler restores them.
pub fn translate_stem(dictionary: &TranslationTable, stem: &str, joiner: char) -> String {
    match dictionary.get(stem) {
        Some(target) => target.chars().map(|c| if c == ' ' { joiner } else { c }).collect(),
        None => UNKNOWN_WORD.to_string(),
    }
}

/// Replace every stem of `chunk` with its translation; returns how many were unknown
pub fn translate_chunk(chunk: &mut Chunk, dictionary: &TranslationTable, joiner: char) -> usize {
    let mut unknown = 0;
    for stem in chunk.stems.iter_mut() {
        if !dictionary.contains_key(stem) {
            unknown += 1;
        }
        *stem = translate_stem(dictionary, stem, joiner);
    }
    unknown
}
