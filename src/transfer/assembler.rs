use super::Chunk;

/// Serialize translated chunks as `^stem<tags> ^stem<tags>` plus a newline.
///
/// Stems and target tags are paired positionally up to the shorter of the two.
/// `joiner` characters left by multi-word entries turn back into spaces.
pub fn assemble(chunks: &[Chunk], caret_prefix: bool, joiner: char) -> String {
    let mut output = String::new();

    for chunk in chunks {
        for (stem, tags) in chunk.stems.iter().zip(&chunk.target_tags) {
            if caret_prefix {
                output.push('^');
            }
            output.push_str(stem);
            output.push_str(tags);
            output.push(' ');
        }
    }

    let mut output = output.trim_end().replace(joiner, " ");
    output.push('\n');
    output
}
