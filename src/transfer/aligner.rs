use super::Chunk;
use super::tags::{CompatibilityClasses, first_tag};

/// Pick one source stem per target tag when the chunk has more stems than tags.
///
/// For every target tag the source tags are scanned from the start of the chunk
/// and the stem of the first compatible one is taken, so the same source stem
/// can be picked for several target tags. Target tags without a compatible
/// source are skipped, which may leave fewer stems than target tags.
pub fn align(chunk: &mut Chunk, classes: &CompatibilityClasses) {
    if chunk.stems.len() == chunk.target_tags.len() {
        return;
    }

    let aligned: Vec<String> = chunk
        .target_tags
        .iter()
        .filter_map(|target| {
            let wanted = first_tag(target);
            chunk
                .source_tags
                .iter()
                .position(|source| classes.compatible(wanted, first_tag(source)))
                .and_then(|idx| chunk.stems.get(idx).cloned())
        })
        .collect();

    chunk.stems = aligned;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::verb_class;

    fn chunk(words: &[(&str, &str)], target: &[&str]) -> Chunk {
        Chunk {
            stems: words.iter().map(|(stem, _)| stem.to_string()).collect(),
            source_tags: words.iter().map(|(_, tags)| tags.to_string()).collect(),
            target_tags: target.iter().map(|tags| tags.to_string()).collect(),
        }
    }

    fn classes() -> CompatibilityClasses {
        CompatibilityClasses::new(&[verb_class(false)])
    }

    #[test]
    fn test_selects_compatible_stems_in_target_order() {
        let mut chunk = chunk(
            &[("you", "<prn><subj>"), ("with", "<pr>"), ("book", "<n><pl>")],
            &["<prn><pos>", "<n><pl><ins>"],
        );
        align(&mut chunk, &classes());
        assert_eq!(chunk.stems, vec!["you".to_string(), "book".to_string()]);
    }

    #[test]
    fn test_target_order_wins_over_source_order() {
        let mut chunk = chunk(
            &[("red", "<adj>"), ("the", "<det><def>"), ("house", "<n><sg>")],
            &["<n><sg>", "<adj>"],
        );
        align(&mut chunk, &classes());
        assert_eq!(chunk.stems, vec!["house".to_string(), "red".to_string()]);
    }

    #[test]
    fn test_verb_class_matches_across_variants() {
        let mut chunk = chunk(
            &[("can", "<vaux><past>"), ("throw", "<vblex><inf>"), ("far", "<adv>")],
            &["<v><tv><past>", "<adv>"],
        );
        align(&mut chunk, &classes());
        assert_eq!(chunk.stems, vec!["throw".to_string(), "far".to_string()]);
    }

    #[test]
    fn test_repeated_tag_reselects_first_source() {
        // Both target nouns map to the first source noun; "lock" is never picked
        let mut chunk = chunk(
            &[("key", "<n><sg>"), ("into", "<pr>"), ("lock", "<n><sg>")],
            &["<n><sg>", "<n><sg><dat>"],
        );
        align(&mut chunk, &classes());
        assert_eq!(chunk.stems, vec!["key".to_string(), "key".to_string()]);
    }

    #[test]
    fn test_unmatched_target_is_skipped() {
        let mut chunk = chunk(
            &[("a", "<det><ind>"), ("road", "<n><sg>"), ("soon", "<adv>")],
            &["<adj>", "<n><sg>"],
        );
        align(&mut chunk, &classes());
        assert_eq!(chunk.stems, vec!["road".to_string()]);
    }

    #[test]
    fn test_no_compatible_source_empties_chunk() {
        let mut chunk = chunk(&[("a", "<det><ind>"), ("road", "<n><sg>")], &["<adj>"]);
        align(&mut chunk, &classes());
        assert!(chunk.stems.is_empty());
    }

    #[test]
    fn test_equal_counts_leave_order_untouched() {
        let mut chunk = chunk(&[("big", "<adj>"), ("dog", "<n><sg>")], &["<n><nom>", "<adj>"]);
        align(&mut chunk, &classes());
        assert_eq!(chunk.stems, vec!["big".to_string(), "dog".to_string()]);
    }

    #[test]
    fn test_three_stems_two_targets() {
        let mut chunk = chunk(
            &[("he", "<prn><subj>"), ("quickly", "<adv>"), ("run", "<vblex><past>")],
            &["<prn><nom>", "<v><iv><past>"],
        );
        align(&mut chunk, &classes());
        assert_eq!(chunk.stems, vec!["he".to_string(), "run".to_string()]);
    }
}
