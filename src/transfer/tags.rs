use std::collections::HashMap;

use super::UNKNOWN_TAGS;

/// Leading atom of a tag string: `<det><def><sp>` -> `<det>`.
/// `None` for the unknown-tags sentinel and for strings without `>`.
pub fn first_tag(tags: &str) -> Option<&str> {
    if tags == UNKNOWN_TAGS {
        return None;
    }
    tags.find('>').map(|idx| &tags[..=idx])
}

/// Groups of tag atoms treated as interchangeable when aligning stems
#[derive(Debug, Clone, Default)]
pub struct CompatibilityClasses {
    class_of: HashMap<String, usize>,
}

impl CompatibilityClasses {
    /// An atom listed in several classes belongs to the first one only
    pub fn new(classes: &[Vec<String>]) -> Self {
        let mut class_of = HashMap::new();
        for (idx, class) in classes.iter().enumerate() {
            for atom in class {
                class_of.entry(atom.clone()).or_insert(idx);
            }
        }
        Self { class_of }
    }

    /// Whether two leading atoms may stand for each other
    pub fn compatible(&self, a: Option<&str>, b: Option<&str>) -> bool {
        if a == b {
            return true;
        }
        match (a, b) {
            (Some(a), Some(b)) => match (self.class_of.get(a), self.class_of.get(b)) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            },
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::verb_class;

    #[test]
    fn test_first_tag() {
        assert_eq!(first_tag("<det><def><sp>"), Some("<det>"));
        assert_eq!(first_tag("<n>"), Some("<n>"));
        assert_eq!(first_tag(UNKNOWN_TAGS), None);
        assert_eq!(first_tag("broken"), None);
    }

    #[test]
    fn test_verb_heads_are_interchangeable() {
        let classes = CompatibilityClasses::new(&[verb_class(false)]);
        for a in ["<v>", "<vblex>", "<vbmod>", "<vbhaver>"] {
            for b in ["<v>", "<vblex>", "<vbmod>", "<vbhaver>"] {
                assert!(classes.compatible(Some(a), Some(b)), "{} vs {}", a, b);
            }
        }
        assert!(classes.compatible(Some("<vaux>"), Some("<vaux>")));
        assert!(!classes.compatible(Some("<vaux>"), Some("<v>")));
        assert!(!classes.compatible(Some("<vbser>"), Some("<vblex>")));
        assert!(!classes.compatible(Some("<n>"), Some("<adj>")));
    }

    #[test]
    fn test_vbser_folded_into_verb_class() {
        let classes = CompatibilityClasses::new(&[verb_class(true)]);
        assert!(classes.compatible(Some("<vbser>"), Some("<vblex>")));
        assert!(!classes.compatible(Some("<vaux>"), Some("<vbser>")));
    }

    #[test]
    fn test_missing_tags_only_match_each_other() {
        let classes = CompatibilityClasses::new(&[verb_class(false)]);
        assert!(classes.compatible(None, None));
        assert!(!classes.compatible(None, Some("<v>")));
        assert!(!classes.compatible(Some("<n>"), None));
    }

    #[test]
    fn test_atom_keeps_first_class() {
        let classes = CompatibilityClasses::new(&[
            vec!["<n>".to_string(), "<np>".to_string()],
            vec!["<np>".to_string(), "<prn>".to_string()],
        ]);
        assert!(classes.compatible(Some("<n>"), Some("<np>")));
        assert!(!classes.compatible(Some("<np>"), Some("<prn>")));
    }
}
