use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::direction::Direction;
use crate::error::{Result, TransferError};

pub const DEFAULT_SENTENCE_MARKER: &str = "sent";
pub const DEFAULT_FILLER_STEM: &str = "extra_word";
pub const DEFAULT_MULTIWORD_JOINER: char = '\u{1f}';

// Default values for optional sections
fn default_direction() -> String {
    "eng-kaz".to_string()
}

fn default_true() -> bool {
    true
}

fn default_sentence_marker() -> String {
    DEFAULT_SENTENCE_MARKER.to_string()
}

fn default_filler_stem() -> String {
    DEFAULT_FILLER_STEM.to_string()
}

fn default_multiword_joiner() -> char {
    DEFAULT_MULTIWORD_JOINER
}

fn default_compatibility_classes() -> Vec<Vec<String>> {
    vec![verb_class(false)]
}

/// The verb-head compatibility class, optionally folding `<vbser>` into it
pub fn verb_class(include_vbser: bool) -> Vec<String> {
    let mut class: Vec<String> = ["<v>", "<vblex>", "<vbmod>", "<vbhaver>"]
        .iter()
        .map(|tag| tag.to_string())
        .collect();
    if include_vbser {
        class.push("<vbser>".to_string());
    }
    class
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Transfer direction, `<source>-<target>`
    #[serde(default = "default_direction")]
    pub direction: String,
    #[serde(default)]
    pub tokenizer: TokenizerConfig,
    #[serde(default)]
    pub transfer: TransferConfig,
    #[serde(default)]
    pub output: OutputConfig,
    /// Language pairs with their table files
    #[serde(default)]
    pub pairs: Vec<LanguagePairConfig>,
    /// Directory relative table paths are resolved against
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Units whose text contains this substring are dropped
    #[serde(default = "default_sentence_marker")]
    pub sentence_marker: String,
    /// Remove `'` and `"` before tokenizing
    #[serde(default = "default_true")]
    pub strip_quotes: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferConfig {
    /// Stem used to pad chunks that have fewer stems than target tags
    #[serde(default = "default_filler_stem")]
    pub filler_stem: String,
    /// Stands in for spaces inside multi-word dictionary entries until output
    #[serde(default = "default_multiword_joiner")]
    pub multiword_joiner: char,
    /// Sets of tag atoms treated as interchangeable when aligning stems
    #[serde(default = "default_compatibility_classes")]
    pub compatibility_classes: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Prefix every output word with `^` so the stream stays re-analyzable
    #[serde(default = "default_true")]
    pub caret_prefix: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguagePairConfig {
    /// Language codes of the left and right table columns
    pub languages: [String; 2],
    /// Structural pattern table file (.tsv, .txt or .json)
    pub patterns: PathBuf,
    /// Dictionary table file (.tsv, .txt or .json)
    pub dictionary: PathBuf,
}

impl LanguagePairConfig {
    pub fn new(left: &str, right: &str) -> Self {
        Self {
            languages: [left.to_string(), right.to_string()],
            patterns: PathBuf::from(format!("tables/{}_{}_patterns.tsv", left, right)),
            dictionary: PathBuf::from(format!("tables/{}_{}_dictionary.tsv", left, right)),
        }
    }

    /// Whether this pair covers `direction`, and if so whether the right column is the source
    pub fn orientation(&self, direction: &Direction) -> Option<bool> {
        let [left, right] = &self.languages;
        if *left == direction.source && *right == direction.target {
            Some(false)
        } else if *right == direction.source && *left == direction.target {
            Some(true)
        } else {
            None
        }
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            sentence_marker: default_sentence_marker(),
            strip_quotes: true,
        }
    }
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            filler_stem: default_filler_stem(),
            multiword_joiner: default_multiword_joiner(),
            compatibility_classes: default_compatibility_classes(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { caret_prefix: true }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            direction: default_direction(),
            tokenizer: TokenizerConfig::default(),
            transfer: TransferConfig::default(),
            output: OutputConfig::default(),
            pairs: vec![
                LanguagePairConfig::new("eng", "kaz"),
                LanguagePairConfig::new("kaz", "rus"),
            ],
            base_dir: None,
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TransferError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| TransferError::Config(format!("Failed to read config file: {}", e)))?;

        let mut config: Config = toml::from_str(&content)
            .map_err(|e| TransferError::Config(format!("Failed to parse config file: {}", e)))?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TransferError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| TransferError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Reject settings the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.tokenizer.sentence_marker.is_empty() {
            return Err(TransferError::Config("sentence_marker must not be empty".to_string()));
        }

        if self.transfer.filler_stem.trim().is_empty() {
            return Err(TransferError::Config("filler_stem must not be empty".to_string()));
        }

        let joiner = self.transfer.multiword_joiner;
        if joiner == '_' || joiner == '^' || joiner == '<' || joiner == '>' || joiner.is_whitespace() {
            return Err(TransferError::Config(format!(
                "multiword_joiner {:?} collides with stream syntax or real stems",
                joiner
            )));
        }

        for class in &self.transfer.compatibility_classes {
            if class.is_empty() {
                return Err(TransferError::Config("compatibility class must not be empty".to_string()));
            }
            if let Some(atom) = class.iter().find(|atom| !is_tag_atom(atom)) {
                return Err(TransferError::Config(format!(
                    "compatibility class entry '{}' is not a single <tag>",
                    atom
                )));
            }
        }

        for pair in &self.pairs {
            let [left, right] = &pair.languages;
            if left.is_empty() || right.is_empty() || left == right {
                return Err(TransferError::Config(format!(
                    "language pair [{}, {}] must name two different languages",
                    left, right
                )));
            }
        }

        Ok(())
    }

    /// Parse the configured direction
    pub fn direction(&self) -> Result<Direction> {
        self.direction.parse()
    }

    /// Every direction the configured pairs can serve
    pub fn directions(&self) -> Vec<Direction> {
        self.pairs
            .iter()
            .flat_map(|pair| {
                let forward = Direction::new(pair.languages[0].clone(), pair.languages[1].clone());
                let backward = forward.reversed();
                [forward, backward]
            })
            .collect()
    }

    /// Find the pair serving `direction`; fails if none does
    pub fn pair_for(&self, direction: &Direction) -> Result<(&LanguagePairConfig, bool)> {
        self.pairs
            .iter()
            .find_map(|pair| pair.orientation(direction).map(|reversed| (pair, reversed)))
            .ok_or_else(|| {
                let known = self
                    .directions()
                    .iter()
                    .map(Direction::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                TransferError::InvalidDirection(format!(
                    "'{}' is not served by any configured language pair (known: {})",
                    direction, known
                ))
            })
    }

    /// Resolve a table path against the config file location
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

fn is_tag_atom(atom: &str) -> bool {
    atom.len() > 2
        && atom.starts_with('<')
        && atom.ends_with('>')
        && atom[1..atom.len() - 1].find(['<', '>']).is_none()
}
