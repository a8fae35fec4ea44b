// Chunk-based structural and lexical transfer
//
// One input line flows through the stages in order:
// - tokenizer: raw analyzer output -> (stem, tags) tokens
// - segmenter: longest-match chunk boundaries over the token tags
// - structural: target tags per chunk, padding with the filler stem
// - aligner: pick the source stems that fit the target tags
// - lexical: dictionary lookup per stem
// - assembler: interleave stems with target tags and serialize

pub mod aligner;
pub mod assembler;
pub mod lexical;
pub mod segmenter;
pub mod structural;
pub mod tags;
pub mod tokenizer;

use tracing::debug;

pub use aligner::align;
pub use assembler::assemble;
pub use lexical::{translate_chunk, translate_stem};
pub use segmenter::{MAX_CHUNK_LEN, segment};
pub use structural::{build_chunks, transfer_chunk};
pub use tags::{CompatibilityClasses, first_tag};
pub use tokenizer::Tokenizer;

use crate::config::Config;
use crate::direction::Direction;
use crate::error::Result;
use crate::tables::TableSet;

/// Emitted in place of target tags when no structural pattern matched
pub const UNKNOWN_TAGS: &str = "<unknown_tags>";

/// Emitted in place of a stem missing from the dictionary
pub const UNKNOWN_WORD: &str = "unknown_word";

/// One analyzed unit of the input stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub stem: String,
    /// Raw tag sequence, e.g. `<det><def><sp>`
    pub tags: String,
}

impl Token {
    pub fn new(stem: impl Into<String>, tags: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            tags: tags.into(),
        }
    }
}

/// A run of tokens transferred as a unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Source stems; realigned and then replaced by their translations
    pub stems: Vec<String>,
    /// Tag string of every source token in the chunk
    pub source_tags: Vec<String>,
    /// One tag string per output word, or the single `<unknown_tags>` sentinel
    pub target_tags: Vec<String>,
}

impl Chunk {
    /// Whether no structural pattern matched this chunk
    pub fn is_unknown(&self) -> bool {
        self.target_tags.len() == 1 && self.target_tags[0] == UNKNOWN_TAGS
    }

    /// Lookup key of the chunk: its source tag strings joined by spaces
    pub fn source_key(&self) -> String {
        self.source_tags.join(" ")
    }
}

/// Counters accumulated while translating
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransferStats {
    pub lines: usize,
    pub tokens: usize,
    pub chunks: usize,
    pub unknown_chunks: usize,
    pub unknown_words: usize,
}

impl TransferStats {
    pub fn absorb(&mut self, other: &TransferStats) {
        self.lines += other.lines;
        self.tokens += other.tokens;
        self.chunks += other.chunks;
        self.unknown_chunks += other.unknown_chunks;
        self.unknown_words += other.unknown_words;
    }
}

/// Everything produced for one input line
#[derive(Debug, Clone)]
pub struct LineTransfer {
    pub chunks: Vec<Chunk>,
    pub output: String,
    pub stats: TransferStats,
}

/// Table-driven transfer engine for a single direction
///
/// Holds only read-only state, so one engine can serve any number of lines
/// (or threads) without coordination.
#[derive(Debug, Clone)]
pub struct TransferEngine {
    tables: TableSet,
    tokenizer: Tokenizer,
    classes: CompatibilityClasses,
    filler_stem: String,
    joiner: char,
    caret_prefix: bool,
}

impl TransferEngine {
    pub fn new(tables: TableSet, config: &Config) -> Self {
        Self {
            tables,
            tokenizer: Tokenizer::new(&config.tokenizer),
            classes: CompatibilityClasses::new(&config.transfer.compatibility_classes),
            filler_stem: config.transfer.filler_stem.clone(),
            joiner: config.transfer.multiword_joiner,
            caret_prefix: config.output.caret_prefix,
        }
    }

    /// Resolve the configured direction and load its tables
    pub fn from_config(config: &Config) -> Result<Self> {
        let direction = config.direction()?;
        Self::for_direction(config, &direction)
    }

    /// Load the tables for an explicit direction
    pub fn for_direction(config: &Config, direction: &Direction) -> Result<Self> {
        config.validate()?;
        let tables = TableSet::load(config, direction)?;
        Ok(Self::new(tables, config))
    }

    pub fn direction(&self) -> &Direction {
        &self.tables.direction
    }

    pub fn tables(&self) -> &TableSet {
        &self.tables
    }

    /// Translate one line; the result always ends with a newline
    pub fn translate_line(&self, line: &str) -> String {
        self.transfer_line(line).output
    }

    /// Translate one line, keeping the intermediate chunks and counters
    pub fn transfer_line(&self, line: &str) -> LineTransfer {
        let tokens = self.tokenizer.tokenize(line);
        let boundaries = segment(&tokens, &self.tables.patterns);
        let mut chunks = build_chunks(&tokens, &boundaries, &self.tables.patterns, &self.filler_stem);

        let mut stats = TransferStats {
            lines: 1,
            tokens: tokens.len(),
            chunks: chunks.len(),
            ..TransferStats::default()
        };

        for chunk in chunks.iter_mut() {
            if chunk.is_unknown() {
                stats.unknown_chunks += 1;
            }
            align(chunk, &self.classes);
            stats.unknown_words += translate_chunk(chunk, &self.tables.dictionary, self.joiner);
            debug!(
                "chunk [{}] -> [{}] stems {:?}",
                chunk.source_key(),
                chunk.target_tags.join(" "),
                chunk.stems
            );
        }

        let output = assemble(&chunks, self.caret_prefix, self.joiner);
        LineTransfer { chunks, output, stats }
    }
}
