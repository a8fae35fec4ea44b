use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use crate::error::{Result, TransferError};
use super::PairTable;

/// On-disk layout of a pair table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// One `left<TAB>right` entry per line
    Tsv,
    /// `{"<left-lang>": [...], "<right-lang>": [...]}` with index-aligned arrays
    Json,
}

impl TableFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        match extension.as_deref() {
            Some("tsv") | Some("txt") => Ok(Self::Tsv),
            Some("json") => Ok(Self::Json),
            _ => Err(TransferError::Config(format!(
                "Unsupported table format for {} (expected .tsv, .txt or .json)",
                path.display()
            ))),
        }
    }
}

/// Read a pair table whose columns are in `languages` order
pub fn load_pair_table(path: &Path, languages: &[String; 2]) -> Result<PairTable> {
    if !path.exists() {
        return Err(TransferError::FileNotFound(path.display().to_string()));
    }

    let format = TableFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    let label = path.display().to_string();

    let table = match format {
        TableFormat::Tsv => parse_tsv(&content, &label)?,
        TableFormat::Json => parse_json(&content, languages, &label)?,
    };

    debug!("Read {} rows from {}", table.rows.len(), label);
    Ok(table)
}

/// Parse tab-separated rows; `#` comments and blank lines are skipped
pub fn parse_tsv(content: &str, label: &str) -> Result<PairTable> {
    let mut rows = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let mut fields = line.split('\t');
        let (left, right) = match (fields.next(), fields.next(), fields.next()) {
            (Some(left), Some(right), None) => (left.trim(), right.trim()),
            _ => {
                return Err(table_error(label, idx + 1, "expected exactly two tab-separated columns"));
            }
        };

        if left.is_empty() || right.is_empty() {
            return Err(table_error(label, idx + 1, "empty column"));
        }

        rows.push((left.to_string(), right.to_string()));
    }

    Ok(PairTable::new(rows))
}

/// Parse an object holding one array per language
pub fn parse_json(content: &str, languages: &[String; 2], label: &str) -> Result<PairTable> {
    let mut columns: HashMap<String, Vec<String>> = serde_json::from_str(content)?;

    let mut take = |language: &String| {
        columns
            .remove(language)
            .ok_or_else(|| table_error(label, 0, &format!("missing column '{}'", language)))
    };
    let left = take(&languages[0])?;
    let right = take(&languages[1])?;

    if left.len() != right.len() {
        return Err(table_error(
            label,
            0,
            &format!(
                "column '{}' has {} entries but '{}' has {}",
                languages[0],
                left.len(),
                languages[1],
                right.len()
            ),
        ));
    }

    Ok(PairTable::new(left.into_iter().zip(right).collect()))
}

fn table_error(label: &str, line: usize, message: &str) -> TransferError {
    TransferError::Table {
        path: label.to_string(),
        line,
        message: message.to_string(),
    }
}
