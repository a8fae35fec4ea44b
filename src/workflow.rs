use std::path::{Path, PathBuf};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, BufWriter};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{Result, TransferError};
use crate::transfer::{TransferEngine, TransferStats};

pub struct Workflow {
    engine: TransferEngine,
}

impl Workflow {
    /// Resolve the configured direction and load its tables
    pub fn new(config: &Config) -> Result<Self> {
        let engine = TransferEngine::from_config(config)?;
        info!(
            "Transfer engine ready for {} ({} patterns, {} dictionary entries)",
            engine.direction(),
            engine.tables().patterns.len(),
            engine.tables().dictionary.len()
        );
        Ok(Self { engine })
    }

    pub fn with_engine(engine: TransferEngine) -> Self {
        Self { engine }
    }

    /// Translate every line of `reader` into `writer`, preserving line order
    ///
    /// Lines that are not valid UTF-8 are decoded lossily and still produce
    /// exactly one output line.
    pub async fn translate_stream<R, W>(&self, mut reader: R, writer: &mut W) -> Result<TransferStats>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();
        let mut stats = TransferStats::default();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            let line = decode_line(&buf, stats.lines + 1);
            let result = self.engine.transfer_line(&line);
            debug!("line {}: {} chunks", stats.lines + 1, result.stats.chunks);
            writer.write_all(result.output.as_bytes()).await?;
            stats.absorb(&result.stats);
        }

        writer.flush().await?;
        Ok(stats)
    }

    /// Translate a file (or stdin) into a file (or stdout)
    pub async fn translate_file(&self, input: Option<&Path>, output: Option<&Path>) -> Result<TransferStats> {
        let stats = match (input, output) {
            (Some(input), Some(output)) => {
                let reader = open_input(input).await?;
                let mut writer = BufWriter::new(fs::File::create(output).await?);
                self.translate_stream(reader, &mut writer).await?
            }
            (Some(input), None) => {
                let reader = open_input(input).await?;
                let mut writer = tokio::io::stdout();
                self.translate_stream(reader, &mut writer).await?
            }
            (None, Some(output)) => {
                let reader = BufReader::new(tokio::io::stdin());
                let mut writer = BufWriter::new(fs::File::create(output).await?);
                self.translate_stream(reader, &mut writer).await?
            }
            (None, None) => {
                let reader = BufReader::new(tokio::io::stdin());
                let mut writer = tokio::io::stdout();
                self.translate_stream(reader, &mut writer).await?
            }
        };

        log_summary(&stats);
        Ok(stats)
    }

    /// Translate every `*.{extension}` file under `input_dir` into `output_dir`
    pub async fn process_directory<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_dir: P,
        output_dir: Q,
        extension: &str,
    ) -> Result<TransferStats> {
        let input_dir = input_dir.as_ref();
        let output_dir = output_dir.as_ref();
        info!("Processing directory: {}", input_dir.display());

        if !input_dir.is_dir() {
            return Err(TransferError::Config(format!(
                "Input path is not a directory: {}",
                input_dir.display()
            )));
        }

        fs::create_dir_all(output_dir).await?;

        let extension = extension.trim_start_matches('.').to_lowercase();
        let mut input_files = Vec::new();
        for entry in WalkDir::new(input_dir).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(ext_str) = entry.path().extension().and_then(|ext| ext.to_str()) {
                if ext_str.to_lowercase() == extension {
                    input_files.push(entry.path().to_path_buf());
                }
            }
        }
        input_files.sort();

        info!("Found {} input files to translate", input_files.len());

        let progress = ProgressBar::new(input_files.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        let mut total = TransferStats::default();
        for input_path in input_files {
            let output_path = self.output_path_for(&input_path, output_dir, &extension);
            progress.set_message(input_path.display().to_string());

            match self.translate_file(Some(&input_path), Some(&output_path)).await {
                Ok(stats) => {
                    info!("Translated {} -> {}", input_path.display(), output_path.display());
                    total.absorb(&stats);
                }
                Err(e) => warn!("Failed to translate {}: {}", input_path.display(), e),
            }
            progress.inc(1);
        }

        progress.finish_with_message("done");
        log_summary(&total);
        Ok(total)
    }

    /// `<dir>/<name>.<ext>` -> `<output_dir>/<name>.<target-lang>.<ext>`
    fn output_path_for(&self, input_path: &Path, output_dir: &Path, extension: &str) -> PathBuf {
        let stem = input_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        output_dir.join(format!("{}.{}.{}", stem, self.engine.direction().target, extension))
    }
}

/// Strip the line terminator and decode, replacing invalid UTF-8 sequences
fn decode_line(raw: &[u8], line_no: usize) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    match std::str::from_utf8(raw) {
        Ok(line) => line.to_string(),
        Err(e) => {
            warn!("line {}: invalid UTF-8 ({}), decoding lossily", line_no, e);
            String::from_utf8_lossy(raw).into_owned()
        }
    }
}

async fn open_input(path: &Path) -> Result<BufReader<fs::File>> {
    if !path.exists() {
        return Err(TransferError::FileNotFound(path.display().to_string()));
    }
    Ok(BufReader::new(fs::File::open(path).await?))
}

fn log_summary(stats: &TransferStats) {
    info!(
        "Translated {} lines: {} tokens in {} chunks, {} unknown chunks, {} unknown words",
        stats.lines, stats.tokens, stats.chunks, stats.unknown_chunks, stats.unknown_words
    );
}
