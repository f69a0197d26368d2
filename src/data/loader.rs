// ============================================================
// Layer 4 — Alphabet and Row Loaders
// ============================================================
// Reads the two input files of the dataset:
//
//   alphabet.json   → JsonAlphabetLoader → Alphabet
//     ["a", "b", "c", ..., "}"]
//
//   train.csv       → CsvRowLoader       → Vec<LabeledText>
//     "3","Wall St. Bears Claw Back","Reuters - Short-sellers..."
//      │   └──────────── joined with spaces, lower-cased ───────┘
//      └─ integer label
//
// Both loaders fail fast: malformed JSON, a malformed CSV
// record or a non-numeric label aborts the whole load with
// the file path and row number attached to the error.

use anyhow::{bail, Context, Result};
use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use crate::data::preprocessor::Preprocessor;
use crate::domain::{
    alphabet::Alphabet,
    labeled_text::LabeledText,
    traits::{AlphabetSource, RowSource},
};

// ─── JsonAlphabetLoader ───────────────────────────────────────────────────────
/// Loads the alphabet from a JSON array of strings.
pub struct JsonAlphabetLoader {
    path: PathBuf,
}

impl JsonAlphabetLoader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl AlphabetSource for JsonAlphabetLoader {
    fn load_alphabet(&self) -> Result<Alphabet> {
        let file = File::open(&self.path)
            .with_context(|| format!("Cannot open alphabet file '{}'", self.path.display()))?;

        let alphabet = parse_alphabet(BufReader::new(file))
            .with_context(|| format!("Invalid alphabet file '{}'", self.path.display()))?;

        tracing::info!(
            "Loaded alphabet of {} characters from '{}'",
            alphabet.len(),
            self.path.display()
        );
        Ok(alphabet)
    }
}

/// Parse a JSON array of strings and concatenate it into an Alphabet.
pub fn parse_alphabet<R: Read>(reader: R) -> Result<Alphabet> {
    let symbols: Vec<String> = serde_json::from_reader(reader)
        .context("Alphabet must be a JSON array of strings")?;

    let alphabet = Alphabet::from_symbols(&symbols);
    if alphabet.is_empty() {
        bail!("Alphabet is empty");
    }

    let dupes = alphabet.duplicates();
    if !dupes.is_empty() {
        tracing::warn!(
            "Alphabet contains repeated characters {:?}; first position wins",
            dupes
        );
    }

    Ok(alphabet)
}

// ─── CsvRowLoader ─────────────────────────────────────────────────────────────
/// Loads (label, text) rows from a headerless CSV file.
pub struct CsvRowLoader {
    path: PathBuf,
    preprocessor: Preprocessor,
}

impl CsvRowLoader {
    /// Loader with the default (lower-casing) preprocessor
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            preprocessor: Preprocessor::new(),
        }
    }

    pub fn with_preprocessor(mut self, preprocessor: Preprocessor) -> Self {
        self.preprocessor = preprocessor;
        self
    }
}

impl RowSource for CsvRowLoader {
    fn load_rows(&self) -> Result<Vec<LabeledText>> {
        let file = File::open(&self.path)
            .with_context(|| format!("Cannot open data file '{}'", self.path.display()))?;

        let rows = parse_rows(BufReader::new(file), &self.preprocessor)
            .with_context(|| format!("Invalid data file '{}'", self.path.display()))?;

        tracing::info!("Loaded {} rows from '{}'", rows.len(), self.path.display());
        Ok(rows)
    }
}

/// Parse every CSV record into a LabeledText.
///
/// Records may have any number of text columns (including none);
/// the label column is mandatory. Blank lines are not records
/// and are skipped.
pub fn parse_rows<R: Read>(reader: R, preprocessor: &Preprocessor) -> Result<Vec<LabeledText>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b',')
        .quote(b'"')
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();

    for (i, record) in rdr.records().enumerate() {
        let line = i + 1;
        let record = record.with_context(|| format!("Malformed CSV record at row {line}"))?;

        let label_field = record
            .get(0)
            .with_context(|| format!("Row {line} has no label column"))?;

        let label: i64 = label_field
            .trim()
            .parse()
            .with_context(|| format!("Row {line}: label '{label_field}' is not an integer"))?;

        let text = preprocessor.join_fields(record.iter().skip(1));
        rows.push(LabeledText::new(label, text));
    }

    tracing::debug!("Parsed {} CSV records", rows.len());
    Ok(rows)
}
