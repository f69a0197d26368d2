// ============================================================
// Layer 4 — AG News Character Dataset
// ============================================================
// Implements Burn's Dataset trait over the in-memory rows.
//
// Construction loads everything once:
//   alphabet.json → Alphabet → OneHotEncoder
//   train.csv     → labels: Vec<i64>, texts: Vec<String>
//
// Indexed access encodes on demand, so only one matrix per
// requested item is ever materialised:
//   get(i) → CharSample { matrix: encode(texts[i]), label: labels[i] }
//
// After construction nothing is mutated; the DataLoader's
// worker threads share the dataset read-only.

use anyhow::Result;
use burn::data::dataset::Dataset;
use std::{collections::BTreeMap, path::Path};

use crate::data::{
    config::DatasetConfig,
    encoder::OneHotEncoder,
    loader::{CsvRowLoader, JsonAlphabetLoader},
    preprocessor::Preprocessor,
};
use crate::domain::{
    class_weight::ClassWeight,
    one_hot::OneHotMatrix,
    traits::{AlphabetSource, RowSource, TextEncoder},
};

/// One encoded sample, as handed to the batcher.
#[derive(Debug, Clone, PartialEq)]
pub struct CharSample {
    /// (alphabet_size × max_length) one-hot matrix
    pub matrix: OneHotMatrix,

    /// Label exactly as stored in the CSV
    pub label: i64,
}

pub struct AgNewsDataset {
    labels: Vec<i64>,
    texts: Vec<String>,
    encoder: OneHotEncoder,
}

impl AgNewsDataset {
    /// Load the dataset from a CSV file and a JSON alphabet file.
    /// Text is lower-cased.
    pub fn new(
        label_data_path: impl AsRef<Path>,
        alphabet_path: impl AsRef<Path>,
        max_length: usize,
    ) -> Result<Self> {
        Self::from_sources(
            &CsvRowLoader::new(label_data_path),
            &JsonAlphabetLoader::new(alphabet_path),
            max_length,
        )
    }

    /// Load the dataset described by a DatasetConfig
    pub fn from_config(cfg: &DatasetConfig) -> Result<Self> {
        let rows = CsvRowLoader::new(&cfg.label_data_path)
            .with_preprocessor(Preprocessor::new().with_lowercase(cfg.lowercase));
        let alphabet = JsonAlphabetLoader::new(&cfg.alphabet_path);

        Self::from_sources(&rows, &alphabet, cfg.max_length)
    }

    /// Build from any row and alphabet source.
    /// The alphabet is loaded first, then the rows.
    pub fn from_sources<R, A>(rows: &R, alphabet: &A, max_length: usize) -> Result<Self>
    where
        R: RowSource,
        A: AlphabetSource,
    {
        let alphabet = alphabet.load_alphabet()?;
        let rows = rows.load_rows()?;

        let (labels, texts): (Vec<i64>, Vec<String>) =
            rows.into_iter().map(|r| (r.label, r.text)).unzip();

        tracing::info!(
            "Dataset ready: {} samples, alphabet {} chars, max_length {}",
            labels.len(),
            alphabet.len(),
            max_length
        );

        Ok(Self {
            labels,
            texts,
            encoder: OneHotEncoder::new(alphabet, max_length),
        })
    }

    /// Number of loaded rows
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    /// Encode the text at `index` and pair it with its label.
    /// Returns None when `index` is out of range.
    pub fn get_item(&self, index: usize) -> Option<CharSample> {
        let text = self.texts.get(index)?;
        Some(CharSample {
            matrix: self.encoder.encode(text),
            label: self.labels[index],
        })
    }

    /// Inverse-frequency weights and counts per distinct label,
    /// in ascending label order: (weights, counts).
    pub fn class_weights(&self) -> (Vec<f64>, Vec<usize>) {
        self.class_stats()
            .into_iter()
            .map(|c| (c.weight, c.count))
            .unzip()
    }

    /// Same data as class_weights(), with the labels attached
    pub fn class_stats(&self) -> Vec<ClassWeight> {
        let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
        for &label in &self.labels {
            *counts.entry(label).or_insert(0) += 1;
        }

        let total = self.size();
        counts
            .into_iter()
            .map(|(label, count)| ClassWeight::new(label, count, total))
            .collect()
    }

    pub fn encoder(&self) -> &OneHotEncoder {
        &self.encoder
    }

    /// Stored (preprocessed) text at `index`
    pub fn text(&self, index: usize) -> Option<&str> {
        self.texts.get(index).map(String::as_str)
    }
}

impl Dataset<CharSample> for AgNewsDataset {
    fn get(&self, index: usize) -> Option<CharSample> {
        self.get_item(index)
    }

    fn len(&self) -> usize {
        self.size()
    }
}
