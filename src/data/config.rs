// ============================================================
// Layer 4 — Dataset Configuration
// ============================================================
// Everything needed to rebuild the same dataset: both input
// paths, the fixed matrix width and the case-folding switch.
// Serialisable so it can be written next to a report and
// reloaded later.

use serde::{Deserialize, Serialize};

/// Width of the encoded matrix used by the character-level
/// ConvNet of Zhang, Zhao & LeCun (2015).
pub const DEFAULT_MAX_LENGTH: usize = 1014;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Headerless CSV: label, then text columns
    pub label_data_path: String,

    /// JSON array of alphabet characters
    pub alphabet_path: String,

    /// Number of matrix columns (characters kept per sample)
    pub max_length: usize,

    /// Lower-case text before encoding
    pub lowercase: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            label_data_path: "data/ag_news_csv/train.csv".to_string(),
            alphabet_path: "alphabet.json".to_string(),
            max_length: DEFAULT_MAX_LENGTH,
            lowercase: true,
        }
    }
}
