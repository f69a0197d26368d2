// ============================================================
// Layer 3 — LabeledText Domain Type
// ============================================================
// One row of the label/data CSV after normalisation:
// the integer class label and the joined, cleaned text.

use serde::{Deserialize, Serialize};

/// A single labelled text row.
///
/// The label is stored signed and unchecked. Range checks
/// belong to whoever consumes the batches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledText {
    /// Class label as written in column 0 of the CSV
    pub label: i64,

    /// Text columns joined with spaces (lower-cased by default)
    pub text: String,
}

impl LabeledText {
    /// Create a new row. Accepts &str or String for the text.
    pub fn new(label: i64, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }
}
