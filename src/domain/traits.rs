// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The dataset is built against these traits rather than the
// concrete file loaders, so rows and alphabets can come from
// disk, from memory (tests), or from any other source.
//
//   CsvRowLoader       implements RowSource
//   JsonAlphabetLoader implements AlphabetSource
//   OneHotEncoder      implements TextEncoder

use anyhow::Result;

use crate::domain::{alphabet::Alphabet, labeled_text::LabeledText, one_hot::OneHotMatrix};

// ─── RowSource ────────────────────────────────────────────────────────────────
/// Anything that can produce the full list of labelled rows.
pub trait RowSource {
    /// Load every row, in file order.
    /// A single malformed row fails the whole load.
    fn load_rows(&self) -> Result<Vec<LabeledText>>;
}

// ─── AlphabetSource ───────────────────────────────────────────────────────────
/// Anything that can produce the encoding alphabet.
pub trait AlphabetSource {
    fn load_alphabet(&self) -> Result<Alphabet>;
}

// ─── TextEncoder ──────────────────────────────────────────────────────────────
/// Turns a text into a fixed-shape matrix.
pub trait TextEncoder {
    /// Encode one text. Never fails: unknown characters are skipped.
    fn encode(&self, text: &str) -> OneHotMatrix;

    /// [rows, cols] of every matrix this encoder produces
    fn shape(&self) -> [usize; 2];
}
