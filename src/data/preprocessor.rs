// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Turns the text columns of one CSV record into the string
// the encoder sees.
//
// Steps (applied in order):
//   1. Join columns 1..N with a single space
//      ("Wall St. Bears Claw Back", "Reuters - Short-sellers...")
//        → "Wall St. Bears Claw Back Reuters - Short-sellers..."
//   2. Lower-case the result (on by default)
//
// Nothing else is touched: punctuation, digits and unusual
// characters pass through and are filtered later by the
// alphabet lookup.

#[derive(Debug, Clone)]
pub struct Preprocessor {
    lowercase: bool,
}

impl Preprocessor {
    /// Create a Preprocessor that lower-cases text
    pub fn new() -> Self {
        Self { lowercase: true }
    }

    /// Toggle lower-casing
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Join text fields with spaces and normalise case.
    pub fn join_fields<'a, I>(&self, fields: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let joined = fields.into_iter().collect::<Vec<_>>().join(" ");
        self.clean(&joined)
    }

    /// Normalise a single, already joined text.
    pub fn clean(&self, text: &str) -> String {
        if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        }
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
