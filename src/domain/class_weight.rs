// ============================================================
// Layer 3 — ClassWeight Domain Type
// ============================================================
// Inverse-frequency weight for one label, used to balance a
// classification loss:
//
//   weight_c = total_samples / count_c
//
// so that weight_c × count_c == total_samples for every class.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassWeight {
    /// The label value this entry describes
    pub label: i64,

    /// How many rows carry this label
    pub count: usize,

    /// total_samples / count
    pub weight: f64,
}

impl ClassWeight {
    /// Compute the weight for a class with `count` rows out of `total`.
    /// `count` is always ≥ 1 for a label that was actually observed.
    pub fn new(label: i64, count: usize, total: usize) -> Self {
        Self {
            label,
            count,
            weight: total as f64 / count as f64,
        }
    }
}
