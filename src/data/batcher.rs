// ============================================================
// Layer 4 — Character Batcher
// ============================================================
// Implements Burn's Batcher trait: stacks N CharSamples into
// one pair of tensors for the model.
//
//   Input:  Vec of N CharSamples, each matrix (A × L)
//   Output: CharBatch
//             inputs  : Float [N, A, L]
//             targets : Int   [N]
//
// All matrices share the same shape (fixed at dataset
// construction), so the flattened cells can be copied into a
// single buffer and given the 3-D shape directly.
//
// Targets are forwarded exactly as stored. Rejecting negative
// labels is the consumer's job (see application::check_use_case).

use burn::{data::dataloader::batcher::Batcher, prelude::*};

use crate::data::dataset::CharSample;

// ─── CharBatch ────────────────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct CharBatch<B: Backend> {
    /// One-hot matrices — shape: [batch_size, alphabet_size, max_length]
    pub inputs: Tensor<B, 3>,

    /// Class labels — shape: [batch_size]
    pub targets: Tensor<B, 1, Int>,
}

// ─── CharBatcher ──────────────────────────────────────────────────────────────
/// Stateless: the DataLoader supplies the target device per batch.
#[derive(Clone, Debug, Default)]
pub struct CharBatcher;

impl CharBatcher {
    pub fn new() -> Self {
        Self
    }
}

impl<B: Backend> Batcher<B, CharSample, CharBatch<B>> for CharBatcher {
    fn batch(&self, items: Vec<CharSample>, device: &B::Device) -> CharBatch<B> {
        let batch_size = items.len();
        let [rows, cols] = items
            .first()
            .map(|s| s.matrix.shape())
            .unwrap_or([0, 0]);

        // ── Flatten matrices ──────────────────────────────────────────────────
        // [s1_r1_c1, ..., s1_rA_cL, s2_r1_c1, ..., sN_rA_cL] → [N, A, L]
        let mut cells: Vec<f32> = Vec::with_capacity(batch_size * rows * cols);
        for item in &items {
            cells.extend_from_slice(item.matrix.as_slice());
        }

        let labels: Vec<i64> = items.iter().map(|s| s.label).collect();

        let inputs = Tensor::<B, 3>::from_data(
            TensorData::new(cells, [batch_size, rows, cols]),
            device,
        );
        let targets = Tensor::<B, 1, Int>::from_data(
            TensorData::new(labels, [batch_size]),
            device,
        );

        CharBatch { inputs, targets }
    }
}
