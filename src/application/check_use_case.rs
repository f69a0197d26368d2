// ============================================================
// Layer 2 — CheckUseCase
// ============================================================
// Plays the role of the training loop's data side: feeds the
// dataset through a real Burn DataLoader and verifies every
// target before it would reach a loss function.
//
//   Step 1: Load the dataset             (Layer 4 - data)
//   Step 2: Build DataLoader + batcher   (Burn, NdArray backend)
//   Step 3: Iterate all batches, check input shapes and
//           reject negative targets
//
// The dataset itself accepts any integer label; this is the
// place where a negative one becomes an error.

use anyhow::{bail, Context, Result};
use burn::data::dataloader::DataLoaderBuilder;
use serde::{Deserialize, Serialize};

use crate::data::{
    batcher::{CharBatch, CharBatcher},
    config::DatasetConfig,
    dataset::{AgNewsDataset, CharSample},
};
use crate::domain::traits::TextEncoder;

type CheckBackend = burn::backend::NdArray;

// ─── Check Configuration ─────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    pub dataset: DatasetConfig,
    pub batch_size: usize,
    pub num_workers: usize,
    /// Shuffle with this seed; None keeps file order
    pub shuffle_seed: Option<u64>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig::default(),
            batch_size: 64,
            num_workers: 4,
            shuffle_seed: None,
        }
    }
}

/// What a successful pass over the loader saw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub batches: usize,
    pub samples: usize,
}

pub struct CheckUseCase {
    config: CheckConfig,
}

impl CheckUseCase {
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<CheckReport> {
        let cfg = &self.config;
        if cfg.batch_size == 0 {
            bail!("batch_size must be at least 1");
        }

        let dataset = AgNewsDataset::from_config(&cfg.dataset)?;
        let sample_shape = dataset.encoder().shape();
        let device = burn::backend::ndarray::NdArrayDevice::Cpu;

        let mut builder =
            DataLoaderBuilder::<CheckBackend, CharSample, CharBatch<CheckBackend>>::new(
                CharBatcher::new(),
            )
            .batch_size(cfg.batch_size)
            .num_workers(cfg.num_workers)
            .set_device(device);
        if let Some(seed) = cfg.shuffle_seed {
            builder = builder.shuffle(seed);
        }
        let loader = builder.build(dataset);

        let mut report = CheckReport {
            batches: 0,
            samples: 0,
        };

        for (i, batch) in loader.iter().enumerate() {
            let targets: Vec<i64> = batch.targets.into_data().iter::<i64>().collect();
            validate_inputs(batch.inputs.dims(), targets.len(), sample_shape)
                .with_context(|| format!("Batch {i} rejected"))?;
            validate_targets(&targets).with_context(|| format!("Batch {i} rejected"))?;

            report.batches += 1;
            report.samples += targets.len();
        }

        tracing::info!(
            "Checked {} batches ({} samples)",
            report.batches,
            report.samples
        );
        Ok(report)
    }
}

/// Inputs must be [batch_size, alphabet_size, max_length].
pub fn validate_inputs(dims: [usize; 3], batch_size: usize, sample_shape: [usize; 2]) -> Result<()> {
    let expected = [batch_size, sample_shape[0], sample_shape[1]];
    if dims != expected {
        bail!("invalid_input_shape={dims:?}, expected {expected:?}");
    }
    Ok(())
}

/// Fail on the first negative target.
pub fn validate_targets(targets: &[i64]) -> Result<()> {
    if let Some(bad) = targets.iter().find(|&&t| t < 0) {
        bail!("invalid_target={bad}");
    }
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::data::dataloader::batcher::Batcher;

    fn config(dir: &tempfile::TempDir, csv: &str, batch_size: usize) -> CheckConfig {
        let csv_path = dir.path().join("train.csv");
        let alphabet_path = dir.path().join("alphabet.json");
        std::fs::write(&csv_path, csv).unwrap();
        std::fs::write(&alphabet_path, r#"["a","b","c"]"#).unwrap();

        CheckConfig {
            dataset: DatasetConfig {
                label_data_path: csv_path.display().to_string(),
                alphabet_path: alphabet_path.display().to_string(),
                max_length: 8,
                lowercase: true,
            },
            batch_size,
            num_workers: 1,
            shuffle_seed: None,
        }
    }

    #[test]
    fn test_validate_targets() {
        assert!(validate_targets(&[]).is_ok());
        assert!(validate_targets(&[0, 1, 3]).is_ok());

        let err = validate_targets(&[1, -1, -2]).unwrap_err();
        assert_eq!(err.to_string(), "invalid_target=-1");
    }

    #[test]
    fn test_validate_inputs() {
        assert!(validate_inputs([4, 3, 8], 4, [3, 8]).is_ok());

        // wrong batch dimension, wrong alphabet rows, wrong width
        assert!(validate_inputs([3, 3, 8], 4, [3, 8]).is_err());
        assert!(validate_inputs([4, 2, 8], 4, [3, 8]).is_err());
        let err = validate_inputs([4, 3, 7], 4, [3, 8]).unwrap_err();
        assert!(err.to_string().starts_with("invalid_input_shape=[4, 3, 7]"));
    }

    #[test]
    fn test_check_inputs_match_dataset_shape() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(&dir, "1,abc
2,cab
3,b
", 2);
        let dataset = AgNewsDataset::from_config(&cfg.dataset).unwrap();
        let shape = dataset.encoder().shape();
        let items = vec![dataset.get_item(0).unwrap()];

        let device = burn::backend::ndarray::NdArrayDevice::Cpu;
        let batch: CharBatch<CheckBackend> =
            Batcher::<CheckBackend, _, _>::batch(&CharBatcher::new(), items, &device);
        assert!(validate_inputs(batch.inputs.dims(), 1, shape).is_ok());
        assert!(validate_inputs(batch.inputs.dims(), 1, [shape[0] + 1, shape[1]]).is_err());

        let report = CheckUseCase::new(cfg).execute().unwrap();
        assert_eq!(report.samples, 3);
    }

    #[test]
    fn test_check_counts_batches() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(&dir, "1,abc\n2,cab\n3,b\n4,a\n1,c\n", 2);

        let report = CheckUseCase::new(cfg).execute().unwrap();
        assert_eq!(report, CheckReport { batches: 3, samples: 5 });
    }

    #[test]
    fn test_check_with_shuffle_sees_every_sample() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config(&dir, "1,a\n2,b\n3,c\n4,abc\n", 3);
        cfg.shuffle_seed = Some(42);

        let report = CheckUseCase::new(cfg).execute().unwrap();
        assert_eq!(report.samples, 4);
    }

    #[test]
    fn test_check_rejects_negative_target() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(&dir, "1,a\n-1,b\n", 64);

        let err = CheckUseCase::new(cfg).execute().unwrap_err();
        assert_eq!(err.root_cause().to_string(), "invalid_target=-1");
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(&dir, "1,a\n", 0);
        assert!(CheckUseCase::new(cfg).execute().is_err());
    }
}
