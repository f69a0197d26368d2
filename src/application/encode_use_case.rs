// ============================================================
// Layer 2 — EncodeUseCase
// ============================================================
// Encodes a single sample and describes the resulting matrix,
// so the reverse-order layout can be checked by eye.

use anyhow::{anyhow, Result};

use crate::data::{config::DatasetConfig, dataset::AgNewsDataset};

/// Human-readable view of one encoded sample
#[derive(Debug, Clone)]
pub struct EncodedView {
    pub index: usize,
    pub label: i64,
    pub shape: [usize; 2],
    pub populated_columns: usize,
    /// Column characters in matrix order; '·' marks an empty column
    pub columns: String,
    pub text: String,
}

pub struct EncodeUseCase {
    config: DatasetConfig,
    index: usize,
}

impl EncodeUseCase {
    pub fn new(config: DatasetConfig, index: usize) -> Self {
        Self { config, index }
    }

    pub fn execute(&self) -> Result<EncodedView> {
        let dataset = AgNewsDataset::from_config(&self.config)?;

        let sample = dataset.get_item(self.index).ok_or_else(|| {
            anyhow!(
                "Index {} is out of range for a dataset of {} samples",
                self.index,
                dataset.size()
            )
        })?;

        let decoded = dataset.encoder().decode_columns(&sample.matrix);
        let used = dataset
            .text(self.index)
            .map(|t| t.chars().count())
            .unwrap_or(0)
            .min(decoded.len());
        let columns: String = decoded[..used].iter().map(|c| c.unwrap_or('·')).collect();

        Ok(EncodedView {
            index: self.index,
            label: sample.label,
            shape: sample.matrix.shape(),
            populated_columns: sample.matrix.populated_columns(),
            columns,
            text: dataset.text(self.index).unwrap_or_default().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(dir: &tempfile::TempDir, max_length: usize) -> DatasetConfig {
        let csv_path = dir.path().join("train.csv");
        let alphabet_path = dir.path().join("alphabet.json");
        std::fs::write(&csv_path, "2,b?a\n").unwrap();
        std::fs::write(&alphabet_path, r#"["a","b"]"#).unwrap();

        DatasetConfig {
            label_data_path: csv_path.display().to_string(),
            alphabet_path: alphabet_path.display().to_string(),
            max_length,
            lowercase: true,
        }
    }

    #[test]
    fn test_encode_describes_reversed_columns() {
        let dir = tempfile::tempdir().unwrap();
        let view = EncodeUseCase::new(config(&dir, 6), 0).execute().unwrap();

        assert_eq!(view.label, 2);
        assert_eq!(view.shape, [2, 6]);
        assert_eq!(view.populated_columns, 2);
        assert_eq!(view.columns, "a·b");
    }

    #[test]
    fn test_encode_truncated_columns() {
        let dir = tempfile::tempdir().unwrap();
        let view = EncodeUseCase::new(config(&dir, 2), 0).execute().unwrap();
        assert_eq!(view.columns, "a·");
    }

    #[test]
    fn test_encode_out_of_range_index() {
        let dir = tempfile::tempdir().unwrap();
        let err = EncodeUseCase::new(config(&dir, 4), 3).execute().unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
