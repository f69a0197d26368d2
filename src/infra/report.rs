// ============================================================
// Layer 6 — Report Writer
// ============================================================
// Writes the results of `inspect` to a directory:
//
//   reports/
//     dataset_config.json   ← paths + max_length + lowercase
//     class_weights.csv     ← one row per label
//
// Example class_weights.csv:
//   label,count,weight
//   1,30000,4.0
//   2,30000,4.0
//   ...
//
// The config is written as pretty JSON so it can be loaded back
// with load_config() to rebuild exactly the same dataset.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::data::config::DatasetConfig;
use crate::domain::class_weight::ClassWeight;

const CONFIG_FILE: &str = "dataset_config.json";
const WEIGHTS_FILE: &str = "class_weights.csv";

pub struct ReportWriter {
    dir: PathBuf,
}

impl ReportWriter {
    /// Create a writer for `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<String>) -> Result<Self> {
        let dir = PathBuf::from(dir.into());
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create report directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn save_config(&self, cfg: &DatasetConfig) -> Result<()> {
        let path = self.config_path();
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved dataset config to '{}'", path.display());
        Ok(())
    }

    pub fn load_config(&self) -> Result<DatasetConfig> {
        let path = self.config_path();
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

        serde_json::from_str(&json)
            .with_context(|| format!("Invalid config in '{}'", path.display()))
    }

    /// Overwrite class_weights.csv with one row per class.
    pub fn save_class_weights(&self, weights: &[ClassWeight]) -> Result<()> {
        let path = self.weights_path();
        let mut wtr = csv::Writer::from_path(&path)
            .with_context(|| format!("Cannot create '{}'", path.display()))?;

        // Header row comes from the ClassWeight field names
        for w in weights {
            wtr.serialize(w)?;
        }
        wtr.flush()?;

        tracing::debug!(
            "Wrote {} class weights to '{}'",
            weights.len(),
            path.display()
        );
        Ok(())
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    pub fn weights_path(&self) -> PathBuf {
        self.dir.join(WEIGHTS_FILE)
    }
}
