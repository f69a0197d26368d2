// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Loads the dataset and summarises it:
//
//   Step 1: Load alphabet + rows        (Layer 4 - data)
//   Step 2: Count classes, get weights  (Layer 4 - data)
//   Step 3: Optionally write a report   (Layer 6 - infra)
//
// The summary is returned to the CLI, which does the printing.

use anyhow::Result;

use crate::data::{config::DatasetConfig, dataset::AgNewsDataset};
use crate::domain::{class_weight::ClassWeight, traits::TextEncoder};
use crate::infra::report::ReportWriter;

/// What `inspect` found
#[derive(Debug, Clone)]
pub struct DatasetSummary {
    pub samples: usize,
    pub alphabet_size: usize,
    pub max_length: usize,
    pub classes: Vec<ClassWeight>,
}

pub struct InspectUseCase {
    config: DatasetConfig,
    report_dir: Option<String>,
}

impl InspectUseCase {
    pub fn new(config: DatasetConfig, report_dir: Option<String>) -> Self {
        Self { config, report_dir }
    }

    pub fn execute(&self) -> Result<DatasetSummary> {
        let dataset = AgNewsDataset::from_config(&self.config)?;

        let [alphabet_size, max_length] = dataset.encoder().shape();

        let summary = DatasetSummary {
            samples: dataset.size(),
            alphabet_size,
            max_length,
            classes: dataset.class_stats(),
        };
        tracing::info!(
            "{} samples across {} classes",
            summary.samples,
            summary.classes.len()
        );

        if let Some(dir) = &self.report_dir {
            let writer = ReportWriter::new(dir.as_str())?;
            writer.save_config(&self.config)?;
            writer.save_class_weights(&summary.classes)?;
            tracing::info!("Report written to '{}'", dir);
        }

        Ok(summary)
    }
}
