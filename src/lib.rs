//! Character-level one-hot encoding of the AG News dataset.
//!
//! ## Layers
//!
//! - [`cli`] — clap argument parsing and printing
//! - [`application`] — `inspect`, `encode` and `check` workflows
//! - [`domain`] — alphabet, rows, one-hot matrix, class weights (no Burn types)
//! - [`data`] — loaders, encoder, Burn `Dataset` and `Batcher`
//! - [`infra`] — report files

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;

pub use data::{
    batcher::{CharBatch, CharBatcher},
    config::{DatasetConfig, DEFAULT_MAX_LENGTH},
    dataset::{AgNewsDataset, CharSample},
};
