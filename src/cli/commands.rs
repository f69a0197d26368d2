// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands and their flags:
//
//   inspect — dataset size, alphabet size, class weights
//   encode  — one-hot layout of a single sample
//   check   — iterate a Burn DataLoader, validate targets
//
// The dataset flags are shared through DatasetArgs and
// flattened into every subcommand.

use clap::{Args, Subcommand};

use crate::application::check_use_case::CheckConfig;
use crate::data::config::{DatasetConfig, DEFAULT_MAX_LENGTH};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the dataset and print size and per-class weights
    Inspect(InspectArgs),

    /// Encode one sample and print its matrix layout
    Encode(EncodeArgs),

    /// Run every sample through a DataLoader and validate targets
    Check(CheckArgs),
}

/// Input files and encoding parameters shared by all commands
#[derive(Args, Debug, Clone)]
pub struct DatasetArgs {
    /// Headerless CSV file: label, then one or more text columns
    #[arg(long, default_value = "data/ag_news_csv/train.csv")]
    pub data: String,

    /// JSON array of alphabet characters
    #[arg(long, default_value = "alphabet.json")]
    pub alphabet: String,

    /// Number of characters kept per sample (matrix width)
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
    pub max_length: usize,

    /// Keep the original letter case
    #[arg(long)]
    pub no_lowercase: bool,
}

impl From<DatasetArgs> for DatasetConfig {
    fn from(a: DatasetArgs) -> Self {
        DatasetConfig {
            label_data_path: a.data,
            alphabet_path:   a.alphabet,
            max_length:      a.max_length,
            lowercase:       !a.no_lowercase,
        }
    }
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Write dataset_config.json and class_weights.csv here
    #[arg(long)]
    pub report_dir: Option<String>,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Row to encode (0-based)
    #[arg(long)]
    pub index: usize,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Samples per batch
    #[arg(long, default_value_t = 64)]
    pub batch_size: usize,

    /// DataLoader worker threads
    #[arg(long, default_value_t = 4)]
    pub num_workers: usize,

    /// Shuffle with this seed (file order when omitted)
    #[arg(long)]
    pub shuffle_seed: Option<u64>,
}

impl From<CheckArgs> for CheckConfig {
    fn from(a: CheckArgs) -> Self {
        CheckConfig {
            dataset:      a.dataset.into(),
            batch_size:   a.batch_size,
            num_workers:  a.num_workers,
            shuffle_seed: a.shuffle_seed,
        }
    }
}
