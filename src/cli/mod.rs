// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and prints results.
// All work is delegated to Layer 2 (application).

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{CheckArgs, Commands, EncodeArgs, InspectArgs};

#[derive(Parser, Debug)]
#[command(
    name = "agnews-charcnn",
    version,
    about = "Character-level one-hot encoding of the AG News dataset."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Inspect(args) => run_inspect(args),
            Commands::Encode(args)  => run_encode(args),
            Commands::Check(args)   => run_check(args),
        }
    }
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    use crate::application::inspect_use_case::InspectUseCase;

    tracing::info!("Inspecting '{}'", args.dataset.data);

    let summary = InspectUseCase::new(args.dataset.into(), args.report_dir).execute()?;

    println!("samples:       {}", summary.samples);
    println!("alphabet size: {}", summary.alphabet_size);
    println!("max length:    {}", summary.max_length);
    println!();
    println!("{:>8} {:>10} {:>12}", "label", "count", "weight");
    for c in &summary.classes {
        println!("{:>8} {:>10} {:>12.6}", c.label, c.count, c.weight);
    }
    Ok(())
}

fn run_encode(args: EncodeArgs) -> Result<()> {
    use crate::application::encode_use_case::EncodeUseCase;

    let view = EncodeUseCase::new(args.dataset.into(), args.index).execute()?;

    println!("index:   {}", view.index);
    println!("label:   {}", view.label);
    println!("shape:   {} x {}", view.shape[0], view.shape[1]);
    println!("columns: {} populated", view.populated_columns);
    println!("text:    {}", view.text);
    println!("encoded: {}", view.columns);
    Ok(())
}

fn run_check(args: CheckArgs) -> Result<()> {
    use crate::application::check_use_case::CheckUseCase;

    let report = CheckUseCase::new(args.into()).execute()?;

    println!(
        "All targets valid: {} batches, {} samples.",
        report.batches, report.samples
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::config::DatasetConfig;

    #[test]
    fn test_parse_check_defaults() {
        let cli = Cli::try_parse_from(["agnews-charcnn", "check"]).unwrap();
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.batch_size, 64);
                assert_eq!(args.num_workers, 4);
                assert_eq!(args.dataset.max_length, 1014);
                assert!(args.shuffle_seed.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_no_lowercase_flag_maps_to_config() {
        let cli = Cli::try_parse_from([
            "agnews-charcnn", "inspect",
            "--data", "x.csv",
            "--alphabet", "a.json",
            "--no-lowercase",
        ])
        .unwrap();
        let Commands::Inspect(args) = cli.command else {
            panic!("expected inspect");
        };
        let cfg: DatasetConfig = args.dataset.into();
        assert_eq!(cfg.label_data_path, "x.csv");
        assert_eq!(cfg.alphabet_path, "a.json");
        assert!(!cfg.lowercase);
    }

    #[test]
    fn test_encode_requires_index() {
        assert!(Cli::try_parse_from(["agnews-charcnn", "encode"]).is_err());
    }
}
