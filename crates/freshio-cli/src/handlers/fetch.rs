//! Fetch handler.
//!
//! Downloads every configured dataset into its `dataset_<n>` folder,
//! retrying through connectivity loss, and prints the summary.

use crate::acquire::connectivity::{HttpProbe, PROBE_INTERVAL};
use crate::acquire::source::KaggleSource;
use crate::acquire::{self, AcquisitionReport};
use crate::error::CliError;
use crate::parser::Cli;
use freshio_kaggle::{DatasetRef, DefaultKaggleClient, DownloadOptions, KaggleClientConfig};
use std::path::PathBuf;

/// Fetch command arguments passed from CLI.
pub struct FetchArgs {
    pub datasets: Vec<String>,
    pub output_dir: PathBuf,
    pub keep_archive: bool,
    pub probe_url: String,
}

impl FetchArgs {
    /// Apply defaults from the parsed CLI.
    pub fn from_cli(cli: Cli) -> Result<Self, CliError> {
        let datasets = if cli.datasets.is_empty() {
            acquire::DEFAULT_DATASETS
                .iter()
                .map(ToString::to_string)
                .collect()
        } else {
            cli.datasets
        };

        let output_dir = match cli.output_dir {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };

        Ok(Self {
            datasets,
            output_dir,
            keep_archive: cli.keep_archive,
            probe_url: cli.probe_url,
        })
    }
}

/// Execute the fetch command.
pub async fn execute(args: FetchArgs) -> Result<(), CliError> {
    // Reject malformed references before anything is downloaded
    for dataset_id in &args.datasets {
        if DatasetRef::parse(dataset_id).is_none() {
            return Err(CliError::Arguments(format!(
                "invalid dataset reference '{dataset_id}': expected owner/slug"
            )));
        }
    }

    let client = DefaultKaggleClient::authenticate(&KaggleClientConfig::new())?;
    let source = KaggleSource::new(
        client,
        DownloadOptions {
            unzip: !args.keep_archive,
        },
    );
    let probe = HttpProbe::new(&args.probe_url);

    let jobs = acquire::plan_jobs(&args.datasets, &args.output_dir);

    println!("Starting dataset downloads...");
    let report = acquire::run_jobs(&jobs, &source, &probe, PROBE_INTERVAL).await;
    print_summary(&report);

    Ok(())
}

/// Print the destination folder of every downloaded dataset, in order.
fn print_summary(report: &AcquisitionReport) {
    println!();
    println!("✓ All datasets downloaded");
    println!();
    println!("Downloaded dataset folders:");
    for job in &report.downloaded {
        println!("  Dataset {}: {}", job.ordinal, job.dest.display());
    }
}
