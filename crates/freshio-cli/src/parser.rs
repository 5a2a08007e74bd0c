//! Main CLI parser and top-level argument handling.

use clap::Parser;
use std::path::PathBuf;

use crate::acquire::connectivity::DEFAULT_PROBE_URL;

/// Command-line interface definition for the Freshio dataset bootstrap.
#[derive(Parser)]
#[command(name = "freshio-data")]
#[command(about = "Download the Freshio training datasets from Kaggle")]
#[command(version)]
pub struct Cli {
    /// Dataset to download as owner/slug (repeatable; defaults to the two Freshio datasets)
    #[arg(long = "dataset", value_name = "OWNER/SLUG")]
    pub datasets: Vec<String>,

    /// Directory that receives the dataset_<n> folders (defaults to the current directory)
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Keep the downloaded .zip archives instead of extracting them
    #[arg(long = "keep-archive")]
    pub keep_archive: bool,

    /// Address probed while waiting for connectivity to return
    #[arg(long = "probe-url", value_name = "URL", default_value = DEFAULT_PROBE_URL)]
    pub probe_url: String,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        // Verify the CLI parser can be constructed
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["freshio-data"]);
        assert!(cli.datasets.is_empty());
        assert!(cli.output_dir.is_none());
        assert!(!cli.keep_archive);
        assert_eq!(cli.probe_url, DEFAULT_PROBE_URL);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_repeatable_dataset_flag() {
        let cli = Cli::parse_from([
            "freshio-data",
            "--dataset",
            "owner/first",
            "--dataset",
            "owner/second",
            "--output-dir",
            "/tmp/data",
            "--keep-archive",
            "-v",
        ]);
        assert_eq!(cli.datasets, vec!["owner/first", "owner/second"]);
        assert_eq!(cli.output_dir, Some(PathBuf::from("/tmp/data")));
        assert!(cli.keep_archive);
        assert!(cli.verbose);
    }
}
