//! Dataset acquisition: job planning and the retry-until-success loop.
//!
//! Jobs are created from the dataset list at startup and discarded at
//! process end. The i-th dataset lands in `base_dir/dataset_<i+1>`.

pub mod connectivity;
pub mod source;

use crate::progress;
use connectivity::{ConnectivityProbe, wait_for_connection};
use source::DatasetSource;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

/// The datasets the Freshio classifier trains on.
pub const DEFAULT_DATASETS: &[&str] = &[
    "sriramr/fruits-fresh-and-rotten-for-classification",
    "swoyam2609/fresh-and-stale-classification",
];

/// One dataset download job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetJob {
    /// Dataset identifier (`owner/slug`)
    pub dataset_id: String,
    /// 1-based position in the dataset list
    pub ordinal: usize,
    /// Local folder the dataset lands in
    pub dest: PathBuf,
}

/// Map each dataset to its destination folder.
pub fn plan_jobs(datasets: &[String], base_dir: &Path) -> Vec<DatasetJob> {
    datasets
        .iter()
        .enumerate()
        .map(|(i, dataset_id)| DatasetJob {
            dataset_id: dataset_id.clone(),
            ordinal: i + 1,
            dest: base_dir.join(format!("dataset_{}", i + 1)),
        })
        .collect()
}

/// Paths recorded by a completed acquisition run.
#[derive(Debug, Clone)]
pub struct AcquisitionReport {
    /// Completed jobs, in input order
    pub downloaded: Vec<DatasetJob>,
}

/// Run every job to completion, in order.
///
/// Any failure is logged, then the loop blocks until the connectivity
/// probe answers and re-issues the same download with the same
/// arguments. There is no retry cap and no distinction between failure
/// kinds; a permanently failing dataset blocks forever.
pub async fn run_jobs(
    jobs: &[DatasetJob],
    source: &dyn DatasetSource,
    probe: &dyn ConnectivityProbe,
    wait_interval: Duration,
) -> AcquisitionReport {
    let mut downloaded = Vec::with_capacity(jobs.len());

    for job in jobs {
        println!();
        println!(
            "Dataset {}: downloading {} to {}",
            job.ordinal,
            job.dataset_id,
            job.dest.display()
        );

        loop {
            let bar = progress::download_bar();
            let on_progress = |done: u64, total: u64| {
                if total > 0 && bar.length() != Some(total) {
                    bar.set_length(total);
                }
                bar.set_position(done);
            };

            match source
                .fetch(&job.dataset_id, &job.dest, Some(&on_progress))
                .await
            {
                Ok(()) => {
                    bar.finish_and_clear();
                    println!(
                        "  ✓ Dataset {}: downloaded to {}",
                        job.ordinal,
                        job.dest.display()
                    );
                    break;
                }
                Err(e) => {
                    bar.finish_and_clear();
                    warn!("dataset {} download failed: {e:#}", job.dataset_id);
                    println!("  ⚠ Dataset {}: download interrupted: {e:#}", job.ordinal);
                    println!("  ⚠ Dataset {}: waiting for connectivity...", job.ordinal);
                    wait_for_connection(probe, wait_interval).await;
                    println!(
                        "  ✓ Dataset {}: connectivity restored, retrying",
                        job.ordinal
                    );
                }
            }
        }

        downloaded.push(job.clone());
    }

    AcquisitionReport { downloaded }
}
