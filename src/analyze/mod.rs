pub mod inspect;
pub mod scoring;

use crate::error::{AnalysisError, Result};
use crate::github::trending::{get_trending_results, TrendingSource};
use crate::types::report::{Inspection, ResultRecord};
use inspect::Inspector;
use tracing::{error, info};

pub const MAX_REPOSITORIES: usize = 25;

/// Number of repositories to inspect for a requested count.
///
/// Counts above [`MAX_REPOSITORIES`] are rejected; negative counts select nothing.
pub fn validate_limit(num_to_search: i64) -> Result<usize> {
    if num_to_search > MAX_REPOSITORIES as i64 {
        return Err(AnalysisError::LimitExceeded(MAX_REPOSITORIES));
    }
    Ok(usize::try_from(num_to_search).unwrap_or(0))
}

/// Inspect the first `num_to_search` trending repositories, one record per repository.
///
/// Per-repository failures are logged and kept as unscored records; a failing
/// trending source aborts the run.
pub fn run(
    source: &dyn TrendingSource,
    inspector: &Inspector<'_>,
    num_to_search: usize,
) -> Result<Vec<ResultRecord>> {
    let trending = get_trending_results(source, num_to_search)?;
    info!("inspecting {} trending repositories", trending.len());

    let mut results = Vec::with_capacity(trending.len());
    for entry in &trending {
        let record = match inspector.inspect(&entry.full_name) {
            Ok(Inspection::Scored(record)) => record,
            Ok(Inspection::NoManifest) => {
                info!("{} has no requirements.txt, skipping", entry.full_name);
                ResultRecord::unscored(&entry.full_name)
            }
            Err(e) => {
                error!("Error: {}", e);
                ResultRecord::unscored(&entry.full_name)
            }
        };
        results.push(record);
    }
    Ok(results)
}
