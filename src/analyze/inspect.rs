use super::scoring::{aggregate_score, calculate_unused_dep_scores};
use crate::checkout::Cloner;
use crate::error::Result;
use crate::github::RepoHost;
use crate::scan::filesystem::dir_contains_requirements;
use crate::scan::{AnalyzerOptions, DependencyAnalyzer};
use crate::types::config::ScanConfig;
use crate::types::report::{Inspection, ResultRecord};
use tempfile::TempDir;
use tracing::{debug, info};

pub struct Inspector<'a> {
    host: &'a dyn RepoHost,
    cloner: &'a dyn Cloner,
    analyzer: &'a dyn DependencyAnalyzer,
    scan: ScanConfig,
}

impl<'a> Inspector<'a> {
    pub fn new(
        host: &'a dyn RepoHost,
        cloner: &'a dyn Cloner,
        analyzer: &'a dyn DependencyAnalyzer,
        scan: ScanConfig,
    ) -> Self {
        Self {
            host,
            cloner,
            analyzer,
            scan,
        }
    }

    /// Clone `full_name` into a scratch directory and score its unused requirements.
    ///
    /// The scratch directory is removed when this returns, whatever the outcome.
    pub fn inspect(&self, full_name: &str) -> Result<Inspection> {
        let clone_url = self.host.clone_url(full_name)?;
        info!("Fetching {} - {}", full_name, clone_url);

        let checkout = TempDir::new()?;
        self.cloner.clone_repo(&clone_url, checkout.path())?;

        if !dir_contains_requirements(checkout.path())? {
            return Ok(Inspection::NoManifest);
        }

        let options = AnalyzerOptions::for_checkout(checkout.path(), &self.scan);
        let unused = self.analyzer.find_unused(&options)?;
        for requirement in &unused {
            debug!(
                "{}: unused {} ({}:{})",
                full_name,
                requirement.name,
                requirement.source.display(),
                requirement.line
            );
        }
        let dep_score = calculate_unused_dep_scores(&unused);
        let final_score = aggregate_score(dep_score);
        debug!(
            "{}: {} unused requirements, score {} ({})",
            full_name,
            unused.len(),
            dep_score,
            final_score
        );

        Ok(Inspection::Scored(ResultRecord::scored(full_name, final_score)))
    }
}
