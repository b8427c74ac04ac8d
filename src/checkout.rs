use crate::error::Result;
use crate::types::config::CloneConfig;
use std::path::Path;
use tracing::debug;

pub trait Cloner {
    /// Clones `url` into the empty directory `dest`.
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()>;
}

#[derive(Debug)]
pub struct GitCloner {
    depth: u32,
}

impl GitCloner {
    pub fn new(config: &CloneConfig) -> Self {
        Self {
            depth: config.depth,
        }
    }

    fn fetch_options(&self) -> git2::FetchOptions<'static> {
        let mut fetch_options = git2::FetchOptions::new();
        if self.depth > 0 {
            fetch_options.depth(i32::try_from(self.depth).unwrap_or(i32::MAX));
        }
        fetch_options
    }
}

impl Cloner for GitCloner {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        debug!("cloning {} into {} (depth {})", url, dest.display(), self.depth);
        let mut builder = git2::build::RepoBuilder::new();
        builder.fetch_options(self.fetch_options());
        builder.clone(url, dest)?;
        Ok(())
    }
}
