pub mod trending;

use crate::error::{AnalysisError, Result};
use crate::types::config::GithubConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

pub const USER_AGENT: &str = concat!("gh-analysis/", env!("CARGO_PKG_VERSION"));

/// Resolves repository metadata on a code-hosting service.
pub trait RepoHost {
    fn clone_url(&self, full_name: &str) -> Result<String>;
}

pub(crate) fn make_agent(timeout_secs: u64) -> ureq::Agent {
    ureq::config::Config::builder()
        .http_status_as_error(false)
        .timeout_global(Some(Duration::from_secs(timeout_secs)))
        .build()
        .new_agent()
}

pub(crate) fn read_success_body(
    url: &str,
    response: ureq::http::Response<ureq::Body>,
) -> Result<String> {
    let status = response.status().as_u16();
    if status >= 400 {
        return Err(AnalysisError::Status {
            url: url.to_string(),
            status,
        });
    }
    Ok(response.into_body().read_to_string()?)
}

#[derive(Debug, Deserialize)]
struct RepoMetadata {
    clone_url: String,
}

pub struct GitHubClient {
    agent: ureq::Agent,
    api_base_url: String,
    token: SecretString,
}

impl GitHubClient {
    pub fn new(config: &GithubConfig, token: SecretString) -> Self {
        Self {
            agent: make_agent(config.timeout_secs),
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn repo_url(&self, full_name: &str) -> String {
        format!("{}/repos/{}", self.api_base_url, full_name)
    }
}

impl RepoHost for GitHubClient {
    fn clone_url(&self, full_name: &str) -> Result<String> {
        let url = self.repo_url(full_name);
        debug!("resolving {}", url);
        let response = self
            .agent
            .get(url.as_str())
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT)
            .header(
                "Authorization",
                format!("Bearer {}", self.token.expose_secret()),
            )
            .call()?;
        let body = read_success_body(&url, response)?;
        decode_clone_url(&body)
    }
}

fn decode_clone_url(body: &str) -> Result<String> {
    let metadata: RepoMetadata = serde_json::from_str(body)?;
    Ok(metadata.clone_url)
}
