use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLabel {
    Low,
    Medium,
    High,
    Unknown,
}

impl RiskLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
    pub repo_name: String,
    /// `None` when the repository was skipped or its inspection failed.
    pub final_score: Option<RiskLabel>,
}

impl ResultRecord {
    pub fn scored(repo_name: impl Into<String>, final_score: RiskLabel) -> Self {
        Self {
            repo_name: repo_name.into(),
            final_score: Some(final_score),
        }
    }

    pub fn unscored(repo_name: impl Into<String>) -> Self {
        Self {
            repo_name: repo_name.into(),
            final_score: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inspection {
    Scored(ResultRecord),
    NoManifest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnusedRequirement {
    pub name: String,
    pub source: PathBuf,
    pub line: usize,
}
