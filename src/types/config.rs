use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub trending: TrendingConfig,
    pub github: GithubConfig,
    pub clone: CloneConfig,
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrendingConfig {
    pub language: String,
    pub spoken_language: String,
    pub since: Since,
    pub base_url: String,
}

impl Default for TrendingConfig {
    fn default() -> Self {
        Self {
            language: "python".to_string(),
            spoken_language: "en".to_string(),
            since: Since::Daily,
            base_url: "https://github.com/trending".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Since {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Since {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Since {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    pub api_base_url: String,
    pub timeout_secs: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.github.com".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CloneConfig {
    /// Shallow clone depth; 0 fetches full history.
    pub depth: u32,
}

impl Default for CloneConfig {
    fn default() -> Self {
        Self { depth: 1 }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub ignore_modules: Vec<String>,
    pub ignore_requirements: Vec<String>,
    /// Path components skipped while walking sources, e.g. `tests` or `docs`.
    pub ignore_files: Vec<String>,
    /// Skip every requirement carrying an environment marker (`; sys_platform == ...`).
    /// Markers are not evaluated, so compatible ones are skipped too.
    pub skip_incompatible: bool,
}
