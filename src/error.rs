use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("The limit is {0}")]
    LimitExceeded(usize),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("http error: {0}")]
    Http(#[from] ureq::Error),

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("could not read trending page: {0}")]
    TrendingParse(String),

    #[error("python parse error: {0}")]
    PythonParse(String),

    #[error("git error: {0}")]
    Git(#[from] git2::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
