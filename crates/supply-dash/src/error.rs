use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("url error: {0}")]
    Url(#[from] url::ParseError),
    #[error("summary provider error: {0}")]
    Provider(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type DashResult<T> = Result<T, DashError>;
