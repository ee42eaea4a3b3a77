use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarscoreError {
    #[error("input file does not exist: {0}")]
    InputNotFound(String),

    #[error("invalid specification record: {0}")]
    InvalidRecord(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CarscoreError>;
