#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("catalog is empty")]
    Empty,

    #[error("item at row {row} has an empty name")]
    EmptyName { row: usize },

    #[error("duplicate item name: {0}")]
    DuplicateName(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0:?}")]
    IO(#[from] std::io::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("cannot build a similarity matrix from an empty corpus")]
    EmptyCorpus,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RecommendError {
    #[error("movie not found: {0}")]
    NotFound(String),
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0:?}")]
    IO(#[from] std::io::Error),

    #[error("config is malformed: {0}")]
    Parse(#[from] serde_yml::Error),

    #[error("{field}: {message}")]
    Invalid { field: String, message: String },
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}
