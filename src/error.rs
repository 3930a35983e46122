use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    #[error("Unknown champion: {0}")]
    UnknownChampion(String),

    #[error("Roster is full ({0} champions max)")]
    RosterFull(usize),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Knowledge base error: {0}")]
    KnowledgeBaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),
}
