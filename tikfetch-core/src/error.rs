use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// The message without the variant prefix
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInput(msg) | Self::Upstream(msg) | Self::Config(msg) => msg,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
