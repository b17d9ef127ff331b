use std::error::Error as StdError;

use thiserror::Error;

use super::config::ConfigError;

/// Errors that can occur during interval Newton root isolation.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("initial interval must be non-empty and bounded")]
    InvalidInterval,

    #[error("tolerance {value} is not representable in the interval scalar type")]
    UnrepresentableTolerance { value: f64 },

    #[error("function evaluation failed")]
    Function(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    /// Boxes a substrate fault raised by the user function.
    pub(super) fn function<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Function(Box::new(err))
    }
}
