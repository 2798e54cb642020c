/// Crate-wide result alias.
pub type TileGridResult<T> = Result<T, TileGridError>;

/// Error taxonomy for tile grid packing.
#[derive(thiserror::Error, Debug)]
pub enum TileGridError {
    /// A layout configuration or tile descriptor violates an invariant.
    #[error("config error: {0}")]
    Config(String),

    /// A grid document failed to (de)serialize.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, preserved with its source chain.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TileGridError {
    /// Build a [`TileGridError::Config`] from any message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`TileGridError::Serde`] from any message.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
