use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("dish pool is not valid JSON: {0}")]
    PoolParse(#[from] serde_json::Error),

    #[error("dish `{id}` is invalid: {reason}")]
    InvalidDish { id: String, reason: String },

    #[error("dish pool has {available} dishes but a game needs {needed}")]
    PoolExhausted { available: usize, needed: usize },
}
