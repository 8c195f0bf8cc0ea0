use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoError {
    /// A name outside the canonical state set reached the string-keyed
    /// lookup. The enum-typed path cannot produce this; seeing it means a
    /// caller skipped normalization.
    #[error("unknown state name: {0}")]
    UnknownState(String),
}
