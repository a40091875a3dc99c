use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid field schema: {0}")]
    Schema(#[source] serde_json::Error),

    #[error("invalid section layout: {0}")]
    Sections(#[source] serde_json::Error),
}
