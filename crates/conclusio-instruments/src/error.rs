use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument or interpretation function: {0}")]
    UnknownInstrument(String),

    #[error("score '{raw}' is not a positive integer")]
    InvalidScore { raw: String },
}
