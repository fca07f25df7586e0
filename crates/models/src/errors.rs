use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("malformed catalog: {0}")]
    Malformed(String),
    #[error("encode error: {0}")]
    Encode(String),
}
