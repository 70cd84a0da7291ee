use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("stop index {index} out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type StoreResult<T> = Result<T, StoreError>;
