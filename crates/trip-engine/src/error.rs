use thiserror::Error;
use trip_otp::OtpError;
use trip_store::StoreError;

#[derive(Debug, Error)]
pub enum EngineError {
    /// An arrival event named an index with no corresponding stop — a race
    /// between a dispatch mutation and a late collaborator callback.
    #[error("arrival for waypoint index {index} has no corresponding stop")]
    StaleArrival { index: usize },

    /// A verification action was requested while the gate was closed.
    #[error("no verification flow is open")]
    NoOpenVerification,

    /// A dispatch mutation was attempted after the trip ended.
    #[error("trip has already ended")]
    TripEnded,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Otp(#[from] OtpError),
}

pub type EngineResult<T> = Result<T, EngineError>;
