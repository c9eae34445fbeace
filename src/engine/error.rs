use ulid::Ulid;

use crate::model::Stay;

#[derive(Debug)]
pub enum EngineError {
    NotFound(Ulid),
    UnknownRoom(String),
    InvalidStay(&'static str),
    InvalidAmount(&'static str),
    /// A non-canceled booking already occupies part of the requested stay.
    Conflict { existing: Ulid, stay: Stay },
    InvalidTenant(&'static str),
    LimitExceeded(&'static str),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::NotFound(id) => write!(f, "booking not found: {id}"),
            EngineError::UnknownRoom(room) => write!(f, "unknown room: {room}"),
            EngineError::InvalidStay(msg) => write!(f, "invalid stay: {msg}"),
            EngineError::InvalidAmount(msg) => write!(f, "invalid amount: {msg}"),
            EngineError::Conflict { existing, stay } => {
                write!(
                    f,
                    "stay [{}, {}) conflicts with booking {existing}",
                    stay.check_in, stay.check_out
                )
            }
            EngineError::InvalidTenant(msg) => write!(f, "invalid tenant: {msg}"),
            EngineError::LimitExceeded(msg) => write!(f, "limit exceeded: {msg}"),
        }
    }
}

impl std::error::Error for EngineError {}
