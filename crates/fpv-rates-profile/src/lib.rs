//! Rate profile types and persistence
//!
//! This crate holds the tuning state for stick-response curves: per-axis
//! center sensitivity, max rate and expo, plus the throttle mid and expo.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod store;
pub mod types;

pub use store::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Unknown axis '{0}', expected one of: roll, pitch, yaw")]
    UnknownAxis(String),

    #[error("Unknown axis field '{0}', expected one of: center, max_rate, expo")]
    UnknownAxisField(String),

    #[error("Unknown throttle field '{0}', expected one of: mid, expo")]
    UnknownThrottleField(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Unsupported schema version {0}: maximum supported is {1}")]
    UnsupportedVersion(u32, u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ProfileResult<T> = Result<T, ProfileError>;
