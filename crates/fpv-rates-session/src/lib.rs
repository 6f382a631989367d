//! Rate tuning session
//!
//! [`RateSession`] owns the canonical [`RateProfile`] for the lifetime of a
//! tuning session. A control surface mutates it through the setters, pulls a
//! snapshot, and resamples the curves; text import and export go through the
//! CLI dump codec.
//!
//! ```
//! use fpv_rates_profile::{Axis, AxisField};
//! use fpv_rates_session::RateSession;
//!
//! let mut session = RateSession::new();
//! session.set_axis_param(Axis::Roll, AxisField::MaxRate, 800);
//!
//! let outcome = session.import_text("set pitch_expo = 30\nset yaw_rate = 500")?;
//! assert_eq!(outcome.applied_count, 2);
//!
//! let dump = session.export_text();
//! assert!(dump.contains("set roll_rate = 800"));
//! # Ok::<(), fpv_rates_session::SessionError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

mod session;

pub use session::{ImportOutcome, RateSession};

use fpv_rates_curves::CurveError;
use thiserror::Error;

/// Status shown when the dump contained no recognised rate keys.
pub const NOTHING_IMPORTED_MESSAGE: &str = "No recognized rate settings found in the text.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Please paste CLI dump text first.")]
    EmptyInput,

    #[error(transparent)]
    Curve(#[from] CurveError),
}

pub type SessionResult<T> = Result<T, SessionError>;
