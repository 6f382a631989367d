//! Betaflight CLI dump codec for rate profiles
//!
//! Converts between a [`RateProfile`](fpv_rates_profile::RateProfile) and the
//! line-oriented text the firmware CLI prints and accepts:
//!
//! ```text
//! # comment
//! set roll_rc_rate = 70
//! set thr_mid = 50
//! save
//! ```
//!
//! - [`parse`] reads any text into [`ParsedSettings`] and never fails.
//! - [`apply`] writes the eleven recognised keys into a profile and reports
//!   what it applied and what it rejected.
//! - [`serialize`] renders a profile as a complete dump.
//!
//! # Example
//!
//! ```
//! use fpv_rates_config::{apply, parse, serialize};
//! use fpv_rates_profile::RateProfile;
//!
//! let (profile, report) = apply(&parse("set thr_mid = 60"), RateProfile::default());
//! assert_eq!(profile.throttle.mid, 60);
//! assert_eq!(report.applied_count(), 1);
//! assert!(serialize(&profile).contains("set thr_mid = 60"));
//! ```

#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod apply;
pub mod keys;
pub mod parse;
pub mod serialize;

pub use apply::{AppliedSetting, ApplyReport, SettingError, apply};
pub use keys::{RATES_TYPE_ACTUAL, RATES_TYPE_KEY, RECOGNIZED_SETTINGS, SettingTarget};
pub use parse::{ParsedSettings, SETTING_LINE_PATTERN, parse};
pub use serialize::serialize;
