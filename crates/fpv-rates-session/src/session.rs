//! The session container and its import/export entry points.

use serde::Serialize;
use tracing::{debug, info};

use fpv_rates_config::{SettingError, apply, parse, serialize};
use fpv_rates_curves::{CurveSamples, sample_axis_curve, sample_throttle_curve};
use fpv_rates_profile::{Axis, AxisField, RateProfile, ThrottleField};

use crate::{NOTHING_IMPORTED_MESSAGE, SessionError, SessionResult};

/// Result of [`RateSession::import_text`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportOutcome {
    pub applied_count: usize,
    pub applied_labels: Vec<&'static str>,
    pub rejected: Vec<SettingError>,
    pub foreign_rates_type: Option<String>,
}

impl ImportOutcome {
    /// True when at least one recognised key was applied.
    pub fn is_success(&self) -> bool {
        self.applied_count > 0
    }

    /// One-line summary for a status bar.
    pub fn status_message(&self) -> String {
        if self.is_success() {
            format!(
                "✓ Successfully imported {} settings: {}",
                self.applied_count,
                self.applied_labels.join(", ")
            )
        } else {
            NOTHING_IMPORTED_MESSAGE.to_string()
        }
    }
}

/// Owner of the canonical rate profile.
///
/// All methods run synchronously. Readers get a copy of the profile, so a
/// snapshot taken before a mutation never changes underneath them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateSession {
    profile: RateProfile,
}

impl RateSession {
    /// Session starting from the default profile.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: RateProfile) -> Self {
        Self { profile }
    }

    /// Snapshot of the current profile.
    pub fn profile(&self) -> RateProfile {
        self.profile
    }

    pub fn set_axis_param(&mut self, axis: Axis, field: AxisField, value: i32) -> RateProfile {
        debug!(%axis, %field, value, "Axis parameter changed");
        self.profile.set_axis_param(axis, field, value);
        self.profile
    }

    pub fn set_throttle_param(&mut self, field: ThrottleField, value: i32) -> RateProfile {
        debug!(%field, value, "Throttle parameter changed");
        self.profile.set_throttle_param(field, value);
        self.profile
    }

    /// Restore the default profile.
    pub fn reset(&mut self) -> RateProfile {
        self.profile = RateProfile::default();
        self.profile
    }

    /// Sample one axis's rate curve from the current profile.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Curve`] for an unusable sample count.
    pub fn sample_axis_curve(&self, axis: Axis, count: usize) -> SessionResult<CurveSamples> {
        Ok(sample_axis_curve(self.profile.axis(axis), count)?)
    }

    /// Sample all three axes, in roll, pitch, yaw order.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Curve`] for an unusable sample count.
    pub fn sample_all_axes(&self, count: usize) -> SessionResult<Vec<(Axis, CurveSamples)>> {
        Axis::ALL
            .into_iter()
            .map(|axis| Ok((axis, self.sample_axis_curve(axis, count)?)))
            .collect()
    }

    /// Sample the throttle curve from the current profile.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Curve`] for an unusable sample count.
    pub fn sample_throttle_curve(&self, count: usize) -> SessionResult<CurveSamples> {
        Ok(sample_throttle_curve(&self.profile.throttle, count)?)
    }

    /// Import a CLI dump into the current profile.
    ///
    /// Recognised keys with integer values are applied; everything else is
    /// left as it was. A dump with no recognised keys is not an error, it
    /// yields an outcome with `applied_count == 0`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyInput`] if `raw` is empty or whitespace,
    /// without touching the profile.
    pub fn import_text(&mut self, raw: &str) -> SessionResult<ImportOutcome> {
        if raw.trim().is_empty() {
            return Err(SessionError::EmptyInput);
        }

        let settings = parse(raw);
        let (profile, report) = apply(&settings, self.profile);
        self.profile = profile;

        info!(
            parsed = settings.len(),
            applied = report.applied_count(),
            rejected = report.rejected.len(),
            "Imported CLI dump"
        );

        Ok(ImportOutcome {
            applied_count: report.applied_count(),
            applied_labels: report.applied_labels(),
            rejected: report.rejected,
            foreign_rates_type: report.foreign_rates_type,
        })
    }

    /// Render the current profile as a CLI dump.
    pub fn export_text(&self) -> String {
        serialize(&self.profile)
    }
}
