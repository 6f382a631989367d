//! Applying parsed settings to a rate profile.
//!
//! Values must be plain integers. A recognised key whose value is not an
//! integer leaves its field untouched and is reported as a [`SettingError`];
//! it does not count as applied.

use serde::Serialize;
use tracing::{debug, warn};

use fpv_rates_profile::RateProfile;

use crate::keys::{RATES_TYPE_ACTUAL, RATES_TYPE_KEY, RECOGNIZED_SETTINGS, SettingTarget};
use crate::parse::ParsedSettings;

/// Per-key rejection during [`apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum SettingError {
    #[error("Invalid value '{value}' for '{key}': {reason}")]
    InvalidInteger {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl SettingError {
    pub fn key(&self) -> &'static str {
        match self {
            SettingError::InvalidInteger { key, .. } => key,
        }
    }
}

/// A recognised key that was written to the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppliedSetting {
    pub key: &'static str,
    pub label: &'static str,
    pub value: i32,
}

/// What [`apply`] did with a set of parsed settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    pub applied: Vec<AppliedSetting>,
    pub rejected: Vec<SettingError>,
    /// `rates_type` from the dump when it names a model other than `ACTUAL`.
    pub foreign_rates_type: Option<String>,
}

impl ApplyReport {
    pub fn applied_count(&self) -> usize {
        self.applied.len()
    }

    pub fn applied_labels(&self) -> Vec<&'static str> {
        self.applied.iter().map(|setting| setting.label).collect()
    }

    /// True when no recognised key was applied.
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }
}

fn parse_value(target: SettingTarget, raw: &str) -> Result<i32, SettingError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|e| SettingError::InvalidInteger {
            key: target.key(),
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

/// Write every recognised key in `settings` into `profile`.
///
/// Unrecognised keys are ignored. Keys are visited in
/// [`RECOGNIZED_SETTINGS`] order, which is also the order of the report.
pub fn apply(settings: &ParsedSettings, mut profile: RateProfile) -> (RateProfile, ApplyReport) {
    let mut report = ApplyReport::default();

    for target in RECOGNIZED_SETTINGS {
        let Some(raw) = settings.get(target.key()) else {
            continue;
        };

        match parse_value(target, raw) {
            Ok(value) => {
                debug!(key = target.key(), value, "Applying setting");
                target.write(&mut profile, value);
                report.applied.push(AppliedSetting {
                    key: target.key(),
                    label: target.label(),
                    value,
                });
            }
            Err(e) => {
                warn!(error = %e, "Rejected setting");
                report.rejected.push(e);
            }
        }
    }

    if let Some(rates_type) = settings.get(RATES_TYPE_KEY) {
        if !rates_type.eq_ignore_ascii_case(RATES_TYPE_ACTUAL) {
            warn!(
                rates_type,
                "Dump uses a different rate model; values are interpreted as ACTUAL rates"
            );
            report.foreign_rates_type = Some(rates_type.to_string());
        }
    }

    (profile, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;
    use fpv_rates_profile::{Axis, AxisRateParams, ThrottleParams};

    #[test]
    fn test_thr_mid_only() {
        let settings: ParsedSettings = [("thr_mid", "60")].into_iter().collect();
        let (profile, report) = apply(&settings, RateProfile::default());

        assert_eq!(profile.throttle.mid, 60);
        assert_eq!(profile.throttle.expo, 0);
        assert_eq!(profile.rates, RateProfile::default().rates);
        assert_eq!(report.applied_count(), 1);
        assert_eq!(report.applied_labels(), vec!["throttle mid"]);
        assert!(report.rejected.is_empty());
    }

    #[test]
    fn test_all_keys() {
        let text = "\
set roll_rc_rate = 10
set pitch_rc_rate = 11
set yaw_rc_rate = 12
set roll_rate = 600
set pitch_rate = 610
set yaw_rate = 620
set roll_expo = 20
set pitch_expo = 21
set yaw_expo = 22
set thr_mid = 40
set thr_expo = 30";
        let (profile, report) = apply(&parse(text), RateProfile::default());

        assert_eq!(report.applied_count(), 11);
        assert_eq!(*profile.axis(Axis::Roll), AxisRateParams::new(10, 600, 20));
        assert_eq!(*profile.axis(Axis::Pitch), AxisRateParams::new(11, 610, 21));
        assert_eq!(*profile.axis(Axis::Yaw), AxisRateParams::new(12, 620, 22));
        assert_eq!(profile.throttle, ThrottleParams::new(40, 30));
    }

    #[test]
    fn test_unrecognised_keys_ignored() {
        let settings: ParsedSettings = [("foo_bar", "1"), ("rates_type", "ACTUAL")]
            .into_iter()
            .collect();
        let (profile, report) = apply(&settings, RateProfile::default());

        assert_eq!(profile, RateProfile::default());
        assert!(report.is_empty());
        assert!(report.rejected.is_empty());
        assert_eq!(report.foreign_rates_type, None);
    }

    #[test]
    fn test_non_numeric_rejected_and_field_kept() {
        let settings: ParsedSettings = [("roll_rate", "fast"), ("roll_expo", "15")]
            .into_iter()
            .collect();
        let (profile, report) = apply(&settings, RateProfile::default());

        assert_eq!(profile.rates.roll.max_rate, 670);
        assert_eq!(profile.rates.roll.expo, 15);
        assert_eq!(report.applied_count(), 1);
        assert_eq!(report.rejected.len(), 1);
        assert!(matches!(
            report.rejected.first(),
            Some(SettingError::InvalidInteger { key: "roll_rate", value, .. }) if value == "fast"
        ));
    }

    #[test]
    fn test_trailing_garbage_and_floats_rejected() {
        let settings: ParsedSettings = [("yaw_rate", "500abc"), ("thr_mid", "0.5")]
            .into_iter()
            .collect();
        let (profile, report) = apply(&settings, RateProfile::default());

        assert_eq!(profile, RateProfile::default());
        assert!(report.is_empty());
        let keys: Vec<&str> = report.rejected.iter().map(SettingError::key).collect();
        assert_eq!(keys, vec!["yaw_rate", "thr_mid"]);
    }

    #[test]
    fn test_signed_values_accepted() {
        let settings: ParsedSettings = [("pitch_expo", "-5"), ("pitch_rate", "+700")]
            .into_iter()
            .collect();
        let (profile, report) = apply(&settings, RateProfile::default());

        assert_eq!(profile.rates.pitch.expo, -5);
        assert_eq!(profile.rates.pitch.max_rate, 700);
        assert_eq!(report.applied_count(), 2);
    }

    #[test]
    fn test_overflow_rejected() {
        let settings: ParsedSettings = [("roll_rate", "99999999999")].into_iter().collect();
        let (_, report) = apply(&settings, RateProfile::default());

        assert!(report.is_empty());
        assert_eq!(report.rejected.len(), 1);
    }

    #[test]
    fn test_foreign_rates_type_reported() {
        let settings: ParsedSettings = [("rates_type", "BETAFLIGHT"), ("roll_rate", "70")]
            .into_iter()
            .collect();
        let (_, report) = apply(&settings, RateProfile::default());

        assert_eq!(report.foreign_rates_type.as_deref(), Some("BETAFLIGHT"));
        assert_eq!(report.applied_count(), 1);
    }

    #[test]
    fn test_labels_follow_table_order() {
        let settings: ParsedSettings = [("thr_expo", "5"), ("roll_rc_rate", "50"), ("yaw_expo", "3")]
            .into_iter()
            .collect();
        let (_, report) = apply(&settings, RateProfile::default());

        assert_eq!(
            report.applied_labels(),
            vec!["roll center", "yaw expo", "throttle expo"]
        );
    }
}
