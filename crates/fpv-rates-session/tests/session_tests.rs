//! Session-level behaviour: import/export, snapshots and resampling.

use fpv_rates_profile::{Axis, AxisField, RateProfile, ThrottleField};
use fpv_rates_session::{RateSession, SessionError};
use proptest::prelude::*;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn axis_strategy() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::Roll), Just(Axis::Pitch), Just(Axis::Yaw)]
}

fn axis_field_strategy() -> impl Strategy<Value = AxisField> {
    prop_oneof![
        Just(AxisField::Center),
        Just(AxisField::MaxRate),
        Just(AxisField::Expo)
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn export_import_restores_any_edit(
        axis in axis_strategy(),
        field in axis_field_strategy(),
        value in -2000i32..2000,
        mid in 0i32..=100,
    ) {
        let mut source = RateSession::new();
        source.set_axis_param(axis, field, value);
        source.set_throttle_param(ThrottleField::Mid, mid);

        let mut target = RateSession::new();
        let outcome = target.import_text(&source.export_text());
        prop_assert!(outcome.is_ok());
        prop_assert_eq!(target.profile(), source.profile());
    }

    #[test]
    fn axis_edit_only_moves_that_axis_curve(
        axis in axis_strategy(),
        value in 100i32..2000,
    ) {
        let mut session = RateSession::new();
        let before = session.sample_all_axes(16);
        session.set_axis_param(axis, AxisField::MaxRate, value);
        let after = session.sample_all_axes(16);

        prop_assert!(before.is_ok() && after.is_ok());
        if let (Ok(before), Ok(after)) = (before, after) {
            for ((a, old), (_, new)) in before.iter().zip(after.iter()) {
                if *a != axis {
                    prop_assert_eq!(old, new);
                }
            }
        }
    }
}

#[test]
fn import_dump_then_sample() -> TestResult {
    let mut session = RateSession::new();
    let outcome = session.import_text(
        "# rateprofile\nset rates_type = ACTUAL\nset yaw_rc_rate = 30\nset yaw_rate = 400\nsave",
    )?;
    assert_eq!(outcome.applied_labels, vec!["yaw center", "yaw max rate"]);
    assert_eq!(outcome.foreign_rates_type, None);

    let yaw = session.sample_axis_curve(Axis::Yaw, 200)?;
    assert_eq!(yaw.len(), 201);
    let last = yaw.last().ok_or("no samples")?;
    assert!((last.output - 400.0).abs() < 1e-3);
    Ok(())
}

#[test]
fn foreign_rates_type_is_surfaced() -> TestResult {
    let mut session = RateSession::new();
    let outcome = session.import_text("set rates_type = BETAFLIGHT\nset roll_rc_rate = 100")?;
    assert_eq!(outcome.foreign_rates_type.as_deref(), Some("BETAFLIGHT"));
    assert_eq!(session.profile().rates.roll.center, 100);
    Ok(())
}

#[test]
fn blank_import_is_rejected() {
    let mut session = RateSession::with_profile(RateProfile::default());
    let err = session.import_text("\n\n").err();
    assert_eq!(err, Some(SessionError::EmptyInput));
    assert_eq!(
        err.map(|e| e.to_string()).as_deref(),
        Some("Please paste CLI dump text first.")
    );
}

#[test]
fn default_export_matches_known_dump() {
    let dump = RateSession::new().export_text();
    assert!(dump.contains("set rates_type = ACTUAL"));
    assert!(dump.contains("set roll_rc_rate = 70"));
    assert!(dump.contains("set yaw_rate = 670"));
    assert!(dump.contains("set thr_mid = 50"));
    assert!(dump.ends_with("save"));
}
