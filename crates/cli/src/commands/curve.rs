//! Curve sampling command

use anyhow::Result;
use std::path::Path;

use crate::commands::CurveTarget;
use crate::commands::profile::load_session;
use crate::error::CliError;
use crate::output;

/// Print `points + 1` samples of the selected curve.
pub fn execute(target: CurveTarget, points: usize, path: &Path, json: bool) -> Result<()> {
    let session = load_session(path)?;
    let samples = match target.axis() {
        Some(axis) => session.sample_axis_curve(axis, points).map_err(CliError::from)?,
        None => session.sample_throttle_curve(points).map_err(CliError::from)?,
    };
    output::print_curve(&samples, target.axis(), json);
    Ok(())
}
