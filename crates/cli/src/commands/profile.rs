//! Profile state commands: show, set and reset
//!
//! The profile lives in a JSON file between invocations. Every command loads
//! it into a [`RateSession`], works on the session and writes it back.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use fpv_rates_profile::{load_profile, save_profile};
use fpv_rates_session::RateSession;

use crate::commands::SetCommands;
use crate::error::CliError;
use crate::output;

const PROFILE_DIR_NAME: &str = "fpv-rates";
const PROFILE_FILE_NAME: &str = "profile.json";

/// Default location of the stored profile under the user config directory.
pub fn default_profile_path() -> Result<PathBuf> {
    let config = dirs::config_dir().ok_or_else(|| {
        CliError::InvalidConfiguration("Cannot find configuration directory".to_string())
    })?;
    Ok(config.join(PROFILE_DIR_NAME).join(PROFILE_FILE_NAME))
}

/// Use the explicit `--profile` path if given, else the default location.
pub fn resolve_profile_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_profile_path(),
    }
}

pub fn load_session(path: &Path) -> Result<RateSession> {
    let profile = load_profile(path)
        .map_err(|e| CliError::ProfileFile(format!("{}: {}", path.display(), e)))?;
    debug!(path = %path.display(), "Loaded rate profile");
    Ok(RateSession::with_profile(profile))
}

pub fn save_session(session: &RateSession, path: &Path) -> Result<()> {
    save_profile(&session.profile(), path)
        .map_err(|e| CliError::ProfileFile(format!("{}: {}", path.display(), e)))?;
    Ok(())
}

/// Print the stored profile
pub fn show(path: &Path, json: bool) -> Result<()> {
    let session = load_session(path)?;
    output::print_profile(&session.profile(), path, json);
    Ok(())
}

/// Change one parameter and persist
pub fn set(cmd: &SetCommands, path: &Path, json: bool) -> Result<()> {
    let mut session = load_session(path)?;

    let message = match cmd {
        SetCommands::Axis { axis, field, value } => {
            session.set_axis_param(*axis, *field, *value);
            format!("Set {axis} {field} = {value}")
        }
        SetCommands::Throttle { field, value } => {
            session.set_throttle_param(*field, *value);
            format!("Set throttle {field} = {value}")
        }
    };

    save_session(&session, path)?;
    info!(path = %path.display(), "{}", message);
    output::print_success(&message, json);
    Ok(())
}

/// Restore defaults and persist
pub fn reset(path: &Path, json: bool) -> Result<()> {
    let mut session = load_session(path)?;
    session.reset();
    save_session(&session, path)?;
    output::print_success("Rate profile reset to defaults", json);
    Ok(())
}
