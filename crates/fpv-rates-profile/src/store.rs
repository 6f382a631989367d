//! JSON persistence of a rate profile between sessions.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ProfileError, ProfileResult, RateProfile};

/// Current on-disk schema version.
/// Increment this when the stored layout changes incompatibly.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// On-disk envelope around a [`RateProfile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredProfile {
    /// Files written before versioning deserialize as 0.
    #[serde(default)]
    pub schema_version: u32,
    pub profile: RateProfile,
}

impl StoredProfile {
    pub fn new(profile: RateProfile) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            profile,
        }
    }
}

/// Bring a stored profile up to the current schema version.
///
/// Returns `Ok(true)` if a migration was performed.
///
/// # Errors
///
/// Returns [`ProfileError::UnsupportedVersion`] for files written by a newer
/// release.
pub fn migrate_stored(stored: &mut StoredProfile) -> ProfileResult<bool> {
    if stored.schema_version > CURRENT_SCHEMA_VERSION {
        return Err(ProfileError::UnsupportedVersion(
            stored.schema_version,
            CURRENT_SCHEMA_VERSION,
        ));
    }
    if stored.schema_version == CURRENT_SCHEMA_VERSION {
        return Ok(false);
    }

    // v0 -> v1: layout unchanged, only the version field is new.
    stored.schema_version = CURRENT_SCHEMA_VERSION;
    Ok(true)
}

/// Decode a stored profile from JSON and migrate it.
///
/// # Errors
///
/// Returns [`ProfileError::SerializationError`] on malformed JSON and
/// [`ProfileError::UnsupportedVersion`] for future schema versions.
pub fn profile_from_json(json: &str) -> ProfileResult<RateProfile> {
    let mut stored: StoredProfile =
        serde_json::from_str(json).map_err(|e| ProfileError::SerializationError(e.to_string()))?;
    if migrate_stored(&mut stored)? {
        debug!(
            schema_version = CURRENT_SCHEMA_VERSION,
            "Migrated stored rate profile"
        );
    }
    Ok(stored.profile)
}

/// Encode a profile as pretty JSON in the current schema.
///
/// # Errors
///
/// Returns [`ProfileError::SerializationError`] if encoding fails.
pub fn profile_to_json(profile: &RateProfile) -> ProfileResult<String> {
    serde_json::to_string_pretty(&StoredProfile::new(*profile))
        .map_err(|e| ProfileError::SerializationError(e.to_string()))
}

/// Load a profile from `path`, falling back to defaults when the file does
/// not exist yet.
///
/// # Errors
///
/// Returns [`ProfileError::Io`] if the file exists but cannot be read, and
/// the errors of [`profile_from_json`] if its content is invalid.
pub fn load_profile(path: &Path) -> ProfileResult<RateProfile> {
    if !path.exists() {
        debug!(path = %path.display(), "No stored profile, using defaults");
        return Ok(RateProfile::default());
    }
    let content = fs::read_to_string(path)?;
    profile_from_json(&content)
}

/// Write a profile to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ProfileError::Io`] if the directory or file cannot be written.
pub fn save_profile(profile: &RateProfile, path: &Path) -> ProfileResult<()> {
    let json = profile_to_json(profile)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, json.as_bytes())?;
    debug!(path = %path.display(), "Saved rate profile");
    Ok(())
}
