//! CLI dump import and export

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, info};

use crate::commands::profile::{load_session, save_session};
use crate::error::CliError;
use crate::output;

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            CliError::InvalidInput(format!("Cannot read {}: {}", path.display(), e)).into()
        }),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(CliError::from)
                .context("Cannot read dump from stdin")?;
            Ok(text)
        }
    }
}

/// Apply a dump from `file` (or stdin) to the stored profile.
///
/// The profile is only written back when at least one setting was applied.
pub fn import(file: Option<&Path>, path: &Path, json: bool) -> Result<()> {
    let text = read_input(file)?;
    let mut session = load_session(path)?;

    let outcome = session.import_text(&text).map_err(CliError::from)?;
    if outcome.is_success() {
        save_session(&session, path)?;
        info!(
            applied = outcome.applied_count,
            path = %path.display(),
            "Saved imported settings"
        );
    } else {
        debug!("Nothing recognised, profile left untouched");
    }

    output::print_import_outcome(&outcome, json);
    Ok(())
}

/// Write the stored profile as a dump to `output` or stdout.
pub fn export(output_file: Option<&Path>, path: &Path, json: bool) -> Result<()> {
    let session = load_session(path)?;
    let dump = session.export_text();

    match output_file {
        Some(target) => {
            fs::write(target, format!("{dump}\n"))
                .map_err(CliError::from)
                .with_context(|| format!("Cannot write {}", target.display()))?;
            output::print_success(
                &format!("Exported rate profile to {}", target.display()),
                json,
            );
        }
        None if json => {
            let body = serde_json::json!({
                "success": true,
                "dump": dump
            });
            let text = serde_json::to_string_pretty(&body).map_err(CliError::from)?;
            println!("{text}");
        }
        None => println!("{dump}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fpv_rates_profile::RateProfile;
    use tempfile::TempDir;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_import_from_file_persists() -> TestResult {
        let dir = TempDir::new()?;
        let dump = dir.path().join("dump.txt");
        let path = dir.path().join("profile.json");
        fs::write(&dump, "set yaw_rate = 450\nset thr_expo = 25\n")?;

        import(Some(&dump), &path, true)?;

        let profile = load_session(&path)?.profile();
        assert_eq!(profile.rates.yaw.max_rate, 450);
        assert_eq!(profile.throttle.expo, 25);
        Ok(())
    }

    #[test]
    fn test_unrecognised_import_does_not_create_file() -> TestResult {
        let dir = TempDir::new()?;
        let dump = dir.path().join("dump.txt");
        let path = dir.path().join("profile.json");
        fs::write(&dump, "set beeper = ON\n")?;

        import(Some(&dump), &path, true)?;
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_empty_import_is_error() -> TestResult {
        let dir = TempDir::new()?;
        let dump = dir.path().join("dump.txt");
        fs::write(&dump, "   \n")?;

        let err = import(Some(&dump), &dir.path().join("profile.json"), true)
            .err()
            .ok_or("expected an error")?;
        assert_eq!(crate::error::exit_code_for(&err), 4);
        Ok(())
    }

    #[test]
    fn test_export_write_failure_is_io_error() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("profile.json");
        let out = dir.path().join("missing").join("out.txt");

        let err = export(Some(&out), &path, true)
            .err()
            .ok_or("expected an error")?;
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::IoError(_))
        ));
        assert_eq!(crate::error::exit_code_for(&err), 1);
        assert_eq!(crate::error::error_type_name(&err), "IoError");
        assert!(err.to_string().contains("out.txt"));
        Ok(())
    }

    #[test]
    fn test_import_skips_byte_order_mark() -> TestResult {
        let dir = TempDir::new()?;
        let dump = dir.path().join("dump.txt");
        let path = dir.path().join("profile.json");
        fs::write(&dump, "\u{feff}set roll_rc_rate = 80\r\nset thr_mid = 40\r\n")?;

        import(Some(&dump), &path, true)?;

        let profile = load_session(&path)?.profile();
        assert_eq!(profile.rates.roll.center, 80);
        assert_eq!(profile.throttle.mid, 40);
        Ok(())
    }

    #[test]
    fn test_export_to_file_round_trips() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("profile.json");
        let out = dir.path().join("out.txt");

        export(Some(&out), &path, true)?;
        let written = fs::read_to_string(&out)?;
        assert!(written.starts_with("# Betaflight Rate Profile Configuration"));
        assert!(written.ends_with("save\n"));

        let mut session = load_session(&path)?;
        let outcome = session.import_text(&written)?;
        assert_eq!(outcome.applied_count, 11);
        assert_eq!(session.profile(), RateProfile::default());
        Ok(())
    }
}
