//! Error types for ratectl CLI

use thiserror::Error;

use fpv_rates_session::SessionError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Profile file error: {0}")]
    ProfileFile(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::ProfileFile(_) => 3,
            CliError::InvalidInput(_) | CliError::Session(_) => 4,
            CliError::InvalidConfiguration(_) | CliError::IoError(_) | CliError::JsonError(_) => 1,
        }
    }

    /// Variant name reported as the error `type` in JSON output.
    pub fn type_name(&self) -> &'static str {
        match self {
            CliError::ProfileFile(_) => "ProfileFile",
            CliError::InvalidInput(_) => "InvalidInput",
            CliError::InvalidConfiguration(_) => "InvalidConfiguration",
            CliError::Session(_) => "Session",
            CliError::IoError(_) => "IoError",
            CliError::JsonError(_) => "JsonError",
        }
    }
}

/// Exit code for any error returned by a command.
pub fn exit_code_for(error: &anyhow::Error) -> u8 {
    error
        .downcast_ref::<CliError>()
        .map_or(1, CliError::exit_code)
}

/// Error type name for JSON output; errors raised outside [`CliError`] are
/// reported as `Error`.
pub fn error_type_name(error: &anyhow::Error) -> &'static str {
    error
        .downcast_ref::<CliError>()
        .map_or("Error", CliError::type_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::ProfileFile("x".into()).exit_code(), 3);
        assert_eq!(CliError::Session(SessionError::EmptyInput).exit_code(), 4);
        assert_eq!(CliError::InvalidInput("x".into()).exit_code(), 4);
        assert_eq!(CliError::InvalidConfiguration("x".into()).exit_code(), 1);
        assert_eq!(CliError::IoError(std::io::Error::other("x")).exit_code(), 1);
    }

    #[test]
    fn test_json_error_exit_code() -> Result<(), Box<dyn std::error::Error>> {
        let source = serde_json::from_str::<serde_json::Value>("{")
            .err()
            .ok_or("expected a parse error")?;
        let err = anyhow::Error::from(CliError::from(source));
        assert_eq!(exit_code_for(&err), 1);
        assert_eq!(error_type_name(&err), "JsonError");
        Ok(())
    }

    #[test]
    fn test_error_type_names() {
        let err = anyhow::Error::from(CliError::ProfileFile(
            "/p.json: key must be a string at line 1 column 3".into(),
        ));
        assert_eq!(error_type_name(&err), "ProfileFile");

        let err = anyhow::Error::from(CliError::Session(SessionError::EmptyInput))
            .context("while importing");
        assert_eq!(error_type_name(&err), "Session");

        assert_eq!(error_type_name(&anyhow::anyhow!("plain failure")), "Error");
    }

    #[test]
    fn test_exit_code_through_anyhow() {
        let err = anyhow::Error::from(CliError::ProfileFile("broken".into()));
        assert_eq!(exit_code_for(&err), 3);

        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code_for(&err), 1);
    }
}
