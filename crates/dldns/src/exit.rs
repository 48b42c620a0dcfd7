//! Process exit codes

use dldns_core::Error;
use std::process::ExitCode;

/// Exit codes for the dldns tools
///
/// - 0: Success
/// - 1: Configuration error (missing token, bad settings)
/// - 2: The request failed (API rejection or transport failure)
/// - 64: Usage error (missing or bad arguments), as in sysexits.h
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DldnsExitCode {
    /// Command completed
    Success = 0,
    /// Configuration error or startup failure
    ConfigError = 1,
    /// API or transport failure
    RequestFailed = 2,
    /// Missing or invalid command-line arguments
    UsageError = 64,
}

impl DldnsExitCode {
    /// Exit code for a failed command
    pub fn for_error(err: &Error) -> Self {
        match err {
            Error::Config(_) => DldnsExitCode::ConfigError,
            Error::InvalidInput(_) => DldnsExitCode::UsageError,
            Error::Request { .. } | Error::Transport(_) | Error::Json(_) | Error::Other(_) => {
                DldnsExitCode::RequestFailed
            }
        }
    }
}

impl From<DldnsExitCode> for ExitCode {
    fn from(code: DldnsExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}
