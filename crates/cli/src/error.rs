//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map client, janitor and configuration errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use es_client::ClientError;
use es_config::ConfigError;
use es_janitor::JanitorError;

use crate::cancellation::Cancelled;

/// Structured exit codes for es-janitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// Missing or invalid configuration; no remote call was made.
    ConfigurationError = 2,

    /// Network, DNS or timeout failure.
    ///
    /// Scripts may retry with backoff.
    ConnectionError = 3,

    /// Index, repository or snapshot not found (HTTP 404).
    NotFound = 4,

    /// The cluster answered with a payload that could not be decoded.
    InvalidResponse = 5,

    /// HTTP 401 or 403.
    PermissionDenied = 6,

    /// HTTP 502, 503 or 504.
    ServiceUnavailable = 8,

    /// SIGINT/Ctrl+C (128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,
            ClientError::ApiError {
                status: 401 | 403, ..
            } => ExitCode::PermissionDenied,
            ClientError::ApiError {
                status: 502..=504, ..
            } => ExitCode::ServiceUnavailable,
            ClientError::ApiError { .. } => ExitCode::GeneralError,
            ClientError::InvalidResponse(_) => ExitCode::InvalidResponse,
            ClientError::InvalidUrl(_) => ExitCode::ConfigurationError,
            ClientError::HttpError(_) if err.is_transport() => ExitCode::ConnectionError,
            ClientError::HttpError(_) => ExitCode::GeneralError,
        }
    }
}

impl From<&JanitorError> for ExitCode {
    fn from(err: &JanitorError) -> Self {
        match err {
            JanitorError::RepositoryRequired => ExitCode::ConfigurationError,
            other => other
                .client_error()
                .map_or(ExitCode::GeneralError, ExitCode::from),
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns [`ExitCode::GeneralError`] when no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if cause.is::<Cancelled>() {
                return ExitCode::Interrupted;
            }
            if cause.is::<ConfigError>() {
                return ExitCode::ConfigurationError;
            }
            if let Some(janitor_err) = cause.downcast_ref::<JanitorError>() {
                return ExitCode::from(janitor_err);
            }
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
        }

        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    fn api_error(status: u16) -> ClientError {
        ClientError::ApiError {
            operation: "list indices".to_string(),
            status,
            url: "http://localhost:9200/_cat/indices".to_string(),
            body: String::new(),
        }
    }

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::ConfigurationError.as_i32(), 2);
        assert_eq!(ExitCode::ConnectionError.as_i32(), 3);
        assert_eq!(ExitCode::NotFound.as_i32(), 4);
        assert_eq!(ExitCode::InvalidResponse.as_i32(), 5);
        assert_eq!(ExitCode::PermissionDenied.as_i32(), 6);
        assert_eq!(ExitCode::ServiceUnavailable.as_i32(), 8);
        assert_eq!(ExitCode::Interrupted.as_i32(), 130);
    }

    #[test]
    fn test_from_api_error_status() {
        assert_eq!(ExitCode::from(&api_error(404)), ExitCode::NotFound);
        assert_eq!(ExitCode::from(&api_error(401)), ExitCode::PermissionDenied);
        assert_eq!(ExitCode::from(&api_error(403)), ExitCode::PermissionDenied);
        assert_eq!(ExitCode::from(&api_error(502)), ExitCode::ServiceUnavailable);
        assert_eq!(ExitCode::from(&api_error(503)), ExitCode::ServiceUnavailable);
        assert_eq!(ExitCode::from(&api_error(504)), ExitCode::ServiceUnavailable);
        assert_eq!(ExitCode::from(&api_error(500)), ExitCode::GeneralError);
        assert_eq!(ExitCode::from(&api_error(400)), ExitCode::GeneralError);
    }

    #[test]
    fn test_from_invalid_response() {
        let err = ClientError::InvalidResponse("not json".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::InvalidResponse);
    }

    #[test]
    fn test_from_janitor_error_uses_client_error() {
        let err = JanitorError::Delete {
            index: "logs-2018.11.21".to_string(),
            source: api_error(403),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::PermissionDenied);
        assert_eq!(
            ExitCode::from(&JanitorError::RepositoryRequired),
            ExitCode::ConfigurationError
        );
    }

    #[test]
    fn test_anyhow_chain_lookup() {
        let err = anyhow::Error::from(JanitorError::Listing(api_error(503)))
            .context("archive run failed");
        assert_eq!(err.exit_code(), ExitCode::ServiceUnavailable);

        let err: anyhow::Error = ConfigError::MissingEndpoint.into();
        assert_eq!(err.exit_code(), ExitCode::ConfigurationError);

        let err: anyhow::Error = Cancelled.into();
        assert_eq!(err.exit_code(), ExitCode::Interrupted);

        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }

    #[test]
    fn test_client_error_wrapped_in_context() {
        let result: Result<(), ClientError> = Err(api_error(404));
        let err = result.context("restore failed").unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::NotFound);
    }
}
