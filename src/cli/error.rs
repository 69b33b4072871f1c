//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Io { .. } => crate::exitcode::IOERR,
            CliError::Application(e) => match e {
                ApplicationError::Domain(_) => crate::exitcode::DATAERR,
                ApplicationError::InvalidCommand(_) => crate::exitcode::USAGE,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::OperationFailed { .. } => crate::exitcode::SOFTWARE,
            },
        }
    }
}

/// Process exit code for the outcome of a command.
pub fn exit_code_for<T>(result: &CliResult<T>) -> i32 {
    match result {
        Ok(_) => crate::exitcode::OK,
        Err(e) => e.exit_code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_exit_codes() {
        let usage = CliError::Usage("bad".into());
        assert_eq!(usage.exit_code(), crate::exitcode::USAGE);

        let domain = CliError::from(ApplicationError::from(DomainError::EmptyTree));
        assert_eq!(domain.exit_code(), crate::exitcode::DATAERR);

        let config = CliError::from(ApplicationError::Config {
            message: "x".into(),
        });
        assert_eq!(config.exit_code(), crate::exitcode::CONFIG);
    }

    #[test]
    fn test_exit_code_for_result() {
        assert_eq!(exit_code_for(&Ok::<(), CliError>(())), crate::exitcode::OK);
        let failed: CliResult<()> = Err(CliError::Usage("bad".into()));
        assert_eq!(exit_code_for(&failed), crate::exitcode::USAGE);
    }
}
