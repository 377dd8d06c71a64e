use std::io;
use thiserror::Error;

/// Errors raised around the spinner: configuration, logging and the host
/// binary's command runner. Starting, stopping and rendering never fail.
#[derive(Debug, Error)]
pub enum SpinnerError {
    /// Configuration sources could not be read or deserialized
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("spinner needs at least one frame")]
    EmptyFrames,

    #[error("spinner interval must be greater than zero")]
    ZeroInterval,

    /// Filesystem failure while preparing the log file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("logger initialization failed: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("'{program}' exited with {}", describe_code(.code))]
    CommandFailed { program: String, code: Option<i32> },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, SpinnerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_display() {
        let err = SpinnerError::CommandFailed {
            program: "make".to_string(),
            code: Some(2),
        };
        assert_eq!(err.to_string(), "'make' exited with status 2");

        let err = SpinnerError::CommandFailed {
            program: "make".to_string(),
            code: None,
        };
        assert!(err.to_string().contains("signal"));
    }

    #[test]
    fn test_validation_errors_display() {
        assert_eq!(
            SpinnerError::EmptyFrames.to_string(),
            "spinner needs at least one frame"
        );
        assert!(SpinnerError::ZeroInterval.to_string().contains("interval"));
    }
}
