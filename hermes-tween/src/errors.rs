use log::error;
use snafu::Snafu;
use tokio::runtime::TryCurrentError;

pub use crate::errors::Error::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Runtime error: Are you sure your code runs inside a tokio runtime?
    RuntimeError,
    /// Invalid duration: {duration}s is not allowed for {context}.
    InvalidDuration { duration: f32, context: &'static str },
    /// Invalid loop count: {count} (use -1 to loop forever).
    InvalidLoopCount { count: i32 },
    /// Unsupported operation: sequences have no '{operation}'.
    UnsupportedOnSequence { operation: &'static str },
    /// Invalid sequence: a parallel entry needs a previous sequential entry.
    NoPreviousEntry,
    /// Invalid frame rate: fps must be greater than 0.
    InvalidFps,
    /// Unknown error: {info}.
    Unknown { info: String },
}

impl From<TryCurrentError> for Error {
    fn from(error: TryCurrentError) -> Self {
        error!("tokio runtime error {:?}", error);
        Self::RuntimeError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let runtime_error = RuntimeError;
        assert_eq!(
            format!("{}", runtime_error),
            "Runtime error: Are you sure your code runs inside a tokio runtime?"
        );

        let duration_error = InvalidDuration {
            duration: 0.0,
            context: "tween",
        };
        assert_eq!(
            format!("{}", duration_error),
            "Invalid duration: 0s is not allowed for tween."
        );

        let loop_error = InvalidLoopCount { count: -3 };
        assert_eq!(
            format!("{}", loop_error),
            "Invalid loop count: -3 (use -1 to loop forever)."
        );

        let sequence_error = UnsupportedOnSequence {
            operation: "set_ease",
        };
        assert_eq!(
            format!("{}", sequence_error),
            "Unsupported operation: sequences have no 'set_ease'."
        );

        assert_eq!(
            format!("{}", NoPreviousEntry),
            "Invalid sequence: a parallel entry needs a previous sequential entry."
        );
        assert_eq!(
            format!("{}", InvalidFps),
            "Invalid frame rate: fps must be greater than 0."
        );

        let unknown_error = Unknown {
            info: "Some unknown error".to_string(),
        };
        assert_eq!(
            format!("{}", unknown_error),
            "Unknown error: Some unknown error."
        );
    }

    #[test]
    fn test_from_try_current_error() {
        // No tokio runtime is running in a plain test.
        let error: Error = tokio::runtime::Handle::try_current().unwrap_err().into();
        assert!(matches!(error, RuntimeError));
    }
}
