use crate::constants::{
    CONTEXT_UNAVAILABLE_MESSAGE, ERROR_CONTEXT_UNAVAILABLE, ERROR_SOURCE_FAILED,
};

/// Failures of a launch-argument query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchArgsError {
    /// No activity is attached, so there is nothing to read arguments from.
    ContextUnavailable,
    /// The platform argument source reported an error.
    SourceFailed(String),
}

impl LaunchArgsError {
    /// Value written to `CommandLineArguments::error_code`.
    pub fn code(&self) -> i32 {
        match self {
            LaunchArgsError::ContextUnavailable => ERROR_CONTEXT_UNAVAILABLE,
            LaunchArgsError::SourceFailed(_) => ERROR_SOURCE_FAILED,
        }
    }
}

impl std::fmt::Display for LaunchArgsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LaunchArgsError::ContextUnavailable => write!(f, "{}", CONTEXT_UNAVAILABLE_MESSAGE),
            LaunchArgsError::SourceFailed(s) => write!(f, "Launch argument source failed: {}", s),
        }
    }
}
impl std::error::Error for LaunchArgsError {}
