/// `error_code` reported when the call succeeded.
pub const ERROR_NONE: i32 = 0;

/// `error_code` reported when no activity is attached.
pub const ERROR_CONTEXT_UNAVAILABLE: i32 = -1;

/// `error_code` reported when the platform argument source failed.
pub const ERROR_SOURCE_FAILED: i32 = -2;

/// Message paired with [`ERROR_CONTEXT_UNAVAILABLE`].
pub const CONTEXT_UNAVAILABLE_MESSAGE: &str = "Activity not available";

/// Prefix put in front of every launch-argument key.
pub const ARG_PREFIX: &str = "--";

/// Longest formatted argument in bytes, excluding the trailing NUL.
/// Native callers size their buffers at 1024.
pub const MAX_ARGUMENT_LEN: usize = 1023;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";
