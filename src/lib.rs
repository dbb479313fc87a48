//! Native side of a Flutter FFI plugin that exposes an app's launch arguments.
//!
//! - Keeps the host's current activity in an [`ActivityHandleRegistry`]
//! - Maps the host's activity lifecycle onto that registry
//! - Answers `get_command_line_arguments` through a pluggable [`ArgumentSource`]
//! - Exports a small C ABI for `dart:ffi` and the platform glue

pub mod constants;
pub mod error;
pub mod ffi;
pub mod handle;
pub mod launch_args;
pub mod lifecycle;
pub mod plugin;
pub mod registry;

use std::sync::Once;

use env_logger::{Builder, Env};

pub use error::LaunchArgsError;
pub use ffi::CommandLineArguments;
pub use handle::ActivityHandle;
pub use launch_args::{ArgumentSource, Extra, LaunchArgumentsQuery, NoExtras, format_argument};
pub use lifecycle::{ActivityLifecycleAdapter, LifecycleEvent};
pub use plugin::{LaunchArgsPlugin, plugin};
pub use registry::ActivityHandleRegistry;

// the library can be loaded by several engines in one process, so the logger
// is only built once
static LOGGER_INIT: Once = Once::new();

/// Installs `env_logger`, honouring `RUST_LOG`. Later calls are no-ops, and a
/// logger the host already installed is left in place.
pub fn init_logging() {
    LOGGER_INIT.call_once(|| {
        let _ = Builder::from_env(Env::default().default_filter_or(constants::DEFAULT_LOG_FILTER))
            .try_init();
    });
}
