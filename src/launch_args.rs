//! Launch-argument query path.
//!
//! Reads the current activity from the registry and asks the installed
//! [`ArgumentSource`] for the extras the app was launched with. Extras become
//! `--key=value` (or `--key` when there is no value).

use std::sync::Arc;

use anyhow::Result;
use log::{error, info};

use crate::constants::{ARG_PREFIX, MAX_ARGUMENT_LEN};
use crate::error::LaunchArgsError;
use crate::handle::ActivityHandle;
use crate::registry::ActivityHandleRegistry;

/// A launch extra: key plus optional value.
pub type Extra = (String, Option<String>);

/// Platform glue that reads launch extras from a live activity.
pub trait ArgumentSource: Send + Sync {
    fn extras(&self, activity: ActivityHandle) -> Result<Vec<Extra>>;
}

impl<F> ArgumentSource for F
where
    F: Fn(ActivityHandle) -> Result<Vec<Extra>> + Send + Sync,
{
    fn extras(&self, activity: ActivityHandle) -> Result<Vec<Extra>> {
        self(activity)
    }
}

/// Source used until the platform installs one: the activity has no extras.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoExtras;

impl ArgumentSource for NoExtras {
    fn extras(&self, _activity: ActivityHandle) -> Result<Vec<Extra>> {
        Ok(Vec::new())
    }
}

/// Formats one extra, capped at [`MAX_ARGUMENT_LEN`] bytes on a char boundary.
pub fn format_argument(key: &str, value: Option<&str>) -> String {
    let mut arg = match value {
        Some(value) => format!("{}{}={}", ARG_PREFIX, key, value),
        None => format!("{}{}", ARG_PREFIX, key),
    };
    if arg.len() > MAX_ARGUMENT_LEN {
        let mut cut = MAX_ARGUMENT_LEN;
        while !arg.is_char_boundary(cut) {
            cut -= 1;
        }
        arg.truncate(cut);
    }
    arg
}

/// One query against a registry and a source.
#[derive(Clone)]
pub struct LaunchArgumentsQuery {
    registry: Arc<ActivityHandleRegistry>,
    source: Arc<dyn ArgumentSource>,
}

impl LaunchArgumentsQuery {
    pub fn new(registry: Arc<ActivityHandleRegistry>, source: Arc<dyn ArgumentSource>) -> Self {
        Self { registry, source }
    }

    /// Returns the formatted launch arguments of the attached activity.
    ///
    /// Fails with [`LaunchArgsError::ContextUnavailable`] when no activity is
    /// attached; the handle is never touched in that case.
    pub fn fetch(&self) -> Result<Vec<String>, LaunchArgsError> {
        let Some(activity) = self.registry.get() else {
            error!("[LaunchArgs] Activity not available");
            return Err(LaunchArgsError::ContextUnavailable);
        };

        info!("[LaunchArgs] Retrieving launch arguments from {:?}", activity);
        let extras = self.source.extras(activity).map_err(|e| {
            error!("[LaunchArgs] Argument source failed: {:#}", e);
            LaunchArgsError::SourceFailed(format!("{:#}", e))
        })?;
        info!("[LaunchArgs] Found {} launch arguments", extras.len());

        Ok(extras
            .iter()
            .enumerate()
            .map(|(i, (key, value))| {
                let arg = format_argument(key, value.as_deref());
                info!("[LaunchArgs] Arg {}: {}", i, arg);
                arg
            })
            .collect())
    }
}
