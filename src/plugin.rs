//! Process-wide plugin context the C ABI routes into.

use std::sync::Arc;

use log::info;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::init_logging;
use crate::launch_args::{ArgumentSource, LaunchArgumentsQuery, NoExtras};
use crate::lifecycle::ActivityLifecycleAdapter;
use crate::registry::ActivityHandleRegistry;

/// Owns the activity registry and the installed argument source.
pub struct LaunchArgsPlugin {
    registry: Arc<ActivityHandleRegistry>,
    source: RwLock<Arc<dyn ArgumentSource>>,
}

impl Default for LaunchArgsPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl LaunchArgsPlugin {
    /// Empty registry, [`NoExtras`] as the source.
    pub fn new() -> Self {
        Self::with_source(Arc::new(NoExtras))
    }

    pub fn with_source(source: Arc<dyn ArgumentSource>) -> Self {
        Self {
            registry: Arc::new(ActivityHandleRegistry::new()),
            source: RwLock::new(source),
        }
    }

    pub fn registry(&self) -> &Arc<ActivityHandleRegistry> {
        &self.registry
    }

    /// An adapter for the host's lifecycle callbacks, bound to this registry.
    pub fn lifecycle(&self) -> ActivityLifecycleAdapter {
        ActivityLifecycleAdapter::new(Arc::clone(&self.registry))
    }

    /// Replaces the argument source used by later queries.
    pub fn install_source(&self, source: Arc<dyn ArgumentSource>) {
        *self.source.write() = source;
        info!("[Plugin] Argument source installed");
    }

    pub fn query(&self) -> LaunchArgumentsQuery {
        LaunchArgumentsQuery::new(Arc::clone(&self.registry), Arc::clone(&self.source.read()))
    }
}

static PLUGIN: Lazy<LaunchArgsPlugin> = Lazy::new(|| {
    init_logging();
    info!("[Plugin] Launch arguments plugin initialized");
    LaunchArgsPlugin::new()
});

/// The instance shared by every FFI entry point in this process.
pub fn plugin() -> &'static LaunchArgsPlugin {
    &PLUGIN
}
