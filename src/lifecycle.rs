//! Adapter from the host's activity lifecycle onto the registry.

use std::sync::Arc;

use log::info;

use crate::handle::ActivityHandle;
use crate::registry::ActivityHandleRegistry;

/// Lifecycle notifications a Flutter host delivers to an activity-aware plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    AttachedToEngine,
    DetachedFromEngine,
    AttachedToActivity(ActivityHandle),
    DetachedFromActivityForConfigChanges,
    ReattachedToActivityForConfigChanges(ActivityHandle),
    DetachedFromActivity,
}

/// Translates host callbacks into `set`/`clear` on a shared registry.
#[derive(Debug, Clone)]
pub struct ActivityLifecycleAdapter {
    registry: Arc<ActivityHandleRegistry>,
}

impl ActivityLifecycleAdapter {
    pub fn new(registry: Arc<ActivityHandleRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<ActivityHandleRegistry> {
        &self.registry
    }

    pub fn on_attached_to_activity(&self, activity: ActivityHandle) {
        info!("[Lifecycle] Attached to activity");
        self.registry.set(activity);
    }

    /// The activity is being recreated; it is unusable until reattached.
    pub fn on_detached_from_activity_for_config_changes(&self) {
        info!("[Lifecycle] Activity temporarily detached");
        self.registry.clear();
    }

    pub fn on_reattached_to_activity_for_config_changes(&self, activity: ActivityHandle) {
        info!("[Lifecycle] Reattached to activity after config change");
        self.registry.set(activity);
    }

    pub fn on_detached_from_activity(&self) {
        info!("[Lifecycle] Detached from activity");
        self.registry.clear();
    }

    /// Dispatches one event. Engine events carry no activity and leave the
    /// registry untouched.
    pub fn handle(&self, event: LifecycleEvent) {
        match event {
            LifecycleEvent::AttachedToEngine | LifecycleEvent::DetachedFromEngine => {
                info!("[Lifecycle] {:?}", event);
            }
            LifecycleEvent::AttachedToActivity(activity) => self.on_attached_to_activity(activity),
            LifecycleEvent::DetachedFromActivityForConfigChanges => {
                self.on_detached_from_activity_for_config_changes()
            }
            LifecycleEvent::ReattachedToActivityForConfigChanges(activity) => {
                self.on_reattached_to_activity_for_config_changes(activity)
            }
            LifecycleEvent::DetachedFromActivity => self.on_detached_from_activity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::test_handle;

    fn adapter() -> ActivityLifecycleAdapter {
        ActivityLifecycleAdapter::new(Arc::new(ActivityHandleRegistry::new()))
    }

    #[test]
    fn full_activity_lifecycle() {
        let adapter = adapter();
        let first = test_handle(0x10);
        let recreated = test_handle(0x20);

        adapter.handle(LifecycleEvent::AttachedToEngine);
        assert_eq!(adapter.registry().get(), None);

        adapter.handle(LifecycleEvent::AttachedToActivity(first));
        assert_eq!(adapter.registry().get(), Some(first));

        adapter.handle(LifecycleEvent::DetachedFromActivityForConfigChanges);
        assert_eq!(adapter.registry().get(), None);

        adapter.handle(LifecycleEvent::ReattachedToActivityForConfigChanges(recreated));
        assert_eq!(adapter.registry().get(), Some(recreated));

        adapter.handle(LifecycleEvent::DetachedFromActivity);
        assert_eq!(adapter.registry().get(), None);

        adapter.handle(LifecycleEvent::DetachedFromEngine);
        assert_eq!(adapter.registry().get(), None);
    }

    #[test]
    fn engine_events_keep_the_current_activity() {
        let adapter = adapter();
        let activity = test_handle(0x10);
        adapter.on_attached_to_activity(activity);
        adapter.handle(LifecycleEvent::DetachedFromEngine);
        assert_eq!(adapter.registry().get(), Some(activity));
    }

    #[test]
    fn clones_share_one_registry() {
        let adapter = adapter();
        let other = adapter.clone();
        let activity = test_handle(0x30);
        other.on_attached_to_activity(activity);
        assert_eq!(adapter.registry().get(), Some(activity));
        adapter.on_detached_from_activity();
        assert!(!other.registry().is_attached());
    }
}
