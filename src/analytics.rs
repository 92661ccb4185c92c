use serde_json::Value;

/// Host-provided sink for analytics events: an event name plus a flat
/// key/value payload.
pub type AnalyticsHook = Box<dyn Fn(&str, Value) + Send + Sync>;

/// Best-effort event emission. Every event is logged locally; when a hook was
/// injected at construction it is forwarded as well. Emission can never fail
/// and never influences the submission flow.
pub struct Analytics {
    hook: Option<AnalyticsHook>,
}

impl Analytics {
    pub fn new(hook: Option<AnalyticsHook>) -> Self {
        Self { hook }
    }

    /// Local logging only, no forwarding.
    pub fn disabled() -> Self {
        Self { hook: None }
    }

    pub fn track_event(&self, name: &str, data: Value) {
        tracing::info!(event = name, data = %data, "analytics event");
        if let Some(hook) = &self.hook {
            hook(name, data);
        }
    }
}
