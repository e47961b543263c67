// Fire-and-forget diagnostic events.
//
// Stores report what they did through an optional observer. Nothing is read
// back, and an observer returns nothing the store could act on.

#[cfg(test)]
pub mod recording;

/// Receives named events with string tags.
///
/// Events are emitted after the store has applied its change. Implementations
/// must not panic: a panic unwinds into the caller of the store operation even
/// though the change already happened, and release builds abort on panic.
pub trait EventObserver: Send + Sync {
    fn emit_event(&self, name: &str, tags: &[(&str, &str)]);
}

/// Records each event as a `tracing` event inside the current span.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventObserver;

impl TracingEventObserver {
    pub fn new() -> Self {
        Self
    }
}

impl EventObserver for TracingEventObserver {
    fn emit_event(&self, name: &str, tags: &[(&str, &str)]) {
        tracing::info!(target: "cart_service::events", event = name, tags = ?tags);
    }
}
