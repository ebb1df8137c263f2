use kernel::interface::event::{BookEvent, BookEventDispatcher};

/// Renders domain events into the structured log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventDispatcher;

impl BookEventDispatcher for TracingEventDispatcher {
    fn dispatch(&self, event: BookEvent) {
        tracing::info!(?event, "book event");
    }
}
