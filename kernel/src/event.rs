mod book;

pub use self::book::*;

/// Sink for domain events, notified after the corresponding change has been
/// persisted. Dispatch is fire-and-forget; failures of downstream consumers
/// must not affect the operation that raised the event.
pub trait BookEventDispatcher: 'static + Sync + Send {
    fn dispatch(&self, event: BookEvent);
}

pub trait DependOnBookEventDispatcher: 'static + Sync + Send {
    type BookEventDispatcher: BookEventDispatcher;
    fn book_event_dispatcher(&self) -> &Self::BookEventDispatcher;
}
