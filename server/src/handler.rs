use std::ops::Deref;
use std::sync::Arc;

use vodca::References;

use driver::database::PostgresDatabase;
use driver::event::TracingEventDispatcher;
use kernel::interface::clock::{DependOnClock, SystemClock};
use kernel::interface::database::DependOnBookDataStore;
use kernel::interface::event::DependOnBookEventDispatcher;
use kernel::KernelError;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init().await?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    pgpool: PostgresDatabase,
    system_clock: SystemClock,
    event_dispatcher: TracingEventDispatcher,
}

impl Handler {
    pub async fn init() -> error_stack::Result<Self, KernelError> {
        let pgpool = PostgresDatabase::new().await?;

        Ok(Self {
            pgpool,
            system_clock: SystemClock,
            event_dispatcher: TracingEventDispatcher,
        })
    }
}

impl DependOnBookDataStore for AppModule {
    type BookDataStore = PostgresDatabase;
    fn book_data_store(&self) -> &Self::BookDataStore {
        self.pgpool()
    }
}

impl DependOnClock for AppModule {
    type Clock = SystemClock;
    fn clock(&self) -> &Self::Clock {
        self.system_clock()
    }
}

impl DependOnBookEventDispatcher for AppModule {
    type BookEventDispatcher = TracingEventDispatcher;
    fn book_event_dispatcher(&self) -> &Self::BookEventDispatcher {
        self.event_dispatcher()
    }
}
