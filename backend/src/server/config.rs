//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use webinars_backend::outbound::memory::InMemoryWebinarRepository;
use webinars_backend::outbound::persistence::DbPool;

/// Backing store for webinars.
#[derive(Clone)]
pub enum WebinarStore {
    Postgres(DbPool),
    InMemory(Arc<InMemoryWebinarRepository>),
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store: WebinarStore,
}

impl ServerConfig {
    /// Construct a configuration bound to `bind_addr` with an empty
    /// in-memory store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            store: WebinarStore::InMemory(Arc::new(InMemoryWebinarRepository::default())),
        }
    }

    /// Persist webinars in PostgreSQL through the given pool.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.store = WebinarStore::Postgres(pool);
        self
    }

    /// Keep webinars in the given process-local store.
    #[must_use]
    pub fn with_in_memory_webinars(mut self, webinars: Arc<InMemoryWebinarRepository>) -> Self {
        self.store = WebinarStore::InMemory(webinars);
        self
    }
}
