//! Process-local adapters backed by in-memory collections.
//!
//! Used when no database is configured and by behavioural tests that need
//! real repository semantics without PostgreSQL.

mod in_memory_webinar_repository;

pub use in_memory_webinar_repository::InMemoryWebinarRepository;
