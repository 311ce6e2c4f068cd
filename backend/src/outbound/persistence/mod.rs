//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories here implement domain ports on top of PostgreSQL via
//! `diesel-async` and `bb8` connection pooling.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types. Rows are revalidated through the domain constructors.
//! - **Internal models**: `models.rs` and `schema.rs` never leave this module.
//! - **Strongly typed errors**: database failures map to the port's error
//!   enum, never to raw Diesel errors.
//!
//! # Example
//!
//! ```no_run
//! use webinars_backend::outbound::persistence::{
//!     DbPool, DieselWebinarRepository, PoolConfig, run_pending_migrations,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let url = "postgres://localhost/webinars";
//! run_pending_migrations(url).await?;
//! let pool = DbPool::new(PoolConfig::new(url)).await?;
//! let repo = DieselWebinarRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_webinar_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_webinar_repository::DieselWebinarRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
