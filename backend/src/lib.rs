//! Webinar seat management backend.
//!
//! Hexagonal layout: [`domain`] holds the webinar aggregate, the seat change
//! use case, and its ports; [`inbound`] and [`outbound`] hold the Actix and
//! storage adapters.

pub mod demo_data;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
