//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::ChangeSeatsCommand;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub change_seats: Arc<dyn ChangeSeatsCommand>,
}

impl HttpState {
    /// Construct state from the seat change port.
    pub fn new(change_seats: Arc<dyn ChangeSeatsCommand>) -> Self {
        Self { change_seats }
    }
}
