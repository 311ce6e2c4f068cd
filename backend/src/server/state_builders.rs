//! Builders for HTTP state ports.

use std::sync::Arc;

use actix_web::web;

use webinars_backend::domain::ChangeSeatsService;
use webinars_backend::domain::ports::ChangeSeatsCommand;
use webinars_backend::inbound::http::state::HttpState;
use webinars_backend::outbound::persistence::DieselWebinarRepository;

use super::config::WebinarStore;

/// Wire the seat change use case to the configured store.
fn build_change_seats(store: &WebinarStore) -> Arc<dyn ChangeSeatsCommand> {
    match store {
        WebinarStore::Postgres(pool) => Arc::new(ChangeSeatsService::new(Arc::new(
            DieselWebinarRepository::new(pool.clone()),
        ))),
        WebinarStore::InMemory(webinars) => {
            Arc::new(ChangeSeatsService::new(Arc::clone(webinars)))
        }
    }
}

/// Build the shared HTTP state for the configured store.
pub(super) fn build_http_state(store: &WebinarStore) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(build_change_seats(store)))
}
