//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod webinars;

pub use error::ApiResult;

/// Register the webinar endpoints together with extractor configuration
/// that reports malformed input as `400 {"error": ...}`.
pub fn configure_webinar_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .service(webinars::change_seats);
}
