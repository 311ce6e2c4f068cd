//! Domain primitives, aggregates, and services.
//!
//! Purpose: hold the webinar seat rules independently of HTTP and storage.
//! Inbound adapters call driving ports in [`ports`]; outbound adapters
//! implement the driven ports declared there.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - TraceId: request correlation identifier.
//! - User / UserId: the acting user.
//! - Webinar / WebinarId: the aggregate whose seats change.
//! - ChangeSeatsService: implementation of the seat change use case.

mod change_seats_service;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod webinar;

pub use self::change_seats_service::ChangeSeatsService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{IdentifierValidationError, User, UserId};
pub use self::webinar::{
    INITIAL_REVISION, MAX_WEBINAR_SEATS, MIN_WEBINAR_SEATS, Webinar, WebinarDraft, WebinarId,
    WebinarSeatsError, WebinarValidationError,
};
