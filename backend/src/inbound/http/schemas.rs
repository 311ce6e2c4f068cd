//! OpenAPI schema wrappers for domain-owned payloads.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the wire shapes the HTTP adapter serialises, along with
//! their schema registration.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable message returned to clients.
    #[schema(example = "Webinar not found")]
    pub error: String,
    /// Machine-readable context, e.g. `{"code": "reduce_seats", ...}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[rstest]
    fn error_body_schema_lists_its_fields() {
        let schema_json = schema_to_json::<ErrorBody>();

        assert_eq!(ErrorBody::name(), "ErrorBody");
        assert!(schema_json.contains("error"));
        assert!(schema_json.contains("details"));
    }

    #[rstest]
    fn absent_details_are_omitted() {
        let body = ErrorBody {
            error: "Webinar not found".to_owned(),
            details: None,
        };

        assert_eq!(
            serde_json::to_value(body).expect("serialise"),
            json!({"error": "Webinar not found"})
        );
    }
}
