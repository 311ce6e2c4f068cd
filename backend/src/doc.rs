//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the webinar and health endpoints together with the
//! wire schemas they use. The document backs Swagger UI in debug builds and
//! is exported by `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::ErrorBody;
use crate::inbound::http::webinars::{ChangeSeatsBody, SeatsUpdatedResponse};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Webinars backend API",
        description = "HTTP interface for managing webinar seats and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::webinars::change_seats,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ChangeSeatsBody, SeatsUpdatedResponse, ErrorBody)),
    tags(
        (name = "webinars", description = "Webinar seat management"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated OpenAPI document.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    fn seats_path_is_documented() {
        let doc = ApiDoc::openapi();
        let item = doc
            .paths
            .paths
            .get("/webinars/{id}/seats")
            .expect("seats path registered");

        assert!(item.post.is_some());
    }

    #[rstest]
    #[case("ChangeSeatsBody", "seats")]
    #[case("ChangeSeatsBody", "userId")]
    #[case("SeatsUpdatedResponse", "message")]
    #[case("ErrorBody", "error")]
    fn schemas_expose_wire_field_names(#[case] schema: &str, #[case] field: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let found = schemas.get(schema).expect("schema registered");

        assert_object_schema_has_field(found, field);
    }
}
