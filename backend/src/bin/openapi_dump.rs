//! Print the OpenAPI document as JSON.

use std::process::ExitCode;

use utoipa::OpenApi;
use webinars_backend::doc::ApiDoc;

fn main() -> ExitCode {
    match ApiDoc::openapi().to_pretty_json() {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to serialise OpenAPI document: {err}");
            ExitCode::FAILURE
        }
    }
}
