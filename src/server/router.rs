use axum::{extract::DefaultBodyLimit, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{client, formation, pdf},
    model::pdf::MAX_PDF_SIZE,
    state::AppState,
};

/// Allowance on top of the file ceiling for multipart boundaries and text fields.
const MULTIPART_OVERHEAD: usize = 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(title = "Formation back-office API"),
    tags(
        (name = "client", description = "Client management"),
        (name = "formation", description = "Formation catalog"),
        (name = "pdf", description = "PDF document storage"),
    )
)]
struct ApiDoc;

/// Builds the API router with its OpenAPI document and Swagger UI.
///
/// The OpenAPI document is served at `/api-docs/openapi.json` and the UI at
/// `/swagger-ui`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(client::create_client, client::get_clients))
        .routes(routes!(
            client::get_client,
            client::update_client,
            client::delete_client
        ))
        .routes(routes!(
            formation::create_formation,
            formation::get_formations
        ))
        .routes(routes!(
            formation::get_formation,
            formation::update_formation,
            formation::delete_formation
        ))
        .routes(routes!(pdf::upload_pdf))
        .routes(routes!(pdf::get_pdfs))
        .routes(routes!(pdf::get_pdf, pdf::delete_pdf))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(DefaultBodyLimit::max(MAX_PDF_SIZE + MULTIPART_OVERHEAD))
}
