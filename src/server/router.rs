use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{export, panel, ticket},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Ticket Dashboard API"),
    tags(
        (name = "export", description = "Guild data export"),
        (name = "panel", description = "Panel editing helpers"),
        (name = "ticket", description = "Open ticket view")
    )
)]
pub struct ApiDoc;

/// Builds the API router.
///
/// The OpenAPI document is served at `/api/openapi.json` with a Swagger UI at
/// `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = api_router().split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .layer(TraceLayer::new_for_http())
}

fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(export::export_guild))
        .routes(routes!(panel::get_emote_conflict))
        .routes(routes!(ticket::get_ticket))
}
