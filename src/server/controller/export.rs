use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, export::ExportDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::export::ExportService,
        state::AppState,
    },
};

/// Tag for grouping export endpoints in OpenAPI documentation
pub static EXPORT_TAG: &str = "export";

/// Export all data of a guild.
///
/// Assembles settings, panels, multi-panels, tickets with transcripts, tags, blacklist,
/// forms and staff teams into a single document. Tickets without an archived transcript
/// are left out.
///
/// # Access Control
/// - Logged-in user who owns the guild
///
/// # Arguments
/// - `state` - Application state containing the database, archive and Discord clients
/// - `session` - User's session for authentication
/// - `guild_id` - Discord guild ID to export
///
/// # Returns
/// - `200 OK` - The complete export document
/// - `401 Unauthorized` - User not logged in
/// - `403 Forbidden` - User is not the guild owner
/// - `500 Internal Server Error` - Any lookup failed
#[utoipa::path(
    get,
    path = "/api/{guild_id}/export",
    tag = EXPORT_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Complete guild export", body = ExportDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "User is not the guild owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_guild(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = AuthGuard::new(&session).require_user().await?;

    let service = ExportService::new(
        state.db.clone(),
        state.archive.clone(),
        state.guilds.clone(),
        state.export_concurrency,
    );

    let export = service.export(guild_id, user_id).await?;

    Ok((StatusCode::OK, Json(export.into_dto())))
}
