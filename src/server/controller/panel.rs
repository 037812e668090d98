use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        panel::{EmoteConflictDto, EmoteConflictQuery},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::panel::PanelService,
        state::AppState,
    },
};

/// Tag for grouping panel endpoints in OpenAPI documentation
pub static PANEL_TAG: &str = "panel";

/// Check whether a reaction emote would clash inside a multi-panel.
///
/// Used by the panel editor before changing a panel's emote. A clash exists when another
/// panel of a multi-panel containing this panel already uses the emote.
///
/// # Access Control
/// - Logged-in user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `guild_id` - Discord guild ID the panel must belong to
/// - `panel_id` - Panel being edited
/// - `query` - Candidate emote
///
/// # Returns
/// - `200 OK` - Whether the emote conflicts
/// - `400 Bad Request` - Panel belongs to another guild
/// - `401 Unauthorized` - User not logged in
/// - `404 Not Found` - Panel does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/{guild_id}/panels/{panel_id}/emote-conflict",
    tag = PANEL_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("panel_id" = i32, Path, description = "Panel ID"),
        EmoteConflictQuery
    ),
    responses(
        (status = 200, description = "Conflict check result", body = EmoteConflictDto),
        (status = 400, description = "Panel belongs to another guild", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Panel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_emote_conflict(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, panel_id)): Path<(u64, i32)>,
    Query(query): Query<EmoteConflictQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session).require_user().await?;

    let service = PanelService::new(&state.db, state.export_concurrency);

    let conflict = service
        .has_emote_conflict(guild_id, panel_id, &query.emote)
        .await?;

    Ok((StatusCode::OK, Json(EmoteConflictDto { conflict })))
}
