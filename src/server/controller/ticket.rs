use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, ticket::TicketViewDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::ticket::TicketService,
        state::AppState,
    },
};

/// Tag for grouping ticket endpoints in OpenAPI documentation
pub static TICKET_TAG: &str = "ticket";

/// Get an open ticket with its recent messages.
///
/// Returns the ticket with up to 100 of the latest messages of its channel, oldest first.
/// User mentions in message text are shown as `@username`.
///
/// # Access Control
/// - Logged-in user
///
/// # Arguments
/// - `state` - Application state containing the database and Discord clients
/// - `session` - User's session for authentication
/// - `guild_id` - Discord guild ID the ticket belongs to
/// - `ticket_id` - Ticket ID within the guild
///
/// # Returns
/// - `200 OK` - The ticket and its messages
/// - `400 Bad Request` - Ticket ID is not a number
/// - `401 Unauthorized` - User not logged in
/// - `403 Forbidden` - The guild has no ticket with this ID
/// - `404 Not Found` - Ticket is closed or has no channel
/// - `500 Internal Server Error` - Database or Discord error
#[utoipa::path(
    get,
    path = "/api/{guild_id}/tickets/{ticket_id}",
    tag = TICKET_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("ticket_id" = i32, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Open ticket with messages", body = TicketViewDto),
        (status = 400, description = "Invalid ticket ID", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "Ticket belongs to another guild", body = ErrorDto),
        (status = 404, description = "Ticket closed or without channel", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ticket(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, ticket_id)): Path<(u64, String)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session).require_user().await?;

    let ticket_id = parse_ticket_id(&ticket_id)?;

    let service = TicketService::new(&state.db, state.guilds.as_ref());

    let view = service.get_open_ticket(guild_id, ticket_id).await?;

    Ok((StatusCode::OK, Json(view.into_dto())))
}

fn parse_ticket_id(value: &str) -> Result<i32, AppError> {
    value
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest("Invalid ticket ID".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_ticket_id_is_bad_request() {
        assert_eq!(parse_ticket_id("42").unwrap(), 42);
        assert!(matches!(
            parse_ticket_id("abc"),
            Err(AppError::BadRequest(msg)) if msg == "Invalid ticket ID"
        ));
    }
}
