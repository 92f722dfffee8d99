use crate::error::{ServerError, ServerResult};
use crate::extract::{JsonBody, PathParam};
use crate::routes::require_id;
use crate::state::ServerState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use std::sync::Arc;
use store::{Note, NoteInput};

/// List all notes (GET /notes)
pub async fn list_notes(State(state): State<Arc<ServerState>>) -> ServerResult<Json<Vec<Note>>> {
    Ok(Json(state.notes.get_all_notes()?))
}

/// Create a note (POST /notes)
///
/// Returns `201` with the stored note, or `400` when the title is missing,
/// blank or too long.
pub async fn create_note(
    State(state): State<Arc<ServerState>>,
    JsonBody(input): JsonBody<NoteInput>,
) -> ServerResult<impl IntoResponse> {
    let note = state.notes.create_note(input)?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// Get one note (GET /notes/{id})
pub async fn get_note(
    State(state): State<Arc<ServerState>>,
    PathParam(raw_id): PathParam<String>,
) -> ServerResult<Json<Note>> {
    let note_id = require_id(&raw_id)?;
    state
        .notes
        .get_note(note_id)?
        .map(Json)
        .ok_or_else(|| ServerError::not_found("Note"))
}

/// Replace a note's title and content (PUT /notes/{id})
///
/// An unknown id is a `404` even when the body would fail validation.
pub async fn update_note(
    State(state): State<Arc<ServerState>>,
    PathParam(raw_id): PathParam<String>,
    JsonBody(input): JsonBody<NoteInput>,
) -> ServerResult<Json<Note>> {
    let note_id = require_id(&raw_id)?;
    state
        .notes
        .update_note(note_id, input)?
        .map(Json)
        .ok_or_else(|| ServerError::not_found("Note"))
}

/// Delete a note (DELETE /notes/{id}), `204` on success
pub async fn delete_note(
    State(state): State<Arc<ServerState>>,
    PathParam(raw_id): PathParam<String>,
) -> ServerResult<StatusCode> {
    let note_id = require_id(&raw_id)?;
    if state.notes.delete_note(note_id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ServerError::not_found("Note"))
    }
}
