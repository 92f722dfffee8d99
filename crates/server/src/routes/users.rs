use crate::error::{ServerError, ServerResult};
use crate::extract::PathParam;
use crate::routes::require_id;
use crate::state::ServerState;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;
use store::User;

/// Look up a user (GET /about/{id})
///
/// - `400 {"error":"Invalid id format"}` when the segment is not an integer
/// - `404 {"error":"User not found"}` when no user has that id
/// - `200` with the user otherwise
pub async fn get_user(
    State(state): State<Arc<ServerState>>,
    PathParam(raw_id): PathParam<String>,
) -> ServerResult<Json<User>> {
    let user_id = require_id(&raw_id)?;

    let user = state
        .users
        .find_user_by_id(user_id)?
        .ok_or_else(|| ServerError::not_found("User"))?;

    Ok(Json(user))
}
