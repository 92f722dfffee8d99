use crate::extract::PathParam;
use axum::Json;
use serde::{Deserialize, Serialize};

/// Response from /reverse/{str}
#[derive(Debug, Serialize, Deserialize)]
pub struct ReverseResponse {
    pub original: String,
    pub reversed: String,
}

/// Reverse a path segment (GET /reverse/{str})
pub async fn reverse(PathParam(original): PathParam<String>) -> Json<ReverseResponse> {
    let reversed = notes_api::reverse_string(&original);
    Json(ReverseResponse { original, reversed })
}
