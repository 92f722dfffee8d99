use crate::error::{ServerError, ServerResult};
use crate::extract::{JsonBody, QueryParams};
use crate::state::ServerState;
use axum::extract::State;
use axum::Json;
use classify::{HourCandidate, PartOfDay};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Query parameters for GET /part-of-day
#[derive(Debug, Deserialize)]
pub struct PartOfDayQuery {
    /// Raw hour; parsed as a number before classification
    #[serde(default)]
    pub hour: Option<String>,
}

/// Body for POST /part-of-day; `hour` is classified with its JSON type intact
#[derive(Debug, Deserialize)]
pub struct PartOfDayRequest {
    #[serde(default)]
    pub hour: Value,
}

/// Classification response
#[derive(Debug, Serialize, Deserialize)]
pub struct PartOfDayResponse {
    pub hour: Value,
    pub part_of_day: PartOfDay,
}

/// Classify an hour given as a query parameter (GET /part-of-day?hour=7)
///
/// The query value is parsed into a number first, so `?hour=7` is `Daylight`.
/// Non-numeric values are `Undetermined`; a missing `hour` is a 400.
pub async fn part_of_day_query(
    State(state): State<Arc<ServerState>>,
    QueryParams(query): QueryParams<PartOfDayQuery>,
) -> ServerResult<Json<PartOfDayResponse>> {
    let Some(raw) = query.hour else {
        return Err(ServerError::BadRequest(
            "Missing hour parameter".to_string(),
        ));
    };

    let part_of_day = state.hours.classify(HourCandidate::from_query(&raw));
    Ok(Json(PartOfDayResponse {
        hour: Value::String(raw),
        part_of_day,
    }))
}

/// Classify an hour given in a JSON body (POST /part-of-day)
///
/// Type-strict: `{"hour": 7}` is `Daylight`, `{"hour": "7"}` is `Undetermined`.
pub async fn part_of_day_body(
    State(state): State<Arc<ServerState>>,
    JsonBody(request): JsonBody<PartOfDayRequest>,
) -> Json<PartOfDayResponse> {
    let part_of_day = state.hours.classify(&request.hour);
    Json(PartOfDayResponse {
        hour: request.hour,
        part_of_day,
    })
}
