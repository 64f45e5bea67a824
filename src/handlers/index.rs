use crate::response::{Envelope, STATUS_OK};
use crate::state::AppState;
use axum::{extract::State, Json};

/// `GET /`: static greeting.
pub async fn index(State(state): State<AppState>) -> Json<Envelope<String>> {
    Json(Envelope {
        message: "success".into(),
        status: STATUS_OK,
        rows_affected: None,
        data: Some(state.greeting.to_string()),
    })
}
