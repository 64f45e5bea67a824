//! Student routes and the service root.

use crate::handlers::{create, delete as delete_handler, index, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn student_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/students", get(list).post(create))
        .route(
            "/students/:id",
            get(read).patch(update).delete(delete_handler),
        )
        .with_state(state)
}
