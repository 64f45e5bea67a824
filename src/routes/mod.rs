//! Router assembly.

mod common;
mod student;

pub use common::common_routes_with_ready;
pub use student::student_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full service router: student CRUD, `/`, and the common probes, with access
/// logging and a request body cap.
pub fn app_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(student_routes(state.clone()))
        .merge(common_routes_with_ready(state))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
}
