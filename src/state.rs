//! Shared application state for all routes.

use crate::service::StudentRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn StudentRepository>,
    /// Returned by `GET /`.
    pub greeting: Arc<str>,
}

impl AppState {
    pub fn new(repo: Arc<dyn StudentRepository>, greeting: impl Into<Arc<str>>) -> Self {
        AppState {
            repo,
            greeting: greeting.into(),
        }
    }
}
