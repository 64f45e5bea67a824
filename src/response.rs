//! Standard response envelope helpers.
//!
//! Every body is `{message, status, rows_affected?, data?}`. `status` is the outcome
//! code (`1` success, `0` failure); row counts from mutations travel in `rows_affected`.

use axum::{http::StatusCode, Json};
use serde::Serialize;

pub const STATUS_OK: i32 = 1;
pub const STATUS_FAILED: i32 = 0;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub message: String,
    pub status: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows_affected: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn failure(message: impl Into<String>) -> Self {
        Envelope {
            message: message.into(),
            status: STATUS_FAILED,
            rows_affected: None,
            data: None,
        }
    }
}

pub fn success_data<T: Serialize>(message: &str, data: T) -> (StatusCode, Json<Envelope<T>>) {
    (
        StatusCode::OK,
        Json(Envelope {
            message: message.to_string(),
            status: STATUS_OK,
            rows_affected: None,
            data: Some(data),
        }),
    )
}

pub fn success_rows(
    status: StatusCode,
    message: &str,
    rows_affected: u64,
) -> (StatusCode, Json<Envelope<()>>) {
    (
        status,
        Json(Envelope {
            message: message.to_string(),
            status: STATUS_OK,
            rows_affected: Some(rows_affected),
            data: None,
        }),
    )
}
