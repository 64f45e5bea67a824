//! Request extractors that report failures in the response envelope.

pub mod json;
pub use json::JsonBody;
