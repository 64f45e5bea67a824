//! HTTP handlers for the student resource and the service root.

pub mod index;
pub mod student;
pub use index::*;
pub use student::*;
