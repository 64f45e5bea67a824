//! Student service: REST CRUD over a single `students` table.

pub mod config;
pub mod enrollment;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::ServiceConfig;
pub use enrollment::{EnrollmentCodeGenerator, RandomEnrollmentCodes};
pub use error::{AppError, ConfigError};
pub use model::{NewStudent, Student, StudentPatch};
pub use response::Envelope;
pub use routes::{app_router, common_routes_with_ready, student_routes};
pub use service::{PgStudentRepository, StudentRepository};
pub use state::AppState;
pub use store::{connect_pool, ensure_database_exists, ensure_students_table};
