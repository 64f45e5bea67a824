//! In-memory repository and deterministic code generator for router tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use student_service::{
    app_router, AppError, AppState, EnrollmentCodeGenerator, Student, StudentPatch,
    StudentRepository,
};
use tower::ServiceExt;

/// Hands out `2401010000`, `2401010001`, ...
#[derive(Default)]
pub struct SequentialCodes {
    next: AtomicU32,
}

impl EnrollmentCodeGenerator for SequentialCodes {
    fn generate(&self) -> String {
        format!("240101{:04}", self.next.fetch_add(1, Ordering::SeqCst) % 10_000)
    }
}

/// Always the same code, to force collisions.
pub struct FixedCode(pub &'static str);

impl EnrollmentCodeGenerator for FixedCode {
    fn generate(&self) -> String {
        self.0.to_string()
    }
}

#[derive(Default)]
struct Table {
    rows: Vec<Student>,
    last_id: i64,
}

pub struct InMemoryRepository {
    table: Mutex<Table>,
    codes: Arc<dyn EnrollmentCodeGenerator>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        InMemoryRepository {
            table: Mutex::new(Table::default()),
            codes: Arc::new(SequentialCodes::default()),
        }
    }

    pub fn rows(&self) -> Vec<Student> {
        self.table.lock().unwrap().rows.clone()
    }
}

#[async_trait]
impl StudentRepository for InMemoryRepository {
    async fn insert(&self, name: &str, address: &str) -> Result<u64, AppError> {
        let nisn = self.codes.generate();
        let mut t = self.table.lock().unwrap();
        t.last_id += 1;
        let id = t.last_id;
        t.rows.push(Student {
            id,
            nisn,
            name: name.to_string(),
            address: address.to_string(),
        });
        Ok(1)
    }

    async fn get_all(&self) -> Result<Vec<Student>, AppError> {
        Ok(self.rows())
    }

    async fn get_by_id(&self, id: i64) -> Result<Student, AppError> {
        self.rows()
            .into_iter()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound("student not found".into()))
    }

    async fn update(&self, id: i64, patch: &StudentPatch) -> Result<u64, AppError> {
        if patch.is_empty() {
            return Err(AppError::Validation("no fields to update".into()));
        }
        let mut t = self.table.lock().unwrap();
        let Some(row) = t.rows.iter_mut().find(|s| s.id == id) else {
            return Ok(0);
        };
        if let Some(name) = patch.name() {
            row.name = name.to_string();
        }
        if let Some(address) = patch.address() {
            row.address = address.to_string();
        }
        Ok(1)
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let mut t = self.table.lock().unwrap();
        let before = t.rows.len();
        t.rows.retain(|s| s.id != id);
        Ok((before - t.rows.len()) as u64)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Every call fails the way a dropped database connection would.
pub struct UnavailableRepository;

#[async_trait]
impl StudentRepository for UnavailableRepository {
    async fn insert(&self, _: &str, _: &str) -> Result<u64, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn get_all(&self) -> Result<Vec<Student>, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn get_by_id(&self, _: i64) -> Result<Student, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn update(&self, _: i64, _: &StudentPatch) -> Result<u64, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn delete(&self, _: i64) -> Result<u64, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }
}

pub fn router_with(repo: Arc<dyn StudentRepository>) -> Router {
    app_router(AppState::new(repo, "hello"), 64 * 1024)
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(b) => {
            builder = builder.header("content-type", "application/json");
            Body::from(b.to_string())
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    (status, json_body(response).await)
}

async fn json_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
}
