//! Student CRUD execution against PostgreSQL.

use crate::enrollment::EnrollmentCodeGenerator;
use crate::error::AppError;
use crate::model::{Student, StudentPatch};
use crate::sql::{self, bind_all, QueryBuf};
use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;
use std::sync::Arc;

/// Persistence capability handed to the handlers through `AppState`.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Insert with a freshly generated enrollment code. Returns rows affected.
    async fn insert(&self, name: &str, address: &str) -> Result<u64, AppError>;

    /// All rows, unordered.
    async fn get_all(&self) -> Result<Vec<Student>, AppError>;

    /// `AppError::NotFound` when no row has this id.
    async fn get_by_id(&self, id: i64) -> Result<Student, AppError>;

    /// Set the non-empty fields of `patch`. Zero rows affected is not an error.
    async fn update(&self, id: i64, patch: &StudentPatch) -> Result<u64, AppError>;

    async fn delete(&self, id: i64) -> Result<u64, AppError>;

    /// Round-trip to the backing store; used by readiness.
    async fn ping(&self) -> Result<(), AppError>;
}

pub struct PgStudentRepository {
    pool: PgPool,
    codes: Arc<dyn EnrollmentCodeGenerator>,
}

impl PgStudentRepository {
    pub fn new(pool: PgPool, codes: Arc<dyn EnrollmentCodeGenerator>) -> Self {
        PgStudentRepository { pool, codes }
    }

    async fn execute(&self, q: &QueryBuf) -> Result<u64, sqlx::Error> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "execute");
        let done = bind_all(sqlx::query(&q.sql), &q.params)
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected())
    }

    async fn query_many(&self, q: &QueryBuf) -> Result<Vec<Student>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let rows = bind_all(sqlx::query(&q.sql), &q.params)
            .fetch_all(&self.pool)
            .await?;
        let students = rows
            .iter()
            .map(Student::from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(students)
    }

    async fn query_one(&self, q: &QueryBuf) -> Result<Option<Student>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = bind_all(sqlx::query(&q.sql), &q.params)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(Student::from_row).transpose()?)
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn insert(&self, name: &str, address: &str) -> Result<u64, AppError> {
        let nisn = self.codes.generate();
        let q = sql::insert(&nisn, name, address);
        Ok(self.execute(&q).await?)
    }

    async fn get_all(&self) -> Result<Vec<Student>, AppError> {
        self.query_many(&sql::select_all()).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Student, AppError> {
        self.query_one(&sql::select_by_id(id))
            .await?
            .ok_or_else(|| AppError::NotFound("student not found".into()))
    }

    async fn update(&self, id: i64, patch: &StudentPatch) -> Result<u64, AppError> {
        let q = sql::update(id, patch)
            .ok_or_else(|| AppError::Validation("no fields to update".into()))?;
        Ok(self.execute(&q).await?)
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        Ok(self.execute(&sql::delete(id)).await?)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
