//! Student record and request bodies.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    /// Enrollment code, assigned once at creation.
    pub nisn: String,
    pub name: String,
    pub address: String,
}

/// Body of `POST /students`. Both fields are required and must be non-empty.
#[derive(Deserialize, Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub address: String,
}

/// Body of `PATCH /students/:id`. Missing and empty fields are left unchanged.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl StudentPatch {
    pub fn name(&self) -> Option<&str> {
        non_empty(self.name.as_deref())
    }

    pub fn address(&self) -> Option<&str> {
        non_empty(self.address.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.name().is_none() && self.address().is_none()
    }
}

fn non_empty(v: Option<&str>) -> Option<&str> {
    v.filter(|s| !s.is_empty())
}
