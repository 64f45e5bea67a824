//! Request validation for student bodies.

use crate::error::AppError;
use crate::model::{NewStudent, StudentPatch};

pub struct RequestValidator;

impl RequestValidator {
    /// Both fields are required and must be non-empty.
    pub fn validate_new(body: &NewStudent) -> Result<(), AppError> {
        for (field, value) in [("name", &body.name), ("address", &body.address)] {
            if value.is_empty() {
                return Err(AppError::Validation(format!("{} is required", field)));
            }
        }
        Ok(())
    }

    /// At least one field must carry a non-empty value.
    pub fn validate_patch(body: &StudentPatch) -> Result<(), AppError> {
        if body.is_empty() {
            return Err(AppError::Validation("request body is empty".into()));
        }
        Ok(())
    }
}
