//! Request validation applied before anything reaches the store.

use crate::error::AppError;
use crate::model::{CreateTodo, UpdateTodo};

pub struct RequestValidator;

impl RequestValidator {
    /// Title is required and must not be empty.
    pub fn validate_create(body: &CreateTodo) -> Result<(), AppError> {
        validate_title(&body.title)
    }

    /// Only supplied fields are checked; an absent title is not an error.
    pub fn validate_update(body: &UpdateTodo) -> Result<(), AppError> {
        if let Some(title) = &body.title {
            validate_title(title)?;
        }
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<(), AppError> {
    if title.is_empty() {
        return Err(AppError::Validation("title must not be empty".into()));
    }
    Ok(())
}
