//! Blog post model and the new-post form.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError, ValidationErrors};

/// Author id recorded on every post until accounts exist.
pub const PLACEHOLDER_AUTHOR_ID: i32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i32,
    pub date_posted: DateTime<Utc>,
}

/// Submitted `POST /post/new` form. Missing fields deserialize as empty
/// strings so they surface as field errors instead of a rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewPostForm {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub content: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required")
            .with_message(Cow::Borrowed("This field is required.")));
    }
    Ok(())
}

/// Per-field error messages for re-rendering the form.
#[derive(Debug, Clone, Default)]
pub struct PostFormErrors {
    pub title: Vec<String>,
    pub content: Vec<String>,
}

impl From<&ValidationErrors> for PostFormErrors {
    fn from(errors: &ValidationErrors) -> Self {
        Self {
            title: field_messages(errors, "title"),
            content: field_messages(errors, "content"),
        }
    }
}

fn field_messages(errors: &ValidationErrors, field: &str) -> Vec<String> {
    errors
        .field_errors()
        .get(field)
        .map(|errs| {
            errs.iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect()
        })
        .unwrap_or_default()
}
