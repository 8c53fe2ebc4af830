pub mod catalog;
pub mod favorite;
pub mod user;

pub use catalog::*;
pub use favorite::*;
pub use user::*;

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse {
            message: message.into(),
        }
    }
}

/// Treats a blank submitted text field as absent. Non-blank values are kept
/// exactly as submitted.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
