use serde::Serialize;
use utoipa::ToSchema;

/// The body shape every error and status response uses: `{"message": ...}`.
/// Form pages surface this field inline, so it is present on all failures.
#[derive(Debug, Serialize, ToSchema)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
