use serde::Serialize;

/// Success envelope shared by every book endpoint.
///
/// `object` is omitted from the JSON when there is nothing to return.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn with_object(code: u16, message: impl Into<String>, object: T) -> Self {
        Self {
            code,
            message: message.into(),
            object: Some(object),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            object: None,
        }
    }
}
