use serde::Deserialize;

/// Structured error body returned by the backend on 4xx/5xx responses.
///
/// `message` is a human-readable description; `errors` carries per-field
/// validation details when the backend rejected individual inputs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
    pub errors: Option<serde_json::Value>,
}

impl ApiErrorBody {
    pub fn has_field_errors(&self) -> bool {
        match &self.errors {
            Some(serde_json::Value::Null) => false,
            Some(_) => true,
            None => false,
        }
    }
}
