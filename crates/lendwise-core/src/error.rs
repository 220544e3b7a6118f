use thiserror::Error;

#[derive(Debug, Error)]
pub enum LendWiseError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for LendWiseError {
    fn from(e: serde_json::Error) -> Self {
        LendWiseError::SerializationError(e.to_string())
    }
}
