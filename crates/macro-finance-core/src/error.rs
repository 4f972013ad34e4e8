use thiserror::Error;

#[derive(Debug, Error)]
pub enum MacroFinanceError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("PDF not found at path: {path}")]
    MaterialNotFound { path: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for MacroFinanceError {
    fn from(e: serde_json::Error) -> Self {
        MacroFinanceError::SerializationError(e.to_string())
    }
}

impl From<std::io::Error> for MacroFinanceError {
    fn from(e: std::io::Error) -> Self {
        MacroFinanceError::Io(e.to_string())
    }
}
