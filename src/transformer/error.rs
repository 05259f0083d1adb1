use ort::Error as OrtError;

/// Errors from loading or running the fine-tuned transformer classifier.
#[derive(Debug, thiserror::Error)]
pub enum TransformerError {
    #[error("tokenizer error: {0}")]
    Tokenizer(String),
    #[error("model error: {0}")]
    Model(String),
    #[error("build error: {0}")]
    Build(String),
    #[error("validation error: {0}")]
    Validation(String),
}

impl From<OrtError> for TransformerError {
    fn from(err: OrtError) -> Self {
        TransformerError::Build(err.to_string())
    }
}
