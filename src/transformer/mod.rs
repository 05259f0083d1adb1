//! Fine-tuned transformer classifier, consumed as an opaque ONNX artifact.
//!
//! The fine-tuning pipeline lives outside this crate; here the model is a
//! black box behind `classify(text) -> (class, confidence)`.

mod classifier;
mod error;

pub use classifier::TransformerClassifier;
pub use error::TransformerError;
