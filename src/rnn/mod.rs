//! The hand-rolled recurrent classifier: model, training loop, persistence.

pub mod artifact;
pub mod model;
pub mod training;

pub use artifact::ArtifactError;
pub use model::{RhetoricRnn, RnnConfig};
pub use training::{train, TrainOutcome, TrainingConfig};
