//! Process-wide ONNX Runtime setup shared by every transformer session.

use std::sync::Once;

use ort::session::builder::{GraphOptimizationLevel, SessionBuilder};
use ort::session::Session;
use ort::Result as OrtResult;

static ORT_ENV: Once = Once::new();

/// Session knobs for the ONNX transformer. Zero thread counts defer to the
/// runtime's own heuristics.
#[derive(Debug)]
pub struct RuntimeConfig {
    pub inter_threads: usize,
    pub intra_threads: usize,
    pub optimization_level: GraphOptimizationLevel,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            inter_threads: 0,
            intra_threads: 0,
            optimization_level: GraphOptimizationLevel::Level3,
        }
    }
}

/// Builds a session configured from `config`, initializing the process-wide
/// ort environment on first use. Sessions themselves are explicitly
/// constructed and owned by the caller.
pub fn create_session_builder(config: &RuntimeConfig) -> OrtResult<SessionBuilder> {
    ORT_ENV.call_once(|| {
        ort::init()
            .with_name("rhetoric")
            .commit()
            .expect("ONNX Runtime environment initialization failed");
    });

    let mut builder =
        Session::builder()?.with_optimization_level(owned_level(&config.optimization_level))?;
    if config.inter_threads > 0 {
        builder = builder.with_inter_threads(config.inter_threads)?;
    }
    if config.intra_threads > 0 {
        builder = builder.with_intra_threads(config.intra_threads)?;
    }
    Ok(builder)
}

// GraphOptimizationLevel does not implement Clone, so the borrowed config
// level is re-stated as an owned value.
fn owned_level(level: &GraphOptimizationLevel) -> GraphOptimizationLevel {
    match level {
        GraphOptimizationLevel::Disable => GraphOptimizationLevel::Disable,
        GraphOptimizationLevel::Level1 => GraphOptimizationLevel::Level1,
        GraphOptimizationLevel::Level2 => GraphOptimizationLevel::Level2,
        GraphOptimizationLevel::Level3 => GraphOptimizationLevel::Level3,
    }
}
