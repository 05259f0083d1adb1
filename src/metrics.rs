//! Aggregate evaluation metrics: accuracy and the confusion matrix.

use std::fmt;

use crate::dataset::NUM_CLASSES;

/// Fraction of positions where `predicted` exactly matches `expected`.
/// Empty input yields 0.0.
pub fn accuracy(predicted: &[usize], expected: &[usize]) -> f64 {
    if expected.is_empty() {
        return 0.0;
    }
    let matches = predicted
        .iter()
        .zip(expected.iter())
        .filter(|(p, e)| p == e)
        .count();
    matches as f64 / expected.len() as f64
}

/// Class-by-class prediction counts. Rows are expected classes, columns are
/// predicted classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfusionMatrix {
    counts: [[usize; NUM_CLASSES]; NUM_CLASSES],
}

impl ConfusionMatrix {
    /// Tallies `(expected, predicted)` pairs; out-of-range classes are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut matrix = Self::default();
        for (expected, predicted) in pairs {
            if expected < NUM_CLASSES && predicted < NUM_CLASSES {
                matrix.counts[expected][predicted] += 1;
            }
        }
        matrix
    }

    pub fn count(&self, expected: usize, predicted: usize) -> usize {
        self.counts[expected][predicted]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.counts {
            for (i, count) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>5}", count)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
