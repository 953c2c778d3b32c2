//! The crate-wide error type.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Everything that can go wrong while configuring or running an optimizer.
///
/// Configuration errors are raised once, at construction or at the start of
/// [`optimize`], and are never retried. I/O errors can only come from the
/// report writers, which run after the generational loop has finished, so
/// they never corrupt an in-flight population.
///
/// [`optimize`]: crate::optimizer::Optimizer::optimize
#[derive(Debug, Error)]
pub enum Error {
  /// A problem, operator or driver was configured inconsistently.
  #[error("invalid configuration: {0}")]
  Config(String),

  /// Parents passed to a crossover had different lengths.
  #[error("crossover parents have mismatched lengths: {left} vs {right}")]
  ParentLengthMismatch {
    /// Length of the first parent.
    left: usize,
    /// Length of the second parent.
    right: usize,
  },

  /// A tournament selector was built with fewer than two participants.
  #[error("tournament size must be at least 2, got {0}")]
  TournamentSize(usize),

  /// Writing a report file failed.
  #[error("failed to write report to {}", path.display())]
  Report {
    /// Path of the file that could not be written.
    path: PathBuf,
    /// The underlying I/O error.
    #[source]
    source: io::Error,
  },
}
