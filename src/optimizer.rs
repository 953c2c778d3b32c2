//! Generational drivers of the NSGA family.

pub mod nsga;
pub mod nsga2;

use crate::{error::Error, solution::Solution};

/// Represents an abstract optimizer.
pub trait Optimizer {
  /// Runs the generational loop for the configured number of generations,
  /// then returns the last population.
  ///
  /// Errors if the driver's configuration is inconsistent; configuration is
  /// checked once, before the first generation.
  fn optimize(self) -> Result<Vec<Solution>, Error>;
}
