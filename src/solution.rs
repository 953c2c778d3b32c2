//! The solution record shared by both drivers.

use crate::score::{Score, Scores};

/// Sentinel rank carried by solutions that have not been sorted yet.
pub const UNRANKED: usize = usize::MAX;

/// A fixed-length vector of decision variables paired with the objective
/// values it evaluated to.
///
/// Objectives are computed once, when the solution is created, and cached;
/// variables never change afterwards. The `rank` and `crowding` fields are
/// transient per-generation metrics: every non-dominated sort overwrites
/// them, and a freshly created solution carries [`UNRANKED`] and zero
/// crowding until its first sort.
#[derive(Clone, Debug)]
pub struct Solution {
  variables: Vec<f64>,
  objectives: Scores,
  rank: usize,
  crowding: Score,
}

impl Solution {
  /// Creates a solution from already evaluated variables.
  pub fn new(variables: Vec<f64>, objectives: Scores) -> Self {
    Self {
      variables,
      objectives,
      rank: UNRANKED,
      crowding: 0.0,
    }
  }

  /// The decision variables.
  pub fn variables(&self) -> &[f64] {
    &self.variables
  }

  /// The cached objective values.
  pub fn objectives(&self) -> &[Score] {
    &self.objectives
  }

  /// Index of the non-dominated front this solution was last assigned to,
  /// 0 being the best, or [`UNRANKED`] if it was never sorted.
  pub fn rank(&self) -> usize {
    self.rank
  }

  /// Crowding distance from the last sort. Boundary members of a front get
  /// `INFINITY`.
  pub fn crowding(&self) -> Score {
    self.crowding
  }

  pub(crate) fn set_rank(&mut self, rank: usize) {
    self.rank = rank;
  }

  pub(crate) fn set_crowding(&mut self, crowding: Score) {
    self.crowding = crowding;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new_solution_is_unranked() {
    let solution = Solution::new(vec![1.0, 2.0], vec![1.0, 4.0]);
    assert_eq!(solution.rank(), UNRANKED);
    assert_eq!(solution.crowding(), 0.0);
    assert_eq!(solution.variables(), &[1.0, 2.0]);
    assert_eq!(solution.objectives(), &[1.0, 4.0]);
  }
}
