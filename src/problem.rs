//! The multi-objective problem abstraction and two built-in toy problems.

use rand::Rng;

use crate::{error::Error, score::Scores, solution::Solution};

/// A multi-objective minimization problem over a fixed-length vector of
/// real-valued decision variables.
///
/// `evaluate` must be a pure function: no side effects, deterministic for
/// deterministic inputs. Drivers call [`validate`] once before the first
/// generation and fail fast on any dimensional inconsistency.
///
/// [`validate`]: Problem::validate
pub trait Problem {
  /// Number of decision variables.
  fn num_variables(&self) -> usize;

  /// Number of objectives.
  fn num_objectives(&self) -> usize;

  /// Lower bound per variable. Must have `num_variables` elements.
  fn mins(&self) -> &[f64];

  /// Upper bound per variable. Must have `num_variables` elements.
  fn maxs(&self) -> &[f64];

  /// Maps a variable vector to its objective vector.
  fn evaluate(&self, variables: &[f64]) -> Scores;

  /// Checks dimensional consistency of the problem definition.
  fn validate(&self) -> Result<(), Error> {
    if self.num_variables() == 0 {
      return Err(Error::Config(
        "problem declares zero decision variables".into(),
      ));
    }
    if self.num_objectives() == 0 {
      return Err(Error::Config("problem declares zero objectives".into()));
    }
    if self.mins().len() != self.num_variables()
      || self.maxs().len() != self.num_variables()
    {
      return Err(Error::Config(format!(
        "bounds arrays have lengths {} and {} but the problem declares {} \
         variables",
        self.mins().len(),
        self.maxs().len(),
        self.num_variables()
      )));
    }
    for (k, (lo, hi)) in self.mins().iter().zip(self.maxs()).enumerate() {
      if lo > hi {
        return Err(Error::Config(format!(
          "variable {k} has inverted bounds [{lo}, {hi}]"
        )));
      }
    }
    Ok(())
  }
}

impl<P: Problem + ?Sized> Problem for Box<P> {
  fn num_variables(&self) -> usize {
    (**self).num_variables()
  }

  fn num_objectives(&self) -> usize {
    (**self).num_objectives()
  }

  fn mins(&self) -> &[f64] {
    (**self).mins()
  }

  fn maxs(&self) -> &[f64] {
    (**self).maxs()
  }

  fn evaluate(&self, variables: &[f64]) -> Scores {
    (**self).evaluate(variables)
  }
}

/// Draws `size` solutions uniformly at random within the problem's bounds,
/// evaluating each exactly once.
pub fn random_population<P: Problem + ?Sized, R: Rng>(
  problem: &P,
  size: usize,
  rng: &mut R,
) -> Vec<Solution> {
  (0..size)
    .map(|_| {
      let variables: Vec<f64> = problem
        .mins()
        .iter()
        .zip(problem.maxs())
        .map(|(&lo, &hi)| if lo == hi { lo } else { rng.gen_range(lo..hi) })
        .collect();
      let objectives = problem.evaluate(&variables);
      Solution::new(variables, objectives)
    })
    .collect()
}

/// Separable squares: `f_k(x) = x_k^2` for each of `n` variables, every
/// variable bounded to `[-5, 5]`. The Pareto optimum is the origin.
#[derive(Clone, Debug)]
pub struct SeparableSquares {
  mins: Vec<f64>,
  maxs: Vec<f64>,
}

impl SeparableSquares {
  /// Creates the problem over `variables` decision variables.
  pub fn new(variables: usize) -> Self {
    Self {
      mins: vec![-5.0; variables],
      maxs: vec![5.0; variables],
    }
  }
}

impl Problem for SeparableSquares {
  fn num_variables(&self) -> usize {
    self.mins.len()
  }

  fn num_objectives(&self) -> usize {
    self.mins.len()
  }

  fn mins(&self) -> &[f64] {
    &self.mins
  }

  fn maxs(&self) -> &[f64] {
    &self.maxs
  }

  fn evaluate(&self, variables: &[f64]) -> Scores {
    variables.iter().map(|x| x * x).collect()
  }
}

/// A two-variable ratio trade-off: `f1 = x1` and `f2 = (1 + x2) / x1`, with
/// `x1` in `[0.1, 1]` and `x2` in `[0, 5]`. Shrinking `x1` improves `f1`
/// and worsens `f2`, so the whole `x2 = 0` line is Pareto optimal.
#[derive(Clone, Debug)]
pub struct RatioTradeoff {
  mins: [f64; 2],
  maxs: [f64; 2],
}

impl RatioTradeoff {
  /// Creates the problem with its canonical bounds.
  pub fn new() -> Self {
    Self {
      mins: [0.1, 0.0],
      maxs: [1.0, 5.0],
    }
  }
}

impl Default for RatioTradeoff {
  fn default() -> Self {
    Self::new()
  }
}

impl Problem for RatioTradeoff {
  fn num_variables(&self) -> usize {
    2
  }

  fn num_objectives(&self) -> usize {
    2
  }

  fn mins(&self) -> &[f64] {
    &self.mins
  }

  fn maxs(&self) -> &[f64] {
    &self.maxs
  }

  fn evaluate(&self, variables: &[f64]) -> Scores {
    vec![variables[0], (1.0 + variables[1]) / variables[0]]
  }
}

#[cfg(test)]
mod tests {
  use rand::{rngs::StdRng, SeedableRng};

  use super::*;

  struct BrokenBounds;

  impl Problem for BrokenBounds {
    fn num_variables(&self) -> usize {
      3
    }

    fn num_objectives(&self) -> usize {
      2
    }

    fn mins(&self) -> &[f64] {
      &[0.0, 0.0]
    }

    fn maxs(&self) -> &[f64] {
      &[1.0, 1.0, 1.0]
    }

    fn evaluate(&self, _: &[f64]) -> Scores {
      vec![0.0, 0.0]
    }
  }

  #[test]
  fn test_validate_rejects_mismatched_bounds() {
    assert!(matches!(BrokenBounds.validate(), Err(Error::Config(_))));
  }

  #[test]
  fn test_validate_accepts_builtins() {
    assert!(SeparableSquares::new(4).validate().is_ok());
    assert!(RatioTradeoff::new().validate().is_ok());
  }

  #[test]
  fn test_separable_squares_evaluation() {
    let problem = SeparableSquares::new(4);
    assert_eq!(
      problem.evaluate(&[-1.0, 2.0, 0.0, 3.0]),
      vec![1.0, 4.0, 0.0, 9.0]
    );
  }

  #[test]
  fn test_ratio_tradeoff_evaluation() {
    let problem = RatioTradeoff::new();
    assert_eq!(problem.evaluate(&[0.5, 1.0]), vec![0.5, 4.0]);
    assert_eq!(problem.evaluate(&[0.2, 0.0]), vec![0.2, 5.0]);
  }

  #[test]
  fn test_random_population_stays_in_bounds() {
    let problem = SeparableSquares::new(4);
    let mut rng = StdRng::seed_from_u64(3);
    let population = random_population(&problem, 50, &mut rng);
    assert_eq!(population.len(), 50);
    for solution in &population {
      assert_eq!(solution.variables().len(), problem.num_variables());
      assert_eq!(solution.objectives().len(), problem.num_objectives());
      for (x, (lo, hi)) in solution
        .variables()
        .iter()
        .zip(problem.mins().iter().zip(problem.maxs()))
      {
        assert!(lo <= x && x < hi);
      }
    }
  }
}
