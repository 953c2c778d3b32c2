//! Mutation operators over variable vectors.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::Error;

/// An operator that perturbs a batch of variable vectors in place.
///
/// Drivers mutate children after crossover and before evaluation, so a
/// mutation never has to touch cached objectives.
pub trait Mutation {
  /// Mutates each of the given variable vectors in place.
  fn mutate<R: Rng>(&self, rng: &mut R, genomes: &mut [Vec<f64>]);
}

/// Adds Gaussian noise to each component with a fixed per-component
/// probability and clamps the result to the problem bounds.
#[derive(Clone, Debug)]
pub struct GaussianMutation {
  probability: f64,
  normal: Normal<f64>,
  mins: Vec<f64>,
  maxs: Vec<f64>,
}

impl GaussianMutation {
  /// Creates the operator.
  ///
  /// Errors if `probability` falls outside `[0, 1]`, `sigma` is not a
  /// positive finite number, or the bounds arrays differ in length.
  pub fn new(
    probability: f64,
    sigma: f64,
    mins: Vec<f64>,
    maxs: Vec<f64>,
  ) -> Result<Self, Error> {
    if !(0.0..=1.0).contains(&probability) {
      return Err(Error::Config(format!(
        "mutation probability {probability} is outside [0, 1]"
      )));
    }
    if !(sigma.is_finite() && sigma > 0.0) {
      return Err(Error::Config(format!(
        "mutation sigma must be a positive finite number, got {sigma}"
      )));
    }
    if mins.len() != maxs.len() {
      return Err(Error::Config(format!(
        "mutation bounds have mismatched lengths {} and {}",
        mins.len(),
        maxs.len()
      )));
    }
    let normal = Normal::new(0.0, sigma)
      .map_err(|e| Error::Config(format!("invalid mutation sigma: {e}")))?;
    Ok(Self {
      probability,
      normal,
      mins,
      maxs,
    })
  }
}

impl Mutation for GaussianMutation {
  fn mutate<R: Rng>(&self, rng: &mut R, genomes: &mut [Vec<f64>]) {
    for genome in genomes.iter_mut() {
      for (k, x) in genome.iter_mut().enumerate() {
        if rng.gen::<f64>() < self.probability {
          *x = (*x + self.normal.sample(rng))
            .clamp(self.mins[k], self.maxs[k]);
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use rand::{rngs::StdRng, SeedableRng};

  use super::*;

  fn bounds(n: usize) -> (Vec<f64>, Vec<f64>) {
    (vec![-1.0; n], vec![1.0; n])
  }

  #[test]
  fn test_invalid_parameters_are_rejected() {
    let (mins, maxs) = bounds(2);
    assert!(
      GaussianMutation::new(1.5, 0.3, mins.clone(), maxs.clone()).is_err()
    );
    assert!(
      GaussianMutation::new(0.1, 0.0, mins.clone(), maxs.clone()).is_err()
    );
    assert!(GaussianMutation::new(0.1, 0.3, mins.clone(), vec![1.0]).is_err());
    assert!(GaussianMutation::new(0.1, 0.3, mins, maxs).is_ok());
  }

  #[test]
  fn test_mutation_respects_bounds() {
    let (mins, maxs) = bounds(4);
    let mutation = GaussianMutation::new(1.0, 10.0, mins, maxs).unwrap();
    let mut rng = StdRng::seed_from_u64(8);
    let mut genomes = vec![vec![0.0; 4]; 20];
    mutation.mutate(&mut rng, &mut genomes);
    for genome in &genomes {
      for x in genome {
        assert!((-1.0..=1.0).contains(x));
      }
    }
  }

  #[test]
  fn test_zero_probability_leaves_genomes_untouched() {
    let (mins, maxs) = bounds(3);
    let mutation = GaussianMutation::new(0.0, 0.5, mins, maxs).unwrap();
    let mut rng = StdRng::seed_from_u64(9);
    let mut genomes = vec![vec![0.25, -0.5, 0.75]];
    mutation.mutate(&mut rng, &mut genomes);
    assert_eq!(genomes[0], vec![0.25, -0.5, 0.75]);
  }

  #[test]
  fn test_full_probability_perturbs_components() {
    let (mins, maxs) = bounds(8);
    let mutation = GaussianMutation::new(1.0, 0.5, mins, maxs).unwrap();
    let mut rng = StdRng::seed_from_u64(10);
    let mut genomes = vec![vec![0.0; 8]];
    mutation.mutate(&mut rng, &mut genomes);
    assert!(genomes[0].iter().any(|x| *x != 0.0));
  }
}
