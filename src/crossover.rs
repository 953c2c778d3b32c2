//! Crossover operators over variable vectors.

use rand::Rng;

use crate::error::Error;

/// An operator that recombines two parent variable vectors into two
/// children.
///
/// Children always own freshly allocated buffers. The same parent is often
/// selected into several crossovers within one generation, so an
/// implementation must never hand out a buffer aliasing either parent.
pub trait Crossover {
  /// Creates two children from two parents.
  ///
  /// Errors if the parents have different lengths.
  fn of<R: Rng>(
    &self,
    rng: &mut R,
    first: &[f64],
    second: &[f64],
  ) -> Result<(Vec<f64>, Vec<f64>), Error>;
}

fn check_lengths(first: &[f64], second: &[f64]) -> Result<(), Error> {
  if first.len() != second.len() {
    return Err(Error::ParentLengthMismatch {
      left: first.len(),
      right: second.len(),
    });
  }
  Ok(())
}

/// Arithmetic blend crossover: for a fresh random `t` in `[0, 1]`, children
/// are `t * a + (1 - t) * b` and its mirror. Both children stay inside the
/// segment between the parents, so bounds cannot be violated here.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlendCrossover;

impl Crossover for BlendCrossover {
  fn of<R: Rng>(
    &self,
    rng: &mut R,
    first: &[f64],
    second: &[f64],
  ) -> Result<(Vec<f64>, Vec<f64>), Error> {
    check_lengths(first, second)?;
    let t: f64 = rng.gen_range(0.0..=1.0);
    let blend = |t: f64| -> Vec<f64> {
      first
        .iter()
        .zip(second)
        .map(|(a, b)| t * a + (1.0 - t) * b)
        .collect()
    };
    Ok((blend(t), blend(1.0 - t)))
  }
}

/// One-point crossover: both children copy one parent up to a random cut
/// and the other parent from the cut onward.
#[derive(Clone, Copy, Debug, Default)]
pub struct OnePointCrossover;

impl Crossover for OnePointCrossover {
  fn of<R: Rng>(
    &self,
    rng: &mut R,
    first: &[f64],
    second: &[f64],
  ) -> Result<(Vec<f64>, Vec<f64>), Error> {
    check_lengths(first, second)?;
    let cut = if first.is_empty() {
      0
    } else {
      rng.gen_range(0..first.len())
    };
    let splice = |head: &[f64], tail: &[f64]| -> Vec<f64> {
      head[..cut].iter().chain(&tail[cut..]).copied().collect()
    };
    Ok((splice(first, second), splice(second, first)))
  }
}

#[cfg(test)]
mod tests {
  use rand::{rngs::StdRng, SeedableRng};

  use super::*;

  #[test]
  fn test_mismatched_parents_are_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let result = BlendCrossover.of(&mut rng, &[1.0, 2.0], &[1.0]);
    assert!(matches!(
      result,
      Err(Error::ParentLengthMismatch { left: 2, right: 1 })
    ));
    assert!(OnePointCrossover.of(&mut rng, &[], &[0.0]).is_err());
  }

  #[test]
  fn test_blend_stays_between_parents() {
    let mut rng = StdRng::seed_from_u64(2);
    let first = [0.0, 10.0, -3.0];
    let second = [1.0, -10.0, 4.0];
    for _ in 0..100 {
      let (a, b) = BlendCrossover.of(&mut rng, &first, &second).unwrap();
      for child in [&a, &b] {
        for (k, x) in child.iter().enumerate() {
          let lo = first[k].min(second[k]);
          let hi = first[k].max(second[k]);
          assert!(lo <= *x && *x <= hi);
        }
      }
    }
  }

  #[test]
  fn test_blend_children_mirror_each_other() {
    let mut rng = StdRng::seed_from_u64(3);
    let (a, b) = BlendCrossover.of(&mut rng, &[0.0], &[1.0]).unwrap();
    assert!((a[0] + b[0] - 1.0).abs() < 1e-12);
  }

  #[test]
  fn test_one_point_children_are_spliced_parents() {
    let mut rng = StdRng::seed_from_u64(4);
    let first = [1.0, 1.0, 1.0, 1.0];
    let second = [2.0, 2.0, 2.0, 2.0];
    for _ in 0..50 {
      let (a, b) = OnePointCrossover.of(&mut rng, &first, &second).unwrap();
      assert_eq!(a.len(), 4);
      assert_eq!(b.len(), 4);
      for k in 0..4 {
        // children swap sources at the same cut
        assert!(a[k] == 1.0 || a[k] == 2.0);
        assert_eq!(a[k] + b[k], 3.0);
      }
      // prefix comes from the first parent handed in
      let cut = a.iter().position(|x| *x == 2.0).unwrap_or(4);
      assert!(a[..cut].iter().all(|x| *x == 1.0));
      assert!(a[cut..].iter().all(|x| *x == 2.0));
    }
  }

  #[test]
  fn test_children_own_fresh_buffers() {
    let mut rng = StdRng::seed_from_u64(5);
    let parent = vec![1.0, 2.0];
    let (mut a, _) =
      OnePointCrossover.of(&mut rng, &parent, &parent).unwrap();
    a[0] = 99.0;
    assert_eq!(parent[0], 1.0);
  }
}
