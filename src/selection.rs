//! Selection operators.

use std::cmp::Ordering;

use rand::Rng;

use crate::{error::Error, solution::Solution};

/// An operator that picks `count` solutions out of a population, with
/// replacement.
///
/// `weights` carries one "larger is better" scalar per solution, aligned
/// with `population`. Selectors that rank solutions by other means - such
/// as the rank/crowding tournament - are free to ignore it, and drivers
/// without scalar weights pass an empty slice.
pub trait Selection {
  /// Selects `count` solutions from `population`.
  fn from<'a, R: Rng>(
    &self,
    rng: &mut R,
    population: &'a [Solution],
    weights: &[f64],
    count: usize,
  ) -> Vec<&'a Solution>;
}

/// Roulette wheel over the given weights: a solution's selection chance is
/// proportional to its weight. Falls back to uniform choice when every
/// weight is zero, so a degenerate weighting cannot abort a run mid-loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct RouletteSelector;

impl Selection for RouletteSelector {
  fn from<'a, R: Rng>(
    &self,
    rng: &mut R,
    population: &'a [Solution],
    weights: &[f64],
    count: usize,
  ) -> Vec<&'a Solution> {
    let total: f64 = weights.iter().sum();
    (0..count)
      .map(|_| {
        if total <= 0.0 {
          return &population[rng.gen_range(0..population.len())];
        }
        let mut spin = rng.gen_range(0.0..total);
        let mut chosen = population.len() - 1;
        for (idx, weight) in weights.iter().enumerate() {
          if spin < *weight {
            chosen = idx;
            break;
          }
          spin -= weight;
        }
        &population[chosen]
      })
      .collect()
  }
}

/// Returns `Less` if `a` wins the crowded comparison: lower front rank
/// first, larger crowding distance on rank ties.
pub fn crowded_compare(a: &Solution, b: &Solution) -> Ordering {
  a.rank()
    .cmp(&b.rank())
    .then_with(|| b.crowding().total_cmp(&a.crowding()))
}

/// Tournament of a fixed size over the rank and crowding distance carried
/// by the solutions themselves. Participants are drawn uniformly with
/// replacement; the crowded-comparison winner takes the slot.
#[derive(Clone, Copy, Debug)]
pub struct TournamentSelector {
  size: usize,
}

impl TournamentSelector {
  /// Creates a selector running tournaments of `size` participants.
  ///
  /// Errors if `size` is below 2.
  pub fn new(size: usize) -> Result<Self, Error> {
    if size < 2 {
      return Err(Error::TournamentSize(size));
    }
    Ok(Self { size })
  }

  /// Number of participants per tournament.
  pub fn size(&self) -> usize {
    self.size
  }
}

impl Selection for TournamentSelector {
  fn from<'a, R: Rng>(
    &self,
    rng: &mut R,
    population: &'a [Solution],
    _weights: &[f64],
    count: usize,
  ) -> Vec<&'a Solution> {
    (0..count)
      .map(|_| {
        let mut best = &population[rng.gen_range(0..population.len())];
        for _ in 1..self.size {
          let challenger = &population[rng.gen_range(0..population.len())];
          if crowded_compare(challenger, best) == Ordering::Less {
            best = challenger;
          }
        }
        best
      })
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use rand::{rngs::StdRng, SeedableRng};

  use super::*;

  fn ranked(rank: usize, crowding: f64) -> Solution {
    let mut solution = Solution::new(Vec::new(), vec![0.0]);
    solution.set_rank(rank);
    solution.set_crowding(crowding);
    solution
  }

  #[test]
  fn test_tournament_size_validation() {
    assert!(matches!(
      TournamentSelector::new(0),
      Err(Error::TournamentSize(0))
    ));
    assert!(matches!(
      TournamentSelector::new(1),
      Err(Error::TournamentSize(1))
    ));
    assert_eq!(TournamentSelector::new(2).unwrap().size(), 2);
  }

  #[test]
  fn test_crowded_compare_prefers_lower_rank() {
    let better = ranked(0, 0.0);
    let worse = ranked(1, f64::INFINITY);
    assert_eq!(crowded_compare(&better, &worse), Ordering::Less);
    assert_eq!(crowded_compare(&worse, &better), Ordering::Greater);
  }

  #[test]
  fn test_crowded_compare_breaks_rank_ties_by_crowding() {
    let lonely = ranked(2, 3.0);
    let crowded = ranked(2, 0.5);
    assert_eq!(crowded_compare(&lonely, &crowded), Ordering::Less);
    assert_eq!(crowded_compare(&lonely, &lonely), Ordering::Equal);
  }

  #[test]
  fn test_roulette_follows_weights() {
    let population: Vec<Solution> =
      (0..3).map(|_| ranked(0, 0.0)).collect();
    let weights = [0.0, 0.0, 1.0];
    let mut rng = StdRng::seed_from_u64(12);
    let picks = RouletteSelector.from(&mut rng, &population, &weights, 100);
    for pick in picks {
      assert!(std::ptr::eq(pick, &population[2]));
    }
  }

  #[test]
  fn test_roulette_degrades_to_uniform_on_zero_weights() {
    let population: Vec<Solution> =
      (0..4).map(|_| ranked(0, 0.0)).collect();
    let weights = [0.0; 4];
    let mut rng = StdRng::seed_from_u64(13);
    let picks = RouletteSelector.from(&mut rng, &population, &weights, 200);
    assert_eq!(picks.len(), 200);
    for member in &population {
      assert!(picks.iter().any(|pick| std::ptr::eq(*pick, member)));
    }
  }

  #[test]
  fn test_tournament_favors_the_best_rank() {
    // a clearly best solution wins every tournament it is drawn into, and
    // with 32 draws over 8 members it is almost always drawn
    let mut population: Vec<Solution> =
      (0..8).map(|_| ranked(3, 0.0)).collect();
    population[5] = ranked(0, 0.0);
    let selector = TournamentSelector::new(32).unwrap();
    let mut rng = StdRng::seed_from_u64(14);
    let picks = selector.from(&mut rng, &population, &[], 50);
    let wins = picks
      .iter()
      .filter(|pick| std::ptr::eq(**pick, &population[5]))
      .count();
    assert!(wins > 40, "best solution won only {wins} of 50 tournaments");
  }
}
