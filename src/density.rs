//! Density estimation within a front: crowding distance for NSGA-II and
//! fitness sharing for NSGA.

use crate::{
  error::Error,
  score::Score,
  solution::Solution,
  sorting::Front,
};

/// Crowding distance of every member of one front, aligned with the front's
/// index order.
///
/// Per objective, the front is sorted and the two boundary members receive
/// an infinite contribution; each interior member accumulates the gap
/// between its neighbors normalized by the objective's range *over the
/// front*. A degenerate objective with zero range contributes nothing, so
/// no NaN can leak out of the division.
pub fn crowding_distances(
  population: &[Solution],
  front: &Front,
) -> Vec<Score> {
  let n = front.len();
  let mut distances = vec![0.0; n];
  if n == 0 {
    return distances;
  }
  let objectives = population[front[0]].objectives().len();
  // order holds positions into `front`, so distances stay aligned with it
  let mut order: Vec<usize> = (0..n).collect();
  for k in 0..objectives {
    order.sort_by(|&a, &b| {
      population[front[a]].objectives()[k]
        .total_cmp(&population[front[b]].objectives()[k])
    });
    distances[order[0]] = Score::INFINITY;
    distances[order[n - 1]] = Score::INFINITY;
    let min = population[front[order[0]]].objectives()[k];
    let max = population[front[order[n - 1]]].objectives()[k];
    let range = max - min;
    if range == 0.0 {
      continue;
    }
    for w in 1..n - 1 {
      let prev = population[front[order[w - 1]]].objectives()[k];
      let next = population[front[order[w + 1]]].objectives()[k];
      distances[order[w]] += (next - prev) / range;
    }
  }
  distances
}

/// Computes crowding distances for `front` and stamps them onto the
/// solutions.
pub fn assign_crowding(population: &mut [Solution], front: &Front) {
  let distances = crowding_distances(population, front);
  for (pos, &idx) in front.iter().enumerate() {
    population[idx].set_crowding(distances[pos]);
  }
}

/// Which space the sharing kernel measures distance in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DistanceMode {
  /// Euclidean distance over decision variables.
  DecisionSpace,
  /// Euclidean distance over objective values.
  ObjectiveSpace,
}

/// Tunables of the fitness sharing kernel used by NSGA.
#[derive(Clone, Copy, Debug)]
pub struct SharingParams {
  /// Niche radius; pairs farther apart than this do not share fitness.
  pub sigma_share: f64,
  /// Decay exponent of the sharing kernel.
  pub alpha: f64,
  /// Gap between the fitness bands of adjacent fronts.
  pub epsilon: f64,
  /// Space in which pairwise distance is measured.
  pub mode: DistanceMode,
}

impl Default for SharingParams {
  fn default() -> Self {
    Self {
      sigma_share: 1.0,
      alpha: 2.0,
      epsilon: 0.1,
      mode: DistanceMode::DecisionSpace,
    }
  }
}

impl SharingParams {
  /// Checks the parameters for values that would break the fitness bands.
  pub fn validate(&self) -> Result<(), Error> {
    if self.sigma_share <= 0.0 {
      return Err(Error::Config(format!(
        "sharing radius must be positive, got {}",
        self.sigma_share
      )));
    }
    if self.epsilon <= 0.0 {
      return Err(Error::Config(format!(
        "sharing epsilon must be positive, got {}",
        self.epsilon
      )));
    }
    Ok(())
  }
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
  a.iter()
    .zip(b)
    .map(|(x, y)| (x - y) * (x - y))
    .sum::<f64>()
    .sqrt()
}

fn share(distance: f64, params: &SharingParams) -> f64 {
  if distance < params.sigma_share {
    1.0 - (distance / params.sigma_share).powf(params.alpha)
  } else {
    0.0
  }
}

/// Shared-fitness roulette weights for the whole population, aligned with
/// `population`. Larger is better.
///
/// Fronts are walked best to worst. Within a front every member divides the
/// front's base fitness by its niche count, `1` plus the summed sharing
/// kernel over its distances to the rest of the front. The base starts at
/// `population size + epsilon` and drops to the front's minimum shared
/// fitness minus `epsilon` before the next front, so the best weight in
/// front `i + 1` stays strictly below the worst weight in front `i`.
pub fn shared_fitness(
  population: &[Solution],
  fronts: &[Front],
  params: &SharingParams,
) -> Vec<f64> {
  let mut weights = vec![0.0; population.len()];
  let mut front_floor = population.len() as f64 + params.epsilon;
  for front in fronts {
    let base = front_floor - params.epsilon;
    let mut front_min = f64::INFINITY;
    for (pos, &i) in front.iter().enumerate() {
      let mut niche_count = 1.0;
      for (other_pos, &j) in front.iter().enumerate() {
        if pos == other_pos {
          continue;
        }
        let distance = match params.mode {
          DistanceMode::DecisionSpace => {
            euclidean(population[i].variables(), population[j].variables())
          }
          DistanceMode::ObjectiveSpace => {
            euclidean(population[i].objectives(), population[j].objectives())
          }
        };
        niche_count += share(distance, params);
      }
      let fitness = base / niche_count;
      weights[i] = fitness;
      front_min = front_min.min(fitness);
    }
    front_floor = front_min;
  }
  weights
}
