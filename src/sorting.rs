//! Fast non-dominated sorting of populations into ranked fronts.

use std::cmp::Ordering;

use crate::{score::ParetoDominance, solution::Solution};

/// Indices into a population making up one non-dominated front.
pub type Front = Vec<usize>;

/// Partitions a population into ranked non-dominated fronts.
///
/// Front 0 holds every solution no other solution dominates; each later
/// front holds the solutions that become non-dominated once all earlier
/// fronts are removed. The fronts partition the index set exhaustively and
/// disjointly. The all-pairs comparison makes this O(N^2 * M) for N
/// solutions and M objectives.
pub fn fronts_of(population: &[Solution]) -> Vec<Front> {
  // dominance_lists[p] holds the solutions p dominates,
  // dominance_counters[p] counts the solutions dominating p
  let mut dominance_lists: Vec<Vec<usize>> =
    vec![Vec::new(); population.len()];
  let mut dominance_counters: Vec<usize> = vec![0; population.len()];
  let mut current: Front = Vec::new();

  for p_idx in 0..population.len() {
    for q_idx in p_idx + 1..population.len() {
      match population[p_idx]
        .objectives()
        .dominance(population[q_idx].objectives())
      {
        Ordering::Less => {
          dominance_lists[p_idx].push(q_idx);
          dominance_counters[q_idx] += 1;
        }
        Ordering::Greater => {
          dominance_lists[q_idx].push(p_idx);
          dominance_counters[p_idx] += 1;
        }
        Ordering::Equal => {}
      }
    }
    // every pair involving p has been compared by now
    if dominance_counters[p_idx] == 0 {
      current.push(p_idx);
    }
  }

  let mut fronts = Vec::new();
  while !current.is_empty() {
    let mut next = Vec::new();
    for &p_idx in &current {
      for &q_idx in &dominance_lists[p_idx] {
        dominance_counters[q_idx] -= 1;
        if dominance_counters[q_idx] == 0 {
          next.push(q_idx);
        }
      }
    }
    fronts.push(std::mem::replace(&mut current, next));
  }
  fronts
}

/// Stamps every solution with the index of its front and clears stale
/// crowding values from the previous generation.
pub fn assign_ranks(population: &mut [Solution], fronts: &[Front]) {
  for (rank, front) in fronts.iter().enumerate() {
    for &idx in front {
      population[idx].set_rank(rank);
      population[idx].set_crowding(0.0);
    }
  }
}
