//! Objective value aliases and the Pareto dominance relation.

use std::cmp::Ordering;

/// A single objective value. Every objective is minimized; there is no
/// special target value, smaller is simply better.
pub type Score = f64;

/// An objective vector, one value per objective.
pub type Scores = Vec<Score>;

/// Describes Pareto dominance for slices of `Score`s.
pub trait ParetoDominance {
  /// Returns `Less` if `self` dominates `other`, `Greater` if `other`
  /// dominates `self`, otherwise `Equal`. Under minimization `self`
  /// dominates `other` if it is no worse in every objective and strictly
  /// better in at least one. Equal vectors never dominate each other.
  fn dominance(&self, other: &Self) -> Ordering;

  /// Returns `true` iff `self` dominates `other`.
  fn dominates(&self, other: &Self) -> bool {
    self.dominance(other) == Ordering::Less
  }
}

impl ParetoDominance for [Score] {
  fn dominance(&self, other: &Self) -> Ordering {
    let mut ord = Ordering::Equal;
    for (a, b) in self.iter().zip(other) {
      match (ord, a.partial_cmp(b).expect("NaN encountered")) {
        (Ordering::Equal, next_ord) => ord = next_ord,
        (Ordering::Greater, Ordering::Less)
        | (Ordering::Less, Ordering::Greater) => return Ordering::Equal,
        _ => {}
      }
    }
    ord
  }
}
