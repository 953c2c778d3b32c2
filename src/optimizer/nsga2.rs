//! The elitist crowding-based NSGA-II driver.

use rand::Rng;
use tracing::{debug, info};
use typed_builder::TypedBuilder;

use crate::{
  crossover::Crossover,
  density::assign_crowding,
  error::Error,
  mutation::Mutation,
  optimizer::Optimizer,
  problem::{random_population, Problem},
  selection::Selection,
  solution::Solution,
  sorting::{assign_ranks, fronts_of, Front},
};

/// NSGA-II: the elitist variant.
///
/// Each generation a full child population is bred from tournament-selected
/// parents, the parent and child populations are merged into a pool of
/// twice the population size, the pool is re-sorted into fronts, and the
/// next generation is filled with whole fronts in rank order. The one front
/// that overflows the remaining capacity is thinned by crowding distance,
/// keeping the most isolated members. Best fronts therefore always survive
/// while the boundary front keeps its most diverse solutions.
#[derive(TypedBuilder, Debug)]
pub struct Nsga2<P, Sel, Crs, Mut, R>
where
  P: Problem,
  Sel: Selection,
  Crs: Crossover,
  Mut: Mutation,
  R: Rng,
{
  problem: P,
  selector: Sel,
  crossover: Crs,
  mutator: Mut,
  rng: R,
  #[builder(default = 100)]
  population_size: usize,
  #[builder(default = 250)]
  generations: usize,
}

impl<P, Sel, Crs, Mut, R> Optimizer for Nsga2<P, Sel, Crs, Mut, R>
where
  P: Problem,
  Sel: Selection,
  Crs: Crossover,
  Mut: Mutation,
  R: Rng,
{
  fn optimize(mut self) -> Result<Vec<Solution>, Error> {
    self.problem.validate()?;
    if self.population_size == 0 {
      return Err(Error::Config("population size must be positive".into()));
    }

    info!(
      population_size = self.population_size,
      generations = self.generations,
      "starting NSGA-II run"
    );
    let mut population =
      random_population(&self.problem, self.population_size, &mut self.rng);
    // the first tournament reads ranks and crowding, so sort up front
    let fronts = fronts_of(&population);
    assign_ranks(&mut population, &fronts);
    for front in &fronts {
      assign_crowding(&mut population, front);
    }

    for generation in 0..self.generations {
      let mut genomes = Vec::with_capacity(self.population_size);
      while genomes.len() < self.population_size {
        let parents = self.selector.from(&mut self.rng, &population, &[], 2);
        let (first, second) = self.crossover.of(
          &mut self.rng,
          parents[0].variables(),
          parents[1].variables(),
        )?;
        genomes.push(first);
        if genomes.len() < self.population_size {
          genomes.push(second);
        }
      }
      self.mutator.mutate(&mut self.rng, &mut genomes);

      // parent + child union, transiently twice the population size
      population.extend(genomes.into_iter().map(|variables| {
        let objectives = self.problem.evaluate(&variables);
        Solution::new(variables, objectives)
      }));

      let fronts = fronts_of(&population);
      assign_ranks(&mut population, &fronts);
      population = truncate(population, &fronts, self.population_size);
      debug!(
        generation,
        fronts = fronts.len(),
        "truncated union to population size"
      );
    }

    info!("NSGA-II run finished");
    Ok(population)
  }
}

/// Walks fronts in rank order, keeping whole fronts while they fit and
/// thinning the first overflowing front by descending crowding distance.
/// Every survivor leaves with freshly stamped crowding.
fn truncate(
  mut population: Vec<Solution>,
  fronts: &[Front],
  target: usize,
) -> Vec<Solution> {
  let mut keep: Vec<usize> = Vec::with_capacity(target);
  for front in fronts {
    assign_crowding(&mut population, front);
    if keep.len() + front.len() <= target {
      keep.extend_from_slice(front);
      if keep.len() == target {
        break;
      }
    } else {
      let mut boundary = front.clone();
      boundary.sort_by(|&a, &b| {
        population[b].crowding().total_cmp(&population[a].crowding())
      });
      boundary.truncate(target - keep.len());
      keep.extend(boundary);
      break;
    }
  }

  // move survivors out without cloning; front indices are unique
  let mut slots: Vec<Option<Solution>> =
    population.into_iter().map(Some).collect();
  keep
    .into_iter()
    .map(|idx| slots[idx].take().expect("must be something here"))
    .collect()
}
