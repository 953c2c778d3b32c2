//! The sharing-based NSGA driver.

use rand::Rng;
use tracing::{debug, info};
use typed_builder::TypedBuilder;

use crate::{
  crossover::Crossover,
  density::{shared_fitness, SharingParams},
  error::Error,
  mutation::Mutation,
  optimizer::Optimizer,
  problem::{random_population, Problem},
  selection::Selection,
  solution::Solution,
  sorting::fronts_of,
};

/// The original non-dominated sorting genetic algorithm.
///
/// Each generation the population is sorted into fronts, every solution
/// receives a shared-fitness roulette weight (front 0 strictly above front
/// 1 and so on, crowded niches penalized within a front), and a full
/// replacement population is bred from roulette-selected parents. There is
/// no survivor elitism beyond what the fitness bands imply.
#[derive(TypedBuilder, Debug)]
pub struct Nsga<P, Sel, Crs, Mut, R>
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
  #[builder(default)]
  sharing: SharingParams,
}

impl<P, Sel, Crs, Mut, R> Optimizer for Nsga<P, Sel, Crs, Mut, R>
where
  P: Problem,
  Sel: Selection,
  Crs: Crossover,
  Mut: Mutation,
  R: Rng,
{
  fn optimize(mut self) -> Result<Vec<Solution>, Error> {
    self.problem.validate()?;
    self.sharing.validate()?;
    if self.population_size == 0 {
      return Err(Error::Config("population size must be positive".into()));
    }

    info!(
      population_size = self.population_size,
      generations = self.generations,
      "starting NSGA run"
    );
    let mut population =
      random_population(&self.problem, self.population_size, &mut self.rng);

    for generation in 0..self.generations {
      let fronts = fronts_of(&population);
      let weights = shared_fitness(&population, &fronts, &self.sharing);
      debug!(generation, fronts = fronts.len(), "sorted population");

      let mut next = Vec::with_capacity(self.population_size);
      while next.len() < self.population_size {
        let parents =
          self
            .selector
            .from(&mut self.rng, &population, &weights, 2);
        let (first, second) = self.crossover.of(
          &mut self.rng,
          parents[0].variables(),
          parents[1].variables(),
        )?;
        let mut children = vec![first, second];
        self.mutator.mutate(&mut self.rng, &mut children);
        for variables in children {
          // an odd final slot takes the first child only
          if next.len() == self.population_size {
            break;
          }
          let objectives = self.problem.evaluate(&variables);
          next.push(Solution::new(variables, objectives));
        }
      }
      population = next;
    }

    info!("NSGA run finished");
    Ok(population)
  }
}
