//! Command-line demo running NSGA or NSGA-II on the built-in toy problems.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use itertools::Itertools;
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

use moea::{
  crossover::BlendCrossover,
  density::{DistanceMode, SharingParams},
  mutation::GaussianMutation,
  optimizer::{nsga::Nsga, nsga2::Nsga2, Optimizer},
  problem::{Problem, RatioTradeoff, SeparableSquares},
  report,
  selection::{RouletteSelector, TournamentSelector},
  solution::Solution,
  sorting::fronts_of,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
enum Algorithm {
  /// Sharing-based NSGA.
  Nsga,
  /// Elitist crowding-based NSGA-II.
  Nsga2,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
enum Distance {
  /// Share fitness over decision-variable distance.
  DecisionSpace,
  /// Share fitness over objective-value distance.
  ObjectiveSpace,
}

impl From<Distance> for DistanceMode {
  fn from(distance: Distance) -> Self {
    match distance {
      Distance::DecisionSpace => DistanceMode::DecisionSpace,
      Distance::ObjectiveSpace => DistanceMode::ObjectiveSpace,
    }
  }
}

/// Multi-objective optimization demos for the NSGA family.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
  /// Algorithm variant to run.
  #[arg(long, value_enum, default_value_t = Algorithm::Nsga2)]
  algorithm: Algorithm,

  /// Built-in problem index: 1 = separable squares, 2 = ratio trade-off.
  #[arg(long, default_value_t = 1)]
  problem: usize,

  /// Number of decision variables (problem 1 only).
  #[arg(long, default_value_t = 4)]
  variables: usize,

  /// Population size.
  #[arg(long, default_value_t = 100)]
  population_size: usize,

  /// Number of generations to run.
  #[arg(long, default_value_t = 250)]
  generations: usize,

  /// Space the sharing kernel measures distance in (NSGA only).
  #[arg(long, value_enum, default_value_t = Distance::DecisionSpace)]
  distance_mode: Distance,

  /// Tournament size (NSGA-II only).
  #[arg(long, default_value_t = 2)]
  tournament_size: usize,

  /// Per-component mutation probability.
  #[arg(long, default_value_t = 0.1)]
  mutation_probability: f64,

  /// Standard deviation of the Gaussian mutation.
  #[arg(long, default_value_t = 0.3)]
  mutation_sigma: f64,

  /// RNG seed; omit to seed from entropy.
  #[arg(long)]
  seed: Option<u64>,

  /// Where NSGA-II writes final decision variables, one row per solution.
  #[arg(long, default_value = "variables.csv")]
  variables_out: PathBuf,

  /// Where NSGA-II writes final objective values, one row per solution.
  #[arg(long, default_value = "objectives.csv")]
  objectives_out: PathBuf,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();
  let args = Args::parse();

  let problem: Box<dyn Problem> = match args.problem {
    1 => Box::new(SeparableSquares::new(args.variables)),
    2 => Box::new(RatioTradeoff::new()),
    other => bail!("unknown problem index {other}, expected 1 or 2"),
  };
  let mutator = GaussianMutation::new(
    args.mutation_probability,
    args.mutation_sigma,
    problem.mins().to_vec(),
    problem.maxs().to_vec(),
  )?;
  let rng = match args.seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(),
  };

  let population = match args.algorithm {
    Algorithm::Nsga => Nsga::builder()
      .problem(problem)
      .selector(RouletteSelector)
      .crossover(BlendCrossover)
      .mutator(mutator)
      .rng(rng)
      .population_size(args.population_size)
      .generations(args.generations)
      .sharing(SharingParams {
        mode: args.distance_mode.into(),
        ..SharingParams::default()
      })
      .build()
      .optimize()?,
    Algorithm::Nsga2 => {
      if args.population_size < args.tournament_size {
        bail!(
          "population size {} is smaller than tournament size {}",
          args.population_size,
          args.tournament_size
        );
      }
      let population = Nsga2::builder()
        .problem(problem)
        .selector(TournamentSelector::new(args.tournament_size)?)
        .crossover(BlendCrossover)
        .mutator(mutator)
        .rng(rng)
        .population_size(args.population_size)
        .generations(args.generations)
        .build()
        .optimize()?;
      report::write_variables(&args.variables_out, &population)
        .context("writing the variables report")?;
      report::write_objectives(&args.objectives_out, &population)
        .context("writing the objectives report")?;
      population
    }
  };

  print_summary(&population);
  Ok(())
}

fn print_summary(population: &[Solution]) {
  let fronts = fronts_of(population);
  println!(
    "front sizes: [{}]",
    fronts.iter().map(Vec::len).join(", ")
  );
  println!("first front ({} solutions):", fronts[0].len());
  for &idx in &fronts[0] {
    let solution = &population[idx];
    println!(
      "  x = [{}]  f = [{}]",
      solution.variables().iter().map(|v| format!("{v:.4}")).join(", "),
      solution.objectives().iter().map(|v| format!("{v:.4}")).join(", "),
    );
  }
}
