//! **moea** implements the non-dominated sorting genetic algorithm family
//! for multi-objective optimization over fixed-length real-valued vectors.
//!
//! Two generational drivers are provided:
//! - [`Nsga`] - the original algorithm, which keeps diversity with fitness
//!   sharing and selects parents with a roulette wheel over shared fitness
//! - [`Nsga2`] - the elitist variant, which merges parents and children
//!   every generation, re-sorts the union into non-dominated fronts and
//!   truncates it back by rank, breaking ties on the boundary front by
//!   crowding distance
//!
//! Both drivers consume a [`Problem`] describing variable bounds, objective
//! count and an evaluation function, plus pluggable [`Crossover`],
//! [`Mutation`] and [`Selection`] operators. Every objective is minimized.
//! All randomness flows through a single seedable [`rand::Rng`] owned by the
//! driver, so runs are reproducible.
//!
//! # Example
//! ```no_run
//! use moea::{
//!   crossover::BlendCrossover,
//!   mutation::GaussianMutation,
//!   optimizer::{nsga2::Nsga2, Optimizer},
//!   problem::{Problem, SeparableSquares},
//!   selection::TournamentSelector,
//! };
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! # fn main() -> Result<(), moea::Error> {
//! let problem = SeparableSquares::new(4);
//! let mutator = GaussianMutation::new(
//!   0.1,
//!   0.3,
//!   problem.mins().to_vec(),
//!   problem.maxs().to_vec(),
//! )?;
//! let nsga2 = Nsga2::builder()
//!   .problem(problem)
//!   .selector(TournamentSelector::new(2)?)
//!   .crossover(BlendCrossover)
//!   .mutator(mutator)
//!   .rng(StdRng::seed_from_u64(42))
//!   .population_size(100)
//!   .generations(250)
//!   .build();
//! let pareto_approximation = nsga2.optimize()?;
//! # Ok(())
//! # }
//! ```
//!
//! [`Nsga`]: crate::optimizer::nsga::Nsga
//! [`Nsga2`]: crate::optimizer::nsga2::Nsga2
//! [`Problem`]: crate::problem::Problem
//! [`Crossover`]: crate::crossover::Crossover
//! [`Mutation`]: crate::mutation::Mutation
//! [`Selection`]: crate::selection::Selection

#![warn(missing_docs)]

pub mod crossover;
pub mod density;
pub mod error;
pub mod mutation;
pub mod optimizer;
pub mod problem;
pub mod report;
pub mod score;
pub mod selection;
pub mod solution;
pub mod sorting;

pub use crate::{error::Error, optimizer::Optimizer, solution::Solution};
