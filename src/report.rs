//! Plain-text reports of final populations.
//!
//! Both writers emit one comma-separated row per solution and run only
//! after the generational loop has finished, so a failed write can never
//! corrupt an in-memory population.

use std::{
  fs::File,
  io::{BufWriter, Write},
  path::Path,
};

use itertools::Itertools;

use crate::{error::Error, solution::Solution};

fn write_rows<F>(
  path: &Path,
  population: &[Solution],
  row: F,
) -> Result<(), Error>
where
  F: Fn(&Solution) -> String,
{
  let report_error = |source| Error::Report {
    path: path.to_owned(),
    source,
  };
  let file = File::create(path).map_err(report_error)?;
  let mut writer = BufWriter::new(file);
  for solution in population {
    writeln!(writer, "{}", row(solution)).map_err(report_error)?;
  }
  writer.flush().map_err(report_error)
}

/// Writes each solution's decision variables as one comma-separated row.
pub fn write_variables(
  path: &Path,
  population: &[Solution],
) -> Result<(), Error> {
  write_rows(path, population, |solution| {
    solution.variables().iter().join(",")
  })
}

/// Writes each solution's objective values as one comma-separated row.
pub fn write_objectives(
  path: &Path,
  population: &[Solution],
) -> Result<(), Error> {
  write_rows(path, population, |solution| {
    solution.objectives().iter().join(",")
  })
}

#[cfg(test)]
mod tests {
  use std::fs;

  use super::*;

  fn population() -> Vec<Solution> {
    vec![
      Solution::new(vec![0.5, 1.0], vec![0.5, 4.0]),
      Solution::new(vec![0.2, 0.0], vec![0.2, 5.0]),
    ]
  }

  #[test]
  fn test_variables_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("variables.csv");
    write_variables(&path, &population()).unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "0.5,1\n0.2,0\n");
  }

  #[test]
  fn test_objectives_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("objectives.csv");
    write_objectives(&path, &population()).unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "0.5,4\n0.2,5\n");
  }

  #[test]
  fn test_unwritable_path_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("variables.csv");
    let result = write_variables(&path, &population());
    assert!(matches!(result, Err(Error::Report { .. })));
  }
}
