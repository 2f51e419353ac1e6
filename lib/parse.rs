//! Distance-file parsing (spec.md §6): a leading integer `N`, followed by
//! either the full `N*N` matrix or the strict `N*(N-1)/2` lower triangle,
//! whitespace-insensitive. Plays the same role the teacher's `parse.rs`
//! plays for its own external format (there: JSON game state; here: a
//! whitespace-separated integer stream), just with a different grammar.

use crate::distance::DistanceMatrix;
use crate::error::{Result, SolverError};

/// Parse the contents of a distance file into a `DistanceMatrix`.
pub fn parse_distance_file(contents: &str) -> Result<DistanceMatrix> {
    let mut tokens = contents.split_whitespace();

    let n: usize = tokens
        .next()
        .ok_or_else(|| SolverError::MalformedMatrix("input is empty".to_string()))?
        .parse()
        .map_err(|_| SolverError::MalformedMatrix("leading N is not an integer".to_string()))?;

    let values: Vec<i64> = tokens
        .map(|tok| {
            let v: i64 = tok
                .parse()
                .map_err(|_| SolverError::MalformedMatrix(format!("not an integer: {:?}", tok)))?;
            if v < 0 {
                return Err(SolverError::MalformedMatrix(format!("negative distance: {}", v)));
            }
            Ok(v)
        })
        .collect::<Result<_>>()?;

    DistanceMatrix::from_values(n, &values)
}
