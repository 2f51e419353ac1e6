//! The immutable N&times;N cost matrix and its derived cheapest/second-cheapest
//! outgoing edge tables (spec.md §4.1). Built once at start-up and shared
//! read-only for the remainder of the computation.

use crate::error::{Result, SolverError};

/// The largest instance this solver is designed for: the visited-mask
/// representation is a `u32` bitfield, so 18 is the natural ceiling that
/// still leaves headroom (bits 18..32 always clear).
pub const MAX_CITIES: usize = 18;

/// Symmetric non-negative integer distance matrix, plus the per-city
/// cheapest (`c1`) and second-cheapest (`c2`) outgoing edge, derived once.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    n: usize,
    d: Vec<i64>,
    c1: Vec<i64>,
    c2: Vec<i64>,
}

impl DistanceMatrix {
    /// Build a `DistanceMatrix` from a declared city count and a flat
    /// sequence of non-negative integers, auto-detecting whether `values`
    /// is the full `N*N` matrix or the strict `N*(N-1)/2` lower triangle
    /// (spec.md §6). `D[i][i]` is always forced to zero.
    pub fn from_values(n: usize, values: &[i64]) -> Result<Self> {
        if n == 0 || n > MAX_CITIES {
            return Err(SolverError::MalformedMatrix(format!(
                "N={} is out of the supported range [1, {}]",
                n, MAX_CITIES
            )));
        }

        let full_len = n * n;
        let tri_len = n * (n - 1) / 2;

        let d = if values.len() == full_len {
            Self::layout_full(n, values)
        } else if values.len() == tri_len {
            Self::layout_triangle(n, values)
        } else {
            return Err(SolverError::MalformedMatrix(format!(
                "expected {} (full matrix) or {} (lower triangle) integers for N={}, got {}",
                full_len,
                tri_len,
                n,
                values.len()
            )));
        };

        let (c1, c2) = Self::cheapest_edges(n, &d);
        Ok(Self { n, d, c1, c2 })
    }

    fn layout_full(n: usize, values: &[i64]) -> Vec<i64> {
        let mut d = values.to_vec();
        for i in 0..n {
            d[i * n + i] = 0;
        }
        d
    }

    fn layout_triangle(n: usize, values: &[i64]) -> Vec<i64> {
        let mut d = vec![0i64; n * n];
        let mut idx = 0;
        for row in 1..n {
            for col in 0..row {
                let v = values[idx];
                idx += 1;
                d[row * n + col] = v;
                d[col * n + row] = v;
            }
        }
        d
    }

    /// One pass per row; cities with fewer than two off-diagonal neighbors
    /// (`N < 3`) get a zero default for the missing entry.
    fn cheapest_edges(n: usize, d: &[i64]) -> (Vec<i64>, Vec<i64>) {
        let mut c1 = vec![0i64; n];
        let mut c2 = vec![0i64; n];
        for i in 0..n {
            let (mut best1, mut best2) = (i64::MAX, i64::MAX);
            for j in 0..n {
                if i == j {
                    continue;
                }
                let v = d[i * n + j];
                if v < best1 {
                    best2 = best1;
                    best1 = v;
                } else if v < best2 {
                    best2 = v;
                }
            }
            c1[i] = if best1 == i64::MAX { 0 } else { best1 };
            c2[i] = if best2 == i64::MAX { 0 } else { best2 };
        }
        (c1, c2)
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn dist(&self, i: usize, j: usize) -> i64 {
        self.d[i * self.n + j]
    }

    #[inline]
    pub fn c1(&self, i: usize) -> i64 {
        self.c1[i]
    }

    #[inline]
    pub fn c2(&self, i: usize) -> i64 {
        self.c2[i]
    }
}
