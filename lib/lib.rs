//! Distributed branch-and-bound exact solver core for the symmetric
//! Travelling-Salesman Problem on instances of up to 18 cities.
//!
//! Five pieces, leaves-first: [`distance`] (the immutable cost matrix and
//! its derived edge tables), [`bound`] (admissible lower-bound schemes),
//! [`dfs`] (the single-worker explicit-stack enumerator), [`driver`] (its
//! fan-out across a worker's own threads) and [`coordinator`] (the
//! cross-worker seeding and result-collection protocol).

extern crate itertools;
extern crate rand;
extern crate scoped_threadpool;

pub mod best;
pub mod bound;
pub mod config;
pub mod coordinator;
pub mod dfs;
pub mod distance;
pub mod driver;
pub mod error;
pub mod node;
pub mod parse;
pub mod partition;

pub use best::BestSolution;
pub use bound::{AveragedEdgeBound, BoundOracle, MinEdgeBound};
pub use config::{BoundScheme, RunConfig};
pub use coordinator::{reduce_global, run_cluster, run_worker, seed_tasks_for, WorkerId, WorkerOutcome};
pub use distance::{DistanceMatrix, MAX_CITIES};
pub use error::{Result, SolverError};
pub use node::Node;
pub use parse::parse_distance_file;

use std::time::{Duration, Instant};

/// The user-facing result of a full solve: a closed optimal tour, or `None`
/// when no worker ever completed one (the `NoSolution` case of spec.md §7).
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub cost: i64,
    pub path: Vec<u8>,
    pub elapsed: Duration,
    pub world_size: usize,
}

/// Run a whole distributed solve in-process: seed, drive, reduce, gather.
/// This is the convenience entry point `src/main.rs` calls. A real
/// distributed deployment would instead call [`coordinator::run_worker`]
/// once per process/rank and ship its [`WorkerOutcome`] over whatever
/// transport it has, then call [`coordinator::reduce_global`] on rank 0.
pub fn solve(distance: &DistanceMatrix, config: RunConfig) -> Result<Option<SolveReport>> {
    let start = Instant::now();

    // N=1 has no first-hop cities at all (spec.md §8: "the trivial tour
    // 0 -> 0 has cost 0"); there is nothing to seed or partition.
    if distance.n() == 1 {
        return Ok(Some(SolveReport {
            cost: 0,
            path: vec![0, 0],
            elapsed: start.elapsed(),
            world_size: config.world_size.max(1),
        }));
    }

    let world_size = config.world_size.max(1);
    let outcome = match config.scheme {
        BoundScheme::MinEdge => {
            run_cluster(distance, &MinEdgeBound, world_size, config.threads_per_worker)?
        }
        BoundScheme::AveragedEdge => {
            run_cluster(distance, &AveragedEdgeBound, world_size, config.threads_per_worker)?
        }
    };

    Ok(outcome.map(|o| SolveReport {
        cost: o.best_cost,
        path: o.best_path,
        elapsed: start.elapsed(),
        world_size,
    }))
}
