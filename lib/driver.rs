//! The Intra-Worker Parallel Driver (spec.md §4.4): a fixed pool of `T`
//! cooperative threads, each running its own DFS Engine over a contiguous
//! share of the worker's seed Tasks, all sharing one best-solution cell.
//! Grounded in the teacher's `lib/tree/dfs.rs::dfs_schedule`, which fans a
//! task list across a `scoped_threadpool::Pool` the same way.

use std::sync::Mutex;

use scoped_threadpool::Pool;

use crate::best::BestSolution;
use crate::bound::BoundOracle;
use crate::dfs;
use crate::distance::DistanceMatrix;
use crate::error::{Result, SolverError};
use crate::node::Node;
use crate::partition::partition_contiguous;

/**
    Run the DFS Engine across `threads` cooperative threads sharing `best`.
    `threads <= 1` (or fewer seeds than threads) degenerates to a single
    in-line DFS Engine call, as spec.md §4.4 requires.
**/
pub fn run_parallel<O: BoundOracle>(
    distance: &DistanceMatrix,
    oracle: &O,
    seeds: Vec<Node>,
    threads: usize,
    best: &BestSolution,
) -> Result<()> {
    let threads = threads.max(1);

    if threads == 1 || seeds.len() <= 1 {
        return dfs::run_dfs(distance, oracle, seeds, best);
    }

    let ranges = partition_contiguous(seeds.len(), threads);
    let first_error: Mutex<Option<SolverError>> = Mutex::new(None);

    let mut pool = Pool::new(threads as u32);
    pool.scoped(|scope| {
        for (start, end) in ranges {
            let share = seeds[start..end].to_vec();
            let first_error = &first_error;
            scope.execute(move || {
                if let Err(e) = dfs::run_dfs(distance, oracle, share, best) {
                    let mut guard = first_error.lock().unwrap();
                    if guard.is_none() {
                        *guard = Some(e);
                    }
                }
            });
        }
    });

    match first_error.into_inner().unwrap() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
