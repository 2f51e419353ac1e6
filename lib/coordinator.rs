//! The Distributed Coordinator (spec.md §4.5): partitions the `N-1`
//! first-hop seed Tasks across `world_size` workers (owner-computes,
//! deterministic), drives each worker's Parallel Driver, then performs a
//! two-phase global-minimum reduction and path-gather.
//!
//! spec.md treats `(rank, world_size)` as an opaque, implementation-defined
//! input and leaves the transport between workers unspecified beyond
//! "broadcast + global-min-reduce + selective gather". This pack carries no
//! MPI binding, so `run_worker` below is kept standalone: it is the entire
//! per-rank contract spec.md actually specifies, and a real distributed
//! front-end could call it once per process without depending on anything
//! else in this module. `run_cluster` is this crate's one concrete
//! transport — an in-process stand-in that runs every worker on its own OS
//! thread — used by `src/main.rs` and by the rank/thread-independence tests.

use crate::best::{BestSolution, SENTINEL};
use crate::bound::BoundOracle;
use crate::distance::DistanceMatrix;
use crate::driver;
use crate::error::Result;
use crate::node::Node;
use crate::partition::partition_contiguous;

/**
    A worker's identity: its rank and the total number of cooperating
    workers. Rank 0 has no search privileges beyond coordinating result
    collection and emission.
**/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerId {
    pub rank: usize,
    pub world_size: usize,
}

impl WorkerId {
    pub fn new(rank: usize, world_size: usize) -> Self {
        let world_size = world_size.max(1);
        assert!(rank < world_size, "rank {} out of range for world_size {}", rank, world_size);
        Self { rank, world_size }
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.rank == 0
    }
}

/**
    One worker's contribution to the search: its local best cost and path.
**/
#[derive(Debug, Clone)]
pub struct WorkerOutcome {
    pub rank: usize,
    pub best_cost: i64,
    pub best_path: Vec<u8>,
}

/**
    Build this worker's disjoint share of first-hop seed Tasks. The `N-1`
    first-hop cities `{1, ..., N-1}` are partitioned by the same balanced
    contiguous scheme the Parallel Driver uses for its own threads
    (spec.md §4.5): the first `(N-1) mod world_size` ranks get one extra
    Task, and no rank gets more than `ceil((N-1) / world_size)`.
**/
pub fn seed_tasks_for<O: BoundOracle>(
    distance: &DistanceMatrix,
    oracle: &O,
    id: WorkerId,
) -> Vec<Node> {
    let n = distance.n();
    if n <= 1 {
        return Vec::new();
    }
    let first_hop_count = n - 1;
    let ranges = partition_contiguous(first_hop_count, id.world_size);
    let (start, end) = ranges[id.rank];
    (start..end)
        .map(|idx| Node::seed(distance, oracle, (idx + 1) as u8))
        .collect()
}

/**
    Drive one worker's Parallel Driver on its owner-computes share of seed
    Tasks and return its local best. This is the standalone, per-rank entry
    point a real distributed deployment (one process per rank) would call.
**/
pub fn run_worker<O: BoundOracle>(
    distance: &DistanceMatrix,
    oracle: &O,
    id: WorkerId,
    threads_per_worker: usize,
) -> Result<WorkerOutcome> {
    let seeds = seed_tasks_for(distance, oracle, id);
    let best = BestSolution::new();
    driver::run_parallel(distance, oracle, seeds, threads_per_worker, &best)?;
    let (best_cost, best_path) = best.snapshot();
    Ok(WorkerOutcome {
        rank: id.rank,
        best_cost,
        best_path,
    })
}

/**
    Global-minimum reduction with a selective path-gather: the winner is the
    lowest-ranked worker among those whose local cost equals the global
    minimum (spec.md §4.5). Returns `None` (the `NoSolution` case, spec.md
    §7) if no worker ever completed a tour.
**/
pub fn reduce_global(outcomes: &[WorkerOutcome]) -> Option<WorkerOutcome> {
    outcomes
        .iter()
        .filter(|o| o.best_cost < SENTINEL)
        .min_by_key(|o| (o.best_cost, o.rank))
        .cloned()
}

/**
    In-process stand-in for the distributed runtime: runs every worker's
    Parallel Driver on its own OS thread (one thread per worker, distinct
    from that worker's own `threads_per_worker` intra-worker pool), then
    performs the two-phase reduction described above.
**/
pub fn run_cluster<O: BoundOracle>(
    distance: &DistanceMatrix,
    oracle: &O,
    world_size: usize,
    threads_per_worker: usize,
) -> Result<Option<WorkerOutcome>> {
    let world_size = world_size.max(1);
    let mut raw: Vec<Result<WorkerOutcome>> = Vec::with_capacity(world_size);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..world_size)
            .map(|rank| {
                scope.spawn(move || {
                    run_worker(distance, oracle, WorkerId::new(rank, world_size), threads_per_worker)
                })
            })
            .collect();
        for h in handles {
            raw.push(h.join().expect("worker thread panicked"));
        }
    });

    let outcomes: Vec<WorkerOutcome> = raw.into_iter().collect::<Result<_>>()?;
    Ok(reduce_global(&outcomes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::MinEdgeBound;

    fn sample() -> DistanceMatrix {
        DistanceMatrix::from_values(3, &[1, 2, 3]).unwrap() // scenario 1
    }

    #[test]
    fn world_size_does_not_change_the_global_optimum() {
        let d = sample();
        let oracle = MinEdgeBound;
        for world_size in [1, 2, 4, 8] {
            let outcome = run_cluster(&d, &oracle, world_size, 1).unwrap().unwrap();
            assert_eq!(outcome.best_cost, 6);
        }
    }

    #[test]
    fn empty_seed_ranks_still_participate() {
        // scenario 4: W=8 on a 3-city instance, only ranks 0 and 1 get seeds.
        let d = sample();
        let oracle = MinEdgeBound;
        let outcome = run_cluster(&d, &oracle, 8, 1).unwrap().unwrap();
        assert_eq!(outcome.best_cost, 6);
    }

    #[test]
    fn ties_are_broken_by_lowest_rank() {
        let outcomes = vec![
            WorkerOutcome { rank: 2, best_cost: 10, best_path: vec![0, 1, 2, 0] },
            WorkerOutcome { rank: 0, best_cost: 10, best_path: vec![0, 2, 1, 0] },
            WorkerOutcome { rank: 1, best_cost: 12, best_path: vec![0, 1, 2, 0] },
        ];
        let winner = reduce_global(&outcomes).unwrap();
        assert_eq!(winner.rank, 0);
        assert_eq!(winner.best_cost, 10);
    }

    #[test]
    fn no_solution_reduces_to_none() {
        let outcomes = vec![WorkerOutcome { rank: 0, best_cost: SENTINEL, best_path: vec![] }];
        assert!(reduce_global(&outcomes).is_none());
    }
}
