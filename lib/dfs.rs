//! The single-worker, explicit-stack branch-and-bound enumerator (spec.md
//! §4.3). Operates on a list of seed Tasks and a shared best-solution cell;
//! has no return value of its own.

use crate::best::BestSolution;
use crate::bound::BoundOracle;
use crate::distance::DistanceMatrix;
use crate::error::{Result, SolverError};
use crate::node::Node;

/**
    Starting stack capacity (spec.md §5: "about 2^15 Nodes is typical").
**/
const INITIAL_STACK_CAPACITY: usize = 1 << 15;

/**
    A hard ceiling standing in for "the explicit stack cannot grow": Rust's
    `Vec` cannot itself report allocation failure short of aborting the
    process, so this crate picks the "abort the whole computation" option
    spec.md §4.3/§7 permits, enforced at a capacity far beyond anything
    reachable for N <= 18 (never exercised by the tests in `tests/`).
**/
const MAX_STACK_CAPACITY: usize = 1 << 26;

#[cfg(feature = "countnodes")]
pub static NODES_EXPLORED: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);

/**
    Run the DFS Engine over `seeds`, updating `best` in place whenever a
    strictly better closed tour is found. Errors are fatal: the caller (the
    Parallel Driver) propagates them to the whole computation.
**/
pub fn run_dfs<O: BoundOracle>(
    distance: &DistanceMatrix,
    oracle: &O,
    seeds: Vec<Node>,
    best: &BestSolution,
) -> Result<()> {
    let n = distance.n();
    let mut stack: Vec<Node> = Vec::with_capacity(INITIAL_STACK_CAPACITY.min(MAX_STACK_CAPACITY));
    stack.extend(seeds);

    while let Some(node) = stack.pop() {
        #[cfg(feature = "countnodes")]
        NODES_EXPLORED.fetch_add(1, std::sync::atomic::Ordering::Relaxed);

        let b = best.cost();
        if node.cost >= b || node.bound >= b {
            continue; // PRUNED
        }

        if node.depth as usize == n {
            close_tour(distance, &node, best);
            continue; // COMPLETED
        }

        expand(distance, oracle, &node, best.cost(), &mut stack)?;
    }

    Ok(())
}

fn close_tour(distance: &DistanceMatrix, node: &Node, best: &BestSolution) {
    let total = node.cost + distance.dist(node.last_city as usize, 0);
    let b = best.cost();
    if total < b {
        let mut closed = node.path.clone();
        closed.push(0);
        if best.try_commit(total, &closed) {
            #[cfg(feature = "search_log")]
            log::debug!("new best tour: cost={} path={:?}", total, closed);
        }
    }
}

/**
    Enumerate `node`'s children in non-decreasing edge-cost order (ties by
    city index ascending), then push them onto the stack in reverse so the
    cheapest is popped first (spec.md §4.3, "Branch ordering").
**/
fn expand<O: BoundOracle>(
    distance: &DistanceMatrix,
    oracle: &O,
    node: &Node,
    best_cost: i64,
    stack: &mut Vec<Node>,
) -> Result<()> {
    let n = distance.n();
    let mut candidates: Vec<(i64, u8)> = Vec::new();
    let mut unvisited = !node.visited_mask & ((1u32 << n) - 1);
    while unvisited != 0 {
        let j = unvisited.trailing_zeros() as usize;
        unvisited &= unvisited - 1;
        candidates.push((distance.dist(node.last_city as usize, j), j as u8));
    }
    candidates.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));

    for (_, city) in candidates.into_iter().rev() {
        let child = node.child(distance, oracle, city);
        if child.cost >= best_cost || child.bound >= best_cost {
            continue;
        }
        if child.depth as usize == n {
            let closing_cost = child.cost + distance.dist(child.last_city as usize, 0);
            if closing_cost >= best_cost {
                continue;
            }
        }
        if stack.len() == stack.capacity() && stack.capacity() >= MAX_STACK_CAPACITY {
            return Err(SolverError::ResourceExhausted);
        }
        stack.push(child);
    }

    Ok(())
}
