//! Admissible lower-bound schemes for branch-and-bound pruning (spec.md
//! §4.2). Modeled as a capability trait, per the teacher's `Goal` trait in
//! `goals/branch.rs`: the DFS Engine is generic over `BoundOracle` rather
//! than branching on an enum at every node.

use crate::distance::DistanceMatrix;

/// A pluggable admissible lower bound. Implementations must guarantee
/// `lb(partial) <= cost_of_any_extension(partial)`.
///
/// Scheme A (`MinEdgeBound`) only implements `lb_from_scratch` meaningfully;
/// its `lb_incremental` recomputes from scratch and ignores `parent_bound`.
/// Scheme B (`AveragedEdgeBound`) implements the O(1) incremental update
/// described in spec.md §4.2.
pub trait BoundOracle: Send + Sync {
    /// Bound for a partial tour computed from scratch: `cost` plus a
    /// per-city term summed over every unvisited city. O(N).
    fn lb_from_scratch(&self, distance: &DistanceMatrix, cost: i64, visited_mask: u32) -> i64;

    /// Bound for a child node reached by the edge `prev -> cur`, given the
    /// parent's own bound (`parent_bound`). Scheme B computes this in O(1);
    /// Scheme A ignores `parent_bound` and falls back to
    /// `lb_from_scratch(new_cost, new_visited_mask)`.
    fn lb_incremental(
        &self,
        distance: &DistanceMatrix,
        parent_bound: i64,
        prev: usize,
        cur: usize,
        new_cost: i64,
        new_visited_mask: u32,
    ) -> i64;
}

#[inline]
fn sum_over_unvisited(
    distance: &DistanceMatrix,
    visited_mask: u32,
    per_city: impl Fn(&DistanceMatrix, usize) -> i64,
) -> i64 {
    let n = distance.n();
    let mut unvisited = !visited_mask & ((1u32 << n) - 1);
    let mut sum = 0;
    while unvisited != 0 {
        let i = unvisited.trailing_zeros() as usize;
        unvisited &= unvisited - 1;
        sum += per_city(distance, i);
    }
    sum
}

/// Scheme A: minimum outgoing edge, evaluated from scratch every time.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinEdgeBound;

impl BoundOracle for MinEdgeBound {
    fn lb_from_scratch(&self, distance: &DistanceMatrix, cost: i64, visited_mask: u32) -> i64 {
        cost + sum_over_unvisited(distance, visited_mask, |d, i| d.c1(i))
    }

    fn lb_incremental(
        &self,
        distance: &DistanceMatrix,
        _parent_bound: i64,
        _prev: usize,
        _cur: usize,
        new_cost: i64,
        new_visited_mask: u32,
    ) -> i64 {
        self.lb_from_scratch(distance, new_cost, new_visited_mask)
    }
}

/// Scheme B: two-edge averaged bound, with an O(1) incremental update.
#[derive(Debug, Clone, Copy, Default)]
pub struct AveragedEdgeBound;

impl AveragedEdgeBound {
    #[inline]
    fn averaged_edge(distance: &DistanceMatrix, i: usize) -> i64 {
        (distance.c1(i) + distance.c2(i)) / 2
    }
}

impl BoundOracle for AveragedEdgeBound {
    fn lb_from_scratch(&self, distance: &DistanceMatrix, cost: i64, visited_mask: u32) -> i64 {
        cost + sum_over_unvisited(distance, visited_mask, Self::averaged_edge)
    }

    fn lb_incremental(
        &self,
        distance: &DistanceMatrix,
        parent_bound: i64,
        prev: usize,
        cur: usize,
        _new_cost: i64,
        _new_visited_mask: u32,
    ) -> i64 {
        // `cur` contributed its averaged-edge term to `parent_bound` while
        // unvisited; in the child it contributes the real incoming edge
        // `prev -> cur` instead. Every other unvisited city is unaffected.
        parent_bound + distance.dist(prev, cur) - Self::averaged_edge(distance, cur)
    }
}
