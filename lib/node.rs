//! The Partial tour (Task / Node) of spec.md §3: `(depth, cost, last_city,
//! visited_mask, path, bound)`. Lives only on a DFS stack or as a freshly
//! built seed Task.

use crate::bound::BoundOracle;
use crate::distance::DistanceMatrix;

/// Bitfield of visited cities; bit `i` set means city `i` is on the path.
pub type VisitedMask = u32;

/// A partial tour. `bound` plays the role of spec.md's `parent_lb`: it is
/// this node's own lower bound, read by its children as the `parent_bound`
/// argument to `BoundOracle::lb_incremental`.
///
/// Invariants (spec.md §3): `popcount(visited_mask) == depth`,
/// `visited_mask`'s set bits are exactly `path`, `cost` is the sum of the
/// `depth - 1` edges in `path`, and `bound >= cost`.
#[derive(Debug, Clone)]
pub struct Node {
    pub depth: u8,
    pub cost: i64,
    pub last_city: u8,
    pub visited_mask: VisitedMask,
    pub path: Vec<u8>,
    pub bound: i64,
}

impl Node {
    /// Build a depth-2 seed Task for first-hop city `city` (the origin,
    /// city 0, is always `path[0]` and is not itself a seed).
    pub fn seed<O: BoundOracle>(distance: &DistanceMatrix, oracle: &O, city: u8) -> Self {
        let cost = distance.dist(0, city as usize);
        let visited_mask: VisitedMask = 1 | (1 << city);
        let bound = oracle.lb_from_scratch(distance, cost, visited_mask);
        Self {
            depth: 2,
            cost,
            last_city: city,
            visited_mask,
            path: vec![0, city],
            bound,
        }
    }

    /// Extend this node by visiting `city` next.
    pub fn child<O: BoundOracle>(&self, distance: &DistanceMatrix, oracle: &O, city: u8) -> Self {
        let new_cost = self.cost + distance.dist(self.last_city as usize, city as usize);
        let new_mask = self.visited_mask | (1 << city);
        let bound = oracle.lb_incremental(
            distance,
            self.bound,
            self.last_city as usize,
            city as usize,
            new_cost,
            new_mask,
        );
        let mut path = self.path.clone();
        path.push(city);
        Self {
            depth: self.depth + 1,
            cost: new_cost,
            last_city: city,
            visited_mask: new_mask,
            path,
            bound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::MinEdgeBound;

    fn sample() -> DistanceMatrix {
        DistanceMatrix::from_values(4, &[0, 10, 15, 20, 10, 0, 35, 25, 15, 35, 0, 30, 20, 25, 30, 0])
            .unwrap()
    }

    #[test]
    fn seed_and_child_preserve_mask_depth_invariant() {
        let d = sample();
        let oracle = MinEdgeBound;

        let seed = Node::seed(&d, &oracle, 1);
        assert_eq!(seed.depth as u32, seed.visited_mask.count_ones());
        assert_eq!(seed.path, vec![0, 1]);

        let child = seed.child(&d, &oracle, 2);
        assert_eq!(child.depth as u32, child.visited_mask.count_ones());
        assert_eq!(child.path, vec![0, 1, 2]);
        assert_eq!(child.cost, d.dist(0, 1) + d.dist(1, 2));
        assert!(child.bound >= child.cost);
    }
}
