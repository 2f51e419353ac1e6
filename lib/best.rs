//! The best-solution cell (spec.md §3/§4.4): a `(best_cost, best_path)` pair
//! shared by every thread in a worker's Parallel Driver. Pruning reads are
//! relaxed; improving writes are serialized and re-checked under the lock.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

/// Stands in for "infinity": no tour has been found yet.
pub const SENTINEL: i64 = i64::MAX;

#[derive(Debug)]
pub struct BestSolution {
    cost: AtomicI64,
    path: Mutex<Vec<u8>>,
}

impl Default for BestSolution {
    fn default() -> Self {
        Self::new()
    }
}

impl BestSolution {
    pub fn new() -> Self {
        Self {
            cost: AtomicI64::new(SENTINEL),
            path: Mutex::new(Vec::new()),
        }
    }

    /// Racy, lock-free read for the pruning fast path. A stale value only
    /// costs extra exploration; it can never cause an incorrect commit
    /// because `try_commit` re-reads under the lock.
    #[inline]
    pub fn cost(&self) -> i64 {
        self.cost.load(Ordering::Relaxed)
    }

    /// Attempt to install a strictly better closed tour. Returns whether the
    /// commit happened. Readers of `path` via `snapshot` never observe a
    /// partially-written path: the vector is replaced wholesale under the
    /// lock before `cost` is updated.
    pub fn try_commit(&self, cost: i64, path: &[u8]) -> bool {
        if cost >= self.cost() {
            return false; // fast pre-check outside the lock
        }
        let mut guard = self.path.lock().unwrap();
        if cost < self.cost.load(Ordering::Relaxed) {
            *guard = path.to_vec();
            self.cost.store(cost, Ordering::Relaxed);
            true
        } else {
            false
        }
    }

    /// Atomic snapshot of `(cost, path)`, used once a worker's search is
    /// done and its local result needs to be gathered.
    pub fn snapshot(&self) -> (i64, Vec<u8>) {
        let guard = self.path.lock().unwrap();
        (self.cost.load(Ordering::Relaxed), guard.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_strictly_better_costs_commit() {
        let best = BestSolution::new();
        assert!(best.try_commit(10, &[0, 1, 2, 0]));
        assert!(!best.try_commit(10, &[0, 2, 1, 0])); // not strictly better
        assert!(!best.try_commit(15, &[0, 2, 1, 0]));
        assert!(best.try_commit(5, &[0, 2, 1, 0]));
        let (cost, path) = best.snapshot();
        assert_eq!(cost, 5);
        assert_eq!(path, vec![0, 2, 1, 0]);
    }

    #[test]
    fn cost_is_monotonically_non_increasing_under_races() {
        use std::sync::Arc;
        use std::thread;

        let best = Arc::new(BestSolution::new());
        let mut handles = vec![];
        for cost in (0..100).rev() {
            let best = Arc::clone(&best);
            handles.push(thread::spawn(move || {
                best.try_commit(cost, &[0, cost as u8 % 250, 0]);
            }));
        }
        let mut observed = vec![];
        for h in handles {
            h.join().unwrap();
            observed.push(best.cost());
        }
        for w in observed.windows(2) {
            assert!(w[1] <= w[0]);
        }
        assert_eq!(best.cost(), 0);
    }
}
