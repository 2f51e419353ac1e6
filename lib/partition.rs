//! The "standard balanced contiguous scheme" referenced by spec.md §4.5
//! (seed Tasks across workers) and reused, unmodified, by §4.4 (seed Tasks
//! across a worker's own threads): the first `len % parts` buckets get one
//! extra item, and no bucket holds more than `ceil(len / parts)` items.

/// Returns `parts` half-open `[start, end)` ranges covering `0..len`.
pub fn partition_contiguous(len: usize, parts: usize) -> Vec<(usize, usize)> {
    let parts = parts.max(1);
    let base = len / parts;
    let rem = len % parts;
    let mut out = Vec::with_capacity(parts);
    let mut start = 0;
    for p in 0..parts {
        let extra = if p < rem { 1 } else { 0 };
        let end = start + base + extra;
        out.push((start, end));
        start = end;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_every_index_exactly_once() {
        for len in 0..30 {
            for parts in 1..9 {
                let ranges = partition_contiguous(len, parts);
                assert_eq!(ranges.len(), parts);
                let mut expect_start = 0;
                for (start, end) in &ranges {
                    assert_eq!(*start, expect_start);
                    assert!(end >= start);
                    expect_start = *end;
                }
                assert_eq!(expect_start, len);
            }
        }
    }

    #[test]
    fn no_bucket_exceeds_ceil_and_extras_go_to_lowest_ranks() {
        let len = 11;
        let parts = 4;
        let ranges = partition_contiguous(len, parts);
        let sizes: Vec<usize> = ranges.iter().map(|(s, e)| e - s).collect();
        let ceil = (len + parts - 1) / parts;
        assert!(sizes.iter().all(|&s| s <= ceil));
        // 11 % 4 == 3, so the first three buckets get one extra item.
        assert_eq!(sizes, vec![3, 3, 3, 2]);
    }

    #[test]
    fn empty_seed_set_gives_every_rank_an_empty_range() {
        let ranges = partition_contiguous(0, 8);
        assert!(ranges.iter().all(|(s, e)| s == e));
    }
}
