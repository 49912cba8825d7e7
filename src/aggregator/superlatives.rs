//! Best-of picks and ranking tables.
//!
//! All picks are linear scans with a strict comparison against the running
//! best, so on equal values the record met first keeps the title. Sorting
//! uses the stable `sort_by` for the same reason.

use std::cmp::Ordering;

/// Record with the largest key, earliest wins ties
pub fn pick_max<T, K, F>(items: &[T], key: F) -> Option<&T>
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    pick_by(items, key, Ordering::Greater)
}

/// Record with the smallest key, earliest wins ties
pub fn pick_min<T, K, F>(items: &[T], key: F) -> Option<&T>
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    pick_by(items, key, Ordering::Less)
}

fn pick_by<T, K, F>(items: &[T], key: F, wanted: Ordering) -> Option<&T>
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    let mut iter = items.iter();
    let mut best = iter.next()?;
    let mut best_key = key(best);

    for item in iter {
        let item_key = key(item);
        if item_key.partial_cmp(&best_key) == Some(wanted) {
            best = item;
            best_key = item_key;
        }
    }

    Some(best)
}

/// Like [`pick_max`], restricted to records that pass `qualifies`
pub fn pick_max_qualified<T, K, F, Q>(items: &[T], qualifies: Q, key: F) -> Option<&T>
where
    F: Fn(&T) -> K,
    K: PartialOrd,
    Q: Fn(&T) -> bool,
{
    let qualified: Vec<&T> = items.iter().filter(|item| qualifies(*item)).collect();
    pick_max(&qualified, |item| key(*item)).copied()
}

/// Like [`pick_min`], restricted to records that pass `qualifies`
pub fn pick_min_qualified<T, K, F, Q>(items: &[T], qualifies: Q, key: F) -> Option<&T>
where
    F: Fn(&T) -> K,
    K: PartialOrd,
    Q: Fn(&T) -> bool,
{
    let qualified: Vec<&T> = items.iter().filter(|item| qualifies(*item)).collect();
    pick_min(&qualified, |item| key(*item)).copied()
}

/// Descending stable sort by `key`, truncated to `limit`
pub fn top_by<T, F>(items: &[T], limit: usize, key: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> u32,
{
    let mut ranked = items.to_vec();
    ranked.sort_by(|a, b| key(b).cmp(&key(a)));
    ranked.truncate(limit);
    ranked
}

/// Like [`top_by`], dropping records whose key is zero first
pub fn top_positive_by<T, F>(items: &[T], limit: usize, key: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> u32,
{
    let positive: Vec<T> = items.iter().filter(|item| key(*item) > 0).cloned().collect();
    top_by(&positive, limit, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_max_first_wins_ties() {
        let items = [("a", 2), ("b", 5), ("c", 5)];
        assert_eq!(pick_max(&items, |i| i.1).unwrap().0, "b");
    }

    #[test]
    fn test_pick_min_first_wins_ties() {
        let items = [("a", 3), ("b", 1), ("c", 1)];
        assert_eq!(pick_min(&items, |i| i.1).unwrap().0, "b");
    }

    #[test]
    fn test_pick_empty() {
        let items: [(&str, u32); 0] = [];
        assert!(pick_max(&items, |i| i.1).is_none());
        assert!(pick_min(&items, |i| i.1).is_none());
    }

    #[test]
    fn test_pick_qualified() {
        let items = [("a", 1, 9.0), ("b", 4, 1.5), ("c", 3, 2.0)];

        let best = pick_max_qualified(&items, |i| i.1 >= 3, |i| i.2).unwrap();
        assert_eq!(best.0, "c");

        let lowest = pick_min_qualified(&items, |i| i.1 >= 3, |i| i.2).unwrap();
        assert_eq!(lowest.0, "b");

        assert!(pick_max_qualified(&items, |i| i.1 >= 10, |i| i.2).is_none());
    }

    #[test]
    fn test_top_positive_by() {
        let items = [("a", 0), ("b", 2), ("c", 7), ("d", 2), ("e", 1), ("f", 3), ("g", 1)];
        let top = top_positive_by(&items, 5, |i| i.1);
        let names: Vec<&str> = top.iter().map(|i| i.0).collect();
        assert_eq!(names, vec!["c", "f", "b", "d", "e"]);
    }

    #[test]
    fn test_top_by_keeps_zeroes() {
        let items = [("a", 0), ("b", 0)];
        assert_eq!(top_by(&items, 5, |i| i.1).len(), 2);
        assert!(top_positive_by(&items, 5, |i| i.1).is_empty());
    }
}
