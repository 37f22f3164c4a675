//! Pure, stateless aggregation functions over the clean record set.
//!
//! Each function consumes a (possibly pre-filtered) slice of
//! [`OrderRecord`](delivery_core::models::OrderRecord)s and produces one
//! reporting artifact (a scalar, a small table, or a labeled series),
//! recomputed from scratch on every call. Grouping preserves the key's own
//! ordering: chronological for dates, ascending for week numbers, and
//! first-seen order for strings, unless a sort is part of the contract.

pub mod company;
pub mod deliverers;
pub mod restaurants;

use std::collections::HashMap;
use std::hash::Hash;

/// Group `items` by `key_fn`, preserving the order in which keys first
/// appear in the input.
pub(crate) fn group_in_order<'a, T, K, F>(items: &'a [T], key_fn: F) -> Vec<(K, Vec<&'a T>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut slot_by_key: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&T>)> = Vec::new();

    for item in items {
        let key = key_fn(item);
        match slot_by_key.get(&key) {
            Some(&slot) => groups[slot].1.push(item),
            None => {
                slot_by_key.insert(key.clone(), groups.len());
                groups.push((key, vec![item]));
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_in_order_preserves_first_seen_order() {
        let items = ["b", "a", "b", "c", "a"];
        let groups = group_in_order(&items, |s| s.to_string());

        let keys: Vec<&str> = groups.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].1.len(), 2);
        assert_eq!(groups[2].1.len(), 1);
    }

    #[test]
    fn test_group_in_order_empty_input() {
        let items: [&str; 0] = [];
        assert!(group_in_order(&items, |s| s.to_string()).is_empty());
    }
}
