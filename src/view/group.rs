//! Order-preserving grouping by a derived key.

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

/// One bucket of a grouping: the key and its items in source order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group<K, T> {
    /// Grouping key.
    pub key: K,
    /// Items sharing the key, in source order.
    pub items: Vec<T>,
}

impl<K, T> Group<K, T> {
    /// Number of items in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the group holds no items. Never the case for
    /// groups produced by [`group_by`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Groups `items` by `key_fn`.
///
/// Groups appear in first-seen key order; within a group, items keep
/// their source order. Pure and deterministic: the same input always
/// yields the same groups in the same order.
pub fn group_by<'a, T, K, F>(items: &'a [T], mut key_fn: F) -> Vec<Group<K, &'a T>>
where
    K: Eq + Hash + Clone,
    F: FnMut(&'a T) -> K,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<Group<K, &'a T>> = Vec::new();

    for item in items {
        let key = key_fn(item);
        match slots.get(&key).and_then(|&slot| groups.get_mut(slot)) {
            Some(group) => group.items.push(item),
            None => {
                slots.insert(key.clone(), groups.len());
                groups.push(Group {
                    key,
                    items: vec![item],
                });
            }
        }
    }

    groups
}
