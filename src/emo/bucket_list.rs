//! Fixed-capacity bucketed adjacency list.
//!
//! An arena of two flat arrays plus per-bucket head pointers. Appending links
//! the new slot in front of the bucket's previous head, so each bucket is a
//! singly-linked chain threaded through the arena with no per-edge
//! allocation. The non-dominated sorter uses one instance for domination
//! edges and one for grouping individuals by fitness.

use crate::error::EvoError;
use std::collections::HashMap;
use std::hash::Hash;

/// Sentinel terminating every chain.
const NIL: isize = -1;

/// A multi-map from bucket keys to integer payloads, backed by a fixed arena.
///
/// Insertion is O(1) and purely additive; [`reset`](Self::reset) reclaims all
/// slots without touching the arena allocation. Chains yield payloads in
/// reverse insertion order (most recent first).
///
/// # Examples
///
/// ```
/// use evokit::emo::BucketList;
///
/// let mut list: BucketList<usize> = BucketList::new(4);
/// list.add(7, 10).unwrap();
/// list.add(7, 11).unwrap();
/// let chain: Vec<usize> = list.bucket(&7).collect();
/// assert_eq!(chain, vec![11, 10]);
/// assert_eq!(list.bucket_len(&7), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct BucketList<K> {
    heads: HashMap<K, isize>,
    sizes: HashMap<K, usize>,
    payloads: Vec<usize>,
    nexts: Vec<isize>,
    capacity: usize,
}

impl<K: Eq + Hash + Copy> BucketList<K> {
    /// Creates a list with room for `capacity` payloads across all buckets.
    pub fn new(capacity: usize) -> Self {
        Self {
            heads: HashMap::new(),
            sizes: HashMap::new(),
            payloads: Vec::with_capacity(capacity),
            nexts: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `payload` to the bucket for `key`.
    ///
    /// The new entry becomes the bucket's head; the previous head (if any)
    /// becomes its successor.
    ///
    /// # Errors
    ///
    /// [`EvoError::CapacityExceeded`] once `len() == capacity()`.
    pub fn add(&mut self, key: K, payload: usize) -> Result<(), EvoError> {
        if self.payloads.len() >= self.capacity {
            return Err(EvoError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        let new_index = self.payloads.len() as isize;
        let previous_head = self.heads.get(&key).copied().unwrap_or(NIL);
        self.payloads.push(payload);
        self.nexts.push(previous_head);
        self.heads.insert(key, new_index);
        *self.sizes.entry(key).or_insert(0) += 1;
        Ok(())
    }

    /// Arena index of the bucket's most recently added entry.
    pub fn first_index(&self, key: &K) -> Option<isize> {
        self.heads.get(key).copied()
    }

    /// Payload and successor index at `index`.
    ///
    /// Any out-of-range index, including the `-1` chain terminator, yields
    /// `(0, -1)`, so walking a chain with this method terminates on its own.
    pub fn data(&self, index: isize) -> (usize, isize) {
        if index < 0 || index as usize >= self.payloads.len() {
            return (0, NIL);
        }
        (self.payloads[index as usize], self.nexts[index as usize])
    }

    /// Number of payloads in the bucket, or `None` for an unknown key.
    pub fn bucket_len(&self, key: &K) -> Option<usize> {
        self.sizes.get(key).copied()
    }

    /// Iterates one bucket's payloads, most recent first. Empty for an
    /// unknown key.
    pub fn bucket(&self, key: &K) -> BucketIter<'_, K> {
        BucketIter {
            list: self,
            cursor: self.first_index(key).unwrap_or(NIL),
        }
    }

    /// Total payloads stored.
    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    /// True when no payloads are stored.
    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }

    /// The fixed arena capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Empties every bucket and reclaims all slots. The arena allocation is
    /// retained for reuse.
    pub fn reset(&mut self) {
        self.heads.clear();
        self.sizes.clear();
        self.payloads.clear();
        self.nexts.clear();
    }
}

/// Iterator over a single bucket's chain.
pub struct BucketIter<'a, K> {
    list: &'a BucketList<K>,
    cursor: isize,
}

impl<K: Eq + Hash + Copy> Iterator for BucketIter<'_, K> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.cursor == NIL {
            return None;
        }
        let (payload, next) = self.list.data(self.cursor);
        self.cursor = next;
        Some(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Insertion and chains ----

    #[test]
    fn test_add_and_walk_single_bucket() {
        let mut list: BucketList<usize> = BucketList::new(8);
        for payload in [3, 1, 4] {
            list.add(0, payload).unwrap();
        }
        let chain: Vec<usize> = list.bucket(&0).collect();
        assert_eq!(chain, vec![4, 1, 3], "chains run most recent first");
        assert_eq!(list.bucket_len(&0), Some(3));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_interleaved_buckets_stay_separate() {
        let mut list: BucketList<usize> = BucketList::new(8);
        list.add(0, 10).unwrap();
        list.add(1, 20).unwrap();
        list.add(0, 11).unwrap();
        list.add(1, 21).unwrap();

        assert_eq!(list.bucket(&0).collect::<Vec<_>>(), vec![11, 10]);
        assert_eq!(list.bucket(&1).collect::<Vec<_>>(), vec![21, 20]);
        assert_eq!(list.bucket_len(&0), Some(2));
        assert_eq!(list.bucket_len(&1), Some(2));
    }

    #[test]
    fn test_manual_walk_via_indices() {
        let mut list: BucketList<u32> = BucketList::new(4);
        list.add(9, 100).unwrap();
        list.add(9, 200).unwrap();

        let mut collected = Vec::new();
        let mut cursor = list.first_index(&9).unwrap();
        while cursor != -1 {
            let (payload, next) = list.data(cursor);
            collected.push(payload);
            cursor = next;
        }
        assert_eq!(collected, vec![200, 100]);
    }

    // ---- Capacity ----

    #[test]
    fn test_capacity_exceeded() {
        let mut list: BucketList<usize> = BucketList::new(2);
        list.add(0, 1).unwrap();
        list.add(1, 2).unwrap();
        let err = list.add(0, 3).unwrap_err();
        assert!(matches!(err, EvoError::CapacityExceeded { capacity: 2 }));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_zero_capacity_rejects_everything() {
        let mut list: BucketList<usize> = BucketList::new(0);
        assert!(list.add(0, 1).is_err());
        assert!(list.is_empty());
    }

    // ---- Out-of-range reads ----

    #[test]
    fn test_data_out_of_range_is_terminal() {
        let mut list: BucketList<usize> = BucketList::new(4);
        list.add(0, 42).unwrap();

        assert_eq!(list.data(-1), (0, -1));
        assert_eq!(list.data(1), (0, -1), "unused slots are out of range");
        assert_eq!(list.data(100), (0, -1));
    }

    #[test]
    fn test_unknown_key() {
        let list: BucketList<usize> = BucketList::new(4);
        assert_eq!(list.first_index(&5), None);
        assert_eq!(list.bucket_len(&5), None);
        assert_eq!(list.bucket(&5).count(), 0);
    }

    // ---- Reset ----

    #[test]
    fn test_reset_reclaims_slots() {
        let mut list: BucketList<usize> = BucketList::new(2);
        list.add(0, 1).unwrap();
        list.add(0, 2).unwrap();
        assert!(list.add(0, 3).is_err());

        list.reset();
        assert!(list.is_empty());
        assert_eq!(list.first_index(&0), None);
        assert_eq!(list.capacity(), 2);

        list.add(7, 9).unwrap();
        assert_eq!(list.bucket(&7).collect::<Vec<_>>(), vec![9]);
        assert_eq!(list.data(1), (0, -1), "stale slot is unreachable after reset");
    }
}
