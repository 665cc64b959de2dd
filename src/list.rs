extern crate alloc;

use alloc::fmt;
use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::num::NonZeroUsize;

/// Arena index of the front sentinel. Its `next` is the most recently used entry.
pub(crate) const HEAD: usize = 0;
/// Arena index of the back sentinel. Its `prev` is the least recently used entry.
pub(crate) const TAIL: usize = 1;

/// A slot in the arena.
///
/// Occupied slots hold `Some(value)`. Sentinel slots and slots waiting on the
/// free list hold `None`.
struct Slot<T> {
    val: Option<T>,
    /// Index of the more recently used neighbour.
    prev: usize,
    /// Index of the less recently used neighbour.
    next: usize,
}

impl<T> Slot<T> {
    const fn sentinel(prev: usize, next: usize) -> Self {
        Slot {
            val: None,
            prev,
            next,
        }
    }
}

/// A doubly linked list with fixed capacity, stored in a contiguous arena.
///
/// Entries are addressed by their arena index, which stays stable for as long
/// as the entry is in the list, so callers can keep indices in a side table
/// (the cache's key index) and splice entries in O(1).
///
/// Slots 0 and 1 are permanent sentinels bracketing the live chain, so
/// insertion and removal never special-case an empty list or the ends.
/// Removed entries return their slot to a free list; the arena never holds
/// more than `cap + 2` slots.
///
/// # Examples
///
/// ```ignore
/// use core::num::NonZeroUsize;
///
/// let mut list = List::new(NonZeroUsize::new(3).unwrap());
/// let a = list.push_front(10).unwrap();
/// let b = list.push_front(20).unwrap();
///
/// list.move_to_front(a);
/// assert_eq!(list.pop_back(), Some(20));
/// ```
pub(crate) struct List<T> {
    /// Maximum number of items the list can hold.
    cap: NonZeroUsize,
    /// Current number of items in the list.
    len: usize,
    slots: Vec<Slot<T>>,
    /// Indices of vacated slots, reused before the arena grows.
    free: Vec<usize>,
}

impl<T> List<T> {
    /// Creates a new list that holds at most `cap` items.
    ///
    /// The arena and free list are reserved up front, so the list never
    /// reallocates while it stays within `cap`.
    pub(crate) fn new(cap: NonZeroUsize) -> List<T> {
        let mut slots = Vec::with_capacity(cap.get() + 2);
        slots.push(Slot::sentinel(HEAD, TAIL));
        slots.push(Slot::sentinel(HEAD, TAIL));

        List {
            cap,
            len: 0,
            slots,
            free: Vec::with_capacity(cap.get()),
        }
    }

    /// Returns the maximum number of items the list can hold.
    #[inline]
    pub(crate) fn cap(&self) -> NonZeroUsize {
        self.cap
    }

    /// Returns the current number of items in the list.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list contains no items.
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the list is at capacity.
    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.len == self.cap.get()
    }

    /// Returns true if `idx` addresses a live entry.
    #[inline]
    fn is_occupied(&self, idx: usize) -> bool {
        idx > TAIL && self.slots.get(idx).is_some_and(|slot| slot.val.is_some())
    }

    /// Returns the index of the most recently used entry.
    #[inline]
    #[allow(dead_code)]
    pub(crate) fn front(&self) -> Option<usize> {
        let idx = self.slots[HEAD].next;
        (idx != TAIL).then_some(idx)
    }

    /// Returns the index of the least recently used entry.
    #[inline]
    pub(crate) fn back(&self) -> Option<usize> {
        let idx = self.slots[TAIL].prev;
        (idx != HEAD).then_some(idx)
    }

    /// Adds a value at the front of the list.
    ///
    /// Returns the arena index of the new entry, or `None` if the list is full.
    pub(crate) fn push_front(&mut self, val: T) -> Option<usize> {
        if self.is_full() {
            return None;
        }

        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx].val = Some(val);
                idx
            }
            None => {
                self.slots.push(Slot {
                    val: Some(val),
                    prev: HEAD,
                    next: TAIL,
                });
                self.slots.len() - 1
            }
        };

        self.attach(idx);
        self.len += 1;
        Some(idx)
    }

    /// Splices the slot at `idx` between the front sentinel and the current head.
    ///
    /// The slot must not currently be linked into the chain.
    fn attach(&mut self, idx: usize) {
        let first = self.slots[HEAD].next;
        self.slots[idx].prev = HEAD;
        self.slots[idx].next = first;
        self.slots[first].prev = idx;
        self.slots[HEAD].next = idx;
    }

    /// Unlinks the slot at `idx`, reconnecting its neighbours to each other.
    ///
    /// The slot's own links are left stale; it is out of the chain until
    /// re-attached.
    fn detach(&mut self, idx: usize) {
        let (prev, next) = (self.slots[idx].prev, self.slots[idx].next);
        self.slots[prev].next = next;
        self.slots[next].prev = prev;
    }

    /// Moves a live entry to the front of the list.
    ///
    /// Sentinels and vacant slots are ignored.
    pub(crate) fn move_to_front(&mut self, idx: usize) {
        if !self.is_occupied(idx) || self.slots[HEAD].next == idx {
            return;
        }
        self.detach(idx);
        self.attach(idx);
    }

    /// Removes the entry at `idx` and returns its value.
    ///
    /// Returns `None` for sentinels and vacant slots. The slot goes back on
    /// the free list.
    pub(crate) fn remove(&mut self, idx: usize) -> Option<T> {
        if !self.is_occupied(idx) {
            return None;
        }

        self.detach(idx);
        let val = self.slots[idx].val.take();
        self.free.push(idx);
        self.len -= 1;
        val
    }

    /// Removes the last (least recently used) entry.
    pub(crate) fn pop_back(&mut self) -> Option<T> {
        let idx = self.back()?;
        self.remove(idx)
    }

    /// Returns a reference to the value at `idx`.
    #[inline]
    pub(crate) fn get(&self, idx: usize) -> Option<&T> {
        self.slots.get(idx)?.val.as_ref()
    }

    /// Returns a mutable reference to the value at `idx`.
    #[inline]
    pub(crate) fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.slots.get_mut(idx)?.val.as_mut()
    }

    /// Removes every entry, keeping the sentinels and the reserved arena.
    pub(crate) fn clear(&mut self) {
        self.slots.truncate(2);
        self.slots[HEAD].next = TAIL;
        self.slots[TAIL].prev = HEAD;
        self.free.clear();
        self.len = 0;
    }

    /// Iterates values from front (most recent) to back (least recent).
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.slots[HEAD].next,
            back: self.slots[TAIL].prev,
            remaining: self.len,
        }
    }

    /// Walks the chain in both directions and checks every link and count.
    #[cfg(test)]
    pub(crate) fn check_links(&self) -> bool {
        let mut count = 0;
        let mut prev = HEAD;
        let mut cur = self.slots[HEAD].next;
        while cur != TAIL {
            if self.slots[cur].prev != prev || self.slots[cur].val.is_none() {
                return false;
            }
            count += 1;
            if count > self.len {
                return false;
            }
            prev = cur;
            cur = self.slots[cur].next;
        }
        self.slots[TAIL].prev == prev
            && count == self.len
            && self.slots.len() - 2 == self.len + self.free.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("cap", &self.cap)
            .field("len", &self.len)
            .field("free", &self.free.len())
            .finish()
    }
}

/// Front-to-back iterator over the values of a [`List`].
pub(crate) struct Iter<'a, T> {
    list: &'a List<T>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let slot = &list.slots[self.front];
        self.front = slot.next;
        self.remaining -= 1;
        slot.val.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let slot = &list.slots[self.back];
        self.back = slot.prev;
        self.remaining -= 1;
        slot.val.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    fn list<T>(cap: usize) -> List<T> {
        List::new(NonZeroUsize::new(cap).unwrap())
    }

    #[test]
    fn test_construct_and_cap() {
        let list: List<u32> = list(3);
        assert_eq!(list.cap().get(), 3);
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert!(list.check_links());
    }

    #[test]
    fn test_push_front_orders_most_recent_first() {
        let mut list = list(3);
        let a = list.push_front(1).unwrap();
        let b = list.push_front(2).unwrap();
        let c = list.push_front(3).unwrap();
        assert_eq!(list.front(), Some(c));
        assert_eq!(list.back(), Some(a));
        assert_ne!(a, b);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert!(list.check_links());
    }

    #[test]
    fn test_push_front_when_full() {
        let mut list = list(2);
        assert!(list.push_front(1).is_some());
        assert!(list.push_front(2).is_some());
        assert!(list.is_full());
        assert_eq!(list.push_front(3), None);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_move_to_front() {
        let mut list = list(3);
        let a = list.push_front(1).unwrap();
        let _b = list.push_front(2).unwrap();
        let c = list.push_front(3).unwrap();

        list.move_to_front(a);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3, 2]);

        // Already at the front
        list.move_to_front(a);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3, 2]);

        list.move_to_front(c);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(list.len(), 3);
        assert!(list.check_links());
    }

    #[test]
    fn test_move_to_front_ignores_sentinels_and_vacant_slots() {
        let mut list = list(3);
        let a = list.push_front(1).unwrap();
        let b = list.push_front(2).unwrap();
        list.remove(a);

        list.move_to_front(HEAD);
        list.move_to_front(TAIL);
        list.move_to_front(a);
        list.move_to_front(99);

        assert_eq!(list.front(), Some(b));
        assert_eq!(list.len(), 1);
        assert!(list.check_links());
    }

    #[test]
    fn test_remove() {
        let mut list = list(3);
        let a = list.push_front(1).unwrap();
        let b = list.push_front(2).unwrap();
        let c = list.push_front(3).unwrap();

        assert_eq!(list.remove(b), Some(2));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(b), None);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 1]);

        // Double remove is a no-op
        assert_eq!(list.remove(b), None);
        assert_eq!(list.len(), 2);

        assert_eq!(list.remove(a), Some(1));
        assert_eq!(list.remove(c), Some(3));
        assert!(list.is_empty());
        assert!(list.check_links());
    }

    #[test]
    fn test_sentinels_are_never_removed() {
        let mut list = list(2);
        list.push_front(1).unwrap();
        assert_eq!(list.remove(HEAD), None);
        assert_eq!(list.remove(TAIL), None);
        assert_eq!(list.len(), 1);
        assert!(list.check_links());
    }

    #[test]
    fn test_pop_back() {
        let mut list = list(3);
        list.push_front(1).unwrap();
        list.push_front(2).unwrap();
        assert_eq!(list.pop_back(), Some(1));
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
        assert!(list.check_links());
    }

    #[test]
    fn test_free_slots_are_reused() {
        let mut list = list(2);
        let a = list.push_front(1).unwrap();
        let b = list.push_front(2).unwrap();

        assert_eq!(list.pop_back(), Some(1));
        let c = list.push_front(3).unwrap();
        assert_eq!(c, a);

        list.remove(b);
        let d = list.push_front(4).unwrap();
        assert_eq!(d, b);

        // The arena never grows past cap + sentinels
        for i in 0..100 {
            list.pop_back();
            list.push_front(i).unwrap();
        }
        assert_eq!(list.slots.len(), 4);
        assert!(list.check_links());
    }

    #[test]
    fn test_get_and_get_mut() {
        let mut list = list(2);
        let a = list.push_front(String::from("apple")).unwrap();
        assert_eq!(list.get(a).map(String::as_str), Some("apple"));
        if let Some(v) = list.get_mut(a) {
            v.push_str(" pie");
        }
        assert_eq!(list.get(a).map(String::as_str), Some("apple pie"));
        assert_eq!(list.get(HEAD), None);
        assert_eq!(list.get(42), None);
    }

    #[test]
    fn test_clear() {
        let mut list = list(3);
        list.push_front(1).unwrap();
        list.push_front(2).unwrap();
        list.remove(list.back().unwrap());
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert!(list.check_links());

        list.push_front(7).unwrap();
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![7]);
        assert!(list.check_links());
    }

    #[test]
    fn test_iter_both_ends() {
        let mut list = list(4);
        for i in 1..=4 {
            list.push_front(i).unwrap();
        }
        let mut iter = list.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(&4));
        assert_eq!(iter.next_back(), Some(&1));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next_back(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);

        assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_length_consistency_after_complex_operations() {
        let mut list = list(5);
        let mut live = Vec::new();
        for round in 0..50usize {
            match round % 4 {
                0 | 1 => {
                    if let Some(idx) = list.push_front(round) {
                        live.push(idx);
                    }
                }
                2 => {
                    if let Some(&idx) = live.first() {
                        list.move_to_front(idx);
                    }
                }
                _ => {
                    if let Some(idx) = live.pop() {
                        list.remove(idx);
                    }
                }
            }
            assert_eq!(list.len(), live.len());
            assert!(list.check_links());
        }
    }
}
