//! Fixed-capacity FIFO over a pre-allocated ring of slots.

use crate::error::CafeError;

/// Largest capacity a single queue may be created with.
pub const MAX_CAPACITY: usize = 1 << 20;

/// Fixed-capacity, order-preserving queue.
///
/// Storage is allocated once with exactly `capacity` slots. The occupied slots
/// are the `len` slots starting at `head`, wrapping modulo `capacity`, so both
/// ends are O(1) and nothing is ever shifted or reallocated.
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    slots: Box<[Option<T>]>,
    head: usize,
    len: usize,
}

impl<T> BoundedQueue<T> {
    /// Allocate a queue with room for exactly `capacity` items.
    ///
    /// Capacities outside `1..=MAX_CAPACITY`, or that the allocator refuses,
    /// fail with `InvalidCapacity`.
    pub fn new(capacity: i64) -> Result<Self, CafeError> {
        let invalid = CafeError::InvalidCapacity(capacity);
        let len = usize::try_from(capacity)
            .ok()
            .filter(|&n| (1..=MAX_CAPACITY).contains(&n))
            .ok_or_else(|| invalid.clone())?;

        let mut slots = Vec::new();
        slots.try_reserve_exact(len).map_err(|_| invalid)?;
        slots.resize_with(len, || None);
        Ok(Self {
            slots: slots.into_boxed_slice(),
            head: 0,
            len: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Append `item` at the tail.
    pub fn enqueue(&mut self, item: T) -> Result<(), CafeError> {
        if self.is_full() {
            return Err(CafeError::QueueFull {
                capacity: self.capacity(),
            });
        }
        let tail = self.slot(self.len);
        self.slots[tail] = Some(item);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the item at the head.
    pub fn dequeue_front(&mut self) -> Result<T, CafeError> {
        if self.is_empty() {
            return Err(CafeError::QueueEmpty);
        }
        let item = self.slots[self.head].take().ok_or(CafeError::QueueEmpty)?;
        self.head = self.slot(1);
        self.len -= 1;
        Ok(item)
    }

    pub fn peek_front(&self) -> Result<&T, CafeError> {
        if self.is_empty() {
            return Err(CafeError::QueueEmpty);
        }
        self.slots[self.head].as_ref().ok_or(CafeError::QueueEmpty)
    }

    /// Items from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            offset: 0,
        }
    }

    /// Physical index of the slot `offset` positions after `head`.
    fn slot(&self, offset: usize) -> usize {
        (self.head + offset) % self.capacity()
    }
}

/// Front-to-back iterator over a [`BoundedQueue`].
pub struct Iter<'a, T> {
    queue: &'a BoundedQueue<T>,
    offset: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while self.offset < self.queue.len {
            let index = self.queue.slot(self.offset);
            self.offset += 1;
            if let Some(item) = self.queue.slots[index].as_ref() {
                return Some(item);
            }
        }
        None
    }
}

impl<'a, T> IntoIterator for &'a BoundedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(0)]
    #[case::negative(-3)]
    #[case::above_limit(MAX_CAPACITY as i64 + 1)]
    #[case::huge(i64::MAX)]
    fn rejects_non_positive_capacity(#[case] capacity: i64) {
        let err = BoundedQueue::<u32>::new(capacity).unwrap_err();
        assert_eq!(err, CafeError::InvalidCapacity(capacity));
    }

    #[test]
    fn accepts_the_largest_capacity() {
        let q = BoundedQueue::<u32>::new(MAX_CAPACITY as i64).unwrap();
        assert_eq!(q.capacity(), MAX_CAPACITY);
    }

    #[test]
    fn new_queue_is_empty() {
        let q = BoundedQueue::<u32>::new(4).unwrap();
        assert!(q.is_empty());
        assert!(!q.is_full());
        assert_eq!(q.len(), 0);
        assert_eq!(q.capacity(), 4);
    }

    #[test]
    fn preserves_fifo_order() {
        let mut q = BoundedQueue::new(3).unwrap();
        q.enqueue("a").unwrap();
        q.enqueue("b").unwrap();
        q.enqueue("c").unwrap();

        assert_eq!(q.dequeue_front(), Ok("a"));
        assert_eq!(q.dequeue_front(), Ok("b"));
        assert_eq!(q.dequeue_front(), Ok("c"));
        assert_eq!(q.dequeue_front(), Err(CafeError::QueueEmpty));
    }

    #[test]
    fn full_queue_rejects_and_keeps_contents() {
        let mut q = BoundedQueue::new(2).unwrap();
        q.enqueue(1).unwrap();
        q.enqueue(2).unwrap();

        assert_eq!(q.enqueue(3), Err(CafeError::QueueFull { capacity: 2 }));
        assert_eq!(q.len(), 2);
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn peek_does_not_remove() {
        let mut q = BoundedQueue::new(2).unwrap();
        assert_eq!(q.peek_front(), Err(CafeError::QueueEmpty));
        q.enqueue(7).unwrap();
        assert_eq!(q.peek_front(), Ok(&7));
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn wraps_around_without_losing_order() {
        let mut q = BoundedQueue::new(3).unwrap();
        let mut expected = 0;
        let mut next = 0;

        // Keep the ring partially full while head travels around it several times.
        for _ in 0..10 {
            while !q.is_full() {
                q.enqueue(next).unwrap();
                next += 1;
            }
            for _ in 0..2 {
                assert_eq!(q.dequeue_front(), Ok(expected));
                expected += 1;
            }
        }

        let rest: Vec<_> = q.iter().copied().collect();
        assert_eq!(rest, (expected..next).collect::<Vec<_>>());
    }

    #[test]
    fn requeue_of_front_item_moves_it_to_tail() {
        let mut q = BoundedQueue::new(3).unwrap();
        for n in [1, 2, 3] {
            q.enqueue(n).unwrap();
        }
        let front = q.dequeue_front().unwrap();
        q.enqueue(front).unwrap();
        assert_eq!((&q).into_iter().copied().collect::<Vec<_>>(), vec![2, 3, 1]);
    }

    #[test]
    fn single_slot_queue_alternates() {
        let mut q = BoundedQueue::new(1).unwrap();
        for n in 0..5 {
            q.enqueue(n).unwrap();
            assert!(q.is_full());
            assert_eq!(q.dequeue_front(), Ok(n));
        }
        assert!(q.is_empty());
    }
}
