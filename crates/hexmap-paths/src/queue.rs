//! The search frontier: a binary min-heap with decrease-key.

const NOT_QUEUED: usize = usize::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Entry {
    priority: i32,
    item: usize,
}

impl Entry {
    // Ties break on the item index so expansion order is deterministic.
    #[inline]
    fn key(self) -> (i32, usize) {
        (self.priority, self.item)
    }
}

/// Min-heap of cell indices ordered by ascending priority.
///
/// Each queued item's heap slot is tracked in a position map indexed by
/// item, so [`decrease_key`](Self::decrease_key) repositions an entry in
/// O(log n) without searching for it. An item is queued at most once.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    heap: Vec<Entry>,
    slots: Vec<usize>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A frontier whose position map already covers items `0..items`.
    pub fn with_capacity(items: usize) -> Self {
        Self {
            heap: Vec::new(),
            slots: vec![NOT_QUEUED; items],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn contains(&self, item: usize) -> bool {
        self.slots.get(item).is_some_and(|&s| s != NOT_QUEUED)
    }

    /// Current priority of a queued item.
    pub fn priority_of(&self, item: usize) -> Option<i32> {
        let slot = *self.slots.get(item)?;
        self.heap.get(slot).map(|e| e.priority)
    }

    /// The minimum item without removing it.
    #[inline]
    pub fn peek_min(&self) -> Option<usize> {
        self.heap.first().map(|e| e.item)
    }

    /// Queue `item` with `priority`.
    ///
    /// # Panics
    ///
    /// If `item` is already queued.
    pub fn push(&mut self, item: usize, priority: i32) {
        assert!(!self.contains(item), "frontier: item {item} is already queued");
        if item >= self.slots.len() {
            self.slots.resize(item + 1, NOT_QUEUED);
        }
        let k = self.heap.len();
        self.heap.push(Entry { priority, item });
        self.slots[item] = k;
        self.sift_up(k);
    }

    /// Remove and return the item with the lowest priority.
    pub fn pop_min(&mut self) -> Option<usize> {
        let last = self.heap.pop()?;
        let min = if self.heap.is_empty() {
            last
        } else {
            let top = std::mem::replace(&mut self.heap[0], last);
            self.slots[last.item] = 0;
            self.sift_down(0);
            top
        };
        self.slots[min.item] = NOT_QUEUED;
        Some(min.item)
    }

    /// Lower the priority of a queued item. A priority that is not lower
    /// than the current one leaves the queue unchanged.
    ///
    /// # Panics
    ///
    /// If `item` is not queued.
    pub fn decrease_key(&mut self, item: usize, priority: i32) {
        let k = match self.slots.get(item) {
            Some(&k) if k != NOT_QUEUED => k,
            _ => panic!("frontier: decrease_key on item {item} which is not queued"),
        };
        if priority >= self.heap[k].priority {
            return;
        }
        self.heap[k].priority = priority;
        self.sift_up(k);
    }

    /// Empty the queue, keeping its allocations.
    pub fn clear(&mut self) {
        for e in self.heap.drain(..) {
            self.slots[e.item] = NOT_QUEUED;
        }
    }

    fn sift_up(&mut self, mut k: usize) {
        while k > 0 {
            let parent = (k - 1) / 2;
            if self.heap[k].key() >= self.heap[parent].key() {
                break;
            }
            self.swap(k, parent);
            k = parent;
        }
    }

    fn sift_down(&mut self, mut k: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * k + 1;
            if left >= n {
                break;
            }
            let right = left + 1;
            let child = if right < n && self.heap[right].key() < self.heap[left].key() {
                right
            } else {
                left
            };
            if self.heap[k].key() <= self.heap[child].key() {
                break;
            }
            self.swap(k, child);
            k = child;
        }
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots[self.heap[a].item] = a;
        self.slots[self.heap[b].item] = b;
    }
}
