use crate::grid::Direction;

/// Sliding window over the most recently chosen directions.
///
/// Backed by a ring that grows on demand up to `capacity`; `counts` always
/// mirrors the multiset of directions currently held, updated on every
/// push/evict pair.
#[derive(Clone, Debug)]
pub struct DirectionHistory {
    ring: Vec<Direction>,
    capacity: usize,
    head: usize,
    counts: [u32; 4],
}

impl DirectionHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            ring: Vec::new(),
            capacity,
            head: 0,
            counts: [0; 4],
        }
    }

    /// Appends `dir`, evicting the oldest entry once the window is full.
    pub fn record(&mut self, dir: Direction) {
        if self.ring.len() < self.capacity {
            self.ring.push(dir);
        } else {
            let oldest = std::mem::replace(&mut self.ring[self.head], dir);
            self.counts[oldest.index()] -= 1;
            self.head = (self.head + 1) % self.capacity;
        }
        self.counts[dir.index()] += 1;
    }

    pub fn clear(&mut self) {
        self.ring.clear();
        self.head = 0;
        self.counts = [0; 4];
    }

    pub fn count(&self, dir: Direction) -> u32 {
        self.counts[dir.index()]
    }

    pub fn counts(&self) -> [u32; 4] {
        self.counts
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Held directions, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        let (newer, older) = self.ring.split_at(self.head);
        older.iter().chain(newer.iter()).copied()
    }
}
