use alloc::vec::Vec;

/// Sorted, duplicate-free positions of the items that are section headers.
///
/// Lookups return indexes into [`HeaderIndex::as_slice`]. The structure is patched incrementally
/// from range notifications; every patch keeps the sequence strictly increasing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderIndex {
    positions: Vec<usize>,
}

impl HeaderIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_positions(positions: impl IntoIterator<Item = usize>) -> Self {
        let mut positions: Vec<usize> = positions.into_iter().collect();
        positions.sort_unstable();
        positions.dedup();
        Self { positions }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<usize> {
        self.positions.get(index).copied()
    }

    pub fn contains(&self, position: usize) -> bool {
        self.find_exact(position).is_some()
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    pub fn find_exact(&self, position: usize) -> Option<usize> {
        self.positions.binary_search(&position).ok()
    }

    /// Index of the rightmost header `<= position`.
    pub fn find_floor(&self, position: usize) -> Option<usize> {
        self.positions
            .partition_point(|&p| p <= position)
            .checked_sub(1)
    }

    /// Index of the leftmost header `>= position`.
    pub fn find_ceiling(&self, position: usize) -> Option<usize> {
        let i = self.lower_bound(position);
        (i < self.positions.len()).then_some(i)
    }

    // Number of headers strictly before `position`.
    fn lower_bound(&self, position: usize) -> usize {
        self.positions.partition_point(|&p| p < position)
    }

    /// Clears and repopulates the index by testing every position in `0..item_count`.
    pub fn rebuild(&mut self, item_count: usize, mut is_header: impl FnMut(usize) -> bool) {
        self.positions.clear();
        self.positions
            .extend((0..item_count).filter(|&pos| is_header(pos)));
    }

    /// Shifts headers at or after `start` by `count`, then tests the inserted positions.
    pub fn on_range_inserted(
        &mut self,
        start: usize,
        count: usize,
        mut is_header: impl FnMut(usize) -> bool,
    ) {
        if count == 0 {
            return;
        }
        let mut at = self.lower_bound(start);
        for p in &mut self.positions[at..] {
            *p = p.saturating_add(count);
        }
        for pos in start..start.saturating_add(count) {
            if is_header(pos) {
                self.positions.insert(at, pos);
                at += 1;
            }
        }
        self.debug_check();
    }

    /// Drops headers inside `[start, start + count)` and shifts the ones after it back.
    pub fn on_range_removed(&mut self, start: usize, count: usize) {
        if count == 0 {
            return;
        }
        let from = self.lower_bound(start);
        let to = self.lower_bound(start.saturating_add(count));
        self.positions.drain(from..to);
        for p in &mut self.positions[from..] {
            *p -= count;
        }
        self.debug_check();
    }

    /// Moves the block `[from, from + count)` so that it starts at `to`.
    ///
    /// Positions between the block and its destination shift by `count` in the opposite
    /// direction. Only the affected window `[min(from, to), max(from, to) + count)` is touched,
    /// and it maps onto itself, so re-sorting that window restores the order.
    pub fn on_range_moved(&mut self, from: usize, to: usize, count: usize) {
        if count == 0 || from == to {
            return;
        }
        // Malformed: the block or its destination runs past `usize::MAX`.
        if from.checked_add(count).is_none() || to.checked_add(count).is_none() {
            return;
        }
        let lo = self.lower_bound(from.min(to));
        let hi = self.lower_bound(from.max(to).saturating_add(count));
        let window = &mut self.positions[lo..hi];
        for p in window.iter_mut() {
            *p = map_moved(*p, from, to, count);
        }
        window.sort_unstable();
        self.debug_check();
    }

    /// Re-tests the predicate for positions whose content changed in place.
    pub fn on_range_changed(
        &mut self,
        start: usize,
        count: usize,
        mut is_header: impl FnMut(usize) -> bool,
    ) {
        for pos in start..start.saturating_add(count) {
            let flagged = is_header(pos);
            match (self.positions.binary_search(&pos), flagged) {
                (Ok(i), false) => {
                    self.positions.remove(i);
                }
                (Err(i), true) => self.positions.insert(i, pos),
                _ => {}
            }
        }
        self.debug_check();
    }

    fn debug_check(&self) {
        debug_assert!(
            self.positions.windows(2).all(|w| w[0] < w[1]),
            "HeaderIndex: positions must be strictly increasing"
        );
    }
}

/// Where `position` ends up after inserting `count` items at `start`.
pub(crate) fn map_inserted(position: usize, start: usize, count: usize) -> usize {
    if position >= start {
        position.saturating_add(count)
    } else {
        position
    }
}

/// Where `position` ends up after removing `[start, start + count)`, or `None` if it was removed.
pub(crate) fn map_removed(position: usize, start: usize, count: usize) -> Option<usize> {
    if position < start {
        Some(position)
    } else if position - start < count {
        None
    } else {
        Some(position - count)
    }
}

/// Where `position` ends up after moving `[from, from + count)` to start at `to`.
pub(crate) fn map_moved(position: usize, from: usize, to: usize, count: usize) -> usize {
    if count == 0 || from == to {
        return position;
    }
    let block_end = from.saturating_add(count);
    if (from..block_end).contains(&position) {
        return to.saturating_add(position - from);
    }
    if from < to {
        if position >= block_end && position < to.saturating_add(count) {
            return position - count;
        }
    } else if (to..from).contains(&position) {
        return position.saturating_add(count);
    }
    position
}
