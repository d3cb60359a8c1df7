use alloc::vec::Vec;

use crate::{LocalPosition, SourceId};

/// Shape of a composite item collection: leaves concatenated in order, possibly nested.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceTree {
    Leaf { id: SourceId, count: usize },
    Concat(Vec<SourceTree>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Segment {
    id: SourceId,
    start: usize,
    count: usize,
}

/// A flattened [`SourceTree`] mapping global positions to `(source, local position)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompositeSource {
    segments: Vec<Segment>, // non-empty leaves, ascending `start`
    leaves: Vec<Segment>,   // every leaf in order, including empty ones
    total: usize,
}

impl CompositeSource {
    pub fn new(tree: &SourceTree) -> Self {
        let mut out = Self::default();
        out.flatten(tree);
        out
    }

    fn flatten(&mut self, tree: &SourceTree) {
        match tree {
            SourceTree::Leaf { id, count } => {
                let seg = Segment {
                    id: *id,
                    start: self.total,
                    count: *count,
                };
                self.leaves.push(seg);
                if *count > 0 {
                    self.segments.push(seg);
                }
                self.total = self.total.saturating_add(*count);
            }
            SourceTree::Concat(children) => {
                for child in children {
                    self.flatten(child);
                }
            }
        }
    }

    pub fn item_count(&self) -> usize {
        self.total
    }

    pub fn resolve(&self, position: usize) -> Option<LocalPosition> {
        if position >= self.total {
            return None;
        }
        let i = self
            .segments
            .partition_point(|s| s.start <= position)
            .checked_sub(1)?;
        let seg = self.segments[i];
        Some(LocalPosition {
            source: seg.id,
            position: position - seg.start,
        })
    }

    /// Number of items in the leaves before `id`, or `None` if `id` is not part of the tree.
    pub fn count_before(&self, id: SourceId) -> Option<usize> {
        self.leaves.iter().find(|s| s.id == id).map(|s| s.start)
    }

    /// Number of items in the leaves after `id`, or `None` if `id` is not part of the tree.
    pub fn count_after(&self, id: SourceId) -> Option<usize> {
        self.leaves
            .iter()
            .find(|s| s.id == id)
            .map(|s| self.total - s.start - s.count)
    }
}
