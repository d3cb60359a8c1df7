/// Persisted engine state, round-tripped through the host's save/restore mechanism.
///
/// Only the pending header-aware scroll survives; header positions are rebuilt from the item
/// source and the pinned header is recreated by the first layout pass.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SavedState {
    pub pending_scroll_position: Option<usize>,
    pub pending_scroll_offset: Option<i32>,
}

/// A scroll request whose final offset depends on a header that is not bound yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PendingScroll {
    pub(crate) position: usize,
    /// `None` means "no explicit offset" (the host's default alignment).
    pub(crate) offset: Option<i32>,
}

impl SavedState {
    pub(crate) fn from_pending(pending: Option<PendingScroll>) -> Self {
        Self {
            pending_scroll_position: pending.map(|p| p.position),
            pending_scroll_offset: pending.and_then(|p| p.offset),
        }
    }

    pub(crate) fn pending(&self) -> Option<PendingScroll> {
        self.pending_scroll_position.map(|position| PendingScroll {
            position,
            offset: self.pending_scroll_offset,
        })
    }
}
