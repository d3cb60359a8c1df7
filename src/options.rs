use alloc::sync::Arc;

use crate::{Offset, Orientation, SourceId};

/// Decides whether the item at `position` inside `source` is a section header.
///
/// The position is local to the leaf source that owns the item (see [`crate::ItemSource::resolve`]).
pub type HeaderPredicate = Arc<dyn Fn(SourceId, usize) -> bool + Send + Sync>;

/// Configuration for [`crate::StickyHeaders`].
///
/// Cheap to clone: the predicate is stored in an `Arc`. Changing options does not touch the host;
/// the next layout pass picks them up.
#[derive(Clone)]
pub struct StickyHeadersOptions {
    pub orientation: Orientation,
    /// Mirrors the host list's own reverse layout flag.
    pub reverse_layout: bool,
    /// Pins the header to the far edge (bottom/right) instead of the near edge.
    pub stick_to_far_edge: bool,
    /// Offsets the pinned header relative to its default position.
    pub translation: Offset,
    /// When false, the list reports that it cannot scroll along its axis.
    pub scroll_enabled: bool,
    /// Header predicate. When `None` no header is ever tracked or pinned.
    pub is_header: Option<HeaderPredicate>,
}

impl StickyHeadersOptions {
    pub fn new(is_header: impl Fn(SourceId, usize) -> bool + Send + Sync + 'static) -> Self {
        Self {
            is_header: Some(Arc::new(is_header)),
            ..Self::default()
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_reverse_layout(mut self, reverse_layout: bool) -> Self {
        self.reverse_layout = reverse_layout;
        self
    }

    pub fn with_stick_to_far_edge(mut self, stick_to_far_edge: bool) -> Self {
        self.stick_to_far_edge = stick_to_far_edge;
        self
    }

    pub fn with_translation(mut self, translation: Offset) -> Self {
        self.translation = translation;
        self
    }

    pub fn with_scroll_enabled(mut self, scroll_enabled: bool) -> Self {
        self.scroll_enabled = scroll_enabled;
        self
    }

    pub fn with_is_header(
        mut self,
        is_header: Option<impl Fn(SourceId, usize) -> bool + Send + Sync + 'static>,
    ) -> Self {
        self.is_header = is_header.map(|f| Arc::new(f) as _);
        self
    }

    pub(crate) fn translation_main(&self) -> f32 {
        self.orientation.main_offset(self.translation)
    }
}

impl Default for StickyHeadersOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            reverse_layout: false,
            stick_to_far_edge: false,
            translation: Offset::ZERO,
            scroll_enabled: true,
            is_header: None,
        }
    }
}

impl core::fmt::Debug for StickyHeadersOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StickyHeadersOptions")
            .field("orientation", &self.orientation)
            .field("reverse_layout", &self.reverse_layout)
            .field("stick_to_far_edge", &self.stick_to_far_edge)
            .field("translation", &self.translation)
            .field("scroll_enabled", &self.scroll_enabled)
            .field("is_header", &self.is_header.is_some())
            .finish()
    }
}
