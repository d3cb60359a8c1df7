use crate::{Bounds, LocalPosition, Offset, Orientation, Size, SourceId, ViewType};

/// Read/write access to the host's laid-out children.
///
/// The engine never owns UI objects: it only holds `View` handles and asks the host to act on
/// them. Handles are compared with `==` to recognize the pinned header among the children.
pub trait ViewportAccessor {
    type View: Clone + PartialEq;

    fn child_count(&self) -> usize;
    fn child_at(&self, index: usize) -> Option<Self::View>;
    /// Item position currently bound to `view`, if any.
    fn position_of(&self, view: &Self::View) -> Option<usize>;
    fn view_type_of(&self, view: &Self::View) -> ViewType;
    /// Whether `view` belongs to an item that was removed or whose binding is stale.
    fn is_removed_or_invalid(&self, _view: &Self::View) -> bool {
        false
    }
    /// Drawn bounds of `view` in viewport coordinates.
    fn bounds(&self, view: &Self::View) -> Bounds;
    fn viewport_size(&self) -> Size;

    /// Temporarily removes `view` from the underlying layout algorithm's child bookkeeping.
    fn detach(&mut self, view: &Self::View);
    fn attach(&mut self, view: &Self::View);
    /// Adds `view` as a child that the underlying layout algorithm must ignore.
    fn add_ignored(&mut self, view: &Self::View);
    /// Stops ignoring `view` and removes it from the children.
    fn remove_ignored(&mut self, view: &Self::View);
    /// Measures `view` and places it at the near edge, filling the cross axis.
    fn measure_and_place(&mut self, view: &Self::View, orientation: Orientation);
    fn set_translation(&mut self, view: &Self::View, translation: Offset);
    fn set_visible(&mut self, _view: &Self::View, _visible: bool) {}

    /// Delegates a scroll request to the underlying layout algorithm, unmodified.
    ///
    /// `offset` is the distance of the item from the near edge; `None` lets the host choose.
    fn scroll_to_position(&mut self, position: usize, offset: Option<i32>);
}

/// Supplies and takes back view instances.
pub trait Recycler: ViewportAccessor {
    /// Returns a view bound to `position`.
    fn instantiate(&mut self, position: usize) -> Self::View;
    fn rebind(&mut self, view: &Self::View, position: usize);
    fn release(&mut self, view: Self::View);
}

/// The item collection behind the list.
pub trait ItemSource {
    fn item_count(&self) -> usize;
    fn item_view_type(&self, position: usize) -> ViewType;

    /// Resolves a global position to the leaf source that owns it.
    ///
    /// Composite collections should override this (see [`crate::CompositeSource`]); the header
    /// predicate is always queried with the resolved pair.
    fn resolve(&self, position: usize) -> Option<LocalPosition> {
        (position < self.item_count()).then(|| LocalPosition::root(position))
    }
}

/// Optional hooks a leaf source can implement to adjust views while they act as pinned headers.
///
/// `teardown_header_view` always follows a matching `setup_header_view` before the view is
/// released.
pub trait HeaderHooks: ViewportAccessor {
    fn setup_header_view(&mut self, _source: SourceId, _view: &Self::View) {}
    fn teardown_header_view(&mut self, _source: SourceId, _view: &Self::View) {}
}

/// Everything the engine needs from its host.
pub trait StickyHost: Recycler + ItemSource + HeaderHooks {}

impl<T: Recycler + ItemSource + HeaderHooks> StickyHost for T {}
