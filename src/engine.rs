use crate::anchor::{Anchor, is_on_boundary, resolve_anchor};
use crate::decider::{Decision, decide, pinned_main_offset};
use crate::header_index::{HeaderIndex, map_inserted, map_moved, map_removed};
use crate::lifecycle::{PinnedHeaderLifecycle, plan};
use crate::scroll::{ScrollPlan, plan_scroll};
use crate::state::PendingScroll;
use crate::{
    ItemSource, Offset, Orientation, PinEdge, SavedState, ScanEdge, StickyHeadersOptions,
    StickyHost, ViewportAccessor,
};

/// A headless sticky header engine.
///
/// This type is UI-agnostic:
/// - It does not own the list layout: the host's own algorithm still measures, recycles and
///   places rows.
/// - It keeps the header positions in sync with the item collection's structural changes.
/// - On each layout or scroll pass it decides which header to pin and where, and drives the
///   single pinned view through the host's [`crate::Recycler`].
///
/// Every entry point takes the host explicitly and runs to completion; there is no internal
/// threading.
#[derive(Clone, Debug)]
pub struct StickyHeaders<V> {
    options: StickyHeadersOptions,
    headers: HeaderIndex,
    lifecycle: PinnedHeaderLifecycle<V>,
    pending_scroll: Option<PendingScroll>,
    // Set when a header was bound while a scroll was pending; consumed by `on_layout_completed`.
    replay_armed: bool,
}

struct Target<V> {
    header: usize,
    adjacent: Option<usize>,
    anchor: Anchor<V>,
}

impl<V: Clone + PartialEq> StickyHeaders<V> {
    pub fn new(options: StickyHeadersOptions) -> Self {
        hdebug!(
            orientation = ?options.orientation,
            reverse_layout = options.reverse_layout,
            stick_to_far_edge = options.stick_to_far_edge,
            "StickyHeaders::new"
        );
        Self {
            options,
            headers: HeaderIndex::new(),
            lifecycle: PinnedHeaderLifecycle::default(),
            pending_scroll: None,
            replay_armed: false,
        }
    }

    pub fn options(&self) -> &StickyHeadersOptions {
        &self.options
    }

    /// Replaces the options. Takes effect on the next layout pass.
    ///
    /// Swapping the header predicate does not re-scan the items; follow it with
    /// [`Self::on_full_invalidate`].
    pub fn set_options(&mut self, options: StickyHeadersOptions) {
        self.options = options;
        htrace!(
            orientation = ?self.options.orientation,
            stick_to_far_edge = self.options.stick_to_far_edge,
            "StickyHeaders::set_options"
        );
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut StickyHeadersOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn header_positions(&self) -> &[usize] {
        self.headers.as_slice()
    }

    pub fn header_index(&self) -> &HeaderIndex {
        &self.headers
    }

    /// Returns `true` if `view` is the pinned header.
    pub fn is_pinned(&self, view: &V) -> bool {
        self.lifecycle.pinned_view() == Some(view)
    }

    pub fn pinned_position(&self) -> Option<usize> {
        self.lifecycle.pinned().map(|p| p.position)
    }

    pub fn pinned_view(&self) -> Option<&V> {
        self.lifecycle.pinned_view()
    }

    /// Offset the pinned header is currently drawn with; zero when nothing is pinned.
    pub fn translation(&self) -> Offset {
        self.lifecycle.translation()
    }

    pub fn has_pending_scroll(&self) -> bool {
        self.pending_scroll.is_some()
    }

    pub fn can_scroll_vertically(&self) -> bool {
        self.options.scroll_enabled && self.options.orientation == Orientation::Vertical
    }

    pub fn can_scroll_horizontally(&self) -> bool {
        self.options.scroll_enabled && self.options.orientation == Orientation::Horizontal
    }

    pub fn save_state(&self) -> SavedState {
        SavedState::from_pending(self.pending_scroll)
    }

    /// Restores a pending scroll; it is replayed after the next header bind.
    pub fn restore_state(&mut self, state: SavedState) {
        self.pending_scroll = state.pending();
        self.replay_armed = false;
    }

    // Structural changes.

    /// Call when the item source is attached or replaced.
    pub fn attach_source<H: StickyHost<View = V>>(&mut self, host: &mut H) {
        self.on_full_invalidate(host);
    }

    /// Rebuilds the header index from scratch.
    pub fn on_full_invalidate<H: StickyHost<View = V>>(&mut self, host: &mut H) {
        if self.options.is_header.is_none() {
            self.headers.clear();
        } else {
            let count = host.item_count();
            self.headers
                .rebuild(count, |pos| is_header_at(&self.options, &*host, pos));
        }
        hdebug!(headers = self.headers.len(), "rebuild header index");
        self.release_if_stale(host);
    }

    pub fn on_range_inserted<H: StickyHost<View = V>>(
        &mut self,
        host: &mut H,
        start: usize,
        count: usize,
    ) {
        htrace!(start, count, "on_range_inserted");
        self.headers
            .on_range_inserted(start, count, |pos| is_header_at(&self.options, &*host, pos));
        self.lifecycle
            .remap(|p| Some(map_inserted(p, start, count)));
        self.release_if_stale(host);
    }

    pub fn on_range_removed<H: StickyHost<View = V>>(
        &mut self,
        host: &mut H,
        start: usize,
        count: usize,
    ) {
        htrace!(start, count, "on_range_removed");
        self.headers.on_range_removed(start, count);
        if !self.lifecycle.remap(|p| map_removed(p, start, count)) {
            hdebug!(start, count, "pinned header item removed");
            self.lifecycle.release(host);
        }
        self.release_if_stale(host);
    }

    pub fn on_range_moved<H: StickyHost<View = V>>(
        &mut self,
        host: &mut H,
        from: usize,
        to: usize,
        count: usize,
    ) {
        htrace!(from, to, count, "on_range_moved");
        self.headers.on_range_moved(from, to, count);
        self.lifecycle
            .remap(|p| Some(map_moved(p, from, to, count)));
        self.release_if_stale(host);
    }

    /// Re-evaluates the predicate for items whose content changed in place.
    pub fn on_range_changed<H: StickyHost<View = V>>(
        &mut self,
        host: &mut H,
        start: usize,
        count: usize,
    ) {
        htrace!(start, count, "on_range_changed");
        self.headers
            .on_range_changed(start, count, |pos| is_header_at(&self.options, &*host, pos));
        self.release_if_stale(host);
    }

    fn release_if_stale<H: StickyHost<View = V>>(&mut self, host: &mut H) {
        let Some(position) = self.pinned_position() else {
            return;
        };
        if !self.headers.contains(position) {
            hwarn!(position, "pinned position is no longer a header, releasing it");
            self.lifecycle.release(host);
        }
    }

    // Layout and scroll passes.

    /// Runs `f` with the pinned header detached from the host's child bookkeeping.
    ///
    /// Use it around any call into the underlying layout algorithm that walks the children
    /// (scroll extent/offset/range queries, focus search).
    pub fn with_pinned_detached<H: StickyHost<View = V>, R>(
        &self,
        host: &mut H,
        f: impl FnOnce(&mut H) -> R,
    ) -> R {
        self.lifecycle.detach(host);
        let out = f(host);
        self.lifecycle.attach(host);
        out
    }

    /// Wraps a layout pass of the underlying algorithm, then refreshes the pin.
    ///
    /// During a pre-layout (predictive animation) pass the pin is left untouched.
    pub fn on_layout_children<H: StickyHost<View = V>, R>(
        &mut self,
        host: &mut H,
        pre_layout: bool,
        layout: impl FnOnce(&mut H) -> R,
    ) -> R {
        let out = self.with_pinned_detached(host, layout);
        if !pre_layout {
            self.update_pinned_header(host, true);
        }
        out
    }

    /// Wraps a scroll of the underlying algorithm by `delta` and refreshes the pin if anything
    /// moved. Returns the distance actually scrolled.
    pub fn scroll_by<H: StickyHost<View = V>>(
        &mut self,
        host: &mut H,
        delta: i32,
        scroll: impl FnOnce(&mut H, i32) -> i32,
    ) -> i32 {
        let scrolled = self.with_pinned_detached(host, |h| scroll(h, delta));
        if scrolled != 0 {
            self.update_pinned_header(host, false);
        }
        scrolled
    }

    /// Decides which header to pin and creates, rebinds, places or releases it accordingly.
    ///
    /// `layout` forces a rebind of an unchanged pin.
    pub fn update_pinned_header<H: StickyHost<View = V>>(&mut self, host: &mut H, layout: bool) {
        self.release_if_stale(host);

        let Some(target) = self.resolve_target(host) else {
            self.lifecycle.release(host);
            return;
        };
        htrace!(
            anchor = target.anchor.position,
            header = target.header,
            adjacent = ?target.adjacent,
            "pin header"
        );

        let axis = self.options.orientation;
        let current = self.lifecycle.current(host, target.header);
        let commands = plan(current, Some(target.header), layout);
        let bound = self.lifecycle.apply(host, &commands, axis);
        if bound && self.pending_scroll.is_some() {
            self.replay_armed = true;
        }

        let Some(pinned) = self.lifecycle.pinned() else {
            return;
        };
        let pinned_view = pinned.view.clone();
        let next = target
            .adjacent
            .and_then(|adjacent| find_adjacent_view(host, &target.anchor, adjacent, &pinned_view));

        let viewport_main = axis.main(host.viewport_size());
        let header_size = axis.size(host.bounds(&pinned_view));
        let main = pinned_main_offset(
            axis,
            PinEdge::from_flag(self.options.stick_to_far_edge),
            self.options.translation_main(),
            viewport_main,
            header_size,
            next.map(|view| host.bounds(&view)),
        );
        let translation = axis.with_main_offset(self.options.translation, main);
        self.lifecycle.place(host, translation);

        let original = (target.anchor.position == target.header).then(|| target.anchor.view.clone());
        self.lifecycle.hide_original(host, original);
    }

    fn resolve_target<H: StickyHost<View = V>>(&self, host: &H) -> Option<Target<V>> {
        if self.headers.is_empty() || host.child_count() == 0 {
            return None;
        }
        let scan = ScanEdge::from_flags(self.options.reverse_layout, self.options.stick_to_far_edge);
        let Some(anchor) = resolve_anchor(host, self.lifecycle.pinned_view(), &self.options, scan)
        else {
            hwarn!(children = host.child_count(), ?scan, "no anchor among laid-out children");
            return None;
        };
        let viewport_main = self.options.orientation.main(host.viewport_size());
        let on_boundary = is_on_boundary(host.bounds(&anchor.view), &self.options, viewport_main);
        match decide(&self.headers, anchor.position, on_boundary, scan) {
            Decision::Hide => None,
            Decision::Show { header, adjacent } => Some(Target {
                header,
                adjacent,
                anchor,
            }),
        }
    }

    // Header-aware scrolling.

    /// Scrolls to `position` with the host's default alignment.
    pub fn scroll_to_position<H: StickyHost<View = V>>(&mut self, host: &mut H, position: usize) {
        self.request_scroll(host, position, None);
    }

    /// Scrolls so that `position` lands at `offset` from the near edge, below its section's
    /// pinned header rather than under it.
    pub fn request_scroll<H: StickyHost<View = V>>(
        &mut self,
        host: &mut H,
        position: usize,
        offset: Option<i32>,
    ) {
        self.scroll_to(host, position, offset, true);
    }

    /// Forwards a scroll request without adjusting for headers. Clears any pending scroll.
    pub fn request_scroll_unadjusted<H: StickyHost<View = V>>(
        &mut self,
        host: &mut H,
        position: usize,
        offset: Option<i32>,
    ) {
        self.scroll_to(host, position, offset, false);
    }

    fn scroll_to<H: StickyHost<View = V>>(
        &mut self,
        host: &mut H,
        position: usize,
        offset: Option<i32>,
        adjust: bool,
    ) {
        self.pending_scroll = None;
        self.replay_armed = false;
        if !adjust {
            host.scroll_to_position(position, offset);
            return;
        }

        let axis = self.options.orientation;
        let pinned = self
            .lifecycle
            .pinned()
            .map(|p| (p.position, axis.size(host.bounds(&p.view))));
        match plan_scroll(&self.headers, pinned, position, offset) {
            ScrollPlan::Direct { position, offset } => {
                htrace!(position, ?offset, "scroll");
                host.scroll_to_position(position, offset);
            }
            ScrollPlan::Deferred { position, offset } => {
                hdebug!(position, ?offset, "scroll deferred until header is bound");
                self.pending_scroll = Some(PendingScroll { position, offset });
                host.scroll_to_position(position, offset);
            }
        }
    }

    /// Call once the host has finished measuring and laying out after a pass.
    ///
    /// Replays a pending scroll if a header was bound since it was issued.
    pub fn on_layout_completed<H: StickyHost<View = V>>(&mut self, host: &mut H) {
        if !core::mem::take(&mut self.replay_armed) {
            return;
        }
        if let Some(pending) = self.pending_scroll.take() {
            hdebug!(position = pending.position, "replay pending scroll");
            self.request_scroll(host, pending.position, pending.offset);
        }
    }

    // Visibility queries that ignore the pinned header.

    pub fn first_visible_position<H: ViewportAccessor<View = V>>(
        &self,
        host: &H,
        completely: bool,
    ) -> Option<usize> {
        (0..host.child_count())
            .filter_map(|i| host.child_at(i))
            .find(|view| !self.is_pinned(view) && self.is_visible(host, view, completely))
            .and_then(|view| host.position_of(&view))
    }

    pub fn last_visible_position<H: ViewportAccessor<View = V>>(
        &self,
        host: &H,
        completely: bool,
    ) -> Option<usize> {
        (0..host.child_count())
            .rev()
            .filter_map(|i| host.child_at(i))
            .find(|view| !self.is_pinned(view) && self.is_visible(host, view, completely))
            .and_then(|view| host.position_of(&view))
    }

    fn is_visible<H: ViewportAccessor<View = V>>(&self, host: &H, view: &V, completely: bool) -> bool {
        let axis = self.options.orientation;
        let bounds = host.bounds(view);
        let main = axis.main(host.viewport_size());
        let (lead, trail) = (axis.leading_edge(bounds), axis.trailing_edge(bounds));
        if completely {
            lead >= 0 && trail <= main
        } else {
            trail > 0 && lead < main
        }
    }
}

fn is_header_at<S: ItemSource + ?Sized>(
    options: &StickyHeadersOptions,
    source: &S,
    position: usize,
) -> bool {
    let Some(is_header) = &options.is_header else {
        return false;
    };
    source
        .resolve(position)
        .is_some_and(|local| is_header(local.source, local.position))
}

/// Finds the on-screen child bound to `adjacent`, never the pinned view itself.
///
/// Children are usually laid out in position order, so the anchor's child index is tried first.
fn find_adjacent_view<H: ViewportAccessor>(
    host: &H,
    anchor: &Anchor<H::View>,
    adjacent: usize,
    pinned: &H::View,
) -> Option<H::View> {
    let guess = if adjacent >= anchor.position {
        anchor.child_index.checked_add(adjacent - anchor.position)
    } else {
        anchor.child_index.checked_sub(anchor.position - adjacent)
    };
    let is_adjacent = |view: &H::View| view != pinned && host.position_of(view) == Some(adjacent);
    if let Some(view) = guess.and_then(|i| host.child_at(i)) {
        if is_adjacent(&view) {
            return Some(view);
        }
    }
    (0..host.child_count())
        .filter_map(|i| host.child_at(i))
        .find(|view| is_adjacent(view))
}
