use crate::{Bounds, PinEdge, ScanEdge, StickyHeadersOptions, ViewportAccessor};

/// The child that decides which section is in view.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Anchor<V> {
    pub(crate) view: V,
    pub(crate) child_index: usize,
    pub(crate) position: usize,
}

/// Finds the first eligible anchor, scanning children from `scan`'s edge.
///
/// Skips the pinned header, removed/invalid children and children that are entirely outside the
/// viewport on the side the layout grows from. Returns `None` when no child qualifies.
pub(crate) fn resolve_anchor<H: ViewportAccessor>(
    host: &H,
    pinned: Option<&H::View>,
    options: &StickyHeadersOptions,
    scan: ScanEdge,
) -> Option<Anchor<H::View>> {
    let viewport_main = options.orientation.main(host.viewport_size());
    let accept = |child_index: usize| -> Option<Anchor<H::View>> {
        let view = host.child_at(child_index)?;
        if pinned == Some(&view) || host.is_removed_or_invalid(&view) {
            return None;
        }
        if !is_valid_anchor(host.bounds(&view), options, viewport_main) {
            return None;
        }
        let position = host.position_of(&view)?;
        Some(Anchor {
            view,
            child_index,
            position,
        })
    };

    let count = host.child_count();
    match scan {
        ScanEdge::Near => (0..count).find_map(accept),
        ScanEdge::Far => (0..count).rev().find_map(accept),
    }
}

fn is_valid_anchor(bounds: Bounds, options: &StickyHeadersOptions, viewport_main: i32) -> bool {
    let axis = options.orientation;
    let t = options.translation_main();
    if options.reverse_layout {
        axis.leading_edge(bounds) as f32 <= viewport_main as f32 + t
    } else {
        axis.trailing_edge(bounds) as f32 >= t
    }
}

/// Whether the anchor has started to scroll past the edge the header is pinned to.
///
/// The pin edge drives this test for every geometry, including reversed layouts.
pub(crate) fn is_on_boundary(bounds: Bounds, options: &StickyHeadersOptions, viewport_main: i32) -> bool {
    let axis = options.orientation;
    let t = options.translation_main();
    match PinEdge::from_flag(options.stick_to_far_edge) {
        PinEdge::Near => (axis.leading_edge(bounds) as f32) < t,
        PinEdge::Far => axis.trailing_edge(bounds) as f32 > viewport_main as f32 + t,
    }
}
