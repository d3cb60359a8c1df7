use crate::header_index::HeaderIndex;
use crate::{Bounds, Orientation, PinEdge, ScanEdge};

/// Outcome of one stickiness decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Decision {
    Hide,
    Show {
        header: usize,
        /// The next header in scan direction, if any; it pushes the pinned one out.
        adjacent: Option<usize>,
    },
}

/// Decides which header, if any, must be pinned for the anchor at position `anchor`.
pub(crate) fn decide(
    headers: &HeaderIndex,
    anchor: usize,
    anchor_on_boundary: bool,
    scan: ScanEdge,
) -> Decision {
    let (header, adjacent) = match scan {
        ScanEdge::Near => {
            let Some(i) = headers.find_floor(anchor) else {
                return Decision::Hide;
            };
            (headers.get(i), headers.get(i + 1))
        }
        ScanEdge::Far => {
            let Some(i) = headers.find_ceiling(anchor) else {
                return Decision::Hide;
            };
            (headers.get(i), i.checked_sub(1).and_then(|j| headers.get(j)))
        }
    };
    let Some(header) = header else {
        return Decision::Hide;
    };

    // The neighbouring header is already on screen right next to this one.
    let touching = match scan {
        ScanEdge::Near => header.checked_add(1),
        ScanEdge::Far => header.checked_sub(1),
    };
    if adjacent.is_some() && adjacent == touching {
        return Decision::Hide;
    }

    if header != anchor || anchor_on_boundary {
        Decision::Show { header, adjacent }
    } else {
        Decision::Hide
    }
}

/// Position of the pinned header along the scroll axis.
///
/// `next` is the incoming header's bounds; it clamps the pin so that it gets pushed out instead
/// of overlapped.
pub(crate) fn pinned_main_offset(
    axis: Orientation,
    edge: PinEdge,
    translation_main: f32,
    viewport_main: i32,
    header_size: i32,
    next: Option<Bounds>,
) -> f32 {
    match edge {
        PinEdge::Near => {
            let base = translation_main;
            match next {
                Some(b) => base.min(axis.leading_edge(b).saturating_sub(header_size) as f32),
                None => base,
            }
        }
        PinEdge::Far => {
            let base = translation_main + viewport_main.saturating_sub(header_size) as f32;
            match next {
                Some(b) => base.max(axis.trailing_edge(b) as f32),
                None => base,
            }
        }
    }
}
