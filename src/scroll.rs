use crate::header_index::HeaderIndex;

/// How a header-aware scroll request is forwarded to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ScrollPlan {
    /// Forward to the host right away; nothing to correct later.
    Direct { position: usize, offset: Option<i32> },
    /// Forward as requested, and replay once the covering header is bound and measured.
    Deferred { position: usize, offset: Option<i32> },
}

/// Plans a scroll to `position` so that it does not land hidden under its section's header.
///
/// `pinned` is the currently pinned header's position and size along the scroll axis.
pub(crate) fn plan_scroll(
    headers: &HeaderIndex,
    pinned: Option<(usize, i32)>,
    position: usize,
    offset: Option<i32>,
) -> ScrollPlan {
    let direct = |position| ScrollPlan::Direct { position, offset };

    let Some(header_index) = headers.find_floor(position) else {
        return direct(position);
    };
    if headers.contains(position) {
        return direct(position);
    }

    // Right below its header: show the header itself at the requested offset.
    if let Some(before) = position.checked_sub(1) {
        if headers.contains(before) {
            return direct(before);
        }
    }

    if let Some((pinned_position, size)) = pinned {
        if headers.find_exact(pinned_position) == Some(header_index) {
            let offset = offset.unwrap_or(0).saturating_add(size);
            return ScrollPlan::Direct {
                position,
                offset: Some(offset),
            };
        }
    }

    ScrollPlan::Deferred { position, offset }
}
