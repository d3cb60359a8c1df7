//! A headless sticky section header engine for virtualized, recycling lists.
//!
//! As the list scrolls, the header of the section in view is pinned to the edge of the viewport
//! until the next section's header arrives and pushes it off.
//!
//! This crate owns the hard parts:
//! - a sorted index of header positions, patched incrementally from structural changes
//! - the per-pass decision of which header to pin and at which offset
//! - the lifecycle of the single pinned header view (create, rebind, release)
//! - header-aware "scroll to position" with a deferred correction
//!
//! It is UI-agnostic. The host list is expected to provide (see [`StickyHost`]):
//! - access to its laid-out children and their bounds
//! - a recycler to obtain and release views
//! - the item collection and a header predicate
//! - structural change notifications and layout/scroll passes to wrap
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod composite;
mod decider;
mod engine;
mod header_index;
mod host;
mod lifecycle;
mod options;
mod scroll;
mod state;
mod types;


pub use composite::{CompositeSource, SourceTree};
pub use engine::StickyHeaders;
pub use header_index::HeaderIndex;
pub use host::{HeaderHooks, ItemSource, Recycler, StickyHost, ViewportAccessor};
pub use options::{HeaderPredicate, StickyHeadersOptions};
pub use state::SavedState;
pub use types::{
    Bounds, LocalPosition, Offset, Orientation, PinEdge, ScanEdge, Size, SourceId, ViewType,
};
