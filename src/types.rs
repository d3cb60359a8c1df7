/// The scrolling axis of the host list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    /// Edge of `bounds` closest to the start of the scroll axis (top or left).
    pub fn leading_edge(self, bounds: Bounds) -> i32 {
        match self {
            Self::Vertical => bounds.top,
            Self::Horizontal => bounds.left,
        }
    }

    /// Edge of `bounds` closest to the end of the scroll axis (bottom or right).
    pub fn trailing_edge(self, bounds: Bounds) -> i32 {
        match self {
            Self::Vertical => bounds.bottom,
            Self::Horizontal => bounds.right,
        }
    }

    /// Extent of `bounds` along the scroll axis.
    pub fn size(self, bounds: Bounds) -> i32 {
        self.trailing_edge(bounds)
            .saturating_sub(self.leading_edge(bounds))
    }

    /// Extent of `bounds` across the scroll axis.
    pub fn cross_axis_size(self, bounds: Bounds) -> i32 {
        match self {
            Self::Vertical => bounds.right.saturating_sub(bounds.left),
            Self::Horizontal => bounds.bottom.saturating_sub(bounds.top),
        }
    }

    pub fn main(self, size: Size) -> i32 {
        match self {
            Self::Vertical => size.height,
            Self::Horizontal => size.width,
        }
    }

    pub fn main_offset(self, offset: Offset) -> f32 {
        match self {
            Self::Vertical => offset.y,
            Self::Horizontal => offset.x,
        }
    }

    /// Returns `offset` with its scroll-axis component replaced by `main`.
    pub fn with_main_offset(self, offset: Offset, main: f32) -> Offset {
        match self {
            Self::Vertical => Offset { x: offset.x, y: main },
            Self::Horizontal => Offset { x: main, y: offset.y },
        }
    }
}

/// Edges of a laid-out child in viewport coordinates, including any translation the host draws
/// it with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

/// A drawing offset in both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The viewport edge children are scanned from when looking for the anchor.
///
/// Computed once per pass from `reverse_layout` and `stick_to_far_edge`: it is `Far` when exactly
/// one of them is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanEdge {
    Near,
    Far,
}

impl ScanEdge {
    pub fn from_flags(reverse_layout: bool, stick_to_far_edge: bool) -> Self {
        if reverse_layout != stick_to_far_edge {
            Self::Far
        } else {
            Self::Near
        }
    }
}

/// The viewport edge the pinned header is drawn against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinEdge {
    Near,
    Far,
}

impl PinEdge {
    pub fn from_flag(stick_to_far_edge: bool) -> Self {
        if stick_to_far_edge {
            Self::Far
        } else {
            Self::Near
        }
    }
}

/// Identifies a leaf item source inside a (possibly nested) composite collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceId(pub u32);

impl SourceId {
    /// The id used by collections that are not composites.
    pub const ROOT: Self = Self(0);
}

/// A global item position resolved down to its originating source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalPosition {
    pub source: SourceId,
    pub position: usize,
}

impl LocalPosition {
    pub fn root(position: usize) -> Self {
        Self {
            source: SourceId::ROOT,
            position,
        }
    }
}

pub type ViewType = u32;
