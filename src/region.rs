//! Rectangle primitives.
//!
//! Two coordinate spaces show up in canvas computations:
//!
//! - **Screen space** ([`Region`]): signed origin, since a canvas may be
//!   positioned partially off the display.
//! - **Source space** ([`Rect`]): pixel coordinates inside a video frame,
//!   always non-negative.
//!
//! Edge arithmetic on [`Region`] is done in `i64`, so no combination of
//! `i32` origin and `u32` extent can overflow.

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Axis-aligned rectangle in screen coordinates.
///
/// The origin may be negative. A region with zero width or height is
/// *degenerate*: it covers no pixels, and blitters skip it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    /// Left edge, may be negative.
    pub x: i32,
    /// Top edge, may be negative.
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Region {
    /// Zero-size region at the origin.
    pub const EMPTY: Self = Self::new(0, 0, 0, 0);

    /// Create a new region.
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a region at the origin with the given size.
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// Build a region from its edges.
    ///
    /// Inverted edges (`right < left` or `bottom < top`) produce zero extent
    /// at `left` / `top`. Edges are clamped to the `i32` range.
    pub fn from_edges(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        let left = clamp_coord(left);
        let top = clamp_coord(top);
        let width = (right - left as i64).clamp(0, u32::MAX as i64) as u32;
        let height = (bottom - top as i64).clamp(0, u32::MAX as i64) as u32;
        Self::new(left, top, width, height)
    }

    /// Left edge (same as `x`).
    pub const fn left(&self) -> i64 {
        self.x as i64
    }

    /// Top edge (same as `y`).
    pub const fn top(&self) -> i64 {
        self.y as i64
    }

    /// Exclusive right edge, `x + width`.
    pub const fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Exclusive bottom edge, `y + height`.
    pub const fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Dimensions of this region.
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Number of pixels covered.
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Whether this region is degenerate (covers no pixels).
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether every pixel of `other` lies inside `self`.
    ///
    /// A degenerate `other` is contained when its position lies within the
    /// closed bounds of `self`.
    pub fn contains_region(&self, other: &Region) -> bool {
        other.left() >= self.left()
            && other.top() >= self.top()
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Overlap of two regions.
    ///
    /// Never fails. When the regions do not overlap on an axis, the result
    /// has zero extent on that axis and sits on the clamped boundary
    /// (`min(max(lefts), min(rights))`). Intersecting with a degenerate
    /// region always yields a degenerate region.
    pub fn intersect(self, other: Region) -> Region {
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        let left = self.left().max(other.left()).min(right);
        let top = self.top().max(other.top()).min(bottom);
        Region::from_edges(left, top, right, bottom)
    }
}

fn clamp_coord(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Axis-aligned rectangle in source-frame pixel coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Left column in the source frame.
    pub x: u32,
    /// Top row in the source frame.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect covering a whole `w × h` frame.
    pub const fn full(w: u32, h: u32) -> Self {
        Self::new(0, 0, w, h)
    }

    /// Whether this rect covers the full frame (no actual crop).
    pub fn is_full(&self, source_w: u32, source_h: u32) -> bool {
        self.x == 0 && self.y == 0 && self.width == source_w && self.height == source_h
    }

    /// Whether this rect covers no pixels.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
