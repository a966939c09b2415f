//! Stage 2: clip a placed canvas against the screen.
//!
//! Produces the regions a blitter works with:
//!
//! ```text
//!   clipped outer region
//!   ┌──────────────────────────┐
//!   │           TOP            │
//!   ├──────┬──────────┬────────┤
//!   │ LEFT │  inner   │ RIGHT  │
//!   ├──────┴──────────┴────────┤
//!   │          BOTTOM          │
//!   └──────────────────────────┘
//! ```
//!
//! Top and bottom span the full clipped outer width. Left and right only
//! span the band between them, so corners are painted exactly once. The
//! clipped inner region and the four empty regions tile the clipped outer
//! region with no gaps and no overlap.

use crate::inner::{FrameInfo, InnerLayout};
use crate::region::{Rect, Region};
use crate::visibility::{EmptyRegion, Visibility, VisibleRegion};

/// Result of stage 2.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClippedCanvas {
    /// Outer region restricted to the screen.
    pub clipped_outer_region: Region,
    /// Inner region restricted to the screen. Blit destination.
    pub clipped_inner_region: Region,
    /// Border regions to paint with the fill color, indexed by
    /// [`EmptyRegion`].
    pub empty_regions: [Region; 4],
    /// Which of the above are non-degenerate.
    pub visibility: Visibility,
    /// Part of the source frame that lands in `clipped_inner_region`, in
    /// source pixel coordinates. Blit source.
    pub source_subset: Rect,
}

impl ClippedCanvas {
    /// One of the four empty regions.
    pub fn empty_region(&self, which: EmptyRegion) -> Region {
        self.empty_regions[which.index()]
    }

    /// Raw visibility bitmask (bits 0–3 empty regions, bit 4 inner).
    pub fn visibility_mask(&self) -> u8 {
        self.visibility.bits()
    }

    /// Whether the frame is drawn at all.
    pub fn is_inner_visible(&self) -> bool {
        self.visibility.contains(VisibleRegion::Inner)
    }

    /// Empty regions that need painting.
    pub fn visible_empty_regions(&self) -> impl Iterator<Item = (EmptyRegion, Region)> + '_ {
        EmptyRegion::ALL
            .into_iter()
            .filter(|&e| self.visibility.contains(e.into()))
            .map(|e| (e, self.empty_regions[e.index()]))
    }

    /// Whether the blit reads less than the full frame.
    pub fn is_source_cropped(&self, frame: &FrameInfo) -> bool {
        !self.source_subset.is_full(frame.width, frame.height)
    }
}

impl InnerLayout {
    /// Clip against the screen. See [`clip()`].
    pub fn clip(&self, screen: Region, frame: &FrameInfo) -> ClippedCanvas {
        clip(self, screen, frame)
    }
}

/// Clip a placed canvas against `screen`.
///
/// Never fails. Anything off screen simply degenerates and loses its
/// visibility bit.
#[tracing::instrument(level = "trace", skip(layout, frame))]
pub fn clip(layout: &InnerLayout, screen: Region, frame: &FrameInfo) -> ClippedCanvas {
    let inner = layout.inner_region;
    let outer = layout.outer_region.intersect(screen);
    let clipped_inner = inner.intersect(screen);

    // Horizontal bands first: top and bottom own the corners.
    let band_top = inner.top().clamp(outer.top(), outer.bottom());
    let band_bottom = inner.bottom().clamp(band_top, outer.bottom());
    // Then the middle band is split into left / inner / right.
    let col_left = inner.left().clamp(outer.left(), outer.right());
    let col_right = inner.right().clamp(col_left, outer.right());

    let mut empty_regions = [Region::EMPTY; 4];
    empty_regions[EmptyRegion::Top.index()] =
        Region::from_edges(outer.left(), outer.top(), outer.right(), band_top);
    empty_regions[EmptyRegion::Bottom.index()] =
        Region::from_edges(outer.left(), band_bottom, outer.right(), outer.bottom());
    empty_regions[EmptyRegion::Left.index()] =
        Region::from_edges(outer.left(), band_top, col_left, band_bottom);
    empty_regions[EmptyRegion::Right.index()] =
        Region::from_edges(col_right, band_top, outer.right(), band_bottom);

    let mut visibility = Visibility::EMPTY;
    for e in EmptyRegion::ALL {
        visibility.set(e.into(), !empty_regions[e.index()].is_empty());
    }
    visibility.set(VisibleRegion::Inner, !clipped_inner.is_empty());

    let source_subset = source_subset(layout, clipped_inner, frame);

    tracing::trace!(
        clipped_outer = ?outer,
        clipped_inner = ?clipped_inner,
        visibility = visibility.bits(),
        source_subset = ?source_subset,
        "clipped canvas"
    );

    ClippedCanvas {
        clipped_outer_region: outer,
        clipped_inner_region: clipped_inner,
        empty_regions,
        visibility,
        source_subset,
    }
}

/// Map the visible part of the inner region back to source pixels.
///
/// The visible part is first located in the frame's displayed orientation
/// (scaled from screen pixels, rounding outward so no visible pixel is
/// lost), then un-rotated into source coordinates.
fn source_subset(layout: &InnerLayout, clipped_inner: Region, frame: &FrameInfo) -> Rect {
    let inner = layout.inner_region;
    if clipped_inner.is_empty() || frame.size().is_empty() {
        return Rect::default();
    }
    if clipped_inner == inner {
        return Rect::full(frame.width, frame.height);
    }

    let display = layout.rotation.transform_dimensions(frame.width, frame.height);
    let (x0, x1) = scale_span(
        clipped_inner.left() - inner.left(),
        clipped_inner.right() - inner.left(),
        inner.width,
        display.width,
    );
    let (y0, y1) = scale_span(
        clipped_inner.top() - inner.top(),
        clipped_inner.bottom() - inner.top(),
        inner.height,
        display.height,
    );
    let shown = Rect::new(x0, y0, x1 - x0, y1 - y0);
    layout.rotation.rect_to_source(shown, frame.width, frame.height)
}

/// Scale `[start, end)` on an axis of length `from` to an axis of length
/// `to`. Start floors and end ceils, so a non-empty span maps to at least
/// one pixel. `from` must be non-zero.
fn scale_span(start: i64, end: i64, from: u32, to: u32) -> (u32, u32) {
    let (from, to) = (from as u128, to as u128);
    let start = start.max(0) as u128;
    let end = (end.max(0) as u128).min(from);
    let s = start * to / from;
    let e = (end * to).div_ceil(from);
    (s as u32, e as u32)
}
