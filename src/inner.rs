//! Stage 1: place the frame inside the margin-inset outer region.
//!
//! Pure integer geometry. The placed region never leaves the available
//! area, even under rounding, because the free axis of an aspect fit is
//! always floored.
//!
//! # Example
//!
//! ```
//! use zencanvas::{CanvasConfig, FrameInfo, Region, compute_inner};
//!
//! let config = CanvasConfig::new(Region::new(0, 0, 800, 600)).keep_aspect_ratio(true);
//! let inner = compute_inner(&config, &FrameInfo::new(1280, 720));
//!
//! // 16:9 letterboxed into 4:3
//! assert_eq!(inner.inner_region, Region::new(0, 75, 800, 450));
//! ```

use crate::config::CanvasConfig;
use crate::region::{Region, Size};
use crate::rotation::InnerRotation;

/// Geometry of a source frame: dimensions and pixel aspect ratio.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameInfo {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel aspect ratio numerator.
    pub par_n: u32,
    /// Pixel aspect ratio denominator.
    pub par_d: u32,
}

impl FrameInfo {
    /// Frame with square pixels.
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            par_n: 1,
            par_d: 1,
        }
    }

    /// Set the pixel aspect ratio (pixel width : pixel height).
    pub const fn with_pixel_aspect_ratio(mut self, par_n: u32, par_d: u32) -> Self {
        self.par_n = par_n;
        self.par_d = par_d;
        self
    }

    /// Frame dimensions.
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Pixel aspect ratio, with zero terms replaced by square pixels.
    pub const fn effective_par(&self) -> (u32, u32) {
        if self.par_n == 0 || self.par_d == 0 {
            (1, 1)
        } else {
            (self.par_n, self.par_d)
        }
    }

    /// Display aspect ratio terms `(width × par_n, height × par_d)` after
    /// `rotation` is applied.
    pub fn display_ratio(&self, rotation: InnerRotation) -> (u64, u64) {
        let (par_n, par_d) = self.effective_par();
        let dw = self.width as u64 * par_n as u64;
        let dh = self.height as u64 * par_d as u64;
        if rotation.transposes() { (dh, dw) } else { (dw, dh) }
    }
}

/// Result of stage 1. Input to [`clip()`](crate::clip()).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InnerLayout {
    /// Outer region, copied from the configuration.
    pub outer_region: Region,
    /// Outer region shrunk by the margins.
    pub available_region: Region,
    /// Where the frame is drawn. Always inside `available_region`.
    pub inner_region: Region,
    /// Rotation the frame is drawn with.
    pub rotation: InnerRotation,
}

impl InnerLayout {
    /// Whether the frame fills the whole available region.
    pub fn fills_available(&self) -> bool {
        self.inner_region == self.available_region
    }
}

impl CanvasConfig {
    /// Compute the inner region for a frame. See [`compute_inner()`].
    pub fn compute_inner(&self, frame: &FrameInfo) -> InnerLayout {
        compute_inner(self, frame)
    }
}

/// Compute where a frame is drawn inside the canvas.
///
/// 1. Shrink the outer region by the margins. Margins that exceed the outer
///    size clamp to a zero-size region instead of going negative.
/// 2. Without aspect preservation, the frame fills that region.
/// 3. With aspect preservation, the frame's display aspect ratio (pixel
///    aspect ratio included, transposed for quarter-turn rotations) is
///    fitted and centered. When the leftover space is odd, the extra pixel
///    goes to the right / bottom.
///
/// A frame with a zero dimension has no aspect ratio and falls back to
/// filling the available region.
#[tracing::instrument(level = "trace", skip_all)]
pub fn compute_inner(config: &CanvasConfig, frame: &FrameInfo) -> InnerLayout {
    let outer = config.outer_region;
    let available = inset(outer, config);

    let inner = if config.keep_aspect_ratio {
        let (dw, dh) = frame.display_ratio(config.inner_rotation);
        if dw == 0 || dh == 0 {
            available
        } else {
            let (iw, ih) = fit_inside(dw, dh, available.width, available.height);
            let x = available.left() + ((available.width - iw) / 2) as i64;
            let y = available.top() + ((available.height - ih) / 2) as i64;
            Region::from_edges(x, y, x + iw as i64, y + ih as i64)
        }
    } else {
        available
    };

    tracing::trace!(
        x = inner.x,
        y = inner.y,
        width = inner.width,
        height = inner.height,
        rotation = config.inner_rotation.nick(),
        keep_aspect_ratio = config.keep_aspect_ratio,
        "computed inner region"
    );

    InnerLayout {
        outer_region: outer,
        available_region: available,
        inner_region: inner,
        rotation: config.inner_rotation,
    }
}

/// Shrink `outer` by the configured margins, clamping at the far edge.
fn inset(outer: Region, config: &CanvasConfig) -> Region {
    let m = &config.margins;
    let left = (outer.left() + m.left as i64).min(outer.right());
    let top = (outer.top() + m.top as i64).min(outer.bottom());
    let right = (outer.right() - m.right as i64).max(left);
    let bottom = (outer.bottom() - m.bottom as i64).max(top);
    Region::from_edges(left, top, right, bottom)
}

/// Largest `(w, h)` with ratio `dw:dh` that fits in `tw × th`.
///
/// One side matches the target exactly; the other is floored, so the result
/// never exceeds the target. Cross-multiplication in `u128` keeps exact
/// aspect matches exact.
fn fit_inside(dw: u64, dh: u64, tw: u32, th: u32) -> (u32, u32) {
    let (dw, dh) = (dw as u128, dh as u128);
    let (tw128, th128) = (tw as u128, th as u128);
    if dw * th128 >= dh * tw128 {
        // Width constrains.
        let h = (tw128 * dh / dw) as u32;
        (tw, h.min(th))
    } else {
        // Height constrains.
        let w = (th128 * dw / dh) as u32;
        (w.min(tw), th)
    }
}
