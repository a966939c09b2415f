//! Stateful canvas for callers that drive the two stages as method calls.
//!
//! [`Canvas`] owns a validated [`CanvasConfig`] and caches the results of
//! [`compute_inner()`] and [`clip()`]. Each call overwrites the cached
//! result; nothing accumulates between frames.
//!
//! # Example
//!
//! ```
//! use zencanvas::{Canvas, CanvasConfig, EmptyRegion, FrameInfo, Region};
//!
//! let config = CanvasConfig::new(Region::new(0, 0, 800, 600)).keep_aspect_ratio(true);
//! let mut canvas = Canvas::new(config).unwrap();
//!
//! let frame = FrameInfo::new(1280, 720);
//! canvas.calculate_inner_region(&frame);
//! let subset = canvas.clip(Region::new(0, 0, 800, 600), &frame);
//!
//! assert_eq!(subset.width, 1280);
//! assert_eq!(canvas.empty_region(EmptyRegion::Top), Region::new(0, 0, 800, 75));
//! assert_eq!(canvas.visibility_mask(), 0b1_0011);
//! ```

use crate::clip::{ClippedCanvas, clip};
use crate::config::{CanvasConfig, CanvasError, FillColor};
use crate::inner::{FrameInfo, InnerLayout, compute_inner};
use crate::region::{Rect, Region};
use crate::visibility::{EmptyRegion, Visibility};

/// Canvas configuration plus the most recently computed geometry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    config: CanvasConfig,
    inner: Option<InnerLayout>,
    clipped: Option<ClippedCanvas>,
}

impl Canvas {
    /// Validate `config` and wrap it. No geometry is computed yet.
    pub fn new(config: CanvasConfig) -> Result<Self, CanvasError> {
        Ok(Self {
            config: config.validate()?,
            inner: None,
            clipped: None,
        })
    }

    /// Replace the configuration, dropping all derived state.
    ///
    /// On error the previous configuration and derived state are kept.
    pub fn reconfigure(&mut self, config: CanvasConfig) -> Result<(), CanvasError> {
        *self = Self::new(config)?;
        Ok(())
    }

    /// Current configuration.
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Fill color for the empty regions.
    pub fn fill_color(&self) -> FillColor {
        self.config.fill_color
    }

    /// Compute and cache the inner region for `frame`.
    ///
    /// Invalidates any previous clip result.
    pub fn calculate_inner_region(&mut self, frame: &FrameInfo) -> Region {
        let layout = compute_inner(&self.config, frame);
        self.inner = Some(layout);
        self.clipped = None;
        layout.inner_region
    }

    /// Clip against `screen` and cache the result. Returns the source
    /// subset to blit from.
    ///
    /// Computes the inner region first if
    /// [`calculate_inner_region()`](Self::calculate_inner_region) has not
    /// been called since the last reconfiguration.
    pub fn clip(&mut self, screen: Region, frame: &FrameInfo) -> Rect {
        let layout = *self
            .inner
            .get_or_insert_with(|| compute_inner(&self.config, frame));
        self.clipped.insert(clip(&layout, screen, frame)).source_subset
    }

    /// Run both stages for `frame`, replacing any cached inner region.
    pub fn update(&mut self, screen: Region, frame: &FrameInfo) -> &ClippedCanvas {
        let layout = *self.inner.insert(compute_inner(&self.config, frame));
        self.clipped.insert(clip(&layout, screen, frame))
    }

    /// Last computed stage 1 result.
    pub fn inner_layout(&self) -> Option<&InnerLayout> {
        self.inner.as_ref()
    }

    /// Last computed stage 2 result.
    pub fn clipped(&self) -> Option<&ClippedCanvas> {
        self.clipped.as_ref()
    }

    /// Outer region from the configuration.
    pub fn outer_region(&self) -> Region {
        self.config.outer_region
    }

    /// Inner region, or a degenerate region before the first computation.
    pub fn inner_region(&self) -> Region {
        self.inner.map_or(Region::EMPTY, |l| l.inner_region)
    }

    /// Clipped outer region, or degenerate before the first clip.
    pub fn clipped_outer_region(&self) -> Region {
        self.clipped.map_or(Region::EMPTY, |c| c.clipped_outer_region)
    }

    /// Clipped inner region, or degenerate before the first clip.
    pub fn clipped_inner_region(&self) -> Region {
        self.clipped.map_or(Region::EMPTY, |c| c.clipped_inner_region)
    }

    /// All four empty regions, degenerate before the first clip.
    pub fn empty_regions(&self) -> [Region; 4] {
        self.clipped.map_or([Region::EMPTY; 4], |c| c.empty_regions)
    }

    /// One empty region, degenerate before the first clip.
    pub fn empty_region(&self, which: EmptyRegion) -> Region {
        self.empty_regions()[which.index()]
    }

    /// Visible regions. Empty before the first clip.
    pub fn visibility(&self) -> Visibility {
        self.clipped.map_or(Visibility::EMPTY, |c| c.visibility)
    }

    /// Raw visibility bitmask. `0` before the first clip.
    pub fn visibility_mask(&self) -> u8 {
        self.visibility().bits()
    }
}
