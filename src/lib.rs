//! Canvas geometry for video sinks: aspect-ratio fitting, margins, rotation,
//! screen clipping, and the fill regions around a frame.
//!
//! Pure geometry: no pixel operations, no allocations in the core, `no_std`
//! compatible.
//!
//! The computation runs in two stages:
//!
//! 1. [`compute_inner()`] places the frame inside the configured outer
//!    region (after margins), stretching or letterboxing it.
//! 2. [`clip()`] clips the result against the screen, producing the four
//!    empty border regions, a visibility mask, and the subset of the source
//!    frame that is still visible.
//!
//! [`Canvas`] wraps both stages behind a stateful two-call API.
//!
//! # Example
//!
//! ```
//! use zencanvas::{CanvasConfig, FrameInfo, Rect, Region};
//!
//! let screen = Region::new(0, 0, 800, 600);
//! let frame = FrameInfo::new(1280, 720);
//!
//! let layout = CanvasConfig::new(screen)
//!     .keep_aspect_ratio(true)
//!     .validate()
//!     .unwrap()
//!     .compute_inner(&frame);
//! assert_eq!(layout.inner_region, Region::new(0, 75, 800, 450));
//!
//! let clipped = layout.clip(screen, &frame);
//! assert_eq!(clipped.source_subset, Rect::full(1280, 720));
//! assert_eq!(clipped.visibility_mask(), 0b1_0011);
//! ```
//!
//! # Modules
//!
//! - [`region`]: screen-space [`Region`] and source-space [`Rect`]
//! - [`rotation`]: [`InnerRotation`] and the display-to-source mapping
//! - [`config`]: [`CanvasConfig`], margins, fill color, validation errors
//! - [`inner`]: stage 1, inner-region placement
//! - [`clip`]: stage 2, screen clipping and source subset
//! - [`visibility`]: the visible-region set
//! - [`canvas`]: stateful wrapper
//! - `props` (feature `props`): property-string configuration
//! - `svg` (feature `svg`): SVG debug rendering

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod canvas;
pub mod clip;
pub mod config;
pub mod inner;
pub mod region;
pub mod rotation;
pub mod visibility;

#[cfg(feature = "props")]
pub mod props;
#[cfg(feature = "svg")]
pub mod svg;

pub use canvas::Canvas;
pub use clip::{ClippedCanvas, clip};
pub use config::{CanvasConfig, CanvasError, FillColor, MarginSide, Margins};
pub use inner::{FrameInfo, InnerLayout, compute_inner};
pub use region::{Rect, Region, Size};
pub use rotation::{InnerRotation, ParseRotationError, does_rotation_transpose};
pub use visibility::{EmptyRegion, Visibility, VisibleRegion};
