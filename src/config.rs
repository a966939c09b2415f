//! Canvas configuration and validation.
//!
//! A [`CanvasConfig`] is built once per output-geometry change and validated
//! before any per-frame computation runs. Validation is the only place this
//! crate reports errors: the per-frame stages clamp instead of failing.
//!
//! # Example
//!
//! ```
//! use zencanvas::{CanvasConfig, FillColor, InnerRotation, Margins, Region};
//!
//! let config = CanvasConfig::new(Region::new(0, 0, 1280, 720))
//!     .margins(Margins::uniform(16))
//!     .keep_aspect_ratio(true)
//!     .rotation(InnerRotation::Rotate90)
//!     .fill_color(FillColor::BLACK)
//!     .validate()
//!     .unwrap();
//!
//! assert_eq!(config.margins.left, 16);
//! ```

use core::fmt;

use crate::region::Region;
use crate::rotation::InnerRotation;

/// 32-bit fill color in `0xRRGGBBAA` layout.
///
/// Carried through to blitters for painting empty regions; never
/// interpreted by the geometry code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FillColor(pub u32);

impl Default for FillColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FillColor {
    /// Opaque black.
    pub const BLACK: Self = Self(0x0000_00FF);
    /// Opaque white.
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    /// Transparent black.
    pub const TRANSPARENT: Self = Self(0);

    /// Pack 8-bit channels.
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((r as u32) << 24 | (g as u32) << 16 | (b as u32) << 8 | a as u32)
    }

    /// Red channel.
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green channel.
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue channel.
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha channel.
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Raw `0xRRGGBBAA` value.
    pub const fn to_u32(self) -> u32 {
        self.0
    }
}

/// Pixel insets between the outer region and the area available to the
/// frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margins {
    /// Inset from the left edge.
    pub left: u32,
    /// Inset from the top edge.
    pub top: u32,
    /// Inset from the right edge.
    pub right: u32,
    /// Inset from the bottom edge.
    pub bottom: u32,
}

impl Margins {
    /// No margins.
    pub const ZERO: Self = Self::uniform(0);

    /// Create margins in left, top, right, bottom order.
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same margin on all four sides.
    pub const fn uniform(margin: u32) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    /// Margins from signed values, as supplied by property strings or
    /// foreign callers. Negative values are rejected.
    pub fn try_from_signed(
        left: i64,
        top: i64,
        right: i64,
        bottom: i64,
    ) -> Result<Self, CanvasError> {
        Ok(Self {
            left: margin_from_signed(MarginSide::Left, left)?,
            top: margin_from_signed(MarginSide::Top, top)?,
            right: margin_from_signed(MarginSide::Right, right)?,
            bottom: margin_from_signed(MarginSide::Bottom, bottom)?,
        })
    }

    /// Sum of left and right margins.
    pub const fn horizontal(&self) -> u64 {
        self.left as u64 + self.right as u64
    }

    /// Sum of top and bottom margins.
    pub const fn vertical(&self) -> u64 {
        self.top as u64 + self.bottom as u64
    }

    fn sides(&self) -> [(MarginSide, u32); 4] {
        [
            (MarginSide::Left, self.left),
            (MarginSide::Top, self.top),
            (MarginSide::Right, self.right),
            (MarginSide::Bottom, self.bottom),
        ]
    }
}

fn margin_from_signed(side: MarginSide, value: i64) -> Result<u32, CanvasError> {
    if value < 0 {
        return Err(CanvasError::NegativeMargin { side, value });
    }
    if value > i32::MAX as i64 {
        return Err(CanvasError::MarginTooLarge { side, value });
    }
    Ok(value as u32)
}

/// Which margin a [`CanvasError`] refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MarginSide {
    Left,
    Top,
    Right,
    Bottom,
}

impl MarginSide {
    /// Lowercase side name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
        }
    }
}

/// Configuration error. Raised only when a configuration is built or
/// validated, never from per-frame computation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CanvasError {
    /// A margin was negative.
    NegativeMargin { side: MarginSide, value: i64 },
    /// A margin exceeds the signed 32-bit coordinate range.
    MarginTooLarge { side: MarginSide, value: i64 },
    /// The outer region's right or bottom edge does not fit in `i32`.
    OuterRegionOverflow,
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeMargin { side, value } => {
                write!(f, "{} margin is negative ({value})", side.name())
            }
            Self::MarginTooLarge { side, value } => {
                write!(f, "{} margin {value} exceeds {}", side.name(), i32::MAX)
            }
            Self::OuterRegionOverflow => {
                f.write_str("outer region extends past the 32-bit coordinate range")
            }
        }
    }
}

impl core::error::Error for CanvasError {}

/// Caller-supplied canvas geometry.
///
/// Setters consume and return `self`; finish with [`validate()`](Self::validate).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CanvasConfig {
    /// Rectangle the composited output occupies, in screen coordinates.
    pub outer_region: Region,
    /// Color for empty regions.
    pub fill_color: FillColor,
    /// Insets applied to `outer_region` before the inner region is placed.
    pub margins: Margins,
    /// Preserve the frame's display aspect ratio instead of stretching.
    pub keep_aspect_ratio: bool,
    /// Rotation or flip of the drawn frame.
    pub inner_rotation: InnerRotation,
}

impl CanvasConfig {
    /// Configuration with the given outer region, no margins, no rotation,
    /// stretch-to-fill, black fill.
    pub fn new(outer_region: Region) -> Self {
        Self {
            outer_region,
            ..Self::default()
        }
    }

    /// Set the outer region.
    pub fn outer_region(mut self, region: Region) -> Self {
        self.outer_region = region;
        self
    }

    /// Set the fill color.
    pub fn fill_color(mut self, color: FillColor) -> Self {
        self.fill_color = color;
        self
    }

    /// Set all margins.
    pub fn margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Set the aspect-ratio policy.
    pub fn keep_aspect_ratio(mut self, keep: bool) -> Self {
        self.keep_aspect_ratio = keep;
        self
    }

    /// Set the inner rotation.
    pub fn rotation(mut self, rotation: InnerRotation) -> Self {
        self.inner_rotation = rotation;
        self
    }

    /// Check the configuration, returning it unchanged when valid.
    ///
    /// Margins larger than the outer region are *not* an error; the inner
    /// region simply degenerates.
    pub fn validate(self) -> Result<Self, CanvasError> {
        self.check()?;
        Ok(self)
    }

    pub(crate) fn check(&self) -> Result<(), CanvasError> {
        let outer = &self.outer_region;
        if outer.right() > i32::MAX as i64 || outer.bottom() > i32::MAX as i64 {
            tracing::debug!(
                x = outer.x,
                y = outer.y,
                width = outer.width,
                height = outer.height,
                "rejecting canvas config: outer region overflows"
            );
            return Err(CanvasError::OuterRegionOverflow);
        }
        for (side, value) in self.margins.sides() {
            if value > i32::MAX as u32 {
                tracing::debug!(
                    side = side.name(),
                    value,
                    "rejecting canvas config: margin too large"
                );
                return Err(CanvasError::MarginTooLarge {
                    side,
                    value: value as i64,
                });
            }
        }
        Ok(())
    }
}
