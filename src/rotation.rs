//! Inner rotation: how frame content is turned or mirrored inside the canvas.
//!
//! ```text
//!     None        Rotate90     Rotate180    Rotate270    HorizontalFlip  VerticalFlip
//!     ┌───┐       ┌────┐       ┌───┐        ┌────┐       ┌───┐           ┌───┐
//!     │ F │       │  F │       │   │        │ Ꟊ  │       │ Ꟊ │           │   │
//!     │   │       └────┘       │ Ꟊ │        └────┘       │   │           │ F │
//!     └───┘                    └───┘                     └───┘           └───┘
//! ```
//!
//! Rotations are clockwise. Only the quarter turns swap width and height.

use core::fmt;
use core::str::FromStr;

use crate::region::{Rect, Size};

/// Rotation or flip applied to the frame content drawn in the inner region.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum InnerRotation {
    /// Content drawn as-is.
    #[default]
    None,
    /// 90 degrees clockwise.
    #[cfg_attr(feature = "serde", serde(rename = "rotate-90"))]
    Rotate90,
    /// 180 degrees.
    #[cfg_attr(feature = "serde", serde(rename = "rotate-180"))]
    Rotate180,
    /// 270 degrees clockwise (90 counter-clockwise).
    #[cfg_attr(feature = "serde", serde(rename = "rotate-270"))]
    Rotate270,
    /// Mirror left-right.
    HorizontalFlip,
    /// Mirror top-bottom.
    VerticalFlip,
}

/// Whether `rotation` transposes the frame (swaps width and height).
///
/// True only for the quarter turns.
pub fn does_rotation_transpose(rotation: InnerRotation) -> bool {
    rotation.transposes()
}

impl InnerRotation {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::Rotate90,
        Self::Rotate180,
        Self::Rotate270,
        Self::HorizontalFlip,
        Self::VerticalFlip,
    ];

    /// Whether this rotation swaps width and height.
    pub const fn transposes(self) -> bool {
        match self {
            Self::Rotate90 | Self::Rotate270 => true,
            Self::None | Self::Rotate180 | Self::HorizontalFlip | Self::VerticalFlip => false,
        }
    }

    /// Property nickname, e.g. `"rotate-90"`.
    pub const fn nick(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Rotate90 => "rotate-90",
            Self::Rotate180 => "rotate-180",
            Self::Rotate270 => "rotate-270",
            Self::HorizontalFlip => "horizontal-flip",
            Self::VerticalFlip => "vertical-flip",
        }
    }

    /// Rotation for a clockwise angle in degrees. Only multiples of 90 map;
    /// negative angles and full turns are normalized.
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        if degrees % 90 != 0 {
            return None;
        }
        Some(match degrees.rem_euclid(360) {
            0 => Self::None,
            90 => Self::Rotate90,
            180 => Self::Rotate180,
            _ => Self::Rotate270,
        })
    }

    /// Transform source dimensions to on-screen content dimensions.
    pub fn transform_dimensions(self, w: u32, h: u32) -> Size {
        if self.transposes() {
            Size::new(h, w)
        } else {
            Size::new(w, h)
        }
    }

    /// Map a rectangle from on-screen content coordinates back to source
    /// coordinates.
    ///
    /// `rect` is expressed in the content's displayed orientation, whose
    /// size is `transform_dimensions(source_w, source_h)`. It must lie within
    /// those bounds.
    pub fn rect_to_source(self, rect: Rect, source_w: u32, source_h: u32) -> Rect {
        let (rx, ry, rw, rh) = (rect.x, rect.y, rect.width, rect.height);
        let (sw, sh) = (source_w, source_h);

        match self {
            Self::None => Rect::new(rx, ry, rw, rh),
            Self::HorizontalFlip => Rect::new(sw - rx - rw, ry, rw, rh),
            Self::VerticalFlip => Rect::new(rx, sh - ry - rh, rw, rh),
            Self::Rotate90 => Rect::new(ry, sh - rx - rw, rh, rw),
            Self::Rotate180 => Rect::new(sw - rx - rw, sh - ry - rh, rw, rh),
            Self::Rotate270 => Rect::new(sw - ry - rh, rx, rh, rw),
        }
    }
}

impl fmt::Display for InnerRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nick())
    }
}

/// Returned when a string names no known rotation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseRotationError;

impl fmt::Display for ParseRotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(
            "expected none|rotate-90|rotate-180|rotate-270|horizontal-flip|vertical-flip or degrees",
        )
    }
}

impl core::error::Error for ParseRotationError {}

impl FromStr for InnerRotation {
    type Err = ParseRotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        for rotation in Self::ALL {
            if s.eq_ignore_ascii_case(rotation.nick()) {
                return Ok(rotation);
            }
        }
        if s.eq_ignore_ascii_case("h") || s.eq_ignore_ascii_case("hflip") {
            return Ok(Self::HorizontalFlip);
        }
        if s.eq_ignore_ascii_case("v") || s.eq_ignore_ascii_case("vflip") {
            return Ok(Self::VerticalFlip);
        }
        s.parse::<i32>()
            .ok()
            .and_then(Self::from_degrees)
            .ok_or(ParseRotationError)
    }
}
