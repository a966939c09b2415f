//! Property-string configuration.
//!
//! Parses sink-style property strings like
//! `window-width=640 window-height=480 force-aspect-ratio=true` into
//! [`CanvasProps`], which resolve against a screen into a validated
//! [`CanvasConfig`](crate::CanvasConfig).
//!
//! # Example
//!
//! ```
//! use zencanvas::{InnerRotation, Region, props};
//!
//! let result = props::parse(
//!     "window-x-coord=10 window-y-coord=20 window-width=640 window-height=480 \
//!      force-aspect-ratio=true output-rotation=rotate-90 fill-color=#ffffff",
//! );
//! assert!(result.warnings.is_empty());
//!
//! let config = result.props.to_config(Region::new(0, 0, 1920, 1080)).unwrap();
//! assert_eq!(config.outer_region, Region::new(10, 20, 640, 480));
//! assert_eq!(config.inner_rotation, InnerRotation::Rotate90);
//! assert!(config.keep_aspect_ratio);
//! ```
//!
//! Unknown keys and unparseable values never fail the parse; they are
//! reported as [`ParseWarning`]s and otherwise ignored.

mod color;
mod parse;

use alloc::string::String;
use alloc::vec::Vec;

use crate::config::{CanvasConfig, CanvasError, FillColor, Margins};
use crate::region::Region;
use crate::rotation::InnerRotation;

/// Canvas settings read from a property string. Unset fields fall back to
/// [`CanvasConfig`] defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CanvasProps {
    pub x: Option<i32>,
    pub y: Option<i32>,
    /// Zero means "fill the screen horizontally".
    pub width: Option<u32>,
    /// Zero means "fill the screen vertically".
    pub height: Option<u32>,
    pub keep_aspect_ratio: Option<bool>,
    pub rotation: Option<InnerRotation>,
    pub fill_color: Option<FillColor>,
    /// Signed so negative input survives until [`to_config()`](Self::to_config)
    /// can reject it.
    pub margin_left: Option<i64>,
    pub margin_top: Option<i64>,
    pub margin_right: Option<i64>,
    pub margin_bottom: Option<i64>,
}

impl CanvasProps {
    /// Resolve against `screen` and validate.
    ///
    /// Each axis with a missing or zero window size spans the screen on that
    /// axis and ignores its window coordinate. Window coordinates are
    /// absolute screen coordinates.
    pub fn to_config(&self, screen: Region) -> Result<CanvasConfig, CanvasError> {
        let (x, width) = match self.width {
            Some(w) if w > 0 => (self.x.unwrap_or(0), w),
            _ => (screen.x, screen.width),
        };
        let (y, height) = match self.height {
            Some(h) if h > 0 => (self.y.unwrap_or(0), h),
            _ => (screen.y, screen.height),
        };
        let margins = Margins::try_from_signed(
            self.margin_left.unwrap_or(0),
            self.margin_top.unwrap_or(0),
            self.margin_right.unwrap_or(0),
            self.margin_bottom.unwrap_or(0),
        )
        .inspect_err(|e| tracing::debug!(error = %e, "rejecting canvas props"))?;

        CanvasConfig::new(Region::new(x, y, width, height))
            .margins(margins)
            .keep_aspect_ratio(self.keep_aspect_ratio.unwrap_or(false))
            .rotation(self.rotation.unwrap_or_default())
            .fill_color(self.fill_color.unwrap_or_default())
            .validate()
    }
}

/// Result of parsing a property string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed settings.
    pub props: CanvasProps,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from property parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A property was set more than once (last value wins).
    DuplicateKey { key: &'static str, value: String },
    /// The key names no canvas property.
    KeyNotRecognized { key: String, value: String },
    /// The key was recognized but its value could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse a property string. Pairs are `key=value`, separated by whitespace,
/// `&` or `;`.
pub fn parse(input: &str) -> ParseResult {
    let (props, warnings) = parse::parse_props(input);
    if !warnings.is_empty() {
        tracing::debug!(count = warnings.len(), "canvas property string had warnings");
    }
    ParseResult { props, warnings }
}
