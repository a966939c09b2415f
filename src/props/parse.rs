//! Property string tokenizer and value parsers.

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use num_traits::Float;

use super::color::parse_color;
use super::{CanvasProps, ParseWarning};
use crate::rotation::InnerRotation;

/// Parse a property string into props + warnings.
pub(crate) fn parse_props(input: &str) -> (CanvasProps, Vec<ParseWarning>) {
    let mut props = CanvasProps::default();
    let mut warnings = Vec::new();

    for pair in split_props(input) {
        let (key, value) = split_pair(pair);
        let key = key.trim().to_ascii_lowercase();
        dispatch_key(&key, value.trim(), &mut props, &mut warnings);
    }

    (props, warnings)
}

/// A recognized property.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Prop {
    X,
    Y,
    Width,
    Height,
    ForceAspectRatio,
    OutputRotation,
    FillColor,
    LeftMargin,
    TopMargin,
    RightMargin,
    BottomMargin,
    Margin,
}

impl Prop {
    /// Accepts the long property name or its short alias.
    fn from_key(key: &str) -> Option<Self> {
        Some(match key {
            "window-x-coord" | "x" => Self::X,
            "window-y-coord" | "y" => Self::Y,
            "window-width" | "width" => Self::Width,
            "window-height" | "height" => Self::Height,
            "force-aspect-ratio" | "keep-aspect-ratio" => Self::ForceAspectRatio,
            "output-rotation" | "rotation" => Self::OutputRotation,
            "fill-color" | "background" => Self::FillColor,
            "left-margin" => Self::LeftMargin,
            "top-margin" => Self::TopMargin,
            "right-margin" => Self::RightMargin,
            "bottom-margin" => Self::BottomMargin,
            "margin" => Self::Margin,
            _ => return None,
        })
    }

    /// Long name, used in warnings.
    fn name(self) -> &'static str {
        match self {
            Self::X => "window-x-coord",
            Self::Y => "window-y-coord",
            Self::Width => "window-width",
            Self::Height => "window-height",
            Self::ForceAspectRatio => "force-aspect-ratio",
            Self::OutputRotation => "output-rotation",
            Self::FillColor => "fill-color",
            Self::LeftMargin => "left-margin",
            Self::TopMargin => "top-margin",
            Self::RightMargin => "right-margin",
            Self::BottomMargin => "bottom-margin",
            Self::Margin => "margin",
        }
    }
}

fn dispatch_key(
    key: &str,
    value: &str,
    props: &mut CanvasProps,
    warnings: &mut Vec<ParseWarning>,
) {
    let Some(prop) = Prop::from_key(key) else {
        warnings.push(ParseWarning::KeyNotRecognized {
            key: String::from(key),
            value: String::from(value),
        });
        return;
    };

    let key = prop.name();
    let w = warnings;
    match prop {
        Prop::X => set_or_warn(&mut props.x, parse_i32(value), key, value, INT, w),
        Prop::Y => set_or_warn(&mut props.y, parse_i32(value), key, value, INT, w),
        Prop::Width => set_or_warn(&mut props.width, parse_u32(value), key, value, SIZE, w),
        Prop::Height => set_or_warn(&mut props.height, parse_u32(value), key, value, SIZE, w),
        Prop::ForceAspectRatio => {
            let parsed = parse_bool(value);
            set_or_warn(&mut props.keep_aspect_ratio, parsed, key, value, BOOL, w);
        }
        Prop::OutputRotation => {
            let parsed = parse_rotation(value);
            set_or_warn(&mut props.rotation, parsed, key, value, ROTATION, w);
        }
        Prop::FillColor => {
            set_or_warn(&mut props.fill_color, parse_color(value), key, value, COLOR, w);
        }
        Prop::LeftMargin => {
            set_or_warn(&mut props.margin_left, parse_i64(value), key, value, INT, w);
        }
        Prop::TopMargin => {
            set_or_warn(&mut props.margin_top, parse_i64(value), key, value, INT, w);
        }
        Prop::RightMargin => {
            set_or_warn(&mut props.margin_right, parse_i64(value), key, value, INT, w);
        }
        Prop::BottomMargin => {
            set_or_warn(&mut props.margin_bottom, parse_i64(value), key, value, INT, w);
        }
        Prop::Margin => match parse_i64(value) {
            Some(m) => {
                let sides = [
                    &mut props.margin_left,
                    &mut props.margin_top,
                    &mut props.margin_right,
                    &mut props.margin_bottom,
                ];
                if sides.iter().any(|s| s.is_some()) {
                    w.push(ParseWarning::DuplicateKey {
                        key,
                        value: String::from(value),
                    });
                }
                for side in sides {
                    *side = Some(m);
                }
            }
            None => w.push(invalid(key, value, INT)),
        },
    }
}

const INT: &str = "expected an integer";
const SIZE: &str = "expected a non-negative integer";
const BOOL: &str = "expected true|false|1|0|yes|no|on|off";
const ROTATION: &str =
    "expected none|rotate-90|rotate-180|rotate-270|horizontal-flip|vertical-flip or degrees";
const COLOR: &str = "expected 0xRRGGBBAA, decimal, #RGB[A], #RRGGBB[AA] or a color name";

/// Set a field, warning on duplicate or unparseable values.
fn set_or_warn<T>(
    field: &mut Option<T>,
    parsed: Option<T>,
    key: &'static str,
    value: &str,
    reason: &'static str,
    warnings: &mut Vec<ParseWarning>,
) {
    let Some(v) = parsed else {
        warnings.push(invalid(key, value, reason));
        return;
    };
    if field.is_some() {
        warnings.push(ParseWarning::DuplicateKey {
            key,
            value: String::from(value),
        });
    }
    *field = Some(v);
}

fn invalid(key: &'static str, value: &str, reason: &'static str) -> ParseWarning {
    ParseWarning::ValueInvalid {
        key,
        value: String::from(value),
        reason,
    }
}

// ---- Value parsers ----

fn parse_i32(s: &str) -> Option<i32> {
    s.parse().ok()
}

fn parse_u32(s: &str) -> Option<u32> {
    s.parse().ok()
}

fn parse_i64(s: &str) -> Option<i64> {
    s.parse().ok()
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Nicknames and exact quarter turns first, then any angle rounded to the
/// nearest quarter turn.
fn parse_rotation(s: &str) -> Option<InnerRotation> {
    if let Ok(r) = s.parse::<InnerRotation>() {
        return Some(r);
    }
    let degrees: f64 = s.parse().ok()?;
    if !degrees.is_finite() {
        return None;
    }
    let quarters = (degrees / 90.0).round() as i64;
    InnerRotation::from_degrees(quarters.rem_euclid(4) as i32 * 90)
}

// ---- Tokenizer ----

fn split_props(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(|c: char| c.is_whitespace() || c == '&' || c == ';')
        .filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FillColor;

    #[test]
    fn parse_window_geometry() {
        let (props, warnings) =
            parse_props("window-x-coord=-10 window-y-coord=20 window-width=640 window-height=480");
        assert_eq!(props.x, Some(-10));
        assert_eq!(props.y, Some(20));
        assert_eq!(props.width, Some(640));
        assert_eq!(props.height, Some(480));
        assert!(warnings.is_empty());
    }

    #[test]
    fn short_aliases_and_separators() {
        let (props, warnings) = parse_props("x=1&y=2;width=3\theight=4\nrotation=180");
        assert_eq!(
            (props.x, props.y, props.width, props.height),
            (Some(1), Some(2), Some(3), Some(4))
        );
        assert_eq!(props.rotation, Some(InnerRotation::Rotate180));
        assert!(warnings.is_empty());
    }

    #[test]
    fn keys_case_insensitive() {
        let (props, _) = parse_props("Force-Aspect-Ratio=TRUE Fill-Color=White");
        assert_eq!(props.keep_aspect_ratio, Some(true));
        assert_eq!(props.fill_color, Some(FillColor::WHITE));
    }

    #[test]
    fn bool_spellings() {
        for (v, expected) in [("1", true), ("on", true), ("no", false), ("False", false)] {
            let (props, _) = parse_props(&alloc::format!("keep-aspect-ratio={v}"));
            assert_eq!(props.keep_aspect_ratio, Some(expected), "{v}");
        }
    }

    #[test]
    fn rotation_names_and_degrees() {
        assert_eq!(parse_rotation("rotate-90"), Some(InnerRotation::Rotate90));
        assert_eq!(parse_rotation("horizontal-flip"), Some(InnerRotation::HorizontalFlip));
        assert_eq!(parse_rotation("-90"), Some(InnerRotation::Rotate270));
        assert_eq!(parse_rotation("95"), Some(InnerRotation::Rotate90));
        assert_eq!(parse_rotation("134.9"), Some(InnerRotation::Rotate90));
        assert_eq!(parse_rotation("-180.5"), Some(InnerRotation::Rotate180));
        assert_eq!(parse_rotation("720"), Some(InnerRotation::None));
        assert_eq!(parse_rotation("sideways"), None);
        assert_eq!(parse_rotation("NaN"), None);
    }

    #[test]
    fn margins_individual_and_all() {
        let (props, warnings) = parse_props("left-margin=1 top-margin=2 right-margin=-3");
        assert_eq!(props.margin_left, Some(1));
        assert_eq!(props.margin_top, Some(2));
        assert_eq!(props.margin_right, Some(-3));
        assert_eq!(props.margin_bottom, None);
        assert!(warnings.is_empty());

        let (props, warnings) = parse_props("margin=5");
        assert_eq!(
            [props.margin_left, props.margin_top, props.margin_right, props.margin_bottom],
            [Some(5); 4]
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn margin_after_side_warns_once() {
        let (props, warnings) = parse_props("top-margin=2 margin=5");
        assert_eq!(props.margin_top, Some(5));
        assert_eq!(
            warnings,
            [ParseWarning::DuplicateKey {
                key: "margin",
                value: "5".into()
            }]
        );
    }

    #[test]
    fn duplicate_key_last_wins() {
        let (props, warnings) = parse_props("width=800 window-width=400");
        assert_eq!(props.width, Some(400));
        assert_eq!(
            warnings,
            [ParseWarning::DuplicateKey {
                key: "window-width",
                value: "400".into()
            }]
        );
    }

    #[test]
    fn invalid_values_warn_and_keep_previous() {
        let (props, warnings) = parse_props("width=640 width=-1 fill-color=mauve x=");
        assert_eq!(props.width, Some(640));
        assert_eq!(props.fill_color, None);
        assert_eq!(props.x, None);
        assert_eq!(warnings.len(), 3);
        assert!(warnings.iter().all(|w| matches!(w, ParseWarning::ValueInvalid { .. })));
        assert!(matches!(
            &warnings[0],
            ParseWarning::ValueInvalid { key: "window-width", value, .. } if value == "-1"
        ));
    }

    #[test]
    fn unknown_key_warns() {
        let (_, warnings) = parse_props("width=640 sync=false");
        assert_eq!(
            warnings,
            [ParseWarning::KeyNotRecognized {
                key: "sync".into(),
                value: "false".into()
            }]
        );
    }

    #[test]
    fn aliases_share_a_name() {
        for (alias, long) in [("x", "window-x-coord"), ("background", "fill-color")] {
            assert_eq!(Prop::from_key(alias), Prop::from_key(long));
            assert_eq!(Prop::from_key(alias).map(Prop::name), Some(long));
        }
        assert_eq!(Prop::from_key("margins"), None);
    }

    #[test]
    fn value_may_contain_equals() {
        assert_eq!(split_pair("a=b=c"), ("a", "b=c"));
        assert_eq!(split_pair("flag"), ("flag", ""));
    }

    #[test]
    fn empty_input() {
        let (props, warnings) = parse_props("  ;&  ");
        assert_eq!(props, CanvasProps::default());
        assert!(warnings.is_empty());
    }
}
