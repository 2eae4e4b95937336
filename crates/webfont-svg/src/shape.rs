//! Shape element to path-command conversion
//!
//! Maps each supported SVG shape element to an equivalent path command
//! string using fixed geometric formulas. Conversion is pure: it reads the
//! tag's raw attribute text and produces path data, nothing else.

use crate::error::{Result, SvgError};
use crate::scanner::attribute;

/// The closed set of shape elements that contribute glyph geometry.
///
/// Tag names outside this set carry no outline data (or none we extract)
/// and are skipped by the icon assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// `<path>` — `d` passthrough
    Path,
    /// `<glyph>` — `d` passthrough, as found in SVG fonts
    Glyph,
    /// `<circle>` — converted to a two-arc path
    Circle,
    /// `<ellipse>` — converted to a two-arc path
    Ellipse,
    /// `<rect>` — converted to a closed clockwise box
    Rect,
    /// `<polygon>` — line segments, closed
    Polygon,
    /// `<polyline>` — line segments, open
    Polyline,
    /// `<line>` — a single open segment
    Line,
}

impl ShapeKind {
    /// Map a scanned tag name to a shape kind, `None` for anything else
    #[must_use]
    pub fn from_tag_name(name: &str) -> Option<Self> {
        match name {
            "path" => Some(Self::Path),
            "glyph" => Some(Self::Glyph),
            "circle" => Some(Self::Circle),
            "ellipse" => Some(Self::Ellipse),
            // SVG documents write <rect>; SVG-font tooling has historically
            // also emitted <rectangle>. Both carry the same attribute set.
            "rect" | "rectangle" => Some(Self::Rect),
            "polygon" => Some(Self::Polygon),
            "polyline" => Some(Self::Polyline),
            "line" => Some(Self::Line),
            _ => None,
        }
    }

    /// Element name for error reporting
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Glyph => "glyph",
            Self::Circle => "circle",
            Self::Ellipse => "ellipse",
            Self::Rect => "rect",
            Self::Polygon => "polygon",
            Self::Polyline => "polyline",
            Self::Line => "line",
        }
    }

    /// Required attributes for this kind, in formula order
    #[must_use]
    pub const fn required_attributes(self) -> &'static [&'static str] {
        match self {
            Self::Path | Self::Glyph => &["d"],
            Self::Circle => &["cx", "cy", "r"],
            Self::Ellipse => &["cx", "cy", "rx", "ry"],
            Self::Rect => &["x", "y", "width", "height"],
            Self::Polygon | Self::Polyline => &["points"],
            Self::Line => &["x1", "y1", "x2", "y2"],
        }
    }

    /// Convert one shape tag into a path command string.
    ///
    /// # Errors
    ///
    /// Returns `SvgError::MissingAttribute` when a required attribute is
    /// absent or does not parse as its declared type.
    pub fn to_path_data(self, raw: &str) -> Result<String> {
        let text = |name: &'static str| -> Result<&str> {
            attribute(raw, name).ok_or_else(|| SvgError::MissingAttribute {
                kind: self.name(),
                attribute: name,
                tag: raw.to_string(),
            })
        };
        let number = |name: &'static str| -> Result<f64> {
            text(name)?
                .trim()
                .parse()
                .map_err(|_| SvgError::MissingAttribute {
                    kind: self.name(),
                    attribute: name,
                    tag: raw.to_string(),
                })
        };

        Ok(match self {
            Self::Path | Self::Glyph => text("d")?.to_string(),
            Self::Circle => {
                let (cx, cy, r) = (number("cx")?, number("cy")?, number("r")?);
                format!(
                    "M {}, {cy} a {r} {r} 0 1 0 {} 0 a {r} {r} 0 1 0 {} 0",
                    cx - r,
                    2.0 * r,
                    -2.0 * r
                )
            }
            Self::Ellipse => {
                let (cx, cy) = (number("cx")?, number("cy")?);
                let (rx, ry) = (number("rx")?, number("ry")?);
                format!(
                    "M {} {cy} a {rx} {ry} 0 1 0 {} 0 a {rx} {ry} 0 1 0 {} 0",
                    cx - rx,
                    2.0 * rx,
                    -2.0 * rx
                )
            }
            Self::Rect => {
                let (x, y) = (number("x")?, number("y")?);
                let (width, height) = (number("width")?, number("height")?);
                format!("M {x} {y} h {width} v {height} H {x} Z")
            }
            Self::Line => {
                let (x1, y1) = (number("x1")?, number("y1")?);
                let (x2, y2) = (number("x2")?, number("y2")?);
                format!("M {x1} {y1} L {x2} {y2}")
            }
            Self::Polygon => points_to_path(text("points")?, true),
            Self::Polyline => points_to_path(text("points")?, false),
        })
    }
}

/// Build line-segment path data from a `points` attribute.
///
/// Coordinates are whitespace or comma separated; every second coordinate
/// after the first pair opens a new `L` command. Polygons close with a
/// trailing `z`, polylines stay open.
fn points_to_path(points: &str, close: bool) -> String {
    let mut out = String::from("M");
    for (index, token) in points
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
    {
        if index > 0 && index % 2 == 0 {
            out.push_str(" L");
        }
        out.push(' ');
        out.push_str(token);
    }
    if close {
        out.push_str(" z");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_formula() {
        let path = ShapeKind::Circle
            .to_path_data(r#"<circle cx="10" cy="10" r="5"/>"#)
            .unwrap();
        assert_eq!(path, "M 5, 10 a 5 5 0 1 0 10 0 a 5 5 0 1 0 -10 0");
    }

    #[test]
    fn test_ellipse_formula() {
        let path = ShapeKind::Ellipse
            .to_path_data(r#"<ellipse cx="10" cy="20" rx="4" ry="2"/>"#)
            .unwrap();
        assert_eq!(path, "M 6 20 a 4 2 0 1 0 8 0 a 4 2 0 1 0 -8 0");
    }

    #[test]
    fn test_rect_formula() {
        let path = ShapeKind::Rect
            .to_path_data(r#"<rect x="0" y="0" width="10" height="20"/>"#)
            .unwrap();
        assert_eq!(path, "M 0 0 h 10 v 20 H 0 Z");
    }

    #[test]
    fn test_line_formula() {
        let path = ShapeKind::Line
            .to_path_data(r#"<line x1="1" y1="2" x2="3" y2="4"/>"#)
            .unwrap();
        assert_eq!(path, "M 1 2 L 3 4");
    }

    #[test]
    fn test_polygon_closed_polyline_open() {
        let raw = r#"<polygon points="0,0 10,0 10,10"/>"#;
        let path = ShapeKind::Polygon.to_path_data(raw).unwrap();
        assert_eq!(path, "M 0 0 L 10 0 L 10 10 z");

        let raw = r#"<polyline points="0 0 10 0 10 10"/>"#;
        let path = ShapeKind::Polyline.to_path_data(raw).unwrap();
        assert_eq!(path, "M 0 0 L 10 0 L 10 10");
    }

    #[test]
    fn test_path_and_glyph_passthrough() {
        let raw = r#"<path d="M 1 1 L 2 2"/>"#;
        assert_eq!(
            ShapeKind::Path.to_path_data(raw).unwrap(),
            "M 1 1 L 2 2"
        );
        let raw = r#"<glyph unicode="a" d="M 0 0 Z"/>"#;
        assert_eq!(ShapeKind::Glyph.to_path_data(raw).unwrap(), "M 0 0 Z");
    }

    #[test]
    fn test_missing_attribute_names_the_attribute() {
        let raw = r#"<circle cx="10" cy="10"/>"#;
        let err = ShapeKind::Circle.to_path_data(raw).unwrap_err();
        match err {
            SvgError::MissingAttribute {
                kind,
                attribute,
                tag,
            } => {
                assert_eq!(kind, "circle");
                assert_eq!(attribute, "r");
                assert_eq!(tag, raw);
            }
            other => panic!("expected MissingAttribute, got {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_number_is_missing_attribute() {
        let raw = r#"<circle cx="abc" cy="10" r="5"/>"#;
        let err = ShapeKind::Circle.to_path_data(raw).unwrap_err();
        assert!(matches!(
            err,
            SvgError::MissingAttribute {
                attribute: "cx",
                ..
            }
        ));
    }

    #[test]
    fn test_rect_alias() {
        assert_eq!(
            ShapeKind::from_tag_name("rectangle"),
            Some(ShapeKind::Rect)
        );
        assert_eq!(ShapeKind::from_tag_name("rect"), Some(ShapeKind::Rect));
        assert_eq!(ShapeKind::from_tag_name("g"), None);
    }
}
