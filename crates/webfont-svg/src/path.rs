//! SVG path-data transform engine
//!
//! Parses the `d`-attribute mini-language into segments and applies the
//! transforms the glyph pipeline needs: translation, uniform scale,
//! relative-to-absolute conversion and coordinate rounding. The transforms
//! are plain arithmetic on parsed coordinates, so identical input always
//! serializes to identical output.

use crate::error::{Result, SvgError};
use std::fmt;

/// One parsed path command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// `M`/`m`
    MoveTo { abs: bool, x: f64, y: f64 },
    /// `L`/`l`
    LineTo { abs: bool, x: f64, y: f64 },
    /// `H`/`h`
    Horizontal { abs: bool, x: f64 },
    /// `V`/`v`
    Vertical { abs: bool, y: f64 },
    /// `C`/`c`
    CurveTo {
        abs: bool,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    /// `S`/`s`
    SmoothCurveTo {
        abs: bool,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    /// `Q`/`q`
    Quadratic {
        abs: bool,
        x1: f64,
        y1: f64,
        x: f64,
        y: f64,
    },
    /// `T`/`t`
    SmoothQuadratic { abs: bool, x: f64, y: f64 },
    /// `A`/`a`
    Arc {
        abs: bool,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    /// `Z`/`z`
    Close,
}

/// A parsed path, ready for chained transforms
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathData {
    segments: Vec<Segment>,
}

/// Byte cursor over path-data text
struct Lexer<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(d: &'a str) -> Self {
        Self {
            bytes: d.as_bytes(),
            pos: 0,
        }
    }

    fn skip_separators(&mut self) {
        while let Some(&b) = self.bytes.get(self.pos) {
            if b.is_ascii_whitespace() || b == b',' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Read one signed decimal number, exponent form included
    fn number(&mut self) -> Result<f64> {
        self.skip_separators();
        let start = self.pos;
        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.pos += 1;
        }
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        if self.peek() == Some(b'.') {
            self.pos += 1;
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.pos += 1;
            }
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.pos += 1;
            }
        }
        let text = std::str::from_utf8(&self.bytes[start..self.pos]).unwrap_or("");
        text.parse().map_err(|_| SvgError::InvalidPath {
            reason: format!("expected number at byte {start}"),
        })
    }

    fn flag(&mut self) -> Result<bool> {
        Ok(self.number()? != 0.0)
    }

    fn pair(&mut self) -> Result<(f64, f64)> {
        Ok((self.number()?, self.number()?))
    }
}

impl PathData {
    /// Parse path-data text into segments.
    ///
    /// Implicit command repetition is honored, `M`/`m` repeating as
    /// `L`/`l` per the SVG grammar.
    ///
    /// # Errors
    ///
    /// Returns `SvgError::InvalidPath` on an unknown command letter,
    /// a malformed number, or trailing coordinates after `Z`.
    pub fn parse(d: &str) -> Result<Self> {
        let mut lexer = Lexer::new(d);
        let mut segments = Vec::new();
        let mut pending: Option<u8> = None;

        loop {
            lexer.skip_separators();
            let Some(next) = lexer.peek() else { break };

            let letter = if next.is_ascii_alphabetic() {
                lexer.pos += 1;
                next
            } else {
                // A bare number repeats the previous command
                match pending {
                    Some(b'M') => b'L',
                    Some(b'm') => b'l',
                    Some(b'Z' | b'z') | None => {
                        return Err(SvgError::InvalidPath {
                            reason: format!("expected command at byte {}", lexer.pos),
                        })
                    }
                    Some(prev) => prev,
                }
            };

            let abs = letter.is_ascii_uppercase();
            let segment = match letter.to_ascii_uppercase() {
                b'M' => {
                    let (x, y) = lexer.pair()?;
                    Segment::MoveTo { abs, x, y }
                }
                b'L' => {
                    let (x, y) = lexer.pair()?;
                    Segment::LineTo { abs, x, y }
                }
                b'H' => Segment::Horizontal {
                    abs,
                    x: lexer.number()?,
                },
                b'V' => Segment::Vertical {
                    abs,
                    y: lexer.number()?,
                },
                b'C' => {
                    let (x1, y1) = lexer.pair()?;
                    let (x2, y2) = lexer.pair()?;
                    let (x, y) = lexer.pair()?;
                    Segment::CurveTo {
                        abs,
                        x1,
                        y1,
                        x2,
                        y2,
                        x,
                        y,
                    }
                }
                b'S' => {
                    let (x2, y2) = lexer.pair()?;
                    let (x, y) = lexer.pair()?;
                    Segment::SmoothCurveTo { abs, x2, y2, x, y }
                }
                b'Q' => {
                    let (x1, y1) = lexer.pair()?;
                    let (x, y) = lexer.pair()?;
                    Segment::Quadratic { abs, x1, y1, x, y }
                }
                b'T' => {
                    let (x, y) = lexer.pair()?;
                    Segment::SmoothQuadratic { abs, x, y }
                }
                b'A' => {
                    let (rx, ry) = lexer.pair()?;
                    let rotation = lexer.number()?;
                    let large_arc = lexer.flag()?;
                    let sweep = lexer.flag()?;
                    let (x, y) = lexer.pair()?;
                    Segment::Arc {
                        abs,
                        rx,
                        ry,
                        rotation,
                        large_arc,
                        sweep,
                        x,
                        y,
                    }
                }
                b'Z' => Segment::Close,
                _ => {
                    return Err(SvgError::InvalidPath {
                        reason: format!("unknown command '{}'", letter as char),
                    })
                }
            };

            segments.push(segment);
            pending = Some(letter);
        }

        Ok(Self { segments })
    }

    /// True when the path holds no segments
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Convert every segment to absolute form.
    ///
    /// Tracks the current point and subpath start the way a renderer
    /// would; `h`/`v` stay axis-aligned as `H`/`V`.
    #[must_use]
    pub fn abs(mut self) -> Self {
        let (mut cx, mut cy) = (0.0, 0.0);
        let (mut sx, mut sy) = (0.0, 0.0);

        for segment in &mut self.segments {
            match segment {
                Segment::MoveTo { abs, x, y } => {
                    if !*abs {
                        *x += cx;
                        *y += cy;
                        *abs = true;
                    }
                    (cx, cy) = (*x, *y);
                    (sx, sy) = (*x, *y);
                }
                Segment::LineTo { abs, x, y } | Segment::SmoothQuadratic { abs, x, y } => {
                    if !*abs {
                        *x += cx;
                        *y += cy;
                        *abs = true;
                    }
                    (cx, cy) = (*x, *y);
                }
                Segment::Horizontal { abs, x } => {
                    if !*abs {
                        *x += cx;
                        *abs = true;
                    }
                    cx = *x;
                }
                Segment::Vertical { abs, y } => {
                    if !*abs {
                        *y += cy;
                        *abs = true;
                    }
                    cy = *y;
                }
                Segment::CurveTo {
                    abs,
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => {
                    if !*abs {
                        *x1 += cx;
                        *y1 += cy;
                        *x2 += cx;
                        *y2 += cy;
                        *x += cx;
                        *y += cy;
                        *abs = true;
                    }
                    (cx, cy) = (*x, *y);
                }
                Segment::SmoothCurveTo { abs, x2, y2, x, y } => {
                    if !*abs {
                        *x2 += cx;
                        *y2 += cy;
                        *x += cx;
                        *y += cy;
                        *abs = true;
                    }
                    (cx, cy) = (*x, *y);
                }
                Segment::Quadratic { abs, x1, y1, x, y } => {
                    if !*abs {
                        *x1 += cx;
                        *y1 += cy;
                        *x += cx;
                        *y += cy;
                        *abs = true;
                    }
                    (cx, cy) = (*x, *y);
                }
                Segment::Arc { abs, x, y, .. } => {
                    if !*abs {
                        *x += cx;
                        *y += cy;
                        *abs = true;
                    }
                    (cx, cy) = (*x, *y);
                }
                Segment::Close => {
                    (cx, cy) = (sx, sy);
                }
            }
        }
        self
    }

    /// Translate absolute coordinates by `(dx, dy)`.
    ///
    /// Relative segments are displacement-only and unaffected; run
    /// [`Self::abs`] first to translate a whole path.
    #[must_use]
    pub fn translate(mut self, dx: f64, dy: f64) -> Self {
        for segment in &mut self.segments {
            match segment {
                Segment::MoveTo { abs: true, x, y }
                | Segment::LineTo { abs: true, x, y }
                | Segment::SmoothQuadratic { abs: true, x, y }
                | Segment::Arc { abs: true, x, y, .. } => {
                    *x += dx;
                    *y += dy;
                }
                Segment::Horizontal { abs: true, x } => *x += dx,
                Segment::Vertical { abs: true, y } => *y += dy,
                Segment::CurveTo {
                    abs: true,
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => {
                    *x1 += dx;
                    *y1 += dy;
                    *x2 += dx;
                    *y2 += dy;
                    *x += dx;
                    *y += dy;
                }
                Segment::SmoothCurveTo {
                    abs: true,
                    x2,
                    y2,
                    x,
                    y,
                } => {
                    *x2 += dx;
                    *y2 += dy;
                    *x += dx;
                    *y += dy;
                }
                Segment::Quadratic {
                    abs: true,
                    x1,
                    y1,
                    x,
                    y,
                } => {
                    *x1 += dx;
                    *y1 += dy;
                    *x += dx;
                    *y += dy;
                }
                _ => {}
            }
        }
        self
    }

    /// Uniformly scale every coordinate (arc radii included, arc flags
    /// and rotation untouched).
    #[must_use]
    pub fn scale(mut self, factor: f64) -> Self {
        for segment in &mut self.segments {
            match segment {
                Segment::MoveTo { x, y, .. }
                | Segment::LineTo { x, y, .. }
                | Segment::SmoothQuadratic { x, y, .. } => {
                    *x *= factor;
                    *y *= factor;
                }
                Segment::Horizontal { x, .. } => *x *= factor,
                Segment::Vertical { y, .. } => *y *= factor,
                Segment::CurveTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                    ..
                } => {
                    *x1 *= factor;
                    *y1 *= factor;
                    *x2 *= factor;
                    *y2 *= factor;
                    *x *= factor;
                    *y *= factor;
                }
                Segment::SmoothCurveTo { x2, y2, x, y, .. } => {
                    *x2 *= factor;
                    *y2 *= factor;
                    *x *= factor;
                    *y *= factor;
                }
                Segment::Quadratic { x1, y1, x, y, .. } => {
                    *x1 *= factor;
                    *y1 *= factor;
                    *x *= factor;
                    *y *= factor;
                }
                Segment::Arc {
                    rx, ry, x, y, ..
                } => {
                    *rx *= factor.abs();
                    *ry *= factor.abs();
                    *x *= factor;
                    *y *= factor;
                }
                Segment::Close => {}
            }
        }
        self
    }

    /// Round every coordinate to `precision` decimal places
    #[must_use]
    pub fn round(mut self, precision: i32) -> Self {
        let factor = 10f64.powi(precision);
        let round = |v: &mut f64| {
            *v = (*v * factor).round() / factor;
            // (-0.04).round() would otherwise serialize as "-0"
            if *v == 0.0 {
                *v = 0.0;
            }
        };
        for segment in &mut self.segments {
            match segment {
                Segment::MoveTo { x, y, .. }
                | Segment::LineTo { x, y, .. }
                | Segment::SmoothQuadratic { x, y, .. } => {
                    round(x);
                    round(y);
                }
                Segment::Horizontal { x, .. } => round(x),
                Segment::Vertical { y, .. } => round(y),
                Segment::CurveTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                    ..
                } => {
                    round(x1);
                    round(y1);
                    round(x2);
                    round(y2);
                    round(x);
                    round(y);
                }
                Segment::SmoothCurveTo { x2, y2, x, y, .. } => {
                    round(x2);
                    round(y2);
                    round(x);
                    round(y);
                }
                Segment::Quadratic { x1, y1, x, y, .. } => {
                    round(x1);
                    round(y1);
                    round(x);
                    round(y);
                }
                Segment::Arc {
                    rx, ry, rotation, x, y, ..
                } => {
                    round(rx);
                    round(ry);
                    round(rotation);
                    round(x);
                    round(y);
                }
                Segment::Close => {}
            }
        }
        self
    }
}

impl Segment {
    const fn letter(self) -> char {
        match self {
            Self::MoveTo { abs: true, .. } => 'M',
            Self::MoveTo { abs: false, .. } => 'm',
            Self::LineTo { abs: true, .. } => 'L',
            Self::LineTo { abs: false, .. } => 'l',
            Self::Horizontal { abs: true, .. } => 'H',
            Self::Horizontal { abs: false, .. } => 'h',
            Self::Vertical { abs: true, .. } => 'V',
            Self::Vertical { abs: false, .. } => 'v',
            Self::CurveTo { abs: true, .. } => 'C',
            Self::CurveTo { abs: false, .. } => 'c',
            Self::SmoothCurveTo { abs: true, .. } => 'S',
            Self::SmoothCurveTo { abs: false, .. } => 's',
            Self::Quadratic { abs: true, .. } => 'Q',
            Self::Quadratic { abs: false, .. } => 'q',
            Self::SmoothQuadratic { abs: true, .. } => 'T',
            Self::SmoothQuadratic { abs: false, .. } => 't',
            Self::Arc { abs: true, .. } => 'A',
            Self::Arc { abs: false, .. } => 'a',
            Self::Close => 'Z',
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = self.letter();
        match *self {
            Self::MoveTo { x, y, .. }
            | Self::LineTo { x, y, .. }
            | Self::SmoothQuadratic { x, y, .. } => write!(f, "{letter} {x} {y}"),
            Self::Horizontal { x, .. } => write!(f, "{letter} {x}"),
            Self::Vertical { y, .. } => write!(f, "{letter} {y}"),
            Self::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
                ..
            } => write!(f, "{letter} {x1} {y1} {x2} {y2} {x} {y}"),
            Self::SmoothCurveTo { x2, y2, x, y, .. } => {
                write!(f, "{letter} {x2} {y2} {x} {y}")
            }
            Self::Quadratic { x1, y1, x, y, .. } => {
                write!(f, "{letter} {x1} {y1} {x} {y}")
            }
            Self::Arc {
                rx,
                ry,
                rotation,
                large_arc,
                sweep,
                x,
                y,
                ..
            } => write!(
                f,
                "{letter} {rx} {ry} {rotation} {} {} {x} {y}",
                u8::from(large_arc),
                u8::from(sweep)
            ),
            Self::Close => write!(f, "{letter}"),
        }
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            segment.fmt(f)?;
        }
        Ok(())
    }
}

/// Normalize a combined glyph path.
///
/// Applies, in order: translation by `(-origin_x, -origin_y)`, uniform
/// scale, absolute-coordinate conversion and rounding to one decimal
/// place.
///
/// # Errors
///
/// Returns `SvgError::InvalidPath` when the path data does not parse.
pub fn normalize(path: &str, scale: f64, origin_x: f64, origin_y: f64) -> Result<String> {
    Ok(PathData::parse(path)?
        .abs()
        .translate(-origin_x, -origin_y)
        .scale(scale)
        .round(1)
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip_absolute() {
        let d = "M 0 0 L 10 5 H 20 V 8 Z";
        assert_eq!(PathData::parse(d).unwrap().to_string(), d);
    }

    #[test]
    fn test_parse_compact_separators() {
        let d = "M0,0L10-5l.5.5";
        let path = PathData::parse(d).unwrap();
        assert_eq!(path.to_string(), "M 0 0 L 10 -5 l 0.5 0.5");
    }

    #[test]
    fn test_implicit_repetition() {
        // Bare coordinate pairs repeat the previous command; M repeats as L
        let path = PathData::parse("M 0 0 10 0 10 10").unwrap();
        assert_eq!(path.to_string(), "M 0 0 L 10 0 L 10 10");

        let path = PathData::parse("m 0 0 10 0").unwrap();
        assert_eq!(path.to_string(), "m 0 0 l 10 0");
    }

    #[test]
    fn test_abs_converts_relative() {
        let path = PathData::parse("M 0 0 h 10 v 20 H 0 Z").unwrap().abs();
        assert_eq!(path.to_string(), "M 0 0 H 10 V 20 H 0 Z");

        let path = PathData::parse("m 5 5 l 5 0 l 0 5 z l 1 1").unwrap().abs();
        // After Z the current point returns to the subpath start
        assert_eq!(path.to_string(), "M 5 5 L 10 5 L 10 10 Z L 6 6");
    }

    #[test]
    fn test_abs_arcs_and_curves() {
        let path = PathData::parse("M 5 10 a 5 5 0 1 0 10 0 c 1 1 2 2 3 3")
            .unwrap()
            .abs();
        assert_eq!(
            path.to_string(),
            "M 5 10 A 5 5 0 1 0 15 10 C 16 11 17 12 18 13"
        );
    }

    #[test]
    fn test_translate_touches_absolute_only() {
        let path = PathData::parse("M 10 10 l 5 5 L 0 0")
            .unwrap()
            .translate(-10.0, -10.0);
        assert_eq!(path.to_string(), "M 0 0 l 5 5 L -10 -10");
    }

    #[test]
    fn test_scale_arcs() {
        let path = PathData::parse("M 0 0 A 5 5 45 1 0 10 0").unwrap().scale(2.0);
        assert_eq!(path.to_string(), "M 0 0 A 10 10 45 1 0 20 0");
    }

    #[test]
    fn test_round_one_decimal_no_negative_zero() {
        let path = PathData::parse("M 1.234 -0.04 L 2.56 3").unwrap().round(1);
        assert_eq!(path.to_string(), "M 1.2 0 L 2.6 3");
    }

    #[test]
    fn test_normalize_identity_only_rounds() {
        // scale 1, origin (0,0): an already-absolute path keeps its shape
        // and form, only coordinates get rounded
        let out = normalize("M 0 0 L 10.04 5.16 H 20 Z", 1.0, 0.0, 0.0).unwrap();
        assert_eq!(out, "M 0 0 L 10 5.2 H 20 Z");
    }

    #[test]
    fn test_normalize_translate_then_scale() {
        // origin (12, 0), scale 2: p' = (p - origin) * 2
        let out = normalize("M 12 0 L 22 10", 2.0, 12.0, 0.0).unwrap();
        assert_eq!(out, "M 0 0 L 20 20");
    }

    #[test]
    fn test_normalize_deterministic() {
        let d = "M 0.123456 7.89 a 1.5 1.5 0 1 0 3 0";
        let first = normalize(d, 3.7, 1.1, 2.2).unwrap();
        let second = normalize(d, 3.7, 1.1, 2.2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            PathData::parse("M 0 0 L garbage"),
            Err(SvgError::InvalidPath { .. })
        ));
        assert!(matches!(
            PathData::parse("X 1 2"),
            Err(SvgError::InvalidPath { .. })
        ));
        // Coordinates directly after Z have no command to repeat
        assert!(matches!(
            PathData::parse("M 0 0 Z 1 2"),
            Err(SvgError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_parse_empty() {
        assert!(PathData::parse("").unwrap().is_empty());
        assert!(PathData::parse("   ").unwrap().is_empty());
    }
}
