//! Icon batch assembly
//!
//! Drives the scanner, shape converter and path normalizer over every SVG
//! file in a directory, producing one normalized icon record per file.
//! Processing is strictly sequential in directory-listing order: the
//! downstream config updater assigns glyph codes by array index, so
//! reordering changes the generated font.

use crate::error::{Result, SvgError};
use crate::path::{self, PathData};
use crate::scanner::{self, attribute};
use crate::shape::ShapeKind;
use log::debug;
use std::fs;
use std::path::Path;

/// Canonical em-box width the glyph outlines are scaled to
pub const EM_WIDTH: f64 = 1000.0;

/// One normalized icon, ready for a font-build configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    /// Unique name, derived from the file name
    pub name: String,
    /// Normalized outline in the SVG path mini-language
    pub path: String,
    /// Logical width of the source document
    pub width: f64,
}

/// The logical coordinate origin and width of one SVG document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
}

impl ViewBox {
    /// Derive the view box from a document's `<svg>` tag.
    ///
    /// A `viewBox` attribute supplies origin and width directly; absent
    /// that, a `width` attribute is used with origin (0, 0).
    ///
    /// # Errors
    ///
    /// - `SvgError::MissingSvgTag` when the document has no `<svg>` tag
    /// - `SvgError::InvalidViewBox` when `viewBox` has fewer than four
    ///   tokens, or the derived width is unparseable or not positive
    /// - `SvgError::MissingWidthOrViewBox` when neither attribute exists
    pub fn from_svg(svg: &str) -> Result<Self> {
        let mut svg_tag = None;
        for tag in scanner::tags(svg) {
            let tag = tag?;
            if tag.name == "svg" {
                svg_tag = Some(tag);
                break;
            }
        }
        let tag = svg_tag.ok_or(SvgError::MissingSvgTag)?;

        if let Some(view_box) = attribute(tag.raw, "viewBox") {
            let invalid = || SvgError::InvalidViewBox {
                value: view_box.to_string(),
            };
            let tokens: Vec<&str> = view_box.split_whitespace().collect();
            if tokens.len() < 4 {
                return Err(invalid());
            }
            let x: f64 = tokens[0].parse().map_err(|_| invalid())?;
            let y: f64 = tokens[1].parse().map_err(|_| invalid())?;
            let width: f64 = tokens[2].parse().map_err(|_| invalid())?;
            if width <= 0.0 {
                return Err(invalid());
            }
            return Ok(Self { x, y, width });
        }

        let width = attribute(tag.raw, "width").ok_or(SvgError::MissingWidthOrViewBox)?;
        let parsed: f64 = width
            .trim()
            .trim_end_matches("px")
            .trim()
            .parse()
            .map_err(|_| SvgError::InvalidViewBox {
                value: width.to_string(),
            })?;
        if parsed <= 0.0 {
            return Err(SvgError::InvalidViewBox {
                value: width.to_string(),
            });
        }
        Ok(Self {
            x: 0.0,
            y: 0.0,
            width: parsed,
        })
    }
}

/// Combine every recognized shape tag into one absolute-coordinate path
fn combined_path(svg: &str) -> Result<String> {
    let mut parts = Vec::new();
    for tag in scanner::tags(svg) {
        let tag = tag?;
        let Some(kind) = ShapeKind::from_tag_name(tag.name) else {
            debug!("skipping <{}> tag, no outline geometry", tag.name);
            continue;
        };
        let data = kind.to_path_data(tag.raw)?;
        parts.push(PathData::parse(&data)?.abs().to_string());
    }
    Ok(parts.join(" "))
}

/// Parse one icon document into a normalized record
fn parse_icon(file_name: &str, svg: &str) -> Result<Icon> {
    let view_box = ViewBox::from_svg(svg)?;
    let scale = EM_WIDTH / view_box.width;
    let origin_x = view_box.x + view_box.width / 2.0;
    let path = path::normalize(&combined_path(svg)?, scale, origin_x, view_box.y)?;
    let name = file_name
        .strip_suffix(".svg")
        .unwrap_or(file_name)
        .replace('_', "-");
    Ok(Icon {
        name,
        path,
        width: view_box.width,
    })
}

/// Build the icon batch from a directory of SVG files.
///
/// Regular files whose name ends in `.svg` (case-sensitive) are processed
/// in directory-listing order. Any per-file failure aborts the whole
/// batch; there is no partial-success mode.
///
/// # Errors
///
/// Propagates I/O errors and every parsing error from the per-file
/// pipeline unchanged.
pub fn build_icons(dir: &Path) -> Result<Vec<Icon>> {
    let mut icons = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };
        if !file_name.ends_with(".svg") || !entry.file_type()?.is_file() {
            continue;
        }
        debug!("processing {file_name}");
        let svg = fs::read_to_string(entry.path())?;
        icons.push(parse_icon(file_name, &svg)?);
    }
    Ok(icons)
}
