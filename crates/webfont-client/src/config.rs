//! Fontello configuration update
//!
//! Rewrites the `glyphs` array of a persisted `config.json` from a batch
//! of parsed icons. Glyph codes are assigned sequentially from the base
//! codepoint in array order; the mapping is index-based by design, so the
//! caller must hand icons over in their original processing order.

use crate::error::{ClientError, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use webfont_svg::Icon;

/// First codepoint assigned to a generated glyph
pub const GLYPH_CODE_BASE: u32 = 0xE800;

/// One glyph entry of the fontello configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Glyph {
    /// Stable identifier, the icon's batch index as a string
    pub uid: String,
    /// CSS class name of the glyph
    pub css: String,
    /// Assigned codepoint
    pub code: u32,
    /// Glyph source collection
    pub src: String,
    /// Whether the glyph is included in the build
    pub selected: bool,
    /// Outline data
    pub svg: GlyphOutline,
}

/// Outline payload of one glyph entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlyphOutline {
    /// Normalized path data
    pub path: String,
    /// Logical width of the source icon
    pub width: f64,
}

/// Build the glyph records for a batch of icons, codes assigned from
/// [`GLYPH_CODE_BASE`] in array order
#[must_use]
#[allow(clippy::cast_possible_truncation)] // batch sizes are tiny
pub fn glyphs(icons: &[Icon]) -> Vec<Glyph> {
    icons
        .iter()
        .enumerate()
        .map(|(index, icon)| Glyph {
            uid: index.to_string(),
            css: icon.name.clone(),
            code: GLYPH_CODE_BASE + index as u32,
            src: "custom_icons".to_string(),
            selected: true,
            svg: GlyphOutline {
                path: icon.path.clone(),
                width: icon.width,
            },
        })
        .collect()
}

/// Replace the `glyphs` array of the configuration file at `path`.
///
/// The rest of the configuration (font name, CSS prefix, hinting flags)
/// is preserved untouched. Output is pretty-printed with the 4-space
/// indent fontello itself writes.
///
/// # Errors
///
/// Returns `ClientError` when the file cannot be read or written, is not
/// valid JSON, or is not a JSON object.
pub fn update_config(path: &Path, icons: &[Icon]) -> Result<()> {
    let text = fs::read_to_string(path)?;
    let mut config: serde_json::Value = serde_json::from_str(&text)?;
    let Some(object) = config.as_object_mut() else {
        return Err(ClientError::Config(format!(
            "{} is not a JSON object",
            path.display()
        )));
    };
    object.insert(
        "glyphs".to_string(),
        serde_json::to_value(glyphs(icons))?,
    );

    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    config.serialize(&mut serializer)?;
    fs::write(path, out)?;
    Ok(())
}
