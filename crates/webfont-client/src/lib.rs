//! Font-building collaborators for webfont-rs
//!
//! Everything outside the SVG core: updating the persisted fontello
//! configuration, opening a build session over HTTP, downloading the
//! generated webfont and extracting it into the output directory.
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//! use webfont_client::{download, extract_webfont, open_session, update_config};
//! use webfont_svg::build_icons;
//!
//! let icons = build_icons(Path::new("icons"))?;
//! update_config(Path::new("config.json"), &icons)?;
//! let session = open_session(Path::new("config.json"))?;
//! let archive = download(&session)?;
//! extract_webfont(&archive, Path::new("webfont"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod archive;
pub mod client;
pub mod config;
pub mod error;

// Re-export main entry points
pub use archive::extract_webfont;
pub use client::{download, open_session, SERVICE_URL};
pub use config::{glyphs, update_config, Glyph, GlyphOutline, GLYPH_CODE_BASE};
pub use error::{ClientError, Result};
