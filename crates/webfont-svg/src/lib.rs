//! SVG icon parser and glyph outline normalizer
//!
//! This crate turns a directory of SVG icon files into normalized vector
//! glyph outlines suitable for an icon-font build configuration.
//!
//! ## Pipeline
//!
//! - **Tag scanner** — a minimal hand-written scanner over the raw SVG
//!   text; no close-tag matching, no nesting
//! - **Shape conversion** — `<circle>`, `<ellipse>`, `<rect>`, `<line>`,
//!   `<polygon>`, `<polyline>`, `<path>` and `<glyph>` map to path
//!   command strings via fixed geometric formulas
//! - **Normalization** — outlines are translated to the view-box origin,
//!   scaled to a 1000-unit em box, converted to absolute coordinates and
//!   rounded to one decimal place
//!
//! ## Examples
//!
//! ```rust,no_run
//! use webfont_svg::build_icons;
//! use std::path::Path;
//!
//! let icons = build_icons(Path::new("icons"))?;
//! for icon in &icons {
//!     println!("{}: {}", icon.name, icon.path);
//! }
//! # Ok::<(), webfont_svg::SvgError>(())
//! ```
//!
//! Full SVG compliance is a non-goal: transforms, groups, `use`
//! references, CSS styling and nested coordinate systems are not
//! interpreted. Any malformed icon fails the whole batch; the caller is
//! the only recovery boundary.

pub mod error;
pub mod icon;
pub mod path;
pub mod scanner;
pub mod shape;

// Re-export main types
pub use error::{Result, SvgError};
pub use icon::{build_icons, Icon, ViewBox, EM_WIDTH};
pub use path::{normalize, PathData};
pub use scanner::{attribute, tags, Tag};
pub use shape::ShapeKind;
