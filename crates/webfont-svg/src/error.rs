//! SVG icon parsing error types

use std::io;
use thiserror::Error;

/// Errors raised while turning SVG icons into glyph outlines
#[derive(Error, Debug)]
pub enum SvgError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document contains no `<svg>` tag
    #[error("invalid svg: unable to find <svg> tag")]
    MissingSvgTag,

    /// A `viewBox` attribute exists but does not supply four numbers
    #[error("invalid viewBox attribute, it must contain 4 numbers: {value}")]
    InvalidViewBox {
        /// The offending attribute value
        value: String,
    },

    /// The `<svg>` tag carries neither a `viewBox` nor a `width`
    #[error("svg must contain at least a width or viewBox attribute")]
    MissingWidthOrViewBox,

    /// A `<...>` region exists but no tag name could be extracted
    #[error("invalid tag {content}")]
    InvalidTag {
        /// Raw text of the malformed tag
        content: String,
    },

    /// A required attribute is absent or unparseable for a recognized shape
    #[error("invalid attribute {attribute} for <{kind}> in {tag}")]
    MissingAttribute {
        /// Shape kind being converted
        kind: &'static str,
        /// Name of the missing attribute
        attribute: &'static str,
        /// Raw text of the tag
        tag: String,
    },

    /// Path data the normalizer cannot parse
    #[error("invalid path data: {reason}")]
    InvalidPath {
        /// What the tokenizer choked on
        reason: String,
    },
}

/// Result type for SVG icon operations
pub type Result<T> = std::result::Result<T, SvgError>;
