//! Minimal SVG tag scanner
//!
//! Scans raw SVG text for element tags, yielding each tag's name, raw text
//! and end offset. Only opening tags are consulted: self-closing and open
//! tags are treated identically, and no close-tag matching or nesting logic
//! exists. Closing tags, comments and processing instructions are skipped.

use crate::error::{Result, SvgError};

/// One scanned tag, a borrowed view into the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    /// Element name, the first word after `<`
    pub name: &'a str,
    /// Raw tag text including the angle brackets
    pub raw: &'a str,
    /// Byte offset just past the closing `>`
    pub end: usize,
}

/// True for bytes that may appear in a tag or attribute name
#[inline]
const fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

impl<'a> Tag<'a> {
    /// Scan for the next tag at or after `start`.
    ///
    /// Returns `Ok(None)` when no further `<...>` tag exists. A truncated
    /// trailing tag (no closing `>`) also ends the scan.
    ///
    /// # Errors
    ///
    /// Returns `SvgError::InvalidTag` when a `<...>` region exists but no
    /// tag-name token can be extracted from it.
    pub fn scan(svg: &'a str, start: usize) -> Result<Option<Self>> {
        let bytes = svg.as_bytes();
        let mut pos = start;

        // Searching for an open bracket followed by a name byte. `</`, `<!`
        // and `<?` open close tags, comments and processing instructions,
        // none of which carry shape geometry.
        let open = loop {
            let Some(offset) = svg.get(pos..).and_then(|rest| rest.find('<')) else {
                return Ok(None);
            };
            let at = pos + offset;
            match bytes.get(at + 1).copied() {
                None => return Ok(None),
                Some(b) if is_name_byte(b) => break at,
                Some(b'/' | b'!' | b'?') => pos = at + 1,
                Some(_) => {
                    let close = svg[at..].find('>').map_or(svg.len(), |c| at + c + 1);
                    return Err(SvgError::InvalidTag {
                        content: svg[at..close].to_string(),
                    });
                }
            }
        };

        // Reading the tag name, then to the close bracket.
        let mut name_end = open + 1;
        while name_end < bytes.len() && is_name_byte(bytes[name_end]) {
            name_end += 1;
        }
        let Some(close) = svg[name_end..].find('>') else {
            return Ok(None);
        };
        let end = name_end + close + 1;

        Ok(Some(Self {
            name: &svg[open + 1..name_end],
            raw: &svg[open..end],
            end,
        }))
    }
}

/// Lazy iterator over every tag in a document, in document order
#[derive(Debug, Clone)]
pub struct Tags<'a> {
    svg: &'a str,
    offset: usize,
    done: bool,
}

/// Iterate the tags of `svg` from offset 0
#[inline]
pub fn tags(svg: &str) -> Tags<'_> {
    Tags {
        svg,
        offset: 0,
        done: false,
    }
}

impl<'a> Iterator for Tags<'a> {
    type Item = Result<Tag<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match Tag::scan(self.svg, self.offset) {
            Ok(Some(tag)) => {
                self.offset = tag.end;
                Some(Ok(tag))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Extract a named attribute's value from a tag's raw text.
///
/// Looks for `name="value"` first; when that is not found (or the value is
/// empty), retries once with single quotes. Returns `None` for an absent or
/// empty attribute — whether that is acceptable is the caller's call.
pub fn attribute<'a>(raw: &'a str, name: &str) -> Option<&'a str> {
    quoted(raw, name, '"').or_else(|| quoted(raw, name, '\''))
}

fn quoted<'a>(raw: &'a str, name: &str, quote: char) -> Option<&'a str> {
    let pattern = format!("{name}={quote}");
    let mut from = 0;
    while let Some(found) = raw.get(from..).and_then(|rest| rest.find(&pattern)) {
        let at = from + found;
        // `width=` must not match inside `stroke-width=`
        let boundary = at == 0 || !is_name_byte(raw.as_bytes()[at - 1]);
        if boundary {
            let start = at + pattern.len();
            let end = start + raw.get(start..)?.find(quote)?;
            let value = &raw[start..end];
            return if value.is_empty() { None } else { Some(value) };
        }
        from = at + pattern.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_svg_tag() {
        let svg = r#"<?xml version="1.0"?><svg viewBox="0 0 24 24"><path d="M 0 0"/></svg>"#;
        let tag = Tag::scan(svg, 0).unwrap().expect("should find a tag");
        assert_eq!(tag.name, "svg");
        assert_eq!(tag.raw, r#"<svg viewBox="0 0 24 24">"#);

        let next = Tag::scan(svg, tag.end).unwrap().expect("should find path");
        assert_eq!(next.name, "path");
        assert_eq!(next.raw, r#"<path d="M 0 0"/>"#);

        // Close tag is skipped, nothing left
        assert!(Tag::scan(svg, next.end).unwrap().is_none());
    }

    #[test]
    fn test_scan_skips_comments_and_close_tags() {
        let svg = "<!-- icon --><g></g><circle cx=\"1\" cy=\"2\" r=\"3\"/>";
        let tag = Tag::scan(svg, 0).unwrap().expect("should find g");
        assert_eq!(tag.name, "g");
        let tag = Tag::scan(svg, tag.end).unwrap().expect("should find circle");
        assert_eq!(tag.name, "circle");
    }

    #[test]
    fn test_scan_invalid_tag() {
        let err = Tag::scan("text < broken> more", 0).unwrap_err();
        match err {
            SvgError::InvalidTag { content } => assert_eq!(content, "< broken>"),
            other => panic!("expected InvalidTag, got {other:?}"),
        }
    }

    #[test]
    fn test_scan_truncated_tail() {
        // An unterminated trailing tag ends the scan instead of erroring
        assert!(Tag::scan("<svg width=\"10\"", 0).unwrap().is_none());
    }

    #[test]
    fn test_tags_iterator_order() {
        let svg = r#"<svg width="10"><rect x="0" y="0" width="1" height="1"/><line x1="0" y1="0" x2="1" y2="1"/></svg>"#;
        let names: Vec<_> = tags(svg).map(|t| t.unwrap().name).collect();
        assert_eq!(names, ["svg", "rect", "line"]);
    }

    #[test]
    fn test_attribute_double_and_single_quotes() {
        assert_eq!(attribute(r#"<svg width="24">"#, "width"), Some("24"));
        assert_eq!(attribute("<svg width='24'>", "width"), Some("24"));
        assert_eq!(attribute(r#"<svg width="">"#, "width"), None);
        assert_eq!(attribute(r#"<svg height="24">"#, "width"), None);
    }

    #[test]
    fn test_attribute_name_boundary() {
        let raw = r#"<rect stroke-width="2" width="10">"#;
        assert_eq!(attribute(raw, "width"), Some("10"));
        assert_eq!(attribute(raw, "stroke-width"), Some("2"));
    }
}
