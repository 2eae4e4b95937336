//! Webfont archive extraction
//!
//! The font service delivers the generated webfont as a ZIP whose entries
//! all live under one top-level directory named after the session. That
//! directory is replaced with the caller's output directory, which is
//! recreated from scratch on every run.

use crate::error::Result;
use log::warn;
use std::fs::{self, File};
use std::io::{self, Cursor};
use std::path::{Component, Path, PathBuf};
use zip::ZipArchive;

/// Drop parent references, roots and drive prefixes from an entry path.
/// Returns `None` when nothing safe is left.
#[inline]
fn sanitize_path(path: &str) -> Option<PathBuf> {
    let mut sanitized = PathBuf::new();
    for component in Path::new(path).components() {
        if let Component::Normal(part) = component {
            sanitized.push(part);
        }
    }
    if sanitized.as_os_str().is_empty() {
        None
    } else {
        Some(sanitized)
    }
}

/// Entry path relative to the archive's top-level directory
fn strip_top_level(path: &Path) -> PathBuf {
    let mut components = path.components();
    components.next();
    components.as_path().to_path_buf()
}

/// Extract a webfont ZIP into `out_dir`.
///
/// An existing `out_dir` is removed first. Entry paths are sanitized
/// against traversal; entries that sanitize to nothing are skipped with
/// a warning.
///
/// # Errors
///
/// Returns `ClientError::Zip` for a corrupt archive and
/// `ClientError::Io` for filesystem failures.
pub fn extract_webfont(zip_bytes: &[u8], out_dir: &Path) -> Result<()> {
    let mut archive = ZipArchive::new(Cursor::new(zip_bytes))?;

    if out_dir.exists() {
        fs::remove_dir_all(out_dir)?;
    }
    fs::create_dir_all(out_dir)?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let raw_name = entry.name().to_string();

        let Some(sanitized) = sanitize_path(&raw_name) else {
            warn!("skipping invalid archive path: {raw_name}");
            continue;
        };
        let relative = strip_top_level(&sanitized);

        if entry.is_dir() {
            fs::create_dir_all(out_dir.join(&relative))?;
            continue;
        }
        if relative.as_os_str().is_empty() {
            warn!("skipping top-level file outside the webfont directory: {raw_name}");
            continue;
        }

        let target = out_dir.join(&relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&target)?;
        io::copy(&mut entry, &mut out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::{FileOptions, ZipWriter};

    /// Helper: build a webfont-shaped ZIP in memory
    fn webfont_zip() -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        {
            let mut zip = ZipWriter::new(&mut buffer);
            let options: FileOptions<()> = FileOptions::default();

            zip.add_directory("fontello-8f2a/", options).expect("dir");
            zip.add_directory("fontello-8f2a/css/", options).expect("dir");

            zip.start_file("fontello-8f2a/css/webfont.css", options)
                .expect("start");
            zip.write_all(b".icon-home:before { content: '\\e800'; }")
                .expect("write");

            zip.start_file("fontello-8f2a/LICENSE.txt", options)
                .expect("start");
            zip.write_all(b"license text").expect("write");

            zip.finish().expect("finish");
        }
        buffer.into_inner()
    }

    #[test]
    fn test_extract_replaces_top_level_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("webfont");

        extract_webfont(&webfont_zip(), &out).expect("extract");

        let css = fs::read_to_string(out.join("css/webfont.css")).expect("css");
        assert!(css.contains("\\e800"));
        assert!(out.join("LICENSE.txt").exists());
        // No trace of the session directory name
        assert!(!out.join("fontello-8f2a").exists());
    }

    #[test]
    fn test_extract_removes_previous_output() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("webfont");
        fs::create_dir_all(&out).expect("mkdir");
        fs::write(out.join("stale.css"), "old").expect("write");

        extract_webfont(&webfont_zip(), &out).expect("extract");

        assert!(!out.join("stale.css").exists());
        assert!(out.join("css/webfont.css").exists());
    }

    #[test]
    fn test_sanitize_path_strips_traversal() {
        assert_eq!(
            sanitize_path("../../etc/passwd"),
            Some(PathBuf::from("etc/passwd"))
        );
        assert_eq!(sanitize_path("a/./b"), Some(PathBuf::from("a/b")));
        assert_eq!(sanitize_path(".."), None);
    }

    #[test]
    fn test_extract_rejects_garbage() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = extract_webfont(b"not a zip", &dir.path().join("out"));
        assert!(result.is_err());
    }
}
