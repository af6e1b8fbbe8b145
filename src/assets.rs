//! Screenshot embedding.
//!
//! Screenshots are inlined into the guide as base64 `data:` URIs so the output
//! is a single self-contained file. A screenshot that isn't on disk is replaced
//! with a visible placeholder notice instead of failing the run.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::{Path, PathBuf};

/// CSS class of the notice emitted in place of a missing screenshot.
pub const MISSING_ASSET_CLASS: &str = "missing-asset";

/// A screenshot referenced from the guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screenshot {
    pub filename: &'static str,
    /// CSS `max-width` applied to the embedded image
    pub max_width: &'static str,
}

impl Screenshot {
    pub const fn new(filename: &'static str) -> Self {
        Self {
            filename,
            max_width: "100%",
        }
    }

    pub const fn with_max_width(self, max_width: &'static str) -> Self {
        Self {
            filename: self.filename,
            max_width,
        }
    }
}

/// Result of resolving a screenshot against the assets directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Embedded {
    /// The file was found and inlined; `bytes` is its size on disk.
    Inline { markup: String, bytes: u64 },
    /// The file was missing and a placeholder notice was emitted.
    Missing { markup: String },
}

impl Embedded {
    pub fn into_markup(self) -> String {
        match self {
            Embedded::Inline { markup, .. } | Embedded::Missing { markup } => markup,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Embedded::Missing { .. })
    }
}

/// Reads screenshots from a fixed directory and turns them into markup.
#[derive(Debug, Clone)]
pub struct AssetEmbedder {
    dir: PathBuf,
}

impl AssetEmbedder {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_of(&self, screenshot: &Screenshot) -> PathBuf {
        self.dir.join(screenshot.filename)
    }

    /// Resolve a screenshot to an inline image, or a placeholder if it can't be read.
    pub fn embed(&self, screenshot: &Screenshot) -> Embedded {
        let path = self.path_of(screenshot);
        let data = match std::fs::read(&path) {
            Ok(data) => data,
            Err(e) => {
                log::warn!(
                    "Screenshot {} not available ({e}), using a placeholder",
                    path.display()
                );
                return Embedded::Missing {
                    markup: placeholder(screenshot.filename),
                };
            }
        };

        let bytes = data.len() as u64;
        log::debug!("Embedding {} ({})", path.display(), format_size(bytes));

        let markup = format!(
            r#"<img src="data:{mime};base64,{data}" style="max-width:{width};border:1px solid #ddd;border-radius:6px;margin:6pt 0;" alt="{alt}"/>"#,
            mime = mime_from_path(&path),
            data = STANDARD.encode(&data),
            width = screenshot.max_width,
            alt = html_escape::encode_double_quoted_attribute(screenshot.filename),
        );
        Embedded::Inline { markup, bytes }
    }
}

fn placeholder(filename: &str) -> String {
    format!(
        r#"<p class="{MISSING_ASSET_CLASS}">[Screenshot: {} not found]</p>"#,
        html_escape::encode_text(filename)
    )
}

/// Determine MIME type from file extension.
pub fn mime_from_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Human-readable binary size, e.g. `1.5 KiB`.
pub fn format_size(bytes: u64) -> String {
    byte_unit::Byte::from_u64(bytes)
        .get_appropriate_unit(byte_unit::UnitType::Binary)
        .to_string()
}
