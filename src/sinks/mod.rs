//! Output sinks for the composed guide.
//!
//! Every sink takes the composed [`Document`] and the generated stylesheet and
//! writes a single file, replacing whatever was there before. Any failure is
//! fatal to the run; nothing is retried and a partially written file is left
//! as-is.

use crate::guide::Document;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

mod epub;
mod html;
mod pdf;

pub use epub::Epub;
pub use html::Html;
pub use pdf::Pdf;

/// Output formats the guide can be rendered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// A single self-contained, print-ready HTML page
    Html,
    /// An EPUB ebook
    Epub,
    /// A PDF printed through headless Chrome (requires the `chrome` feature)
    Pdf,
}

/// Paginated PDF when the `chrome` feature is compiled in, HTML otherwise.
impl Default for Format {
    fn default() -> Self {
        if cfg!(feature = "chrome") {
            Format::Pdf
        } else {
            Format::Html
        }
    }
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Epub => "epub",
            Format::Pdf => "pdf",
        }
    }

    pub fn sink(self) -> Sink {
        match self {
            Format::Html => Sink::Html(Html),
            Format::Epub => Sink::Epub(Epub),
            Format::Pdf => Sink::Pdf(Pdf),
        }
    }
}

/// Statistics from rendering, used for user feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStats {
    /// Size of the written file
    pub bytes: u64,
}

impl RenderStats {
    fn of(outfile: &Path) -> Result<Self> {
        let bytes = std::fs::metadata(outfile)
            .with_context(|| format!("Failed to read metadata of {}", outfile.display()))?
            .len();
        Ok(RenderStats { bytes })
    }
}

pub trait Render {
    fn render(&self, document: &Document, stylesheet: &str, outfile: &Path) -> Result<RenderStats>;
}

#[derive(Debug)]
pub enum Sink {
    Html(Html),
    Epub(Epub),
    Pdf(Pdf),
}

impl Render for Sink {
    fn render(&self, document: &Document, stylesheet: &str, outfile: &Path) -> Result<RenderStats> {
        if let Some(parent) = outfile.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory {}", parent.display())
            })?;
        }

        match self {
            Sink::Html(s) => s.render(document, stylesheet, outfile),
            Sink::Epub(s) => s.render(document, stylesheet, outfile),
            Sink::Pdf(s) => s.render(document, stylesheet, outfile),
        }
    }
}
