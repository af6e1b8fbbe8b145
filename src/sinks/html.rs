//! Self-contained HTML output.
//!
//! The page carries its stylesheet inline and its screenshots as data URIs, so
//! it can be moved around freely. The `@page` rules make a browser's print
//! dialog paginate it like the printed guide.

use super::{Render, RenderStats};
use crate::guide::Document;
use anyhow::{Context, Result};
use std::path::Path;

#[derive(Debug, Default)]
pub struct Html;

impl Render for Html {
    fn render(&self, document: &Document, stylesheet: &str, outfile: &Path) -> Result<RenderStats> {
        std::fs::write(outfile, document.to_html(stylesheet))
            .with_context(|| format!("Failed to write HTML file: {}", outfile.display()))?;
        RenderStats::of(outfile)
    }
}
