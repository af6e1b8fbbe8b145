//! PDF output through headless Chrome.
//!
//! The self-contained HTML page is written to a temporary file, loaded in a
//! headless Chrome tab and printed with the page size and margins from the
//! stylesheet's `@page` rules.

use super::{Render, RenderStats};
use crate::guide::Document;
use anyhow::Result;
use std::path::Path;

#[derive(Debug, Default)]
pub struct Pdf;

#[cfg(feature = "chrome")]
impl Render for Pdf {
    fn render(&self, document: &Document, stylesheet: &str, outfile: &Path) -> Result<RenderStats> {
        use anyhow::{anyhow, Context};
        use headless_chrome::types::PrintToPdfOptions;
        use headless_chrome::{Browser, LaunchOptions};
        use std::io::Write;

        let mut page = tempfile::Builder::new()
            .prefix("guide-book-")
            .suffix(".html")
            .tempfile()
            .with_context(|| "Failed to create temporary HTML file")?;
        page.write_all(document.to_html(stylesheet).as_bytes())
            .and_then(|_| page.flush())
            .with_context(|| "Failed to write temporary HTML file")?;
        let url = url::Url::from_file_path(page.path())
            .map_err(|_| anyhow!("Can't build a file URL for {}", page.path().display()))?;

        // the page is local and script-free
        let launch_options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(false)
            .build()
            .map_err(|e| anyhow!("Failed to build launch options: {e}"))?;
        log::debug!("Launching headless Chrome");
        let browser =
            Browser::new(launch_options).with_context(|| "Failed to launch headless Chrome")?;
        let tab = browser
            .new_tab()
            .with_context(|| "Failed to open a browser tab")?;

        log::info!("Loading {url} in headless Chrome");
        tab.navigate_to(url.as_str())
            .and_then(|tab| tab.wait_until_navigated())
            .with_context(|| "Failed to load the guide in headless Chrome")?;

        let pdf = tab
            .print_to_pdf(Some(PrintToPdfOptions {
                print_background: Some(true),
                prefer_css_page_size: Some(true),
                ..Default::default()
            }))
            .with_context(|| "Failed to print the guide to PDF")?;

        std::fs::write(outfile, pdf)
            .with_context(|| format!("Failed to write PDF file: {}", outfile.display()))?;
        RenderStats::of(outfile)
    }
}

#[cfg(not(feature = "chrome"))]
impl Render for Pdf {
    fn render(&self, _: &Document, _: &str, _: &Path) -> Result<RenderStats> {
        Err(anyhow::anyhow!(
            "PDF output needs guide-book to be built with the `chrome` feature"
        ))
    }
}
