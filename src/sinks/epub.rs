//! EPUB output.
//!
//! The guide is packaged as a single XHTML chapter with the stylesheet stored
//! alongside it. The EPUB navigation mirrors the guide's own table of
//! contents: numbered sections at the top level with their subsections nested
//! beneath them.

use super::{Render, RenderStats};
use crate::guide::{Document, TocEntry};
use anyhow::{Context, Result};
use epub_builder::{EpubBuilder, EpubContent, EpubVersion, ReferenceType, TocElement, ZipLibrary};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const CHAPTER: &str = "guide.xhtml";

#[derive(Debug, Default)]
pub struct Epub;

impl Render for Epub {
    fn render(&self, document: &Document, stylesheet: &str, outfile: &Path) -> Result<RenderStats> {
        let zip = ZipLibrary::new()
            .map_err(anyhow::Error::msg)
            .with_context(|| "Failed to create ZIP library for EPUB")?;
        let mut builder = EpubBuilder::new(zip)
            .map_err(anyhow::Error::msg)
            .with_context(|| "Failed to build builder")?;
        builder.epub_version(EpubVersion::V30);

        builder
            .metadata("title", &document.title)
            .map_err(anyhow::Error::msg)
            .with_context(|| "Failed to set title metadata")?;
        builder
            .metadata("generator", "guide-book")
            .map_err(anyhow::Error::msg)
            .with_context(|| "Failed to set generator metadata")?;
        builder
            .metadata("lang", &document.language)
            .map_err(anyhow::Error::msg)
            .with_context(|| "Failed to set language metadata")?;

        builder
            .stylesheet(stylesheet.as_bytes())
            .map_err(anyhow::Error::msg)
            .with_context(|| "Failed to add stylesheet")?;

        let xhtml = document.to_xhtml("stylesheet.css");
        let mut content = EpubContent::new(CHAPTER, xhtml.as_bytes())
            .title(&document.title)
            .reftype(ReferenceType::Text);
        for element in navigation(document.toc_entries()) {
            content = content.child(element);
        }
        builder
            .add_content(content)
            .map_err(anyhow::Error::msg)
            .with_context(|| "Failed to add guide chapter")?;

        let output_file = File::create(outfile)
            .with_context(|| format!("Failed to create EPUB file: {}", outfile.display()))?;
        builder
            .generate(BufWriter::new(output_file))
            .map_err(anyhow::Error::msg)
            .with_context(|| "Failed to generate EPUB file")?;

        RenderStats::of(outfile)
    }
}

/// Nest depth-1 entries under the preceding depth-0 entry.
fn navigation<'a>(entries: impl Iterator<Item = &'a TocEntry>) -> Vec<TocElement> {
    let mut elements: Vec<TocElement> = Vec::new();
    let mut current: Option<TocElement> = None;

    for entry in entries {
        // labels are markup, navigation titles are plain text
        let title = html_escape::decode_html_entities(&entry.label);
        let element = TocElement::new(format!("{CHAPTER}#{}", entry.anchor), title);
        match (entry.depth, current.take()) {
            (0, previous) => {
                elements.extend(previous);
                current = Some(element);
            }
            (_, Some(parent)) => current = Some(parent.child(element)),
            (_, None) => elements.push(element),
        }
    }
    elements.extend(current);
    elements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(anchor: &'static str, depth: usize) -> TocEntry {
        TocEntry {
            anchor,
            label: anchor.to_string(),
            depth,
        }
    }

    #[test]
    fn nests_subsections_under_sections() {
        let entries = [
            entry("one", 0),
            entry("one-a", 1),
            entry("one-b", 1),
            entry("two", 0),
        ];
        let nav = navigation(entries.iter());
        assert_eq!(nav.len(), 2);
        assert_eq!(nav[0].url, "guide.xhtml#one");
        assert_eq!(nav[0].children.len(), 2);
        assert_eq!(nav[1].url, "guide.xhtml#two");
        assert!(nav[1].children.is_empty());
    }

    #[test]
    fn navigation_titles_are_plain_text() {
        let entries = [TocEntry {
            anchor: "cart",
            label: "Cart &amp; Checkout".to_string(),
            depth: 0,
        }];
        let nav = navigation(entries.iter());
        assert_eq!(nav[0].title, "Cart & Checkout");
    }

    #[test]
    fn orphan_subsection_stays_top_level() {
        let entries = [entry("orphan", 1), entry("one", 0)];
        let nav = navigation(entries.iter());
        assert_eq!(nav.len(), 2);
        assert_eq!(nav[0].url, "guide.xhtml#orphan");
    }
}
