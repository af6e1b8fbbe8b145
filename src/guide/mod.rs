//! Composition of the user guide.
//!
//! The guide is a fixed sequence of sections: cover, table of contents, the
//! numbered content sections and the quick reference. Each content section is
//! produced by its own function from a [`Composer`], which resolves screenshots
//! through the [`AssetEmbedder`] in document order and tallies what was found.
//! The table of contents is built last from the entries the content sections
//! registered, so every link points at an id that exists in the document.

mod admin;
mod cover;
mod customer;
mod drops;
pub mod markup;
mod overview;
mod reference;
mod toc;

use crate::assets::{AssetEmbedder, Embedded, Screenshot};
use crate::config::GuideConfig;
use chrono::NaiveDate;
use indicatif::ProgressBar;

/// Every screenshot the guide references, in document order.
pub const SCREENSHOTS: [Screenshot; 9] = [
    overview::HOMEPAGE,
    customer::SHOP,
    customer::DROPS,
    admin::LOGIN,
    admin::DASHBOARD,
    admin::PRODUCTS,
    admin::ORDERS,
    admin::DROPS,
    admin::DROPS_CREATE,
];

type SectionFn = fn(&mut Composer) -> Section;

/// Content sections in the order they appear after the table of contents.
const CONTENT: [SectionFn; 6] = [
    overview::section,
    customer::section,
    admin::section,
    admin::drops_section,
    // no screenshots in the workflow walkthrough
    |_| drops::section(),
    reference::section,
];

/// An entry in the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub anchor: &'static str,
    pub label: String,
    /// 0 for numbered sections, 1 for their subsections
    pub depth: usize,
}

/// An anchor-addressable block of the guide.
#[derive(Debug, Clone)]
pub struct Section {
    pub id: Option<&'static str>,
    pub class: &'static str,
    pub entries: Vec<TocEntry>,
    pub body: String,
}

impl Section {
    pub fn to_html(&self) -> String {
        match self.id {
            Some(id) => format!(
                "<div class=\"{}\" id=\"{id}\">\n{}</div>\n",
                self.class, self.body
            ),
            None => format!("<div class=\"{}\">\n{}</div>\n", self.class, self.body),
        }
    }
}

/// Accumulates the markup of one section, registering a table of contents
/// entry for each anchored heading it emits.
pub struct SectionBuilder {
    id: Option<&'static str>,
    class: &'static str,
    entries: Vec<TocEntry>,
    body: String,
}

impl SectionBuilder {
    /// A section starting on a new page, addressable by `id`.
    pub fn page(id: &'static str) -> Self {
        Self {
            id: Some(id),
            class: "page-break",
            entries: Vec::new(),
            body: String::new(),
        }
    }

    /// A section without an anchor.
    pub fn plain(class: &'static str) -> Self {
        Self {
            id: None,
            class,
            entries: Vec::new(),
            body: String::new(),
        }
    }

    fn push_entry(&mut self, anchor: &'static str, label: &str, depth: usize) {
        self.entries.push(TocEntry {
            anchor,
            label: label.to_string(),
            depth,
        });
    }

    /// Top-level numbered heading, linked to the section's own id.
    pub fn title(mut self, label: &str) -> Self {
        if let Some(id) = self.id {
            self.push_entry(id, label, 0);
        }
        self.body.push_str(&format!("<h1>{label}</h1>\n"));
        self
    }

    /// Subsection heading for a section that starts on its own page, linked
    /// to the section's id.
    pub fn page_subsection(mut self, label: &str) -> Self {
        if let Some(id) = self.id {
            self.push_entry(id, label, 1);
        }
        self.body.push_str(&format!("<h2>{label}</h2>\n"));
        self
    }

    /// Anchored subsection heading.
    pub fn subsection(mut self, anchor: &'static str, label: &str) -> Self {
        self.push_entry(anchor, label, 1);
        self.body
            .push_str(&format!("<h2 id=\"{anchor}\">{label}</h2>\n"));
        self
    }

    /// Overrides the table of contents label of the most recent entry.
    pub fn listed_as(mut self, label: &str) -> Self {
        if let Some(entry) = self.entries.last_mut() {
            entry.label = label.to_string();
        }
        self
    }

    /// Unanchored second level heading.
    pub fn heading(mut self, label: &str) -> Self {
        self.body.push_str(&format!("<h2>{label}</h2>\n"));
        self
    }

    pub fn h3(mut self, label: &str) -> Self {
        self.body.push_str(&format!("<h3>{label}</h3>\n"));
        self
    }

    pub fn html(mut self, markup: impl AsRef<str>) -> Self {
        self.body.push_str(markup.as_ref());
        if !self.body.ends_with('\n') {
            self.body.push('\n');
        }
        self
    }

    pub fn build(self) -> Section {
        Section {
            id: self.id,
            class: self.class,
            entries: self.entries,
            body: self.body,
        }
    }
}

/// Outcome of resolving every screenshot during composition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetReport {
    pub embedded: Vec<&'static str>,
    pub missing: Vec<&'static str>,
    /// Total size of the embedded files on disk
    pub bytes: u64,
}

/// Builds the guide from its section producers.
pub struct Composer<'a> {
    embedder: &'a AssetEmbedder,
    meta: &'a GuideConfig,
    date: NaiveDate,
    progress: &'a ProgressBar,
    report: AssetReport,
}

impl<'a> Composer<'a> {
    pub fn new(
        embedder: &'a AssetEmbedder,
        meta: &'a GuideConfig,
        date: NaiveDate,
        progress: &'a ProgressBar,
    ) -> Self {
        Self {
            embedder,
            meta,
            date,
            progress,
            report: AssetReport::default(),
        }
    }

    pub fn meta(&self) -> &GuideConfig {
        self.meta
    }

    /// The stamped generation date, e.g. "October 19, 2026".
    pub fn date_label(&self) -> String {
        self.date.format("%B %d, %Y").to_string()
    }

    /// Resolve a screenshot to markup, recording whether it was found.
    pub fn screenshot(&mut self, screenshot: &Screenshot) -> String {
        let embedded = self.embedder.embed(screenshot);
        self.progress.inc(1);
        if let Embedded::Inline { bytes, .. } = &embedded {
            self.report.bytes += bytes;
        }
        if embedded.is_missing() {
            self.report.missing.push(screenshot.filename);
        } else {
            self.report.embedded.push(screenshot.filename);
        }
        embedded.into_markup()
    }

    /// Assemble the whole guide.
    pub fn compose(mut self) -> Document {
        log::info!("Composing {} content sections", CONTENT.len());
        let content: Vec<Section> = CONTENT.iter().map(|produce| produce(&mut self)).collect();

        let mut sections = Vec::with_capacity(content.len() + 2);
        sections.push(cover::section(&self));
        sections.push(toc::section(&content));
        sections.extend(content);

        Document {
            title: self.meta.title.clone(),
            language: self.meta.language.clone(),
            sections,
            report: self.report,
        }
    }
}

/// The composed guide.
#[derive(Debug, Clone)]
pub struct Document {
    pub title: String,
    pub language: String,
    pub sections: Vec<Section>,
    pub report: AssetReport,
}

impl Document {
    /// Concatenated markup of every section.
    pub fn body(&self) -> String {
        self.sections.iter().map(Section::to_html).collect()
    }

    /// Table of contents entries of every section, in document order.
    pub fn toc_entries(&self) -> impl Iterator<Item = &TocEntry> {
        self.sections.iter().flat_map(|s| s.entries.iter())
    }

    /// A self-contained page with the stylesheet inlined.
    pub fn to_html(&self, stylesheet: &str) -> String {
        self.page(false, &format!("<style>\n{stylesheet}</style>"))
    }

    /// An XHTML page referencing an external stylesheet, for packaging.
    pub fn to_xhtml(&self, stylesheet_href: &str) -> String {
        self.page(
            true,
            &format!(r#"<link rel="stylesheet" type="text/css" href="{stylesheet_href}"/>"#),
        )
    }

    fn page(&self, xml_declaration: bool, head_extra: &str) -> String {
        let declaration = if xml_declaration {
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"
        } else {
            ""
        };
        format!(
            r#"{declaration}<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml" lang="{lang}" xml:lang="{lang}">
<head>
<meta charset="UTF-8"/>
<title>{title}</title>
{head_extra}
</head>
<body>
{body}</body>
</html>
"#,
            lang = html_escape::encode_double_quoted_attribute(&self.language),
            title = html_escape::encode_text(&self.title),
            body = self.body(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::markup::Status;
    use super::*;
    use crate::palette::Palette;
    use crate::styles::generate_stylesheet;
    use std::collections::HashSet;
    use tempfile::tempdir;

    fn compose_with(dir: &std::path::Path) -> Document {
        let embedder = AssetEmbedder::new(dir);
        let meta = GuideConfig::default();
        let progress = ProgressBar::hidden();
        let date = NaiveDate::from_ymd_opt(2026, 2, 8).expect("valid date");
        Composer::new(&embedder, &meta, date, &progress).compose()
    }

    fn ids_in(html: &str) -> HashSet<&str> {
        html.split("id=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect()
    }

    #[test]
    fn has_exactly_one_cover_and_one_toc() {
        let dir = tempdir().expect("can create temp dir");
        let body = compose_with(dir.path()).body();
        assert_eq!(body.matches("class=\"cover\"").count(), 1);
        assert_eq!(body.matches("class=\"toc\"").count(), 1);
        assert!(body.find("class=\"cover\"") < body.find("class=\"toc\""));
    }

    #[test]
    fn toc_links_resolve_to_later_ids() {
        let dir = tempdir().expect("can create temp dir");
        let body = compose_with(dir.path()).body();
        let toc_start = body.find("class=\"toc\"").expect("has toc");
        let toc_end = toc_start + body[toc_start..].find("</div>").expect("toc closes");
        let toc = &body[toc_start..toc_end];
        let later_ids = ids_in(&body[toc_end..]);

        let targets: Vec<&str> = toc
            .split("href=\"#")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect();
        assert_eq!(targets.len(), 23);
        for target in targets {
            assert!(later_ids.contains(target), "dangling toc link #{target}");
        }
    }

    #[test]
    fn ids_are_unique() {
        let dir = tempdir().expect("can create temp dir");
        let body = compose_with(dir.path()).body();
        let count = body.matches("id=\"").count();
        assert_eq!(ids_in(&body).len(), count);
    }

    #[test]
    fn sections_follow_the_fixed_order() {
        let dir = tempdir().expect("can create temp dir");
        let doc = compose_with(dir.path());
        let ids: Vec<Option<&str>> = doc.sections.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec![
                None,
                Some("contents"),
                Some("overview"),
                Some("customer-pages"),
                Some("admin-panel"),
                Some("admin-drops-section"),
                Some("drops-workflow"),
                Some("reference"),
            ]
        );
    }

    #[test]
    fn every_badge_class_used_has_a_style_rule() {
        let dir = tempdir().expect("can create temp dir");
        let body = compose_with(dir.path()).body();
        let css = generate_stylesheet(&Palette::default());

        let used: HashSet<&str> = body
            .split("status-badge ")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect();
        assert_eq!(used.len(), Status::ALL.len());
        for class in used {
            assert!(css.contains(&format!(".{class} {{")), "no rule for {class}");
        }
    }

    #[test]
    fn screenshots_are_resolved_in_document_order() {
        let dir = tempdir().expect("can create temp dir");
        let doc = compose_with(dir.path());
        let expected: Vec<&str> = SCREENSHOTS.iter().map(|s| s.filename).collect();
        assert_eq!(doc.report.missing, expected);
        assert!(doc.report.embedded.is_empty());

        let body = doc.body();
        let mut last = 0;
        for name in expected {
            let pos = body
                .find(&format!("[Screenshot: {name} not found]"))
                .expect("placeholder present");
            assert!(pos > last, "{name} out of order");
            last = pos;
        }
    }

    #[test]
    fn date_is_stamped_on_cover_and_footer() {
        let dir = tempdir().expect("can create temp dir");
        let body = compose_with(dir.path()).body();
        assert_eq!(body.matches("February 08, 2026").count(), 2);
    }

    #[test]
    fn html_page_inlines_the_stylesheet() {
        let dir = tempdir().expect("can create temp dir");
        let html = compose_with(dir.path()).to_html("body { color: red; }\n");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>\nbody { color: red; }\n</style>"));
        assert!(html.contains("<title>Odd Fellow Coffee Roasters</title>"));
    }
}
