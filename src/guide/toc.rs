//! Table of contents built from the entries registered by the content sections.

use super::{Section, SectionBuilder};

pub fn section(content: &[Section]) -> Section {
    let mut items = String::from("<div class=\"toc\">\n<ul>\n");
    for entry in content.iter().flat_map(|s| s.entries.iter()) {
        let class = if entry.depth > 0 {
            " class=\"toc-sub\""
        } else {
            ""
        };
        items.push_str(&format!(
            "<li{class}><a href=\"#{}\">{}</a></li>\n",
            entry.anchor, entry.label
        ));
    }
    items.push_str("</ul>\n</div>\n");

    // the contents page itself isn't listed
    SectionBuilder::page("contents")
        .html("<h1>Table of Contents</h1>")
        .html(items)
        .build()
}
