//! Cover page: title, subtitle, generation date and site.

use super::{Composer, Section, SectionBuilder};

pub fn section(cx: &Composer) -> Section {
    let meta = cx.meta();
    SectionBuilder::plain("cover")
        .html(format!(
            "<h1>{title}</h1>\n<p class=\"subtitle\">{subtitle}</p>\n<p class=\"date\">{date}</p>\n<p class=\"site\">{site}</p>\n",
            title = html_escape::encode_text(&meta.title),
            subtitle = html_escape::encode_text(&meta.subtitle),
            date = cx.date_label(),
            site = html_escape::encode_text(&meta.site),
        ))
        .build()
}
