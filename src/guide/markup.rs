//! Small markup helpers shared by the section producers.
//!
//! Fragments are plain strings of XHTML-compatible markup. Helpers take
//! already-formed markup for their bodies, so inline `<b>` and `<code>` tags in
//! the guide text pass through untouched.

/// Categorised callout boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalloutKind {
    Info,
    Tip,
    Warning,
    Critical,
}

impl CalloutKind {
    pub const ALL: [CalloutKind; 4] = [
        CalloutKind::Info,
        CalloutKind::Tip,
        CalloutKind::Warning,
        CalloutKind::Critical,
    ];

    pub fn css_class(self) -> &'static str {
        match self {
            CalloutKind::Info => "info-box",
            CalloutKind::Tip => "tip-box",
            CalloutKind::Warning => "warn-box",
            CalloutKind::Critical => "critical-box",
        }
    }
}

/// Order and drop status values shown as coloured badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Scheduled,
    Live,
    SoldOut,
    Closed,
    Pending,
    Confirmed,
    Fulfilled,
}

impl Status {
    pub const ALL: [Status; 7] = [
        Status::Scheduled,
        Status::Live,
        Status::SoldOut,
        Status::Closed,
        Status::Pending,
        Status::Confirmed,
        Status::Fulfilled,
    ];

    pub fn css_class(self) -> &'static str {
        match self {
            Status::Scheduled => "badge-scheduled",
            Status::Live => "badge-live",
            Status::SoldOut => "badge-sold-out",
            Status::Closed => "badge-closed",
            Status::Pending => "badge-pending",
            Status::Confirmed => "badge-confirmed",
            Status::Fulfilled => "badge-fulfilled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Scheduled => "scheduled",
            Status::Live => "live",
            Status::SoldOut => "sold out",
            Status::Closed => "closed",
            Status::Pending => "pending",
            Status::Confirmed => "confirmed",
            Status::Fulfilled => "fulfilled",
        }
    }

    /// `(background, foreground)` of the badge.
    pub fn colours(self) -> (&'static str, &'static str) {
        match self {
            Status::Scheduled | Status::Confirmed => ("#dbeafe", "#1e40af"),
            Status::Live | Status::Fulfilled => ("#dcfce7", "#166534"),
            Status::SoldOut => ("#fef2f2", "#991b1b"),
            Status::Closed => ("#f3f4f6", "#374151"),
            Status::Pending => ("#fef9c3", "#854d0e"),
        }
    }
}

/// A badge showing the status's own label.
pub fn badge(status: Status) -> String {
    badge_labelled(status, status.label())
}

/// A badge in the colours of `status` but with a different label, e.g. drop
/// order stages borrowing the order status colours.
pub fn badge_labelled(status: Status, label: &str) -> String {
    format!(
        r#"<span class="status-badge {}">{label}</span>"#,
        status.css_class()
    )
}

/// A callout box; `label` is rendered in bold ahead of the body.
pub fn callout(kind: CalloutKind, label: &str, body: &str) -> String {
    format!(
        "<div class=\"{}\">\n<b>{label}</b> {body}\n</div>\n",
        kind.css_class()
    )
}

/// A callout whose label sits on its own line, as used for the overview cards.
pub fn card(kind: CalloutKind, label: &str, body: &str) -> String {
    format!(
        "<div class=\"{}\">\n<b>{label}</b><br/>\n{body}\n</div>\n",
        kind.css_class()
    )
}

/// A step indicator with a highlighted label line.
pub fn step(label: &str, body: &str) -> String {
    if body.is_empty() {
        format!("<div class=\"step\">\n<span class=\"step-num\">{label}</span>\n</div>\n")
    } else {
        format!(
            "<div class=\"step\">\n<span class=\"step-num\">{label}</span><br/>\n{body}\n</div>\n"
        )
    }
}

/// A step indicator without a label, used for badge flows.
pub fn flow(body: &str) -> String {
    format!("<div class=\"step\">\n{body}\n</div>\n")
}

pub fn list(items: &[&str]) -> String {
    wrap_items("ul", items)
}

pub fn ordered(items: &[&str]) -> String {
    wrap_items("ol", items)
}

fn wrap_items(tag: &str, items: &[&str]) -> String {
    let mut html = format!("<{tag}>\n");
    for item in items {
        html.push_str("<li>");
        html.push_str(item);
        html.push_str("</li>\n");
    }
    html.push_str(&format!("</{tag}>\n"));
    html
}

/// A table with a header row; cells are markup.
pub fn table<const N: usize>(headers: [&str; N], rows: &[[&str; N]]) -> String {
    let mut html = String::from("<table>\n<tr>");
    for header in headers {
        html.push_str("<th>");
        html.push_str(header);
        html.push_str("</th>");
    }
    html.push_str("</tr>\n");
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str("<td>");
            html.push_str(cell);
            html.push_str("</td>");
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n");
    html
}

pub fn para(body: &str) -> String {
    format!("<p>{body}</p>\n")
}

pub fn two_columns(body: &str) -> String {
    format!("<div class=\"two-col\">\n{body}</div>\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn badge_uses_status_class_and_label() {
        assert_eq!(
            badge(Status::SoldOut),
            r#"<span class="status-badge badge-sold-out">sold out</span>"#
        );
        assert_eq!(
            badge_labelled(Status::Closed, "picked up"),
            r#"<span class="status-badge badge-closed">picked up</span>"#
        );
    }

    #[test]
    fn table_renders_header_and_rows() {
        let html = table(["A", "B"], &[["1", "2"], ["3", "<b>4</b>"]]);
        assert_eq!(
            html,
            "<table>\n<tr><th>A</th><th>B</th></tr>\n<tr><td>1</td><td>2</td></tr>\n<tr><td>3</td><td><b>4</b></td></tr>\n</table>\n"
        );
    }

    #[test]
    fn callout_classes_are_distinct() {
        let mut classes: Vec<_> = CalloutKind::ALL.iter().map(|k| k.css_class()).collect();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), CalloutKind::ALL.len());
    }

    #[test]
    fn empty_step_body_has_no_line_break() {
        assert!(!step("Label", "").contains("<br/>"));
        assert!(step("Label", "body").contains("<br/>"));
    }
}
