//! Section 5: quick reference tables, the weekly checklist and the status legend.

use super::markup::{badge, list, step, table, two_columns, Status};
use super::{Composer, Section, SectionBuilder};

const URLS: [[&str; 3]; 13] = [
    ["Homepage", "/", "Customer"],
    ["Shop", "/shop", "Customer"],
    ["Drops", "/drops", "Customer"],
    ["Cart", "/cart", "Customer"],
    ["Reservations", "/reservations", "Customer"],
    ["Subscriptions", "/subscriptions", "Customer"],
    ["Admin Login", "/admin", "Admin"],
    ["Orders", "/admin/orders", "Admin"],
    ["Products", "/admin/products", "Admin"],
    ["Reservations", "/admin/reservations", "Admin"],
    ["Time Slots", "/admin/slots", "Admin"],
    ["Subscriptions", "/admin/subscriptions", "Admin"],
    ["Drops", "/admin/drops", "Admin"],
];

pub fn section(cx: &mut Composer) -> Section {
    SectionBuilder::page("reference")
        .title("5. Quick Reference")
        .heading("URL Reference")
        .html(table(["Page", "URL", "Who"], &URLS))
        .heading("Weekly Workflow Checklist")
        .html(checklist())
        .heading("Status Colors at a Glance")
        .html(legend())
        .html(footer(cx))
        .build()
}

fn checklist() -> String {
    [
        step(
            "Sunday Evening",
            &list(&[
                "Go to /admin/drops → \"New Drop\"",
                "Set title, Monday's date, opens-at (Sunday 6 PM), pickup window",
                "Add items: Sourdough Loaf x 20 (or whatever you're baking)",
                "Click \"Create Drop\"",
            ]),
        ),
        step(
            "Sunday 6 PM",
            "Drop goes live automatically. Customers start ordering.",
        ),
        step(
            "Monday Morning",
            &list(&[
                "Check /admin/orders for drop orders",
                "Advance stages: ordered → baking",
                "Bake what was ordered",
            ]),
        ),
        step(
            "Monday Afternoon",
            &list(&[
                "Advance stages: baking → ready",
                "Customers pick up, advance to: picked up",
                "Close the drop when done",
            ]),
        ),
    ]
    .concat()
}

fn legend_block(title: &str, entries: &[(Status, &str)]) -> String {
    let lines = entries
        .iter()
        .map(|(status, meaning)| format!("{} {meaning}", badge(*status)))
        .collect::<Vec<_>>()
        .join("<br/>\n");
    format!("<p><b>{title}</b><br/>\n{lines}\n</p>\n")
}

fn legend() -> String {
    let orders = legend_block(
        "Order Status:",
        &[
            (Status::Pending, "Payment not confirmed"),
            (Status::Confirmed, "Payment received"),
            (Status::Fulfilled, "Order complete"),
        ],
    );
    let drops = legend_block(
        "Drop Status:",
        &[
            (Status::Scheduled, "Not yet open"),
            (Status::Live, "Accepting orders"),
            (Status::SoldOut, "All items claimed"),
            (Status::Closed, "Manually closed"),
        ],
    );
    two_columns(&(orders + &drops))
}

fn footer(cx: &Composer) -> String {
    let meta = cx.meta();
    format!(
        "<div class=\"footer\">\n{title} — User Guide — Generated {date} — {site}\n</div>",
        title = html_escape::encode_text(&meta.title),
        date = cx.date_label(),
        site = html_escape::encode_text(&meta.site),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_lists_every_status() {
        let legend = legend();
        for status in Status::ALL {
            assert!(legend.contains(status.css_class()), "{status:?} missing");
        }
    }

    #[test]
    fn url_table_has_a_row_per_page() {
        let html = table(["Page", "URL", "Who"], &URLS);
        assert_eq!(html.matches("<tr>").count(), URLS.len() + 1);
    }
}
