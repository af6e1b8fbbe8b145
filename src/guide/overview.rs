//! Section 1: what the site sells and how payments flow.

use super::markup::{card, para, two_columns, CalloutKind};
use super::{Composer, Section, SectionBuilder};
use crate::assets::Screenshot;

pub const HOMEPAGE: Screenshot = Screenshot::new("homepage.png");

pub fn section(cx: &mut Composer) -> Section {
    let channels = [
        card(
            CalloutKind::Info,
            "Regular Shop",
            "Browse and purchase coffee, bread, and hot plate items for pickup. Always available.",
        ),
        card(
            CalloutKind::Info,
            "Sourdough Drops",
            "Limited-inventory bake day pre-orders. Opens on a schedule, sells out fast.",
        ),
        card(
            CalloutKind::Info,
            "Subscriptions",
            "Weekly, biweekly, or monthly recurring coffee deliveries billed through Stripe.",
        ),
        card(
            CalloutKind::Info,
            "Reservations",
            "Book a table time slot for dine-in experiences.",
        ),
    ]
    .concat();

    SectionBuilder::page("overview")
        .title("1. Site Overview")
        .html(para(
            "Odd Fellow Coffee Roasters is a SvelteKit e-commerce website for a specialty coffee and sourdough bakery in Oklahoma. The site supports three sales channels:",
        ))
        .html(two_columns(&channels))
        .h3("How Payments Work")
        .html(para(
            "All payments are processed through <b>Stripe</b>. When a customer clicks \"Add to Cart\" and checks out, they are redirected to Stripe's secure checkout page. After payment, Stripe sends a webhook back to the site confirming the order. The admin never handles credit card information directly.",
        ))
        .html(cx.screenshot(&HOMEPAGE))
        .build()
}
