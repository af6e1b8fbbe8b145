//! Section 3: the admin panel.
//!
//! Split over two pages; drop management starts on its own page.

use super::markup::{
    badge, badge_labelled, callout, flow, list, ordered, para, table, CalloutKind, Status,
};
use super::{Composer, Section, SectionBuilder};
use crate::assets::Screenshot;

pub const LOGIN: Screenshot = Screenshot::new("admin-login.png");
pub const DASHBOARD: Screenshot = Screenshot::new("admin-dashboard.png");
pub const PRODUCTS: Screenshot = Screenshot::new("admin-products.png");
pub const ORDERS: Screenshot = Screenshot::new("admin-orders.png").with_max_width("90%");
pub const DROPS: Screenshot = Screenshot::new("admin-drops.png");
pub const DROPS_CREATE: Screenshot = Screenshot::new("admin-drops-create.png");

pub fn section(cx: &mut Composer) -> Section {
    let order_flow = [
        badge(Status::Pending),
        badge(Status::Confirmed),
        badge(Status::Fulfilled),
    ]
    .join(" → ");
    let stage_flow = [
        badge_labelled(Status::Confirmed, "ordered"),
        badge_labelled(Status::Pending, "baking"),
        badge_labelled(Status::Live, "ready"),
        badge_labelled(Status::Closed, "picked up"),
    ]
    .join(" → ");

    SectionBuilder::page("admin-panel")
        .title("3. Admin Panel")
        .subsection("admin-login", "3.1 Login")
        .html(para(
            "Navigate to <b>/admin</b> to access the admin panel. Enter your username and password.",
        ))
        .html(cx.screenshot(&LOGIN))
        .html(callout(
            CalloutKind::Critical,
            "Security:",
            "The admin login has rate limiting (5 attempts per 15 minutes). After 5 failed attempts, the account is locked for 15 minutes. Sessions expire automatically, and cookies are scoped to <code>/admin</code> and <code>/api/admin</code> paths only.",
        ))
        .subsection("admin-dashboard", "3.2 Dashboard")
        .html(para("After logging in, you see the dashboard with six sections:"))
        .html(cx.screenshot(&DASHBOARD))
        .html(table(
            ["Section", "Path", "What It Does"],
            &[
                [
                    "<b>Orders</b>",
                    "/admin/orders",
                    "View all orders, update status (pending → confirmed → fulfilled), advance drop order stages",
                ],
                [
                    "<b>Products</b>",
                    "/admin/products",
                    "Add, edit, deactivate products. Set prices, categories, variants, subscribable flag",
                ],
                [
                    "<b>Reservations</b>",
                    "/admin/reservations",
                    "View all table reservations (read-only)",
                ],
                [
                    "<b>Time Slots</b>",
                    "/admin/slots",
                    "Add or remove available reservation time slots",
                ],
                [
                    "<b>Subscriptions</b>",
                    "/admin/subscriptions",
                    "View all active, canceled, and past-due subscriptions (read-only)",
                ],
                [
                    "<b>Drops</b>",
                    "/admin/drops",
                    "Create and close sourdough drops, track inventory",
                ],
            ],
        ))
        .subsection("admin-products", "3.3 Managing Products")
        .html(para(
            "The products page lists all products (active and inactive). Each product shows its name, category, price, and status.",
        ))
        .html(cx.screenshot(&PRODUCTS))
        .h3("Adding a New Product")
        .html(ordered(&[
            "Click <b>\"+ New Product\"</b>",
            "Fill in: Name, Category, Description, Price (in cents, e.g., 1400 = $14.00)",
            "Optionally set Variants JSON, Image filename, and Subscribable checkbox",
            "Click <b>\"Save\"</b>",
        ]))
        .h3("Editing a Product")
        .html(para(
            "Click <b>\"Edit\"</b> next to any product. The same form appears pre-filled. Change what you need and save.",
        ))
        .h3("Deactivating a Product")
        .html(para(
            "Click <b>\"Deactivate\"</b> to hide a product from the shop. A confirmation dialog will ask you to confirm. Deactivated products show \"(inactive)\" in the admin list.",
        ))
        .html(callout(
            CalloutKind::Tip,
            "Tip:",
            "Deactivating is not deleting. The product still exists in the database and can be reactivated by editing it and saving.",
        ))
        .subsection("admin-orders", "3.4 Managing Orders")
        .html(para(
            "The orders page shows all orders from newest to oldest. Each order displays the customer name/email, total, and creation date.",
        ))
        .html(cx.screenshot(&ORDERS))
        .h3("Order Status Flow (Regular Orders)")
        .html(flow(&order_flow))
        .html(para(
            "Click <b>\"Confirm\"</b> to acknowledge an order, then <b>\"Fulfill\"</b> when it's been picked up or delivered.",
        ))
        .h3("Drop Order Stage Flow")
        .html(para("Orders from drops have an additional stage tracker:"))
        .html(flow(&stage_flow))
        .html(para(
            "Click the <b>\"→ next stage\"</b> button to advance each order through the workflow.",
        ))
        .build()
}

pub fn drops_section(cx: &mut Composer) -> Section {
    let drop_badges = [
        badge(Status::Scheduled),
        badge(Status::Live),
        badge(Status::SoldOut),
        badge(Status::Closed),
    ]
    .join(" ");
    let drop_card_items = format!("<b>Status badge</b> — {drop_badges}");
    let subscription_badges = format!(
        "Status badge ({}, {}, {})",
        badge_labelled(Status::Live, "active"),
        badge_labelled(Status::SoldOut, "canceled"),
        badge_labelled(Status::Pending, "past due"),
    );

    SectionBuilder::page("admin-drops-section")
        .page_subsection("3.5 Managing Drops")
        .html(para(
            "The drops admin page is where you create and manage bake day drops.",
        ))
        .html(cx.screenshot(&DROPS))
        .html(para("Each drop card shows:"))
        .html(list(&[
            "<b>Title</b> and <b>date</b>",
            drop_card_items.as_str(),
            "<b>Item inventory</b> — \"X/Y sold\" for each product in the drop",
            "<b>Close button</b> — Manually close a drop when finished",
        ]))
        .h3("Creating a New Drop")
        .html(para("Click <b>\"New Drop\"</b> to expand the creation form:"))
        .html(cx.screenshot(&DROPS_CREATE))
        .html(para(
            "Details on each field and the full creation workflow are in <b>Section 4: Sourdough Drops Workflow</b>.",
        ))
        .subsection("admin-slots", "3.6 Time Slots")
        .html(para(
            "Time slots control when customers can book reservations. Click <b>\"+ Add Slot\"</b> and fill in:",
        ))
        .html(list(&[
            "<b>Day of week</b> — Sun through Sat",
            "<b>Start / End time</b> — e.g., 07:00 to 08:00",
            "<b>Capacity</b> — How many reservations per slot",
        ]))
        .html(para(
            "Click <b>\"Remove\"</b> (with confirmation) to delete a slot.",
        ))
        .subsection("admin-subs", "3.7 Subscriptions")
        .html(para(
            "The subscriptions page is read-only. It shows all subscriptions with:",
        ))
        .html(list(&[
            "Product name and customer email",
            "Frequency (weekly / biweekly / monthly)",
            subscription_badges.as_str(),
            "Current period end date",
            "\"Canceling\" flag if the customer has scheduled a cancellation",
        ]))
        .html(callout(
            CalloutKind::Info,
            "Note:",
            "Subscription management (cancellation, plan changes) happens through Stripe. Customers can self-cancel via their HMAC-signed link at <b>/subscriptions</b>.",
        ))
        .build()
}
