//! Section 2: the pages customers see.

use super::markup::{callout, list, para, CalloutKind};
use super::{Composer, Section, SectionBuilder};
use crate::assets::Screenshot;

pub const SHOP: Screenshot = Screenshot::new("shop.png");
pub const DROPS: Screenshot = Screenshot::new("drops-customer.png");

pub fn section(cx: &mut Composer) -> Section {
    SectionBuilder::page("customer-pages")
        .title("2. Customer Pages")
        .subsection("homepage", "2.1 Homepage")
        .html(para("The homepage (<b>/</b>) features:"))
        .html(list(&[
            "<b>Hero section</b> — Brand name, tagline, and product images",
            "<b>About section</b> — Story of Caleb &amp; Deborah, accessible via the \"About\" nav link",
            "<b>Gallery</b> — Photos of products and the bakery",
            "<b>Navigation</b> — Links to Shop, Drops, Reservations, Cart, and Contact (footer)",
        ]))
        .subsection("shop", "2.2 Shop")
        .html(para(
            "The shop page (<b>/shop</b>) displays all active products in a card grid. Products are organized by category with filter buttons:",
        ))
        .html(list(&[
            "<b>All</b> — Shows everything",
            "<b>Coffee</b> — House Blend, Dark Roast, Decaf Blend",
            "<b>Bakery</b> — Sourdough Loaf, etc.",
            "<b>Hotplate</b> — Breakfast items",
        ]))
        .html(cx.screenshot(&SHOP))
        .html(para(
            "Each product card shows the name, description, price, and variant selector (e.g., 8oz/16oz for coffee). Coffee products also have a <b>\"Subscribe\"</b> button for recurring orders.",
        ))
        .html(callout(
            CalloutKind::Tip,
            "Tip:",
            "Only products marked as \"active\" in the admin panel appear in the shop. Deactivated products are hidden from customers.",
        ))
        .subsection("drops-customer", "2.3 Drops (Customer View)")
        .html(para(
            "The drops page (<b>/drops</b>) shows any currently active sourdough drops. When no drops are scheduled, customers see a friendly empty state:",
        ))
        .html(cx.screenshot(&DROPS))
        .html(para(
            "When a drop is live, each item shows remaining inventory with an \"Add to Cart\" button. Items with 3 or fewer remaining show the count in red to create urgency. Sold-out items are grayed out.",
        ))
        .subsection("cart-checkout", "2.4 Cart &amp; Checkout")
        .html(para(
            "The cart (<b>/cart</b>) uses browser localStorage to persist items between visits. Customers can adjust quantities or remove items. Clicking \"Checkout\" creates a Stripe checkout session and redirects to Stripe's payment page.",
        ))
        .html(list(&[
            "<b>/checkout/success</b> — Shown after successful payment",
            "<b>/checkout/cancel</b> — Shown if customer cancels at Stripe",
        ]))
        .html(callout(
            CalloutKind::Warning,
            "Important:",
            "For drop items, inventory is atomically decremented when the Stripe checkout session is created (not when added to cart). If a customer abandons checkout, inventory is released when the Stripe session expires via the <code>checkout.session.expired</code> webhook.",
        ))
        .subsection("subscriptions", "2.5 Subscriptions")
        .html(para(
            "The subscriptions page (<b>/subscriptions</b>) allows existing subscribers to manage their recurring orders. Customers access it via an HMAC-signed email link (no password needed). They can view their active subscriptions and cancel if needed.",
        ))
        .build()
}
