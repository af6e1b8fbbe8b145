//! Section 4: the sourdough drops workflow, end to end.
//!
//! Describes the drop lifecycle (scheduled → live → sold out / closed), how
//! inventory is reserved when a checkout session is created and released when
//! it expires, and how drop orders move through their fulfilment stages.

use super::markup::{badge, callout, list, ordered, para, step, table, CalloutKind, Status};
use super::{Section, SectionBuilder};

pub fn section() -> Section {
    let builder = SectionBuilder::page("drops-workflow")
        .title("4. Sourdough Drops Workflow")
        .listed_as("4. Sourdough Drops Workflow (Detailed)");

    let subsections: [fn(SectionBuilder) -> SectionBuilder; 6] =
        [concept, lifecycle, creating, ordering, fulfilling, closing];
    subsections
        .into_iter()
        .fold(builder, |builder, subsection| subsection(builder))
        .build()
}

fn concept(builder: SectionBuilder) -> SectionBuilder {
    builder
        .subsection("drops-concept", "4.1 What Are Drops?")
        .html(para(
            "A \"drop\" is a <b>limited-inventory bake day sale</b>. Think of it like a sneaker drop: you announce a date, open pre-orders for a limited time, customers grab what they want before it sells out, then you bake and they pick up.",
        ))
        .html(callout(
            CalloutKind::Info,
            "Example:",
            "Every Monday, Deborah bakes 20 loaves of sourdough. On Sunday evening, you create a drop that opens at 6 PM. By Monday morning, 18 of the 20 loaves are claimed. You bake exactly what was ordered, and customers pick up Monday afternoon.",
        ))
        .h3("Why Drops Instead of Regular Shop Items?")
        .html(list(&[
            "<b>Inventory control</b> — You set exactly how many are available. No overbaking, no waste.",
            "<b>Urgency</b> — \"Only 3 left!\" drives customers to order quickly",
            "<b>Scheduling</b> — Drops auto-open and close on your timeline",
            "<b>Tracking</b> — Each order from a drop is linked to it, with stage tracking (ordered → baking → ready → picked up)",
        ]))
}

fn lifecycle(builder: SectionBuilder) -> SectionBuilder {
    let scheduled = badge(Status::Scheduled);
    let live = badge(Status::Live);
    let sold_out = badge(Status::SoldOut);
    let closed = badge(Status::Closed);

    builder
        .subsection("drops-lifecycle", "4.2 Drop Lifecycle")
        .html(step("The Four Statuses of a Drop:", ""))
        .html(table(
            ["Status", "What It Means", "Customer Can Order?"],
            &[
                [
                    scheduled.as_str(),
                    "Drop has been created but hasn't opened yet. Customers see it listed but cannot buy.",
                    "No",
                ],
                [
                    live.as_str(),
                    "Drop is open for orders. The \"Opens At\" time has passed. Customers can add items to cart and checkout.",
                    "Yes",
                ],
                [
                    sold_out.as_str(),
                    "All items in the drop have sold out. Happens automatically when the last item is purchased.",
                    "No",
                ],
                [
                    closed.as_str(),
                    "Drop is manually closed by admin. No more orders. This is final.",
                    "No",
                ],
            ],
        ))
        .html("<div class=\"flow-arrow\">scheduled → live → sold out / closed</div>")
}

fn creating(builder: SectionBuilder) -> SectionBuilder {
    let fields = table(
        ["Field", "Required?", "Description"],
        &[
            [
                "<b>Title</b>",
                "Yes",
                "Name shown to customers, e.g., \"Saturday Sourdough Bake\"",
            ],
            [
                "<b>Drop Date</b>",
                "Yes",
                "The actual date of the bake/sale, e.g., 2026-02-08",
            ],
            [
                "<b>Opens At</b>",
                "Yes",
                "When customers can start ordering, e.g., Friday at 6 PM the day before",
            ],
            [
                "<b>Closes At</b>",
                "Optional",
                "Auto-close time. If blank, stays open until sold out or manually closed.",
            ],
            [
                "<b>Pickup Start</b>",
                "Optional",
                "When customers can pick up, e.g., Saturday 9 AM. Shown on customer page.",
            ],
            [
                "<b>Pickup End</b>",
                "Optional",
                "End of pickup window, e.g., Saturday 12 PM",
            ],
        ],
    );
    let items = format!(
        "{}{}",
        para("For each item in the drop:"),
        ordered(&[
            "Select a <b>product</b> from the dropdown (these come from your product catalog)",
            "Set the <b>quantity available</b> (how many you'll bake)",
            "Optionally set a <b>$ override</b> price (if the drop price differs from the catalog price)",
            "Click <b>\"+ Add item\"</b> to add more products to the same drop",
        ])
    );
    let created = format!(
        "The drop is created with status {}. It will automatically become {} when the \"Opens At\" time arrives.",
        badge(Status::Scheduled),
        badge(Status::Live),
    );

    builder
        .subsection("drops-create", "4.3 Creating a Drop (Step-by-Step)")
        .html(step(
            "Step 1: Go to Admin → Drops",
            "Navigate to <b>/admin/drops</b> and click the <b>\"New Drop\"</b> button.",
        ))
        .html(step("Step 2: Fill in the Drop Details", &fields))
        .html(step("Step 3: Add Items to the Drop", &items))
        .html(step("Step 4: Click \"Create Drop\"", &created))
        .html(callout(
            CalloutKind::Warning,
            "Validation:",
            "The form requires a title, drop date, opens-at time, and at least one item. You'll see an error toast if any of these are missing.",
        ))
}

fn ordering(builder: SectionBuilder) -> SectionBuilder {
    builder
        .subsection("drops-orders", "4.4 When Customers Order from a Drop")
        .listed_as("4.4 When Customers Order")
        .html(para(
            "Here's what happens behind the scenes when a customer orders a drop item:",
        ))
        .html(step(
            "1. Customer adds item to cart",
            "The drop item is added to localStorage cart with the <code>dropId</code> and <code>dropItemId</code> attached. Inventory is NOT yet decremented.",
        ))
        .html(step(
            "2. Customer clicks \"Checkout\"",
            "The checkout API creates a Stripe session. At this moment, inventory is <b>atomically decremented</b> in the database. The <code>quantity_sold</code> on the drop item goes up by the order quantity.",
        ))
        .html(step(
            "3a. Customer completes payment",
            "Stripe sends a <code>checkout.session.completed</code> webhook. The order status is set to <b>\"confirmed\"</b> and the stage is set to <b>\"ordered\"</b>. A confirmation email is sent.",
        ))
        .html(step(
            "3b. Customer abandons checkout",
            "If the Stripe session expires (after ~24h), a <code>checkout.session.expired</code> webhook fires. The system <b>releases the inventory</b> back to the drop by decrementing <code>quantity_sold</code>.",
        ))
        .html(callout(
            CalloutKind::Critical,
            "Key Concept — Atomic Inventory:",
            "Inventory is reserved at checkout creation, not at cart-add time. This means two customers can both add the last loaf to their cart, but only the first one to click \"Checkout\" gets it. The second customer will see a \"sold out\" error. Abandoned checkouts automatically release inventory.",
        ))
}

fn fulfilling(builder: SectionBuilder) -> SectionBuilder {
    let stages = [
        ("ordered", "Customer has paid. This is the initial stage."),
        (
            "baking",
            "Click \"→ baking\" when you start baking their order.",
        ),
        (
            "ready",
            "Click \"→ ready\" when it's done and waiting for pickup.",
        ),
        (
            "picked up",
            "Click \"→ picked up\" when the customer collects their order.",
        ),
    ]
    .iter()
    .map(|(stage, what)| format!("<span class=\"step-num\">{stage}</span> — {what}"))
    .collect::<Vec<_>>()
    .join("<br/>\n");

    builder
        .subsection("drops-fulfill", "4.5 Fulfilling Drop Orders")
        .html(para(
            "After customers have ordered and you've baked, use the <b>Orders</b> page to track each order through the fulfillment stages:",
        ))
        .html(format!("<div class=\"step\">\n{stages}\n</div>"))
        .html(para(
            "Drop orders are identifiable in the orders list by the <span class=\"drop-tag\">(Drop #N)</span> tag next to the order number.",
        ))
}

fn closing(builder: SectionBuilder) -> SectionBuilder {
    builder
        .subsection("drops-close", "4.6 Closing a Drop")
        .html(para("When the bake day is over:"))
        .html(ordered(&[
            "Go to <b>/admin/drops</b>",
            "Click <b>\"Close\"</b> next to the drop",
            "Confirm in the dialog",
        ]))
        .html(para(&format!(
            "The status changes to {} and the drop disappears from the customer-facing page. This cannot be undone.",
            badge(Status::Closed)
        )))
        .html(callout(
            CalloutKind::Tip,
            "Tip:",
            &format!(
                "You don't have to manually close a drop. If it sells out, it automatically shows as {}. But closing is good practice to keep the drops page clean for customers.",
                badge(Status::SoldOut)
            ),
        ))
}
