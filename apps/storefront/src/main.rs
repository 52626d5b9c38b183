//! # Codestrive Storefront Entry Point
//!
//! Plays a scripted shopper session against the command layer and logs
//! every step. Set `RUST_LOG=debug` to see each command.
//!
//! ## Script
//! 1. Show the grid, filtered to "Cloths", cheapest first
//! 2. Buy two Cool Tees with currency (earns points)
//! 3. Switch to points and add Trendy Caps until the balance runs out
//! 4. Pay with points
//! 5. Wait for the notice to dismiss itself
//! 6. Sign up for the newsletter

use std::error::Error;

use storefront_app::commands::{cart, catalog, checkout, newsletter};
use storefront_app::{init_tracing, Storefront};
use storefront_core::ProductId;
use tracing::{info, warn};

const TRENDY_CAPS: ProductId = ProductId::new(1);
const COOL_TEES: ProductId = ProductId::new(2);

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let store = Storefront::from_env();
    info!(store = %store.config.store_name, "Starting storefront demo");

    catalog::set_filter(&store.ui, "Cloths")?;
    catalog::set_sort(&store.ui, "price-asc")?;
    for card in catalog::product_grid(&store.catalog, &store.session, &store.ui) {
        info!(
            product = %card.product.name,
            price = %store.config.format_currency(card.product.price.cents()),
            points = %card.product.points,
            label = card.add_label,
            "Grid"
        );
    }

    cart::add_to_cart(&store.catalog, &store.session, &store.notices, COOL_TEES)?;
    let drawer = cart::update_quantity(&store.session, &store.notices, COOL_TEES, 1)?;
    info!(
        total = %store.config.format_currency(drawer.totals.total.cents()),
        badge = drawer.totals.total_quantity,
        "Cart ready"
    );

    cart::toggle_cart(&store.ui);
    let outcome = checkout::checkout(&store.session, &store.notices, &store.ui);
    info!(message = outcome.message, balance = %outcome.cart.balance, "Checkout");

    cart::set_payment_mode(&store.session, true);
    loop {
        match cart::add_to_cart(&store.catalog, &store.session, &store.notices, TRENDY_CAPS) {
            Ok(drawer) => info!(points = %drawer.totals.points, "Added Trendy Caps"),
            Err(err) => {
                warn!(error = %err, "Add refused");
                break;
            }
        }
    }

    if let Some(notice) = store.notices.current() {
        info!(message = %notice.message, "Notice shown");
    }

    let outcome = checkout::checkout(&store.session, &store.notices, &store.ui);
    info!(message = outcome.message, balance = %outcome.cart.balance, "Checkout");

    tokio::time::sleep(store.config.notice_dismiss_after()).await;
    tokio::task::yield_now().await;
    info!(notice_visible = store.notices.current().is_some(), "After dismissal delay");

    let reply = newsletter::subscribe(&store.ui, "shopper@example.com")?;
    info!(reply, "Newsletter");

    let summary = serde_json::to_string_pretty(&cart::get_cart(&store.session))?;
    println!("{summary}");

    Ok(())
}
