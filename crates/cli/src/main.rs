//! Walks one purchase order through its lifecycle and prints the result.
//!
//! Usage: `procurement [CURRENCY]` (defaults to USD).

use anyhow::Context;

use procurement_core::{AggregateRoot, Currency, ProductId, SupplierId};
use procurement_purchasing::PurchaseOrder;

fn main() -> anyhow::Result<()> {
    procurement_observability::init();

    let currency: Currency = match std::env::args().nth(1) {
        Some(code) => code.parse().context("invalid currency argument")?,
        None => Currency::Usd,
    };

    let supplier_id = SupplierId::new();
    let mut order = PurchaseOrder::new(supplier_id, currency, None)?;
    tracing::info!(order_id = %order.id(), %supplier_id, %currency, "purchase order created");

    order.add_item(ProductId::new(), 5, 45.99)?;
    order.add_item(ProductId::new(), 10, 22.99)?;
    println!("Total price: {}", order.calculate_total_price()?);

    order.submit()?;
    if let Err(err) = order.add_item(ProductId::new(), 1, 9.99) {
        tracing::warn!(error = %err, "rejected item after submission");
        println!("Error: {err}");
    }

    order.approve()?;
    order.ship()?;
    order.complete()?;
    println!("Final state: {}", order.state());

    let snapshot = serde_json::to_string_pretty(&order).context("failed to render order")?;
    println!("{snapshot}");
    Ok(())
}
