//! Order-to-product correlation
//!
//! Pure join of one company's orders against the full product collection.
//! No I/O, no side effects; the aggregator drives it once per company.

use crate::models::{EnrichedOrder, Order, Product};

/// Join orders to products by item id
///
/// Emits one [`EnrichedOrder`] per (order, matching product) pair, in order
/// arrival order. Orders with no matching product are dropped. When several
/// products share an item id the order is emitted once per match -- a quirk
/// of the upstream data that downstream consumers rely on, so it is kept.
///
/// Linear scan per order; collections are tens to low-hundreds of records,
/// so O(orders × products) is fine and avoids building an index.
pub fn correlate(orders: &[Order], products: &[Product]) -> Vec<EnrichedOrder> {
    let mut enriched = Vec::with_capacity(orders.len());

    for order in orders {
        for product in products {
            if product.item_id == order.item_id {
                enriched.push(EnrichedOrder {
                    order_id: order.order_id,
                    item_id: order.item_id,
                    description: order.description.clone(),
                    category: product.category.clone(),
                    price: product.price,
                    amount: order.amount,
                });
            }
        }
    }

    enriched
}
