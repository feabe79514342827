//! Per-company aggregation
//!
//! Walks the companies in source order, fetches each one's sales orders, and
//! correlates them against the shared product collection. Order fetches are
//! sequential; source latency has not warranted fan-out so far.

use tracing::{debug, info, warn};

use super::correlate::correlate;
use crate::models::{Company, Product, Summary};
use crate::sources::{FetchOutcome, SourceClient};

/// Outcome of aggregating all companies
#[derive(Debug)]
pub enum AggregateOutcome {
    /// One summary per company, in source order
    Summaries(Vec<Summary>),
    /// The product collection was empty, so no orders could be enriched
    ProductsUnavailable,
}

/// Build one [`Summary`] per company
///
/// An empty product collection halts aggregation before any order fetch and
/// reports [`AggregateOutcome::ProductsUnavailable`]; the orchestrator turns
/// that into the degenerate companies-only response. A failed or empty orders
/// fetch only affects that company, which keeps its summary with an empty
/// order list.
pub async fn aggregate(
    source: &dyn SourceClient,
    companies: &[Company],
    products: &[Product],
) -> AggregateOutcome {
    if products.is_empty() {
        warn!("no products found");
        return AggregateOutcome::ProductsUnavailable;
    }

    let mut summaries = Vec::with_capacity(companies.len());

    for company in companies {
        info!("aggregating company {} (id {})", company.name, company.company_id);

        let orders = match source.orders(company.company_id).await {
            Ok(FetchOutcome::Found(orders)) => orders,
            Ok(FetchOutcome::Empty) => {
                warn!("no orders found for company id {}", company.company_id);
                Vec::new()
            }
            Err(e) => {
                warn!(
                    "orders fetch failed for company id {}, treating as empty: {}",
                    company.company_id, e
                );
                Vec::new()
            }
        };

        let enriched = correlate(&orders, products);
        debug!(
            "company id {}: {} of {} orders matched a product",
            company.company_id,
            enriched.len(),
            orders.len()
        );

        summaries.push(Summary {
            company_id: company.company_id,
            company_name: company.name.clone(),
            orders: enriched,
        });
    }

    AggregateOutcome::Summaries(summaries)
}
