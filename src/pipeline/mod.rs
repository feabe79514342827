//! The fetch-correlate-aggregate pipeline
//!
//! Orchestrates one invocation end to end: companies, products, per-company
//! orders, correlation, serialization, upload, response. Each invocation is
//! independent; nothing is cached between runs.

pub mod aggregate;
pub mod correlate;

use tracing::{error, info, warn};

use crate::error::Result;
use crate::models::{Company, Summary};
use crate::sink::SummarySink;
use crate::sources::{FetchOutcome, SourceClient};

pub use aggregate::{aggregate, AggregateOutcome};
pub use correlate::correlate;

/// Terminal outcome of one pipeline invocation
///
/// The server maps these onto HTTP statuses; a companies fetch failure or a
/// serialization failure surfaces as `Err` instead and becomes a 500.
#[derive(Debug)]
pub enum PipelineOutcome {
    /// Full success: one summary per company, already uploaded (best effort)
    Summaries(Vec<Summary>),
    /// Products were empty or unavailable; the raw companies collection is
    /// returned unchanged and nothing is written to storage
    CompaniesOnly(Vec<Company>),
    /// The companies source returned nothing; there is nothing to aggregate
    NoCompanies,
}

/// Run the pipeline once
///
/// Failure policy: a companies fetch failure aborts the invocation; products
/// and orders fetch failures degrade to empty collections; a sink failure is
/// logged and swallowed, leaving the computed summary as the response either
/// way.
pub async fn run(
    source: &dyn SourceClient,
    sink: &dyn SummarySink,
) -> Result<PipelineOutcome> {
    let companies = match source.companies().await? {
        FetchOutcome::Found(companies) => companies,
        FetchOutcome::Empty => {
            warn!("no companies found");
            return Ok(PipelineOutcome::NoCompanies);
        }
    };

    let products = match source.products().await {
        Ok(outcome) => outcome.into_vec(),
        Err(e) => {
            warn!("products fetch failed, continuing without products: {}", e);
            Vec::new()
        }
    };

    let summaries = match aggregate(source, &companies, &products).await {
        AggregateOutcome::Summaries(summaries) => summaries,
        AggregateOutcome::ProductsUnavailable => {
            return Ok(PipelineOutcome::CompaniesOnly(companies));
        }
    };

    let document = serde_json::to_string(&summaries)?;

    match sink.upload(&document).await {
        Ok(()) => info!("summary uploaded to storage"),
        // Upload failure must not fail the request; the caller still gets
        // the computed summary.
        Err(e) => error!("summary upload failed: {}", e),
    }

    info!("summary created for {} companies", summaries.len());
    Ok(PipelineOutcome::Summaries(summaries))
}
