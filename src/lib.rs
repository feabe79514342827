//! # Ordersum
//!
//! A small HTTP service that assembles a per-company sales summary from three
//! upstream JSON sources and publishes it to object storage.
//!
//! One trigger endpoint drives the whole pipeline: fetch companies and
//! products once, fetch each company's sales orders, join orders to products
//! by item id, group the enriched orders by company, upload the resulting
//! document to the `orders` container as `task1.json`, and return the same
//! summary to the caller.
//!
//! ## Modules
//!
//! - `config` - Environment-driven configuration for sources and the sink
//! - `error` - Unified error type for the crate
//! - `models` - Wire types shared by sources, pipeline and responses
//! - `sources` - HTTP source client for companies, products and orders
//! - `pipeline` - The fetch-correlate-aggregate pipeline
//! - `sink` - Summary sink backends (file, memory, S3)
//! - `server` - Axum router exposing the trigger endpoint

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod server;
pub mod sink;
pub mod sources;

pub use error::{Error, Result};
