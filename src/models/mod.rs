//! Wire types shared by the sources, the pipeline and the HTTP response
//!
//! All entities are transient: they are built fresh from the source responses
//! on every invocation and dropped once the response is sent. Money fields use
//! [`Decimal`] and serialize as plain JSON numbers so that identical source
//! data always produces an identical summary document.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A company as returned by the companies source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Unique company identifier. Some sources publish this as `id`.
    #[serde(alias = "id")]
    pub company_id: i64,
    pub name: String,
}

/// A product as returned by the products source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub item_id: i64,
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// A sales order as returned by the orders source, scoped per company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: i64,
    /// Foreign key into the product collection
    pub item_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// An order joined with the category and price of its matching product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedOrder {
    pub order_id: i64,
    pub item_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// One company's slice of the aggregate result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub company_id: i64,
    pub company_name: String,
    /// Enriched orders in the order the source returned them
    pub orders: Vec<EnrichedOrder>,
}
