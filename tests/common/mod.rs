//! Shared test fixtures: a scriptable in-memory source client

// Each integration test binary compiles its own copy of this module and not
// every binary uses every helper.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use rust_decimal::Decimal;

use ordersum::error::{Error, Result};
use ordersum::models::{Company, Order, Product};
use ordersum::sources::{FetchOutcome, SourceClient};

/// What a scripted source does when asked for a collection
#[derive(Clone)]
pub enum Behavior<T> {
    Found(Vec<T>),
    Empty,
    Fail,
}

impl<T: Clone> Behavior<T> {
    fn resolve(&self, source: &'static str) -> Result<FetchOutcome<T>> {
        match self {
            Behavior::Found(items) => Ok(FetchOutcome::Found(items.clone())),
            Behavior::Empty => Ok(FetchOutcome::Empty),
            Behavior::Fail => Err(Error::fetch(source, "simulated source failure")),
        }
    }
}

/// Source client with canned responses, plus a counter for order fetches
pub struct StaticSource {
    pub companies: Behavior<Company>,
    pub products: Behavior<Product>,
    /// Orders behavior per company id; companies not present answer Empty
    pub orders: HashMap<i64, Behavior<Order>>,
    pub order_calls: AtomicUsize,
}

impl StaticSource {
    pub fn new(companies: Behavior<Company>, products: Behavior<Product>) -> Self {
        Self {
            companies,
            products,
            orders: HashMap::new(),
            order_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_orders(mut self, company_id: i64, behavior: Behavior<Order>) -> Self {
        self.orders.insert(company_id, behavior);
        self
    }

    pub fn order_fetches(&self) -> usize {
        self.order_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SourceClient for StaticSource {
    async fn companies(&self) -> Result<FetchOutcome<Company>> {
        self.companies.resolve("companies")
    }

    async fn products(&self) -> Result<FetchOutcome<Product>> {
        self.products.resolve("products")
    }

    async fn orders(&self, company_id: i64) -> Result<FetchOutcome<Order>> {
        self.order_calls.fetch_add(1, Ordering::SeqCst);
        self.orders
            .get(&company_id)
            .unwrap_or(&Behavior::Empty)
            .resolve("orders")
    }
}

pub fn company(company_id: i64, name: &str) -> Company {
    Company {
        company_id,
        name: name.to_string(),
    }
}

pub fn product(item_id: i64, category: &str, price_cents: i64) -> Product {
    Product {
        item_id,
        category: category.to_string(),
        price: Decimal::new(price_cents, 2),
    }
}

pub fn order(order_id: i64, item_id: i64, amount: i64) -> Order {
    Order {
        order_id,
        item_id,
        description: None,
        amount: Decimal::from(amount),
    }
}
