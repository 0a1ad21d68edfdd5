use serde::{Deserialize, Serialize};

use shelfstock_core::{DomainResult, ValueObject};

use crate::merchandise::{Merchandise, check_unit_price};

/// Record kind: a book title held in stock.
///
/// Immutable value object; all fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    author: String,
    title: String,
    unit_price: f64,
    quantity: u64,
}

impl Book {
    /// Construct a book record. Accepts any field values as-is.
    pub fn new(
        author: impl Into<String>,
        title: impl Into<String>,
        unit_price: f64,
        quantity: u64,
    ) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
            unit_price,
            quantity,
        }
    }

    /// Construct a book record, rejecting negative or non-finite unit prices.
    pub fn try_new(
        author: impl Into<String>,
        title: impl Into<String>,
        unit_price: f64,
        quantity: u64,
    ) -> DomainResult<Self> {
        check_unit_price(unit_price)?;
        Ok(Self::new(author, title, unit_price, quantity))
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Merchandise for Book {
    fn unit_price(&self) -> f64 {
        self.unit_price
    }

    fn quantity(&self) -> u64 {
        self.quantity
    }
}

impl ValueObject for Book {}
