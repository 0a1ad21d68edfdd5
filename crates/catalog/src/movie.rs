use serde::{Deserialize, Serialize};

use shelfstock_core::{DomainResult, ValueObject};

use crate::merchandise::{Merchandise, check_unit_price};

/// Record kind: a movie title held in stock.
///
/// Same accessor shape as [`crate::Book`], with no shared base type — the
/// overlap is expressed through [`Merchandise`] alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    title: String,
    director: String,
    unit_price: f64,
    quantity: u64,
}

impl Movie {
    /// Construct a movie record. Accepts any field values as-is.
    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        unit_price: f64,
        quantity: u64,
    ) -> Self {
        Self {
            title: title.into(),
            director: director.into(),
            unit_price,
            quantity,
        }
    }

    /// Construct a movie record, rejecting negative or non-finite unit prices.
    pub fn try_new(
        title: impl Into<String>,
        director: impl Into<String>,
        unit_price: f64,
        quantity: u64,
    ) -> DomainResult<Self> {
        check_unit_price(unit_price)?;
        Ok(Self::new(title, director, unit_price, quantity))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn director(&self) -> &str {
        &self.director
    }
}

impl Merchandise for Movie {
    fn unit_price(&self) -> f64 {
        self.unit_price
    }

    fn quantity(&self) -> u64 {
        self.quantity
    }
}

impl ValueObject for Movie {}
