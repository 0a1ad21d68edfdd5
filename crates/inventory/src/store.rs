use shelfstock_catalog::Merchandise;

use crate::media::Media;

/// Ordered, append-only stock of mixed record kinds.
///
/// Insertion order is preserved and observable through [`MediaStore::stock`];
/// the aggregate totals are order-independent. The store exclusively owns its
/// items, and the only mutation it supports is appending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaStore {
    stock: Vec<Media>,
}

impl MediaStore {
    /// Build a store from an initial stock list, preserving order.
    pub fn new(stock: impl IntoIterator<Item = Media>) -> Self {
        Self {
            stock: stock.into_iter().collect(),
        }
    }

    /// Append one item at the end of the stock.
    pub fn add_media(&mut self, media: impl Into<Media>) {
        self.stock.push(media.into());
    }

    /// Number of stocked items (not units; see [`MediaStore::count`]).
    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// All stocked items, in insertion order.
    pub fn stock(&self) -> &[Media] {
        &self.stock
    }

    /// Total stock value: the sum of `unit_price * quantity` over every item,
    /// starting at 0.0.
    ///
    /// Dispatches through a capture-and-accumulate visit per item; the
    /// value-returning formulation [`MediaStore::total_balance_ex`] yields
    /// the same result for every store state.
    pub fn total_balance(&self) -> f64 {
        let mut total = 0.0;

        for media in &self.stock {
            let mut price = 0.0;
            let mut count = 0u64;

            media.visit(|item| {
                price = item.unit_price();
                count = item.quantity();
            });

            total += price * count as f64;
        }

        total
    }

    /// Total number of stocked units across every item.
    pub fn count(&self) -> u64 {
        let mut total = 0u64;

        for media in &self.stock {
            let mut count = 0u64;
            media.visit(|item| count = item.quantity());
            total += count;
        }

        total
    }

    /// [`MediaStore::total_balance`], with the per-item contribution computed
    /// inside the visit and returned directly.
    pub fn total_balance_ex(&self) -> f64 {
        self.stock
            .iter()
            .map(|media| media.visit(|item| item.unit_price() * item.quantity() as f64))
            .sum()
    }

    /// [`MediaStore::count`], with the per-item count returned directly.
    pub fn count_ex(&self) -> u64 {
        self.stock
            .iter()
            .map(|media| media.visit(|item| item.quantity()))
            .sum()
    }
}
