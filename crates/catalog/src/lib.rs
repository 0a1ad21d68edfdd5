//! Catalog domain module.
//!
//! This crate contains the record kinds the store can stock, implemented
//! purely as immutable value objects (no IO, no storage).

pub mod book;
pub mod merchandise;
pub mod movie;

pub use book::Book;
pub use merchandise::Merchandise;
pub use movie::Movie;
