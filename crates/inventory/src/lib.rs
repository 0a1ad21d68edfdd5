//! Inventory domain module.
//!
//! This crate contains the closed sum type over the catalog's record kinds
//! and the append-only store that aggregates over it, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod media;
pub mod store;

pub use media::Media;
pub use store::MediaStore;
