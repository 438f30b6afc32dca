//! Persistence for the demo listing.

pub mod item;

pub use item::DieselItemRepository;
