//! Domain types shared by the pager and the demo listing.

pub mod item;
pub mod sort;
