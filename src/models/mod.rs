//! Database and configuration models.

pub mod item;
#[cfg(feature = "server")]
pub mod config;
