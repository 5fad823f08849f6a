//! Catalogue data models and error types.

pub mod types;

// Re-exports for convenience
pub use types::{lat_lng, Bus, BusRouteInfo, CatalogueError, Result, Stop};
