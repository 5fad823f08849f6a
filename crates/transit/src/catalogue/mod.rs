//! In-memory catalogue of stops, buses and road distances.

pub mod transport_catalogue;

pub use transport_catalogue::TransportCatalogue;
