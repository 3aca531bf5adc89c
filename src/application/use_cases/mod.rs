//! Use Cases - Single-purpose operations

pub mod fetch_geometry;
pub mod query_layers;

pub use fetch_geometry::FetchGeometryUseCase;
pub use query_layers::QueryLayersUseCase;
