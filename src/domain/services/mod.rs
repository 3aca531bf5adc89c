//! Domain Services - Operations that don't belong to a single entity

pub mod layer_resolver;
pub mod query_filter;

pub use layer_resolver::LayerResolver;
pub use query_filter::QueryFilter;
