//! Gateways - Implementations of domain repository interfaces

pub mod json_catalog_gateway;
pub mod memory_catalog_gateway;

pub use json_catalog_gateway::JsonCatalogGateway;
pub use memory_catalog_gateway::MemoryCatalogGateway;
