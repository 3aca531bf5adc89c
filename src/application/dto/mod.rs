//! Data Transfer Objects - For layer boundary crossing
//!
//! DTOs are simple data structures used to transfer data between layers.

pub mod layer_dto;

pub use layer_dto::{LayerMetadataDto, QueryRequest};
