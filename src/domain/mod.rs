//! Domain Layer - Pure business logic with zero framework dependencies
//!
//! This layer contains:
//! - **Entities**: Core business objects (LayerRecord, AnimationState)
//! - **Value Objects**: Immutable values (FilterCriteria, YearSequence, ActiveLayerSet)
//! - **Repository Interfaces**: Abstractions for catalogue access (no implementations)
//! - **Domain Services**: Filtering and layer activation logic
//! - **Domain Errors**: Error types for domain operations

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
