//! Adapters Layer - Interface adapters between the application and the outside
//!
//! - **Gateways**: Catalogue repository implementations
//! - **Presenters**: View models for the layer list and timeline
//! - **Controllers**: Raw input to session commands

pub mod controllers;
pub mod gateways;
pub mod presenters;
