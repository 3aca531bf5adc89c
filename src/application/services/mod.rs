//! Application Services - Coordination and management services
//!
//! These services coordinate the domain services and own session state.

pub mod catalog_facade;
pub mod command_handler;
pub mod playback_controller;

pub use catalog_facade::CatalogFacade;
pub use command_handler::{CatalogCommand, CommandHandler};
pub use playback_controller::{PlaybackController, DEFAULT_TICK_PERIOD};
