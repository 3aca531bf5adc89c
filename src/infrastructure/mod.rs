//! Infrastructure Layer - Concrete implementations of ports and wiring

pub mod composition_root;
pub mod tick_scheduler;

pub use composition_root::{CompositionError, CompositionRoot};
pub use tick_scheduler::InstantScheduler;
