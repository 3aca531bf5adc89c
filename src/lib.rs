//! Coastal layer catalogue
//!
//! Filters survey layer metadata, resolves which layers are visible during
//! year-by-year playback, and drives the playback timer.

// Include the log module so the log! macro works
#[macro_use]
pub mod log;

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

#[cfg(test)]
mod fixtures;
