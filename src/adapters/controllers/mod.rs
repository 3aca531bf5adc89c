//! Controllers - Translate user input into commands

pub mod filter_controller;

pub use filter_controller::{FilterController, FilterField};
