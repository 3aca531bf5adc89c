//! Domain Entities - Core business objects
//!
//! Entities are objects with a distinct identity that persists over time.

pub mod animation_state;
pub mod layer_record;

pub use animation_state::{AnimationState, PlaybackMode};
pub use layer_record::{conventional_layer_name, GeometryKind, LayerName, LayerRecord, Parameter, Site};
