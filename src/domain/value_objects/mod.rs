//! Domain Value Objects - Immutable values that describe characteristics
//!
//! Value objects have no identity and are compared by their values.

pub mod active_layer_set;
pub mod filter_criteria;
pub mod layer_selection;
pub mod year_sequence;

pub use active_layer_set::{ActivationOrigin, ActiveLayerSet};
pub use filter_criteria::FilterCriteria;
pub use layer_selection::LayerSelection;
pub use year_sequence::YearSequence;
