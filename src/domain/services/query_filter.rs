//! QueryFilter - conjunctive filtering over the layer catalogue
//!
//! Pure and total: never fails, never reorders, never touches the input.

use crate::domain::entities::LayerRecord;
use crate::domain::value_objects::FilterCriteria;

/// Service for filtering catalogue records
#[derive(Clone, Copy, Debug, Default)]
pub struct QueryFilter;

impl QueryFilter {
    /// Create a new query filter
    pub fn new() -> Self {
        Self
    }

    /// Records satisfying every set predicate, in catalogue order
    pub fn filter(&self, catalog: &[LayerRecord], criteria: &FilterCriteria) -> Vec<LayerRecord> {
        if criteria.is_unset() {
            return catalog.to_vec();
        }

        catalog
            .iter()
            .filter(|record| criteria.matches(record))
            .cloned()
            .collect()
    }
}
