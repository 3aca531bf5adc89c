//! CatalogRepository - read-only access to the layer catalogue
//!
//! A catalogue is loaded once per session and never mutated afterwards, so
//! the interface only hands out borrowed records.

use crate::domain::entities::{LayerName, LayerRecord};

/// Repository interface for layer metadata
pub trait CatalogRepository: Send + Sync {
    /// All records in catalogue order
    fn records(&self) -> &[LayerRecord];

    /// Find a record by its unique layer name
    fn find_by_name(&self, name: &str) -> Option<&LayerRecord>;

    /// Layer names in catalogue order
    fn layer_names(&self) -> Vec<LayerName> {
        self.records().iter().map(|r| r.layer_name.clone()).collect()
    }

    /// Get the number of catalogued layers
    fn count(&self) -> usize {
        self.records().len()
    }
}

/// A null implementation for testing
pub struct NullCatalogRepository;

impl CatalogRepository for NullCatalogRepository {
    fn records(&self) -> &[LayerRecord] {
        &[]
    }

    fn find_by_name(&self, _name: &str) -> Option<&LayerRecord> {
        None
    }
}
