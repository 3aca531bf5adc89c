//! MemoryCatalogGateway - In-memory layer catalogue

use std::collections::HashMap;

use crate::domain::entities::LayerRecord;
use crate::domain::errors::DomainError;
use crate::domain::repositories::CatalogRepository;

/// Immutable in-memory catalogue indexed by layer name
#[derive(Debug, Default)]
pub struct MemoryCatalogGateway {
    records: Vec<LayerRecord>,
    index: HashMap<String, usize>,
}

impl MemoryCatalogGateway {
    /// Create an empty catalogue
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with initial records, rejecting duplicate layer names
    pub fn with_records(records: Vec<LayerRecord>) -> Result<Self, DomainError> {
        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if index.insert(record.layer_name.clone(), i).is_some() {
                return Err(DomainError::ValidationError(format!(
                    "duplicate layer name '{}'",
                    record.layer_name
                )));
            }
        }
        Ok(Self { records, index })
    }
}

impl CatalogRepository for MemoryCatalogGateway {
    fn records(&self) -> &[LayerRecord] {
        &self.records
    }

    fn find_by_name(&self, name: &str) -> Option<&LayerRecord> {
        self.index.get(name).map(|&i| &self.records[i])
    }
}
