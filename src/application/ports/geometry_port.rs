//! GeometryPort - interface to the geometry collaborator
//!
//! The catalogue never inspects geometry. It decides which layers are active
//! and asks this port for the payload (typically a GeoJSON
//! FeatureCollection) of a known record.

use serde_json::{json, Value};

use crate::domain::entities::LayerRecord;
use crate::domain::errors::DomainError;

/// Port interface for geometry retrieval
pub trait GeometryPort: Send + Sync {
    /// Fetch the geometry payload for a catalogued layer
    fn fetch(&self, record: &LayerRecord) -> Result<Value, DomainError>;
}

/// A null geometry port returning empty feature collections
pub struct NullGeometryPort;

impl GeometryPort for NullGeometryPort {
    fn fetch(&self, _record: &LayerRecord) -> Result<Value, DomainError> {
        Ok(json!({ "type": "FeatureCollection", "features": [] }))
    }
}
