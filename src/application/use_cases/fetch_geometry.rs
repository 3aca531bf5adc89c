//! FetchGeometryUseCase - geometry payload for a named layer

use std::sync::Arc;

use serde_json::Value;

use crate::application::ports::GeometryPort;
use crate::application::services::CatalogFacade;
use crate::domain::errors::DomainError;
use crate::domain::repositories::CatalogRepository;

/// Use case for fetching layer geometry
pub struct FetchGeometryUseCase<R, G>
where
    R: CatalogRepository,
    G: GeometryPort,
{
    facade: Arc<CatalogFacade<R>>,
    geometry: Arc<G>,
}

impl<R, G> FetchGeometryUseCase<R, G>
where
    R: CatalogRepository,
    G: GeometryPort,
{
    /// Create a new fetch geometry use case
    pub fn new(facade: Arc<CatalogFacade<R>>, geometry: Arc<G>) -> Self {
        Self { facade, geometry }
    }

    /// Fetch geometry for `layer_name`; `NotFound` if it is not catalogued
    pub fn execute(&self, layer_name: &str) -> Result<Value, DomainError> {
        let record = self.facade.find(layer_name)?;
        self.geometry.fetch(record)
    }
}
