//! JsonCatalogGateway - catalogue loaded from a metadata JSON file
//!
//! The file is an array of layer metadata objects (`layer_name`, `site`,
//! `year`, `parameter`, `geometry`, `crs`, `source`, `description`). It is
//! read once; the catalogue is immutable afterwards.

use std::fs;
use std::path::{Path, PathBuf};

use crate::adapters::gateways::MemoryCatalogGateway;
use crate::application::dto::LayerMetadataDto;
use crate::domain::entities::LayerRecord;
use crate::domain::errors::DomainError;
use crate::domain::repositories::CatalogRepository;

/// Metadata shipped with the crate
const BUNDLED_METADATA: &str = include_str!("../../../data/metadata.json");

/// File-backed layer catalogue
#[derive(Debug)]
pub struct JsonCatalogGateway {
    path: Option<PathBuf>,
    inner: MemoryCatalogGateway,
}

impl JsonCatalogGateway {
    /// Load the catalogue from a metadata file
    pub fn load(path: &Path) -> Result<Self, DomainError> {
        let content = fs::read_to_string(path)?;
        let inner = Self::parse_content(&content)?;
        crate::log!("Loaded {} layers from {:?}", inner.count(), path);

        Ok(Self {
            path: Some(path.to_path_buf()),
            inner,
        })
    }

    /// Catalogue bundled with the crate
    pub fn bundled() -> Result<Self, DomainError> {
        Ok(Self {
            path: None,
            inner: Self::parse_content(BUNDLED_METADATA)?,
        })
    }

    /// Source file, `None` for the bundled catalogue
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Parse metadata JSON into a validated catalogue
    fn parse_content(content: &str) -> Result<MemoryCatalogGateway, DomainError> {
        let dtos: Vec<LayerMetadataDto> = serde_json::from_str(content)?;
        let records = dtos
            .into_iter()
            .map(LayerRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        MemoryCatalogGateway::with_records(records)
    }
}

impl CatalogRepository for JsonCatalogGateway {
    fn records(&self) -> &[LayerRecord] {
        self.inner.records()
    }

    fn find_by_name(&self, name: &str) -> Option<&LayerRecord> {
        self.inner.find_by_name(name)
    }
}
