//! Layer DTOs - JSON shapes at the query boundary
//!
//! `LayerMetadataDto` mirrors the metadata file and query response format.
//! `QueryRequest` carries the raw text criteria sent by the UI.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{GeometryKind, LayerRecord, Parameter, Site};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::FilterCriteria;

/// Layer metadata as stored on disk and returned by queries
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerMetadataDto {
    pub layer_name: String,
    pub site: String,
    pub year: i32,
    pub parameter: String,
    pub geometry: String,
    #[serde(default)]
    pub crs: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub description: String,
}

impl From<&LayerRecord> for LayerMetadataDto {
    fn from(record: &LayerRecord) -> Self {
        Self {
            layer_name: record.layer_name.clone(),
            site: record.site.to_string(),
            year: record.year,
            parameter: record.parameter.to_string(),
            geometry: record.geometry.to_string(),
            crs: record.crs.clone(),
            source: record.source.clone(),
            description: record.description.clone(),
        }
    }
}

impl TryFrom<LayerMetadataDto> for LayerRecord {
    type Error = DomainError;

    fn try_from(dto: LayerMetadataDto) -> Result<Self, Self::Error> {
        let context = |e: DomainError| {
            DomainError::ValidationError(format!("layer '{}': {}", dto.layer_name, e))
        };
        let site = dto.site.parse::<Site>().map_err(context)?;
        let parameter = dto.parameter.parse::<Parameter>().map_err(context)?;
        let geometry = dto.geometry.parse::<GeometryKind>().map_err(context)?;

        Ok(LayerRecord {
            layer_name: dto.layer_name,
            site,
            year: dto.year,
            parameter,
            geometry,
            crs: dto.crs,
            source: dto.source,
            description: dto.description,
        })
    }
}

/// Raw query criteria; every field optional, all text
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub parameter: Option<String>,
    #[serde(default, alias = "query")]
    pub search: Option<String>,
}

impl QueryRequest {
    /// Build from `key=value` pairs; unknown keys are ignored
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut request = Self::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match key {
                "site" => request.site = value,
                "year" => request.year = value,
                "parameter" => request.parameter = value,
                "search" | "query" => request.search = value,
                other => crate::log!("Ignoring unknown query key {:?}", other),
            }
        }
        request
    }

    /// Normalise into typed criteria; malformed values become unset
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria::from_text(
            self.site.as_deref().unwrap_or(""),
            self.year.as_deref().unwrap_or(""),
            self.parameter.as_deref().unwrap_or(""),
            self.search.as_deref().unwrap_or(""),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_to_json_field_names() {
        let record = LayerRecord::new(
            "SiteA_2011_CRZ",
            Site::A,
            2011,
            Parameter::Crz,
            GeometryKind::Polygon,
        )
        .with_crs("EPSG:32643");

        let json = serde_json::to_value(LayerMetadataDto::from(&record)).unwrap();

        assert_eq!(json["layer_name"], "SiteA_2011_CRZ");
        assert_eq!(json["site"], "A");
        assert_eq!(json["year"], 2011);
        assert_eq!(json["parameter"], "CRZ");
        assert_eq!(json["geometry"], "Polygon");
        assert_eq!(json["crs"], "EPSG:32643");
    }

    #[test]
    fn test_dto_with_unknown_site_rejected() {
        let dto = LayerMetadataDto {
            layer_name: "SiteB_2011_HTL".to_string(),
            site: "B".to_string(),
            year: 2011,
            parameter: "HTL".to_string(),
            geometry: "LineString".to_string(),
            crs: String::new(),
            source: String::new(),
            description: String::new(),
        };

        let err = LayerRecord::try_from(dto).unwrap_err();
        assert!(err.to_string().contains("SiteB_2011_HTL"));
    }

    #[test]
    fn test_query_request_from_json() {
        let request: QueryRequest =
            serde_json::from_str(r#"{"site":"C","query":"crz"}"#).unwrap();
        let criteria = request.to_criteria();

        assert_eq!(criteria.site, Some(Site::C));
        assert_eq!(criteria.search(), Some("crz"));
        assert!(criteria.year.is_none());
    }

    #[test]
    fn test_query_request_from_pairs() {
        let request = QueryRequest::from_pairs([("year", "2019"), ("parameter", "HTL"), ("x", "1")]);
        let criteria = request.to_criteria();

        assert_eq!(criteria.year, Some(2019));
        assert_eq!(criteria.parameter, Some(Parameter::Htl));
    }

    #[test]
    fn test_query_request_malformed_year() {
        let request = QueryRequest {
            year: Some("20x1".to_string()),
            ..Default::default()
        };
        assert!(request.to_criteria().is_unset());
    }
}
