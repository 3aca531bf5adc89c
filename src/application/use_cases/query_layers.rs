//! QueryLayersUseCase - answer a metadata query
//!
//! Translates a raw text request into criteria, runs the filter and returns
//! metadata DTOs in catalogue order. An empty result is a valid answer.

use std::sync::Arc;

use crate::application::dto::{LayerMetadataDto, QueryRequest};
use crate::application::services::CatalogFacade;
use crate::domain::errors::DomainError;
use crate::domain::repositories::CatalogRepository;

/// Use case for querying layer metadata
pub struct QueryLayersUseCase<R>
where
    R: CatalogRepository,
{
    facade: Arc<CatalogFacade<R>>,
}

impl<R> QueryLayersUseCase<R>
where
    R: CatalogRepository,
{
    /// Create a new query use case
    pub fn new(facade: Arc<CatalogFacade<R>>) -> Self {
        Self { facade }
    }

    /// Execute a typed request
    pub fn execute(&self, request: &QueryRequest) -> Vec<LayerMetadataDto> {
        let criteria = request.to_criteria();
        self.facade
            .query(&criteria)
            .iter()
            .map(LayerMetadataDto::from)
            .collect()
    }

    /// Execute a JSON request body, returning a JSON array
    pub fn execute_json(&self, body: &str) -> Result<String, DomainError> {
        let request: QueryRequest = if body.trim().is_empty() {
            QueryRequest::default()
        } else {
            serde_json::from_str(body)?
        };
        Ok(serde_json::to_string(&self.execute(&request))?)
    }

    /// Names of every catalogued layer
    pub fn layer_names(&self) -> Vec<String> {
        self.facade.layer_names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::gateways::MemoryCatalogGateway;
    use crate::fixtures::survey_fixture;

    fn use_case() -> QueryLayersUseCase<MemoryCatalogGateway> {
        let gateway = MemoryCatalogGateway::with_records(survey_fixture()).unwrap();
        QueryLayersUseCase::new(Arc::new(CatalogFacade::new(Arc::new(gateway))))
    }

    #[test]
    fn test_execute_typed_request() {
        let request = QueryRequest {
            site: Some("C".to_string()),
            parameter: Some("CRZ".to_string()),
            ..Default::default()
        };

        let results = use_case().execute(&request);

        let names: Vec<_> = results.iter().map(|d| d.layer_name.as_str()).collect();
        assert_eq!(names, vec!["SiteC_2011_CRZ", "SiteC_2019_CRZ"]);
    }

    #[test]
    fn test_execute_json() {
        let body = use_case().execute_json(r#"{"year":"2011","search":"ltl"}"#).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();

        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["layer_name"], "SiteA_2011_LTL");
        assert_eq!(array[1]["layer_name"], "SiteC_2011_LTL");
    }

    #[test]
    fn test_execute_json_empty_body_returns_all() {
        let body = use_case().execute_json("").unwrap();
        let value: Vec<LayerMetadataDto> = serde_json::from_str(&body).unwrap();

        assert_eq!(value.len(), 14);
    }

    #[test]
    fn test_no_match_is_empty_array() {
        let body = use_case().execute_json(r#"{"search":"nowhere"}"#).unwrap();
        assert_eq!(body, "[]");
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        assert!(matches!(
            use_case().execute_json("{site"),
            Err(DomainError::ParseError(_))
        ));
    }
}
