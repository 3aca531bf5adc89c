//! CatalogFacade - single entry point for queries and layer activation
//!
//! Stateless beyond the catalogue it wraps: every call recomputes its result
//! from the arguments, so callers decide when recomputation happens.

use std::sync::Arc;

use crate::domain::entities::{AnimationState, LayerName, LayerRecord};
use crate::domain::errors::DomainError;
use crate::domain::repositories::CatalogRepository;
use crate::domain::services::{LayerResolver, QueryFilter};
use crate::domain::value_objects::{ActiveLayerSet, FilterCriteria, LayerSelection, YearSequence};

/// Composes filtering and activation over a catalogue
pub struct CatalogFacade<R>
where
    R: CatalogRepository,
{
    repository: Arc<R>,
    filter: QueryFilter,
    resolver: LayerResolver,
}

impl<R> CatalogFacade<R>
where
    R: CatalogRepository,
{
    /// Create a facade with the default resolver
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            filter: QueryFilter::new(),
            resolver: LayerResolver::default(),
        }
    }

    /// Use a resolver with custom defaults
    pub fn with_resolver(mut self, resolver: LayerResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn resolver(&self) -> &LayerResolver {
        &self.resolver
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Records matching `criteria`, in catalogue order
    pub fn query(&self, criteria: &FilterCriteria) -> Vec<LayerRecord> {
        self.filter.filter(self.repository.records(), criteria)
    }

    /// Active layers for the current state.
    ///
    /// Outside playback the manual selection is returned as-is; during
    /// playback the resolver runs over the filtered catalogue.
    pub fn active_layers(
        &self,
        criteria: &FilterCriteria,
        animation: Option<&AnimationState>,
        manual: Option<&LayerSelection>,
    ) -> ActiveLayerSet {
        match animation {
            Some(_) => {
                let filtered = self.query(criteria);
                self.active_layers_in(&filtered, criteria, animation, manual)
            }
            None => manual_set(manual),
        }
    }

    /// Same as [`CatalogFacade::active_layers`] over an already filtered set
    pub fn active_layers_in(
        &self,
        filtered: &[LayerRecord],
        criteria: &FilterCriteria,
        animation: Option<&AnimationState>,
        manual: Option<&LayerSelection>,
    ) -> ActiveLayerSet {
        match animation {
            Some(state) => self.resolver.resolve(filtered, criteria, Some(state)),
            None => manual_set(manual),
        }
    }

    /// Playback years for the records matching `criteria`
    pub fn year_sequence(&self, criteria: &FilterCriteria, default: &YearSequence) -> YearSequence {
        YearSequence::from_records(&self.query(criteria), default)
    }

    /// Look up a record by name
    pub fn find(&self, name: &str) -> Result<&LayerRecord, DomainError> {
        self.repository
            .find_by_name(name)
            .ok_or_else(|| DomainError::NotFound(name.to_string()))
    }

    pub fn is_catalogued(&self, name: &str) -> bool {
        self.repository.find_by_name(name).is_some()
    }

    /// Names in `set` with no catalogue record behind them
    pub fn missing_layers(&self, set: &ActiveLayerSet) -> Vec<LayerName> {
        set.iter()
            .filter(|name| !self.is_catalogued(name))
            .cloned()
            .collect()
    }

    /// All layer names in catalogue order
    pub fn layer_names(&self) -> Vec<LayerName> {
        self.repository.layer_names()
    }
}

fn manual_set(manual: Option<&LayerSelection>) -> ActiveLayerSet {
    manual.map_or_else(ActiveLayerSet::empty, LayerSelection::to_active_set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::gateways::MemoryCatalogGateway;
    use crate::domain::entities::{Parameter, Site};
    use crate::domain::repositories::NullCatalogRepository;
    use crate::domain::value_objects::ActivationOrigin;
    use crate::fixtures::survey_fixture;

    fn facade() -> CatalogFacade<MemoryCatalogGateway> {
        let gateway = MemoryCatalogGateway::with_records(survey_fixture()).unwrap();
        CatalogFacade::new(Arc::new(gateway))
    }

    fn default_years() -> YearSequence {
        YearSequence::new(vec![2011, 2019]).unwrap()
    }

    #[test]
    fn test_query_scenarios() {
        let facade = facade();

        assert_eq!(facade.query(&FilterCriteria::new()).len(), 14);
        assert_eq!(facade.query(&FilterCriteria::new().with_site(Site::A)).len(), 7);

        let crz = facade.query(
            &FilterCriteria::new()
                .with_parameter(Parameter::Crz)
                .with_site(Site::C),
        );
        assert_eq!(crz.len(), 2);
        assert_eq!(crz[0].year, 2011);
        assert_eq!(crz[1].year, 2019);
    }

    #[test]
    fn test_query_empty_catalog() {
        let facade = CatalogFacade::new(Arc::new(NullCatalogRepository));
        assert!(facade.query(&FilterCriteria::new()).is_empty());
    }

    #[test]
    fn test_manual_selection_outside_playback() {
        let facade = facade();
        let mut selection = LayerSelection::new();
        selection.toggle("SiteC_2011_LTL");

        let set = facade.active_layers(&FilterCriteria::new(), None, Some(&selection));

        assert_eq!(set.origin(), ActivationOrigin::Manual);
        assert!(set.contains("SiteC_2011_LTL"));
        assert!(facade
            .active_layers(&FilterCriteria::new(), None, None)
            .is_empty());
    }

    #[test]
    fn test_playback_ignores_manual_selection() {
        let facade = facade();
        let mut selection = LayerSelection::new();
        selection.toggle("SiteC_2011_LTL");
        let animation = AnimationState::start(default_years());
        let criteria = FilterCriteria::new().with_site(Site::A);

        let set = facade.active_layers(&criteria, Some(&animation), Some(&selection));

        assert_eq!(set.origin(), ActivationOrigin::Matched);
        assert_eq!(set.iter().cloned().collect::<Vec<_>>(), vec!["SiteA_2011_HTL"]);
    }

    #[test]
    fn test_fallback_is_verifiable() {
        let facade = facade();
        let animation = AnimationState::start(default_years());
        let criteria = FilterCriteria::new()
            .with_site(Site::A)
            .with_parameter(Parameter::Sea);

        let set = facade.active_layers(&criteria, Some(&animation), None);

        assert!(set.is_fallback());
        assert_eq!(facade.missing_layers(&set), vec!["SiteA_2011_SEA".to_string()]);
    }

    #[test]
    fn test_year_sequence_from_filtered() {
        let facade = facade();

        let seq = facade.year_sequence(&FilterCriteria::new().with_year(2019), &default_years());
        assert_eq!(seq.as_slice(), &[2019]);

        let seq = facade.year_sequence(&FilterCriteria::new().with_search("nothing"), &default_years());
        assert_eq!(seq, default_years());
    }

    #[test]
    fn test_find_not_found() {
        let facade = facade();

        assert!(facade.find("SiteA_2011_HTL").is_ok());
        assert!(matches!(
            facade.find("Site9_Boundary"),
            Err(DomainError::NotFound(_))
        ));
    }
}
