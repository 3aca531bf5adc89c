//! LayerResolver - which layers are visible during time-lapse playback
//!
//! Selects the filtered records surveyed in the current playback year. Site
//! and parameter criteria narrow the match; when no parameter is chosen the
//! default parameter is used so playback shows one comparable feature across
//! years. When nothing matches, a single name is synthesized from the
//! `Site<site>_<year>_<parameter>` convention. That name may not exist in the
//! catalogue, so the result is flagged as a fallback.

use crate::domain::entities::{conventional_layer_name, AnimationState, LayerRecord, Parameter, Site};
use crate::domain::value_objects::{ActivationOrigin, ActiveLayerSet, FilterCriteria};

/// Resolves active layers from filters and playback year
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerResolver {
    default_site: Site,
    default_parameter: Parameter,
}

impl LayerResolver {
    /// Create a resolver with the given defaults for unset criteria
    pub fn new(default_site: Site, default_parameter: Parameter) -> Self {
        Self {
            default_site,
            default_parameter,
        }
    }

    pub fn default_site(&self) -> Site {
        self.default_site
    }

    pub fn default_parameter(&self) -> Parameter {
        self.default_parameter
    }

    /// Site used for naming when the criteria leave it unset
    pub fn effective_site(&self, criteria: &FilterCriteria) -> Site {
        criteria.site.unwrap_or(self.default_site)
    }

    /// Parameter used for matching and naming when the criteria leave it unset
    pub fn effective_parameter(&self, criteria: &FilterCriteria) -> Parameter {
        criteria.parameter.unwrap_or(self.default_parameter)
    }

    /// Active layers for the playback year.
    ///
    /// Without an animation there is nothing to resolve and the result is an
    /// empty manual set.
    pub fn resolve(
        &self,
        filtered: &[LayerRecord],
        criteria: &FilterCriteria,
        animation: Option<&AnimationState>,
    ) -> ActiveLayerSet {
        let Some(animation) = animation else {
            return ActiveLayerSet::empty();
        };

        let year = animation.current_year();
        let parameter = self.effective_parameter(criteria);

        let matched: Vec<String> = filtered
            .iter()
            .filter(|r| r.year == year)
            .filter(|r| criteria.site.map_or(true, |site| r.site == site))
            .filter(|r| r.parameter == parameter)
            .map(|r| r.layer_name.clone())
            .collect();

        if !matched.is_empty() {
            return ActiveLayerSet::new(matched, ActivationOrigin::Matched);
        }

        let name = conventional_layer_name(self.effective_site(criteria), year, parameter);
        crate::log!("No layer matched year {}; falling back to {}", year, name);
        ActiveLayerSet::fallback(name)
    }
}

impl Default for LayerResolver {
    fn default() -> Self {
        Self::new(Site::A, Parameter::Htl)
    }
}
