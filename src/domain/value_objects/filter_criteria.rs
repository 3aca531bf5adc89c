//! FilterCriteria value object - the fixed set of catalogue predicates
//!
//! Every field is optional; an unset field matches every record. Criteria
//! arrive from the UI as text and are normalised here: empty text and
//! malformed values (a non-numeric year, an unknown site token) become unset
//! instead of failing the query.

use crate::domain::entities::{LayerRecord, Parameter, Site};

/// Conjunctive filter over layer records
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub site: Option<Site>,
    pub year: Option<i32>,
    pub parameter: Option<Parameter>,
    /// Lowercased search text
    search: Option<String>,
}

impl FilterCriteria {
    /// Criteria with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Build criteria from raw form text, dropping anything malformed
    pub fn from_text(site: &str, year: &str, parameter: &str, search: &str) -> Self {
        Self {
            site: parse_field("site", site),
            year: parse_field("year", year),
            parameter: parse_field("parameter", parameter),
            search: normalize_search(search),
        }
    }

    /// Builder: set site
    pub fn with_site(mut self, site: Site) -> Self {
        self.site = Some(site);
        self
    }

    /// Builder: set year
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Builder: set parameter
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameter = Some(parameter);
        self
    }

    /// Builder: set search text (blank text leaves search unset)
    pub fn with_search(mut self, text: &str) -> Self {
        self.search = normalize_search(text);
        self
    }

    /// Lowercased search substring, if any
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// True when no predicate is set
    pub fn is_unset(&self) -> bool {
        self.site.is_none()
            && self.year.is_none()
            && self.parameter.is_none()
            && self.search.is_none()
    }

    /// Check a record against every set predicate
    pub fn matches(&self, record: &LayerRecord) -> bool {
        if let Some(site) = self.site {
            if record.site != site {
                return false;
            }
        }
        if let Some(year) = self.year {
            if record.year != year {
                return false;
            }
        }
        if let Some(parameter) = self.parameter {
            if record.parameter != parameter {
                return false;
            }
        }
        match &self.search {
            Some(needle) => record.layer_name.to_lowercase().contains(needle.as_str()),
            None => true,
        }
    }
}

fn parse_field<T: std::str::FromStr>(field: &str, raw: &str) -> Option<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            crate::log!("Ignoring malformed {} criterion {:?}", field, raw);
            None
        }
    }
}

fn normalize_search(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::GeometryKind;

    fn record() -> LayerRecord {
        LayerRecord::new(
            "SiteA_2011_HTL",
            Site::A,
            2011,
            Parameter::Htl,
            GeometryKind::LineString,
        )
    }

    #[test]
    fn test_unset_matches_everything() {
        let criteria = FilterCriteria::new();

        assert!(criteria.is_unset());
        assert!(criteria.matches(&record()));
    }

    #[test]
    fn test_from_text_parses_values() {
        let criteria = FilterCriteria::from_text("C", "2019", "CRZ", "Site");

        assert_eq!(criteria.site, Some(Site::C));
        assert_eq!(criteria.year, Some(2019));
        assert_eq!(criteria.parameter, Some(Parameter::Crz));
        assert_eq!(criteria.search(), Some("site"));
    }

    #[test]
    fn test_year_compared_by_value() {
        let criteria = FilterCriteria::from_text("", "02011", "", "");

        assert_eq!(criteria.year, Some(2011));
        assert!(criteria.matches(&record()));
    }

    #[test]
    fn test_malformed_fields_become_unset() {
        let criteria = FilterCriteria::from_text("B", "twenty", "tide", "   ");

        assert!(criteria.is_unset());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        assert!(FilterCriteria::new().with_search("sitea").matches(&record()));
        assert!(FilterCriteria::new().with_search("SITEA").matches(&record()));
        assert!(!FilterCriteria::new().with_search("sitec").matches(&record()));
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let criteria = FilterCriteria::new()
            .with_site(Site::A)
            .with_parameter(Parameter::Ltl);

        assert!(!criteria.matches(&record()));
        assert!(FilterCriteria::new()
            .with_site(Site::A)
            .with_year(2011)
            .matches(&record()));
    }
}
