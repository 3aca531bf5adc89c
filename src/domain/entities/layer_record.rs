//! LayerRecord entity - one surveyed coastal boundary layer
//!
//! A layer is a line or polygon surveyed at a site in a given year for one
//! parameter (tide line, regulation zone, ...). Records are loaded once per
//! session and never mutated afterwards.

use std::fmt;
use std::str::FromStr;

use crate::domain::errors::DomainError;

/// Unique identifier for a layer
pub type LayerName = String;

/// Survey location
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Site {
    A,
    C,
}

impl Site {
    pub const ALL: [Site; 2] = [Site::A, Site::C];

    pub fn as_str(&self) -> &'static str {
        match self {
            Site::A => "A",
            Site::C => "C",
        }
    }
}

impl Default for Site {
    fn default() -> Self {
        Site::A
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Site {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Site::A),
            "C" => Ok(Site::C),
            other => Err(DomainError::ValidationError(format!(
                "unknown site '{}'",
                other
            ))),
        }
    }
}

/// Surveyed feature type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Parameter {
    /// High tide line
    Htl,
    /// Low tide line
    Ltl,
    /// Coastal regulation zone
    Crz,
    Sea,
    Creek,
    Boundary,
}

impl Parameter {
    pub const ALL: [Parameter; 6] = [
        Parameter::Htl,
        Parameter::Ltl,
        Parameter::Crz,
        Parameter::Sea,
        Parameter::Creek,
        Parameter::Boundary,
    ];

    /// Token used in layer names and metadata files
    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::Htl => "HTL",
            Parameter::Ltl => "LTL",
            Parameter::Crz => "CRZ",
            Parameter::Sea => "SEA",
            Parameter::Creek => "CREEK",
            Parameter::Boundary => "Boundary",
        }
    }
}

impl Default for Parameter {
    fn default() -> Self {
        Parameter::Htl
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Parameter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parameter::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| DomainError::ValidationError(format!("unknown parameter '{}'", s)))
    }
}

/// Geometry type of the layer payload
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    LineString,
    Polygon,
}

impl GeometryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryKind::LineString => "LineString",
            GeometryKind::Polygon => "Polygon",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LineString" => Ok(GeometryKind::LineString),
            "Polygon" => Ok(GeometryKind::Polygon),
            other => Err(DomainError::ValidationError(format!(
                "unknown geometry '{}'",
                other
            ))),
        }
    }
}

/// A catalogued survey layer
#[derive(Clone, Debug, PartialEq)]
pub struct LayerRecord {
    /// Unique layer name
    pub layer_name: LayerName,
    pub site: Site,
    /// Survey year
    pub year: i32,
    pub parameter: Parameter,
    pub geometry: GeometryKind,
    /// Coordinate reference system, e.g. "EPSG:32643"
    pub crs: String,
    pub source: String,
    pub description: String,
}

impl LayerRecord {
    /// Create a record with empty descriptive fields
    pub fn new(
        layer_name: impl Into<String>,
        site: Site,
        year: i32,
        parameter: Parameter,
        geometry: GeometryKind,
    ) -> Self {
        Self {
            layer_name: layer_name.into(),
            site,
            year,
            parameter,
            geometry,
            crs: String::new(),
            source: String::new(),
            description: String::new(),
        }
    }

    /// Builder pattern: set CRS
    pub fn with_crs(mut self, crs: impl Into<String>) -> Self {
        self.crs = crs.into();
        self
    }

    /// Builder pattern: set source
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Builder pattern: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Short "site • year • parameter" label
    pub fn summary(&self) -> String {
        format!("{} • {} • {}", self.site, self.year, self.parameter)
    }
}

/// Layer name built from the `Site<site>_<year>_<parameter>` convention.
///
/// The name is a guess: nothing guarantees a record with this name exists.
pub fn conventional_layer_name(site: Site, year: i32, parameter: Parameter) -> LayerName {
    format!("Site{}_{}_{}", site, year, parameter)
}
