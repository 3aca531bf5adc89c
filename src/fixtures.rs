//! Shared test fixtures

use crate::domain::entities::{GeometryKind, LayerRecord, Parameter, Site};

/// Fourteen site/year/parameter combinations: seven per site, with CRZ
/// surveyed at site C in both 2011 and 2019.
pub fn survey_fixture() -> Vec<LayerRecord> {
    use GeometryKind::{LineString, Polygon};
    use Parameter::*;
    use Site::*;

    let combos = [
        (A, 2011, Htl, LineString),
        (A, 2011, Ltl, LineString),
        (A, 2011, Crz, Polygon),
        (A, 2019, Htl, LineString),
        (A, 2019, Crz, Polygon),
        (A, 2019, Sea, Polygon),
        (A, 2019, Creek, Polygon),
        (C, 2011, Htl, LineString),
        (C, 2011, Ltl, LineString),
        (C, 2011, Crz, Polygon),
        (C, 2019, Htl, LineString),
        (C, 2019, Ltl, LineString),
        (C, 2019, Crz, Polygon),
        (C, 2019, Sea, Polygon),
    ];

    combos
        .iter()
        .map(|&(site, year, parameter, geometry)| {
            LayerRecord::new(
                format!("Site{}_{}_{}", site, year, parameter),
                site,
                year,
                parameter,
                geometry,
            )
            .with_crs("EPSG:32643")
            .with_source("NCSCM / Hackathon Dataset")
        })
        .collect()
}
