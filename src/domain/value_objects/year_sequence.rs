//! YearSequence value object - the ordered survey years played back in a loop

use crate::domain::entities::LayerRecord;
use crate::domain::errors::DomainError;

/// Non-empty, duplicate-free ordered list of years
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YearSequence {
    years: Vec<i32>,
}

impl YearSequence {
    /// Create a sequence, keeping the given order
    pub fn new(years: Vec<i32>) -> Result<Self, DomainError> {
        if years.is_empty() {
            return Err(DomainError::ValidationError(
                "year sequence must not be empty".to_string(),
            ));
        }
        for (i, year) in years.iter().enumerate() {
            if years[..i].contains(year) {
                return Err(DomainError::ValidationError(format!(
                    "year {} appears twice in sequence",
                    year
                )));
            }
        }
        Ok(Self { years })
    }

    /// Distinct years of `records` in ascending order, or `default` when
    /// `records` is empty
    pub fn from_records(records: &[LayerRecord], default: &YearSequence) -> Self {
        let mut years: Vec<i32> = records.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();

        if years.is_empty() {
            default.clone()
        } else {
            Self { years }
        }
    }

    /// First year of the sequence
    pub fn first(&self) -> i32 {
        self.years[0]
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Always false; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<i32> {
        self.years.get(index).copied()
    }

    pub fn contains(&self, year: i32) -> bool {
        self.years.contains(&year)
    }

    pub fn position(&self, year: i32) -> Option<usize> {
        self.years.iter().position(|&y| y == year)
    }

    /// The year following `year`, wrapping after the last element.
    /// A year outside the sequence restarts at the first element.
    pub fn next_after(&self, year: i32) -> i32 {
        match self.position(year) {
            Some(i) => self.years[(i + 1) % self.years.len()],
            None => self.first(),
        }
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.years
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{GeometryKind, Parameter, Site};

    fn record(year: i32) -> LayerRecord {
        LayerRecord::new(
            format!("SiteA_{}_HTL", year),
            Site::A,
            year,
            Parameter::Htl,
            GeometryKind::LineString,
        )
    }

    #[test]
    fn test_rejects_empty_and_duplicates() {
        assert!(YearSequence::new(vec![]).is_err());
        assert!(YearSequence::new(vec![2011, 2019, 2011]).is_err());
        assert!(YearSequence::new(vec![2019, 2011]).is_ok());
    }

    #[test]
    fn test_next_after_wraps() {
        let seq = YearSequence::new(vec![2011, 2015, 2019]).unwrap();

        assert_eq!(seq.next_after(2011), 2015);
        assert_eq!(seq.next_after(2015), 2019);
        assert_eq!(seq.next_after(2019), 2011);
        assert_eq!(seq.next_after(1999), 2011);
    }

    #[test]
    fn test_single_year_stays_put() {
        let seq = YearSequence::new(vec![2019]).unwrap();
        assert_eq!(seq.next_after(2019), 2019);
    }

    #[test]
    fn test_from_records_sorted_distinct() {
        let default = YearSequence::new(vec![2011, 2019]).unwrap();
        let records = vec![record(2019), record(2011), record(2019), record(2015)];

        let seq = YearSequence::from_records(&records, &default);
        assert_eq!(seq.as_slice(), &[2011, 2015, 2019]);
    }

    #[test]
    fn test_from_records_falls_back_to_default() {
        let default = YearSequence::new(vec![2011, 2019]).unwrap();
        let seq = YearSequence::from_records(&[], &default);
        assert_eq!(seq, default);
    }
}
