//! FilterController - Handles filter form input
//!
//! Site, year and parameter come from drop-downs and apply immediately.
//! Search text is typed, so it is debounced before a command is emitted.

use std::time::Instant;

use crate::application::services::CatalogCommand;
use crate::domain::value_objects::FilterCriteria;

/// Filter form field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    Site,
    Year,
    Parameter,
    Search,
}

/// Controller for the filter form
pub struct FilterController {
    site: String,
    year: String,
    parameter: String,
    search: String,
    /// Debounce delay in milliseconds
    debounce_ms: u32,
    last_input_time: Option<Instant>,
    /// Search text changed since the last emitted command
    dirty: bool,
}

impl FilterController {
    pub fn new() -> Self {
        Self {
            site: String::new(),
            year: String::new(),
            parameter: String::new(),
            search: String::new(),
            debounce_ms: 100,
            last_input_time: None,
            dirty: false,
        }
    }

    /// Set debounce delay
    pub fn with_debounce(mut self, ms: u32) -> Self {
        self.debounce_ms = ms;
        self
    }

    /// Set a field value. Drop-down fields emit a command right away.
    pub fn set_field(&mut self, field: FilterField, value: &str) -> Option<CatalogCommand> {
        match field {
            FilterField::Site => self.site = value.to_string(),
            FilterField::Year => self.year = value.to_string(),
            FilterField::Parameter => self.parameter = value.to_string(),
            FilterField::Search => {
                self.search = value.to_string();
                self.touch();
                return None;
            }
        }
        self.dirty = false;
        Some(self.command())
    }

    /// Append a typed character to the search text
    pub fn handle_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        self.search.push(c);
        self.touch();
    }

    /// Remove the last search character
    pub fn handle_backspace(&mut self) {
        if self.search.pop().is_some() {
            self.touch();
        }
    }

    /// Reset every field
    pub fn clear(&mut self) -> CatalogCommand {
        self.site.clear();
        self.year.clear();
        self.parameter.clear();
        self.search.clear();
        self.dirty = false;
        self.command()
    }

    pub fn value(&self, field: FilterField) -> &str {
        match field {
            FilterField::Site => &self.site,
            FilterField::Year => &self.year,
            FilterField::Parameter => &self.parameter,
            FilterField::Search => &self.search,
        }
    }

    /// Criteria for the current form values
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_text(&self.site, &self.year, &self.parameter, &self.search)
    }

    /// Check if debounce time has elapsed
    pub fn should_apply(&self) -> bool {
        if !self.dirty {
            return false;
        }

        match self.last_input_time {
            Some(last_time) => last_time.elapsed().as_millis() >= self.debounce_ms as u128,
            None => false,
        }
    }

    /// Get the pending filter command if debounce elapsed
    pub fn poll(&mut self) -> Option<CatalogCommand> {
        if self.should_apply() {
            self.dirty = false;
            Some(self.command())
        } else {
            None
        }
    }

    fn touch(&mut self) {
        self.dirty = true;
        self.last_input_time = Some(Instant::now());
    }

    fn command(&self) -> CatalogCommand {
        CatalogCommand::SetFilters(self.criteria())
    }
}

impl Default for FilterController {
    fn default() -> Self {
        Self::new()
    }
}
