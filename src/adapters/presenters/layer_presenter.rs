//! LayerPresenter - Formats the available layer list for display

use crate::domain::entities::LayerRecord;
use crate::domain::value_objects::ActiveLayerSet;

/// View model for a layer list row
#[derive(Clone, Debug, PartialEq)]
pub struct LayerItemViewModel {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub is_active: bool,
    /// Inactive row during playback
    pub is_dimmed: bool,
    pub is_selected: bool,
}

/// Presenter for the layer list
pub struct LayerPresenter {
    items: Vec<LayerItemViewModel>,
    selected_index: usize,
}

impl LayerPresenter {
    /// Create a new layer presenter
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected_index: 0,
        }
    }

    /// Present the filtered records with their activation state
    pub fn present(&mut self, records: &[LayerRecord], active: &ActiveLayerSet, temporal_mode: bool) {
        if self.selected_index >= records.len() {
            self.selected_index = 0;
        }
        let selected = self.selected_index;
        self.items = records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let is_active = active.contains(&record.layer_name);
                LayerItemViewModel {
                    id: record.layer_name.clone(),
                    title: record.layer_name.clone(),
                    subtitle: record.summary(),
                    is_active,
                    is_dimmed: temporal_mode && !is_active,
                    is_selected: i == selected,
                }
            })
            .collect();
    }

    pub fn items(&self) -> &[LayerItemViewModel] {
        &self.items
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Name of the highlighted row
    pub fn selected_id(&self) -> Option<&str> {
        self.items.get(self.selected_index).map(|item| item.id.as_str())
    }

    /// Update selection
    pub fn set_selected_index(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        if let Some(old) = self.items.get_mut(self.selected_index) {
            old.is_selected = false;
        }
        self.selected_index = index;
        self.items[index].is_selected = true;
    }

    /// Rows that are currently drawn on the map
    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_active).count()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.selected_index = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }
}

impl Default for LayerPresenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ActivationOrigin;
    use crate::fixtures::survey_fixture;

    #[test]
    fn test_present_layers() {
        let records = survey_fixture();
        let active = ActiveLayerSet::new(
            ["SiteA_2011_LTL".to_string()],
            ActivationOrigin::Manual,
        );
        let mut presenter = LayerPresenter::new();

        presenter.present(&records, &active, false);

        assert_eq!(presenter.count(), 14);
        assert_eq!(presenter.items()[0].subtitle, "A • 2011 • HTL");
        assert!(presenter.items()[0].is_selected);
        assert!(presenter.items()[1].is_active);
        assert_eq!(presenter.active_count(), 1);
        assert!(presenter.items().iter().all(|item| !item.is_dimmed));
    }

    #[test]
    fn test_inactive_rows_dimmed_in_temporal_mode() {
        let records = survey_fixture();
        let active = ActiveLayerSet::new(
            ["SiteC_2011_HTL".to_string()],
            ActivationOrigin::Matched,
        );
        let mut presenter = LayerPresenter::new();

        presenter.present(&records, &active, true);

        let dimmed: Vec<_> = presenter.items().iter().filter(|i| i.is_dimmed).collect();
        assert_eq!(dimmed.len(), 13);
        assert!(!presenter.items()[7].is_dimmed);
        assert!(presenter.items()[7].is_active);
    }

    #[test]
    fn test_fallback_name_marks_no_row() {
        let records = survey_fixture();
        let mut presenter = LayerPresenter::new();

        presenter.present(&records, &ActiveLayerSet::fallback("SiteA_2019_LTL".to_string()), true);

        assert_eq!(presenter.active_count(), 0);
    }

    #[test]
    fn test_selection_survives_until_list_shrinks() {
        let records = survey_fixture();
        let mut presenter = LayerPresenter::new();
        presenter.present(&records, &ActiveLayerSet::empty(), false);

        presenter.set_selected_index(5);
        assert_eq!(presenter.selected_id(), Some("SiteA_2019_SEA"));
        assert!(!presenter.items()[0].is_selected);

        presenter.present(&records[..3], &ActiveLayerSet::empty(), false);
        assert_eq!(presenter.selected_index(), 0);

        presenter.set_selected_index(10);
        assert_eq!(presenter.selected_index(), 0);
    }

    #[test]
    fn test_clear() {
        let mut presenter = LayerPresenter::new();
        presenter.present(&survey_fixture(), &ActiveLayerSet::empty(), false);

        presenter.clear();

        assert!(presenter.is_empty());
        assert_eq!(presenter.selected_id(), None);
    }
}
