//! LayerSelection - layers switched on by hand outside playback

use std::collections::BTreeSet;

use crate::domain::entities::LayerName;
use crate::domain::value_objects::{ActivationOrigin, ActiveLayerSet};

/// Manually toggled layer names
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayerSelection {
    names: BTreeSet<LayerName>,
}

impl LayerSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the name if absent, remove it if present.
    /// Returns whether the layer is active afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.names.remove(name) {
            false
        } else {
            self.names.insert(name.to_string());
            true
        }
    }

    /// Replace the whole selection
    pub fn replace<I>(&mut self, names: I)
    where
        I: IntoIterator<Item = LayerName>,
    {
        self.names = names.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Snapshot as an active set
    pub fn to_active_set(&self) -> ActiveLayerSet {
        ActiveLayerSet::new(self.names.iter().cloned(), ActivationOrigin::Manual)
    }
}
