//! ActiveLayerSet value object - the layer names that should be visible
//!
//! Always derived, never stored as a source of truth. The origin records how
//! the names were obtained so callers can tell synthesized fallback names
//! apart from real catalogue matches.

use std::collections::BTreeSet;

use crate::domain::entities::LayerName;

/// How an active set was produced
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivationOrigin {
    /// User toggles outside playback
    Manual,
    /// Catalogue records matched the playback year
    Matched,
    /// Nothing matched; a single conventional name was synthesized
    Fallback,
}

/// Deduplicated, sorted set of active layer names
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveLayerSet {
    names: BTreeSet<LayerName>,
    origin: ActivationOrigin,
}

impl ActiveLayerSet {
    pub fn new<I>(names: I, origin: ActivationOrigin) -> Self
    where
        I: IntoIterator<Item = LayerName>,
    {
        Self {
            names: names.into_iter().collect(),
            origin,
        }
    }

    /// Empty manual set
    pub fn empty() -> Self {
        Self::new(Vec::new(), ActivationOrigin::Manual)
    }

    /// Singleton set holding a synthesized name
    pub fn fallback(name: LayerName) -> Self {
        Self::new([name], ActivationOrigin::Fallback)
    }

    pub fn origin(&self) -> ActivationOrigin {
        self.origin
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == ActivationOrigin::Fallback
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

    pub fn iter(&self) -> impl Iterator<Item = &LayerName> {
        self.names.iter()
    }

    pub fn names(&self) -> &BTreeSet<LayerName> {
        &self.names
    }
}
