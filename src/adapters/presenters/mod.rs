//! Presenters - Format session state for display

pub mod layer_presenter;
pub mod timeline_presenter;

pub use layer_presenter::{LayerItemViewModel, LayerPresenter};
pub use timeline_presenter::{TimelinePresenter, TimelineViewModel};
