//! TimelinePresenter - Formats playback state for the year slider

use crate::domain::entities::AnimationState;

/// View model for the timeline control
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineViewModel {
    pub years: Vec<i32>,
    pub current_index: usize,
    pub current_year: i32,
    /// Slider position in `0.0..=1.0`
    pub position: f32,
    pub is_playing: bool,
    pub year_label: String,
    pub play_label: &'static str,
}

/// Presenter for the timeline
#[derive(Default)]
pub struct TimelinePresenter {
    view: Option<TimelineViewModel>,
}

impl TimelinePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Present the playback state; `None` hides the timeline
    pub fn present(&mut self, state: Option<&AnimationState>) {
        self.view = state.map(|state| {
            let years = state.year_sequence().as_slice().to_vec();
            let current_index = state.current_index();
            let position = if years.len() > 1 {
                current_index as f32 / (years.len() - 1) as f32
            } else {
                0.0
            };

            TimelineViewModel {
                years,
                current_index,
                current_year: state.current_year(),
                position,
                is_playing: state.is_playing(),
                year_label: format!("Year: {}", state.current_year()),
                play_label: if state.is_playing() { "Pause" } else { "Play" },
            }
        });
    }

    pub fn view(&self) -> Option<&TimelineViewModel> {
        self.view.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.view.is_some()
    }

    /// Nearest slider index for a position in `0.0..=1.0`
    pub fn index_at(&self, position: f32) -> Option<usize> {
        let view = self.view.as_ref()?;
        let last = view.years.len().saturating_sub(1);
        let clamped = position.clamp(0.0, 1.0);
        Some((clamped * last as f32).round() as usize)
    }
}
