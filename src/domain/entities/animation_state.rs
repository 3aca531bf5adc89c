//! AnimationState entity - the year being shown during time-lapse playback
//!
//! Exists only while playback is active. `current_year` is always a member of
//! `year_sequence`; the playback controller is the only writer.

use crate::domain::errors::DomainError;
use crate::domain::value_objects::YearSequence;

/// Playback mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackMode {
    /// No playback session
    Idle,
    /// Years advance on every tick
    Playing,
    /// Year held until resumed
    Paused,
}

impl Default for PlaybackMode {
    fn default() -> Self {
        PlaybackMode::Idle
    }
}

/// Live playback state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationState {
    mode: PlaybackMode,
    current_year: i32,
    year_sequence: YearSequence,
}

impl AnimationState {
    /// Start playing from the first year of the sequence
    pub fn start(year_sequence: YearSequence) -> Self {
        Self {
            mode: PlaybackMode::Playing,
            current_year: year_sequence.first(),
            year_sequence,
        }
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    pub fn year_sequence(&self) -> &YearSequence {
        &self.year_sequence
    }

    pub fn is_playing(&self) -> bool {
        self.mode == PlaybackMode::Playing
    }

    pub fn is_paused(&self) -> bool {
        self.mode == PlaybackMode::Paused
    }

    /// Index of the current year within the sequence
    pub fn current_index(&self) -> usize {
        self.year_sequence.position(self.current_year).unwrap_or(0)
    }

    /// Step to the next year, wrapping. No-op unless playing.
    pub fn advance(&mut self) {
        if self.is_playing() {
            self.current_year = self.year_sequence.next_after(self.current_year);
        }
    }

    pub fn pause(&mut self) {
        self.mode = PlaybackMode::Paused;
    }

    pub fn resume(&mut self) {
        self.mode = PlaybackMode::Playing;
    }

    /// Jump to `year` and hold there
    pub fn select_year(&mut self, year: i32) -> Result<(), DomainError> {
        if !self.year_sequence.contains(year) {
            return Err(DomainError::ValidationError(format!(
                "year {} is not in the playback sequence {:?}",
                year,
                self.year_sequence.as_slice()
            )));
        }
        self.current_year = year;
        self.mode = PlaybackMode::Paused;
        Ok(())
    }
}
