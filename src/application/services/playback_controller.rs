//! PlaybackController - time-lapse state machine
//!
//! Drives the playback year through `Idle -> Playing <-> Paused -> Idle`.
//! Each tick is a one-shot timer re-armed after the year has been advanced,
//! so at most one tick is ever pending. Pausing, scrubbing and exiting cancel
//! the pending tick before touching the state, and a due tick whose handle is
//! no longer the pending one is dropped.

use std::time::Duration;

use crate::application::ports::scheduler_port::{SchedulerPort, TickHandle};
use crate::domain::entities::{AnimationState, PlaybackMode};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::YearSequence;

/// Default time between playback ticks
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(1500);

/// Owns the animation state and its tick timer
pub struct PlaybackController<S>
where
    S: SchedulerPort,
{
    scheduler: S,
    state: Option<AnimationState>,
    pending_tick: Option<TickHandle>,
    tick_period: Duration,
}

impl<S> PlaybackController<S>
where
    S: SchedulerPort,
{
    /// Create an idle controller
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            state: None,
            pending_tick: None,
            tick_period: DEFAULT_TICK_PERIOD,
        }
    }

    /// Configure the tick period
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    pub fn tick_period(&self) -> Duration {
        self.tick_period
    }

    /// Current mode; `Idle` when no playback session exists
    pub fn mode(&self) -> PlaybackMode {
        self.state
            .as_ref()
            .map_or(PlaybackMode::Idle, AnimationState::mode)
    }

    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    pub fn is_playing(&self) -> bool {
        self.mode() == PlaybackMode::Playing
    }

    /// Animation state while playing or paused
    pub fn state(&self) -> Option<&AnimationState> {
        self.state.as_ref()
    }

    pub fn current_year(&self) -> Option<i32> {
        self.state.as_ref().map(AnimationState::current_year)
    }

    /// Whether a tick is currently armed
    pub fn has_pending_tick(&self) -> bool {
        self.pending_tick
            .map_or(false, |handle| self.scheduler.is_pending(handle))
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Idle -> Playing, starting at the first year of `years`
    pub fn enter(&mut self, years: YearSequence) -> Result<(), DomainError> {
        if self.is_active() {
            return Err(DomainError::InvalidState(
                "playback is already active".to_string(),
            ));
        }

        crate::log!("Playback entered with years {:?}", years.as_slice());
        self.state = Some(AnimationState::start(years));
        self.arm_tick();
        Ok(())
    }

    /// Playing -> Paused. Pausing while paused is a no-op.
    pub fn pause(&mut self) -> Result<(), DomainError> {
        self.disarm_tick();
        let state = self.active_state_mut("pause")?;
        state.pause();
        crate::log!("Playback paused at {}", state.current_year());
        Ok(())
    }

    /// Paused -> Playing. The next tick is one full period away.
    pub fn resume(&mut self) -> Result<(), DomainError> {
        let state = self.active_state_mut("resume")?;
        if state.is_playing() {
            return Ok(());
        }
        state.resume();
        crate::log!("Playback resumed at {}", state.current_year());
        self.arm_tick();
        Ok(())
    }

    /// Flip between playing and paused, returning the new mode
    pub fn toggle_play_pause(&mut self) -> Result<PlaybackMode, DomainError> {
        if self.is_playing() {
            self.pause()?;
        } else {
            self.resume()?;
        }
        Ok(self.mode())
    }

    /// Scrub to `year`. Always ends paused; the pending tick is cancelled
    /// first so it cannot overwrite the chosen year.
    pub fn select_year(&mut self, year: i32) -> Result<(), DomainError> {
        let state = self.active_state_mut("select a year")?;
        if !state.year_sequence().contains(year) {
            return state.select_year(year);
        }

        self.disarm_tick();
        let state = self.active_state_mut("select a year")?;
        state.select_year(year)?;
        crate::log!("Playback scrubbed to {}", year);
        Ok(())
    }

    /// Scrub to the year at `index` of the sequence (slider position)
    pub fn select_index(&mut self, index: usize) -> Result<(), DomainError> {
        let state = self.active_state_mut("select a year")?;
        let year = state.year_sequence().get(index).ok_or_else(|| {
            DomainError::ValidationError(format!(
                "index {} is outside the playback sequence of {} years",
                index,
                state.year_sequence().len()
            ))
        })?;
        self.select_year(year)
    }

    /// Any -> Idle. Cancels the pending tick before discarding the state.
    pub fn exit(&mut self) {
        self.disarm_tick();
        if self.state.take().is_some() {
            crate::log!("Playback exited");
        }
    }

    /// Apply due ticks. Returns true when the current year changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        for handle in self.scheduler.take_due() {
            if self.pending_tick == Some(handle) {
                self.pending_tick = None;
                changed |= self.on_tick();
            } else {
                crate::log!("Dropping stale tick {:?}", handle);
            }
        }
        changed
    }

    fn on_tick(&mut self) -> bool {
        let Some(state) = self.state.as_mut() else {
            return false;
        };
        if !state.is_playing() {
            return false;
        }

        let before = state.current_year();
        state.advance();
        let changed = state.current_year() != before;

        self.arm_tick();
        changed
    }

    fn arm_tick(&mut self) {
        self.disarm_tick();
        self.pending_tick = Some(self.scheduler.schedule(self.tick_period));
    }

    fn disarm_tick(&mut self) {
        if let Some(handle) = self.pending_tick.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn active_state_mut(&mut self, action: &str) -> Result<&mut AnimationState, DomainError> {
        self.state.as_mut().ok_or_else(|| {
            DomainError::InvalidState(format!("cannot {} while playback is idle", action))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::scheduler_port::ManualScheduler;

    fn controller() -> PlaybackController<ManualScheduler> {
        PlaybackController::new(ManualScheduler::new())
    }

    fn years() -> YearSequence {
        YearSequence::new(vec![2011, 2019]).unwrap()
    }

    fn tick(controller: &mut PlaybackController<ManualScheduler>) -> bool {
        let period = controller.tick_period();
        controller.scheduler_mut().advance(period);
        controller.poll()
    }

    #[test]
    fn test_starts_idle() {
        let controller = controller();

        assert_eq!(controller.mode(), PlaybackMode::Idle);
        assert_eq!(controller.current_year(), None);
        assert!(!controller.has_pending_tick());
    }

    #[test]
    fn test_enter_plays_from_first_year() {
        let mut controller = controller();
        controller.enter(years()).unwrap();

        assert_eq!(controller.mode(), PlaybackMode::Playing);
        assert_eq!(controller.current_year(), Some(2011));
        assert!(controller.has_pending_tick());
    }

    #[test]
    fn test_enter_twice_rejected() {
        let mut controller = controller();
        controller.enter(years()).unwrap();

        assert!(matches!(
            controller.enter(years()),
            Err(DomainError::InvalidState(_))
        ));
    }

    #[test]
    fn test_ticks_cycle_through_years() {
        let mut controller = controller();
        controller.enter(years()).unwrap();

        for n in 1..=7 {
            assert!(tick(&mut controller));
            assert_eq!(controller.current_year(), years().get(n % 2));
        }
    }

    #[test]
    fn test_no_tick_before_period() {
        let mut controller = controller();
        controller.enter(years()).unwrap();

        controller
            .scheduler_mut()
            .advance(DEFAULT_TICK_PERIOD - Duration::from_millis(1));
        assert!(!controller.poll());
        assert_eq!(controller.current_year(), Some(2011));
    }

    #[test]
    fn test_single_year_tick_is_noop() {
        let mut controller = controller();
        controller
            .enter(YearSequence::new(vec![2019]).unwrap())
            .unwrap();

        assert!(!tick(&mut controller));
        assert_eq!(controller.current_year(), Some(2019));
        assert!(controller.is_playing());
    }

    #[test]
    fn test_scrub_pauses_and_stops_ticks() {
        let mut controller = controller();
        controller.enter(years()).unwrap();

        controller
            .scheduler_mut()
            .advance(DEFAULT_TICK_PERIOD - Duration::from_millis(1));
        controller.select_year(2019).unwrap();

        assert_eq!(controller.mode(), PlaybackMode::Paused);
        assert_eq!(controller.current_year(), Some(2019));
        assert!(!controller.has_pending_tick());

        for _ in 0..5 {
            assert!(!tick(&mut controller));
            assert_eq!(controller.current_year(), Some(2019));
        }
    }

    #[test]
    fn test_scrub_outside_sequence_keeps_playing() {
        let mut controller = controller();
        controller.enter(years()).unwrap();

        assert!(controller.select_year(2015).is_err());
        assert!(controller.is_playing());
        assert!(controller.has_pending_tick());
    }

    #[test]
    fn test_select_index() {
        let mut controller = controller();
        controller.enter(years()).unwrap();

        controller.select_index(1).unwrap();
        assert_eq!(controller.current_year(), Some(2019));
        assert!(controller.select_index(2).is_err());
    }

    #[test]
    fn test_pause_and_resume() {
        let mut controller = controller();
        controller.enter(years()).unwrap();

        controller.pause().unwrap();
        assert!(!tick(&mut controller));
        assert_eq!(controller.current_year(), Some(2011));

        controller.resume().unwrap();
        assert!(controller.is_playing());
        assert!(tick(&mut controller));
        assert_eq!(controller.current_year(), Some(2019));
    }

    #[test]
    fn test_resume_after_scrub_advances_from_selected_year() {
        let mut controller = controller();
        controller.enter(YearSequence::new(vec![2011, 2015, 2019]).unwrap()).unwrap();

        controller.select_year(2015).unwrap();
        controller.resume().unwrap();
        tick(&mut controller);

        assert_eq!(controller.current_year(), Some(2019));
    }

    #[test]
    fn test_toggle_play_pause() {
        let mut controller = controller();
        controller.enter(years()).unwrap();

        assert_eq!(controller.toggle_play_pause().unwrap(), PlaybackMode::Paused);
        assert_eq!(controller.toggle_play_pause().unwrap(), PlaybackMode::Playing);
    }

    #[test]
    fn test_idle_actions_rejected() {
        let mut controller = controller();

        assert!(controller.pause().is_err());
        assert!(controller.resume().is_err());
        assert!(controller.select_year(2011).is_err());
        assert_eq!(controller.mode(), PlaybackMode::Idle);
    }

    #[test]
    fn test_exit_cancels_pending_tick() {
        let mut controller = controller();
        controller.enter(years()).unwrap();

        controller.exit();

        assert_eq!(controller.mode(), PlaybackMode::Idle);
        assert_eq!(controller.scheduler().pending_count(), 0);
        assert!(!tick(&mut controller));
        assert_eq!(controller.current_year(), None);
    }

    #[test]
    fn test_reenter_resets_to_first_year() {
        let mut controller = controller();
        controller.enter(years()).unwrap();
        tick(&mut controller);
        assert_eq!(controller.current_year(), Some(2019));

        controller.exit();
        controller.enter(years()).unwrap();

        assert_eq!(controller.current_year(), Some(2011));
        assert!(controller.is_playing());
    }

    #[test]
    fn test_custom_period() {
        let mut controller =
            PlaybackController::new(ManualScheduler::new()).with_tick_period(Duration::from_secs(3));
        controller.enter(years()).unwrap();

        controller.scheduler_mut().advance(DEFAULT_TICK_PERIOD);
        assert!(!controller.poll());

        controller.scheduler_mut().advance(Duration::from_millis(1500));
        assert!(controller.poll());
    }
}
