//! CommandHandler - per-session state container
//!
//! Owns everything the UI used to keep as loose state: the filter criteria,
//! the filtered layers, the manual selection and the playback controller.
//! State only changes through [`CommandHandler::handle`] and
//! [`CommandHandler::poll`], and both recompute the derived layer lists
//! explicitly afterwards.

use std::sync::Arc;

use crate::application::ports::SchedulerPort;
use crate::application::services::{CatalogFacade, PlaybackController};
use crate::domain::entities::{conventional_layer_name, LayerRecord, Parameter, PlaybackMode};
use crate::domain::errors::DomainError;
use crate::domain::repositories::CatalogRepository;
use crate::domain::value_objects::{ActiveLayerSet, FilterCriteria, LayerSelection, YearSequence};

/// Years shown side by side by the HTL comparison
const COMPARE_YEARS: [i32; 2] = [2011, 2019];

/// Session command
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogCommand {
    /// Replace the filter criteria
    SetFilters(FilterCriteria),
    /// Switch a layer on or off (ignored during playback)
    ToggleLayer(String),
    /// Show the high tide line of both survey years for one site
    CompareHtl,
    /// Enter playback, or leave it if already active
    ToggleTemporalMode,
    /// Leave playback
    ExitTemporalMode,
    /// Flip between playing and paused
    PlayPause,
    /// Scrub to the year at a slider position
    ScrubToIndex(usize),
    /// Scrub to a specific year
    ScrubToYear(i32),
}

/// Handler for session commands
pub struct CommandHandler<R, S>
where
    R: CatalogRepository,
    S: SchedulerPort,
{
    facade: Arc<CatalogFacade<R>>,
    playback: PlaybackController<S>,
    default_years: YearSequence,
    criteria: FilterCriteria,
    available: Vec<LayerRecord>,
    selection: LayerSelection,
    active: ActiveLayerSet,
}

impl<R, S> CommandHandler<R, S>
where
    R: CatalogRepository,
    S: SchedulerPort,
{
    /// Create a session showing the whole catalogue
    pub fn new(
        facade: Arc<CatalogFacade<R>>,
        playback: PlaybackController<S>,
        default_years: YearSequence,
    ) -> Self {
        let mut handler = Self {
            facade,
            playback,
            default_years,
            criteria: FilterCriteria::new(),
            available: Vec::new(),
            selection: LayerSelection::new(),
            active: ActiveLayerSet::empty(),
        };
        handler.refresh();
        handler
    }

    /// Handle a command
    pub fn handle(&mut self, command: CatalogCommand) -> Result<(), DomainError> {
        match command {
            CatalogCommand::SetFilters(criteria) => {
                self.criteria = criteria;
                self.refresh();
            }
            CatalogCommand::ToggleLayer(name) => {
                if self.is_temporal_mode() {
                    crate::log!("Ignoring toggle of {} during playback", name);
                    return Ok(());
                }
                self.selection.toggle(&name);
                self.recompute_active();
            }
            CatalogCommand::CompareHtl => {
                if self.is_temporal_mode() {
                    crate::log!("Ignoring HTL comparison during playback");
                    return Ok(());
                }
                self.compare_htl();
            }
            CatalogCommand::ToggleTemporalMode => {
                if self.is_temporal_mode() {
                    self.playback.exit();
                } else {
                    let years = self.facade.year_sequence(&self.criteria, &self.default_years);
                    self.playback.enter(years)?;
                }
                self.recompute_active();
            }
            CatalogCommand::ExitTemporalMode => {
                self.playback.exit();
                self.recompute_active();
            }
            CatalogCommand::PlayPause => {
                self.playback.toggle_play_pause()?;
            }
            CatalogCommand::ScrubToIndex(index) => {
                self.playback.select_index(index)?;
                self.recompute_active();
            }
            CatalogCommand::ScrubToYear(year) => {
                self.playback.select_year(year)?;
                self.recompute_active();
            }
        }
        Ok(())
    }

    /// Apply due playback ticks. Returns true when the playback year changed.
    pub fn poll(&mut self) -> bool {
        if !self.playback.poll() {
            return false;
        }
        self.recompute_active();
        true
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Records matching the current criteria
    pub fn available_layers(&self) -> &[LayerRecord] {
        &self.available
    }

    /// Layers that should currently be drawn
    pub fn active_layers(&self) -> &ActiveLayerSet {
        &self.active
    }

    pub fn selection(&self) -> &LayerSelection {
        &self.selection
    }

    pub fn playback(&self) -> &PlaybackController<S> {
        &self.playback
    }

    pub fn playback_mut(&mut self) -> &mut PlaybackController<S> {
        &mut self.playback
    }

    pub fn facade(&self) -> &Arc<CatalogFacade<R>> {
        &self.facade
    }

    pub fn is_temporal_mode(&self) -> bool {
        self.playback.mode() != PlaybackMode::Idle
    }

    fn compare_htl(&mut self) {
        let site = self.facade.resolver().effective_site(&self.criteria);
        self.criteria = FilterCriteria::new()
            .with_site(site)
            .with_parameter(Parameter::Htl);
        self.selection.replace(
            COMPARE_YEARS
                .iter()
                .map(|&year| conventional_layer_name(site, year, Parameter::Htl)),
        );
        crate::log!("Comparing HTL for site {}", site);
        self.refresh();
    }

    fn refresh(&mut self) {
        self.available = self.facade.query(&self.criteria);
        self.recompute_active();
    }

    fn recompute_active(&mut self) {
        self.active = self.facade.active_layers_in(
            &self.available,
            &self.criteria,
            self.playback.state(),
            Some(&self.selection),
        );
    }
}
