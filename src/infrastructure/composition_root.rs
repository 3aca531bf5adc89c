//! CompositionRoot - Dependency Injection Container
//!
//! This module wires together all the dependencies for the application.
//! It creates and owns all the major components.

use std::sync::Arc;

use thiserror::Error;

use crate::adapters::controllers::FilterController;
use crate::adapters::gateways::JsonCatalogGateway;
use crate::adapters::presenters::{LayerPresenter, TimelinePresenter};
use crate::application::ports::{NullGeometryPort, SchedulerPort};
use crate::application::services::{CatalogCommand, CatalogFacade, CommandHandler, PlaybackController};
use crate::application::use_cases::{FetchGeometryUseCase, QueryLayersUseCase};
use crate::domain::errors::DomainError;
use crate::infrastructure::tick_scheduler::InstantScheduler;
use crate::shared::config::{Config, ConfigError};

/// Failure while assembling the application
#[derive(Debug, Error)]
pub enum CompositionError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("catalogue: {0}")]
    Catalog(#[from] DomainError),
}

/// Application composition root - owns all dependencies
pub struct CompositionRoot<S: SchedulerPort = InstantScheduler> {
    // Controllers
    pub filter_controller: FilterController,

    // Presenters
    pub layer_presenter: LayerPresenter,
    pub timeline_presenter: TimelinePresenter,

    // Application services
    pub session: CommandHandler<JsonCatalogGateway, S>,

    // Use cases
    pub query_layers: QueryLayersUseCase<JsonCatalogGateway>,
    pub fetch_geometry: FetchGeometryUseCase<JsonCatalogGateway, NullGeometryPort>,
}

impl CompositionRoot<InstantScheduler> {
    /// Create with the wall-clock scheduler
    pub fn new(config: &Config) -> Result<Self, CompositionError> {
        Self::with_scheduler(config, InstantScheduler::new())
    }
}

impl<S: SchedulerPort> CompositionRoot<S> {
    /// Create with a custom tick scheduler
    pub fn with_scheduler(config: &Config, scheduler: S) -> Result<Self, CompositionError> {
        config.validate()?;

        // Create gateways
        let gateway = match &config.catalog.metadata_path {
            Some(path) => JsonCatalogGateway::load(path)?,
            None => JsonCatalogGateway::bundled()?,
        };

        // Create application services
        let facade = Arc::new(
            CatalogFacade::new(Arc::new(gateway)).with_resolver(config.resolver()?),
        );
        let playback = PlaybackController::new(scheduler).with_tick_period(config.tick_period());
        let session = CommandHandler::new(Arc::clone(&facade), playback, config.default_years()?);

        // Create use cases
        let query_layers = QueryLayersUseCase::new(Arc::clone(&facade));
        let fetch_geometry = FetchGeometryUseCase::new(facade, Arc::new(NullGeometryPort));

        let mut root = Self {
            filter_controller: FilterController::new(),
            layer_presenter: LayerPresenter::new(),
            timeline_presenter: TimelinePresenter::new(),
            session,
            query_layers,
            fetch_geometry,
        };
        root.present();
        Ok(root)
    }

    /// Handle a command and refresh the presenters
    pub fn dispatch(&mut self, command: CatalogCommand) -> Result<(), DomainError> {
        let result = self.session.handle(command);
        self.present();
        result
    }

    /// Apply due ticks and any debounced filter input
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        if let Some(command) = self.filter_controller.poll() {
            if self.session.handle(command).is_ok() {
                changed = true;
            }
        }
        changed |= self.session.poll();
        if changed {
            self.present();
        }
        changed
    }

    /// Rebuild view models from the session state
    pub fn present(&mut self) {
        self.layer_presenter.present(
            self.session.available_layers(),
            self.session.active_layers(),
            self.session.is_temporal_mode(),
        );
        self.timeline_presenter.present(self.session.playback().state());
    }
}
