//! Dish washer service — the hexagonal core.
//!
//! [`DishWasher`] owns its four collaborators and walks a wash attempt
//! through the [`CyclePhase`] sequence.  Collaborator failures are
//! translated into a [`Status`]; only API misuse surfaces as an
//! [`Error`].
//!
//! ```text
//!   Door ──────▶ ┌────────────────────────┐
//!   DirtFilter ─▶│       DishWasher       │ ──▶ WashResult
//!   WaterPump ◀──│  door · filter · fill  │
//!   Engine ◀─────│  · run                 │
//!                └────────────────────────┘
//! ```

use log::{debug, info, warn};

use crate::config::WasherConfig;
use crate::error::{Error, Result};
use crate::program::ProgramConfiguration;
use crate::result::{Status, WashResult};
use crate::steps;

use super::cycle::CyclePhase;
use super::ports::{DirtFilter, Door, Engine, WaterPump};

// ───────────────────────────────────────────────────────────────
// DishWasher
// ───────────────────────────────────────────────────────────────

/// The wash controller.
pub struct DishWasher<P, E, F, D> {
    pump: P,
    engine: E,
    filter: F,
    door: D,
    config: WasherConfig,
}

impl<P, E, F, D> DishWasher<P, E, F, D>
where
    P: WaterPump,
    E: Engine,
    F: DirtFilter,
    D: Door,
{
    /// Construct with the factory [`WasherConfig`].
    pub fn new(pump: P, engine: E, filter: F, door: D) -> Self {
        Self {
            pump,
            engine,
            filter,
            door,
            config: WasherConfig::default(),
        }
    }

    /// Builder for callers that assemble collaborators piecemeal.
    pub fn builder() -> DishWasherBuilder<P, E, F, D> {
        DishWasherBuilder::default()
    }

    // ── Wash ──────────────────────────────────────────────────

    /// Run one wash attempt.
    ///
    /// Checks the door, then the filter, then fills and runs the engine.
    /// The first failing step decides the status and nothing after it is
    /// touched.
    pub fn start(&mut self, configuration: &ProgramConfiguration) -> WashResult {
        let mut phase = CyclePhase::Initial;
        loop {
            let next = self.advance(phase, configuration);
            debug!("wash cycle: {} -> {}", phase.name(), next.name());
            phase = next;

            if let CyclePhase::Finished(status) = phase {
                return Self::finish(status, configuration);
            }
        }
    }

    /// Like [`start`](Self::start) for callers holding an optional
    /// configuration.  `None` fails before any collaborator is queried.
    pub fn try_start(&mut self, configuration: Option<&ProgramConfiguration>) -> Result<WashResult> {
        let configuration = configuration.ok_or(Error::InvalidArgument("program configuration"))?;
        Ok(self.start(configuration))
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn config(&self) -> &WasherConfig {
        &self.config
    }

    /// Release the collaborators as `(pump, engine, filter, door)`.
    pub fn into_parts(self) -> (P, E, F, D) {
        (self.pump, self.engine, self.filter, self.door)
    }

    // ── Internal ──────────────────────────────────────────────

    /// Perform the step owned by `phase` and return the phase after it.
    fn advance(&mut self, phase: CyclePhase, configuration: &ProgramConfiguration) -> CyclePhase {
        match phase {
            CyclePhase::Initial => {
                if self.door.closed() {
                    phase.on_success()
                } else {
                    warn!("Door open, wash refused");
                    phase.on_failure()
                }
            }
            CyclePhase::DoorChecked => {
                let reading = self.filter.capacity();
                if self.config.filter_too_dirty(reading) {
                    warn!(
                        "Dirt filter capacity {:.1} below minimum {:.1}",
                        reading, self.config.min_filter_capacity
                    );
                    phase.on_failure()
                } else {
                    phase.on_success()
                }
            }
            CyclePhase::FilterChecked => match self.pump.pour(configuration.fill_level()) {
                Ok(()) => phase.on_success(),
                Err(e) => {
                    warn!("Water pump failed: {e}");
                    phase.on_failure()
                }
            },
            CyclePhase::Filled => {
                let steps = steps::plan(configuration);
                match self.engine.run_program(&steps) {
                    Ok(()) => phase.on_success(),
                    Err(e) => {
                        warn!("Engine failed: {e}");
                        phase.on_failure()
                    }
                }
            }
            CyclePhase::Run | CyclePhase::Finished(_) => phase.on_success(),
        }
    }

    fn finish(status: Status, configuration: &ProgramConfiguration) -> WashResult {
        if status.is_success() {
            info!("Wash complete: {:?}", configuration.program());
            WashResult::completed(configuration.program())
        } else {
            WashResult::failed(status)
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Builder
// ───────────────────────────────────────────────────────────────

/// Collects collaborators; [`build`](Self::build) rejects any that are missing.
pub struct DishWasherBuilder<P, E, F, D> {
    pump: Option<P>,
    engine: Option<E>,
    filter: Option<F>,
    door: Option<D>,
    config: WasherConfig,
}

impl<P, E, F, D> Default for DishWasherBuilder<P, E, F, D> {
    fn default() -> Self {
        Self {
            pump: None,
            engine: None,
            filter: None,
            door: None,
            config: WasherConfig::default(),
        }
    }
}

impl<P, E, F, D> DishWasherBuilder<P, E, F, D>
where
    P: WaterPump,
    E: Engine,
    F: DirtFilter,
    D: Door,
{
    #[must_use]
    pub fn pump(mut self, pump: P) -> Self {
        self.pump = Some(pump);
        self
    }

    #[must_use]
    pub fn engine(mut self, engine: E) -> Self {
        self.engine = Some(engine);
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: F) -> Self {
        self.filter = Some(filter);
        self
    }

    #[must_use]
    pub fn door(mut self, door: D) -> Self {
        self.door = Some(door);
        self
    }

    #[must_use]
    pub fn config(mut self, config: WasherConfig) -> Self {
        self.config = config;
        self
    }

    /// Fails with [`Error::InvalidArgument`] naming the first missing
    /// collaborator, or [`Error::Config`] for an out-of-range config.
    pub fn build(self) -> Result<DishWasher<P, E, F, D>> {
        let pump = self.pump.ok_or(Error::InvalidArgument("water pump"))?;
        let engine = self.engine.ok_or(Error::InvalidArgument("engine"))?;
        let filter = self.filter.ok_or(Error::InvalidArgument("dirt filter"))?;
        let door = self.door.ok_or(Error::InvalidArgument("door"))?;
        self.config.validate()?;

        Ok(DishWasher {
            pump,
            engine,
            filter,
            door,
            config: self.config,
        })
    }
}
