//! In-memory collaborators for host builds.
//!
//! Each simulator holds the state its real counterpart would sense or
//! drive, lets tests inject faults, and counts how often the core called
//! it.

use crate::app::ports::{DirtFilter, Door, Engine, WaterPump};
use crate::error::{EngineError, PumpError};
use crate::program::FillLevel;
use crate::steps::{ProgramStep, ProgramSteps};

// ── Door ──────────────────────────────────────────────────────

pub struct SimDoor {
    closed: bool,
    queries: u32,
}

impl SimDoor {
    pub fn new(closed: bool) -> Self {
        Self { closed, queries: 0 }
    }

    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    pub fn queries(&self) -> u32 {
        self.queries
    }
}

impl Door for SimDoor {
    fn closed(&mut self) -> bool {
        self.queries += 1;
        self.closed
    }
}

// ── Dirt filter ───────────────────────────────────────────────

pub struct SimDirtFilter {
    capacity: f64,
    queries: u32,
}

impl SimDirtFilter {
    pub fn new(capacity: f64) -> Self {
        Self {
            capacity,
            queries: 0,
        }
    }

    pub fn set_capacity(&mut self, capacity: f64) {
        self.capacity = capacity;
    }

    pub fn queries(&self) -> u32 {
        self.queries
    }
}

impl DirtFilter for SimDirtFilter {
    fn capacity(&mut self) -> f64 {
        self.queries += 1;
        self.capacity
    }
}

// ── Water pump ────────────────────────────────────────────────

/// Litres delivered for each fill level.
pub const fn fill_litres(level: FillLevel) -> f32 {
    match level {
        FillLevel::Half => 6.0,
        FillLevel::Full => 12.0,
    }
}

pub struct SimWaterPump {
    fault: Option<PumpError>,
    pours: u32,
    poured_litres: f32,
    last_level: Option<FillLevel>,
}

impl SimWaterPump {
    pub fn new() -> Self {
        Self {
            fault: None,
            pours: 0,
            poured_litres: 0.0,
            last_level: None,
        }
    }

    /// Make every following `pour` fail with `fault`.
    pub fn fail_with(&mut self, fault: PumpError) {
        self.fault = Some(fault);
    }

    pub fn clear_fault(&mut self) {
        self.fault = None;
    }

    pub fn pours(&self) -> u32 {
        self.pours
    }

    /// Total volume delivered by successful pours.
    pub fn poured_litres(&self) -> f32 {
        self.poured_litres
    }

    pub fn last_level(&self) -> Option<FillLevel> {
        self.last_level
    }
}

impl Default for SimWaterPump {
    fn default() -> Self {
        Self::new()
    }
}

impl WaterPump for SimWaterPump {
    fn pour(&mut self, level: FillLevel) -> Result<(), PumpError> {
        self.pours += 1;
        self.last_level = Some(level);
        if let Some(fault) = self.fault {
            return Err(fault);
        }
        self.poured_litres += fill_litres(level);
        Ok(())
    }
}

// ── Engine ────────────────────────────────────────────────────

pub struct SimEngine {
    fault: Option<EngineError>,
    runs: u32,
    last_steps: ProgramSteps,
}

impl SimEngine {
    pub fn new() -> Self {
        Self {
            fault: None,
            runs: 0,
            last_steps: ProgramSteps::new(),
        }
    }

    /// Make every following `run_program` fail with `fault`.
    pub fn fail_with(&mut self, fault: EngineError) {
        self.fault = Some(fault);
    }

    pub fn clear_fault(&mut self) {
        self.fault = None;
    }

    pub fn runs(&self) -> u32 {
        self.runs
    }

    /// Steps received by the most recent call.
    pub fn last_steps(&self) -> &[ProgramStep] {
        &self.last_steps
    }
}

impl Default for SimEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for SimEngine {
    fn run_program(&mut self, steps: &[ProgramStep]) -> Result<(), EngineError> {
        self.runs += 1;
        self.last_steps.clear();
        for step in steps {
            if self.last_steps.push(*step).is_err() {
                return Err(EngineError::InvalidSequence);
            }
        }
        if steps.is_empty() {
            return Err(EngineError::InvalidSequence);
        }
        match self.fault {
            Some(fault) => Err(fault),
            None => Ok(()),
        }
    }
}
