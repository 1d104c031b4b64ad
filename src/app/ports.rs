//! Port traits — the hexagonal boundary between the wash core and the machine.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ DishWasher (domain)
//! ```
//!
//! Each collaborator exposes exactly one operation.  The
//! [`DishWasher`](super::service::DishWasher) holds them via generics, so
//! the core never touches hardware directly.  Every trait is also
//! implemented for `&mut T`, letting callers lend a collaborator instead
//! of handing it over.

use crate::error::{EngineError, PumpError};
use crate::program::FillLevel;
use crate::steps::ProgramStep;

// ───────────────────────────────────────────────────────────────
// Door (sensor: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Door latch sensor.  Must be safe to query repeatedly.
pub trait Door {
    /// `true` when the door is shut and latched.
    fn closed(&mut self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Dirt filter (sensor: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Dirt filter clogging sensor.
pub trait DirtFilter {
    /// Remaining clean capacity, 0 (clogged) to 100 (clean).
    fn capacity(&mut self) -> f64;
}

// ───────────────────────────────────────────────────────────────
// Water pump (actuator: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Inlet pump.  The implementation owns the level-to-volume mapping.
pub trait WaterPump {
    /// Fill the tub to `level`, blocking until done or failed.
    fn pour(&mut self, level: FillLevel) -> Result<(), PumpError>;
}

// ───────────────────────────────────────────────────────────────
// Engine (actuator: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Wash engine: circulation motor, heater, dispenser, dryer.
pub trait Engine {
    /// Run `steps` in order, blocking until the cycle completes or fails.
    fn run_program(&mut self, steps: &[ProgramStep]) -> Result<(), EngineError>;
}

// ───────────────────────────────────────────────────────────────
// Borrowed collaborators
// ───────────────────────────────────────────────────────────────

impl<T: Door + ?Sized> Door for &mut T {
    fn closed(&mut self) -> bool {
        (**self).closed()
    }
}

impl<T: DirtFilter + ?Sized> DirtFilter for &mut T {
    fn capacity(&mut self) -> f64 {
        (**self).capacity()
    }
}

impl<T: WaterPump + ?Sized> WaterPump for &mut T {
    fn pour(&mut self, level: FillLevel) -> Result<(), PumpError> {
        (**self).pour(level)
    }
}

impl<T: Engine + ?Sized> Engine for &mut T {
    fn run_program(&mut self, steps: &[ProgramStep]) -> Result<(), EngineError> {
        (**self).run_program(steps)
    }
}
