//! Unified error types for the dishwasher control core.
//!
//! Two families live here:
//!
//! - [`Error`]: contract violations (missing collaborator, missing
//!   configuration, invalid tuning values).  These are returned to the
//!   caller as `Err` and never become a wash [`Status`](crate::result::Status).
//! - [`PumpError`] / [`EngineError`]: failures reported by the collaborators
//!   through the port traits.  The core translates them into a status and
//!   they never leave [`DishWasher::start`](crate::app::service::DishWasher::start).
//!
//! All variants are `Copy` so they pass through the cycle without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level contract error
// ---------------------------------------------------------------------------

/// Misuse of the public API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A required argument was missing.  The payload names it.
    InvalidArgument(&'static str),
    /// Configuration is out of range or could not be decoded.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(what) => write!(f, "invalid argument: {what} is required"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Pump errors
// ---------------------------------------------------------------------------

/// Raised by [`WaterPump::pour`](crate::app::ports::WaterPump::pour).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpError {
    /// Inlet supply delivered no water.
    NoWaterSupply,
    /// Target level was not reached in the allowed fill window.
    FillTimeout,
    /// Inlet valve did not respond.
    ValveFault,
}

impl fmt::Display for PumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWaterSupply => write!(f, "no water supply"),
            Self::FillTimeout => write!(f, "fill timed out"),
            Self::ValveFault => write!(f, "inlet valve fault"),
        }
    }
}

impl core::error::Error for PumpError {}

// ---------------------------------------------------------------------------
// Engine errors
// ---------------------------------------------------------------------------

/// Raised by [`Engine::run_program`](crate::app::ports::Engine::run_program).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Circulation motor stalled mid-cycle.
    MotorStalled,
    /// Heater could not reach the step temperature.
    HeaterFault,
    /// The engine refused the step sequence (empty or unsupported).
    InvalidSequence,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MotorStalled => write!(f, "motor stalled"),
            Self::HeaterFault => write!(f, "heater fault"),
            Self::InvalidSequence => write!(f, "invalid step sequence"),
        }
    }
}

impl core::error::Error for EngineError {}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
