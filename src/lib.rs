//! Dishwasher control library.
//!
//! Exposes the wash-cycle core, its port traits and the adapters that
//! bind those ports to hardware or to host-side simulation.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod program;
pub mod result;
pub mod steps;

pub use app::service::{DishWasher, DishWasherBuilder};
pub use error::{EngineError, Error, PumpError};
pub use program::{FillLevel, ProgramConfiguration, WashingProgram};
pub use result::{Status, WashResult};
