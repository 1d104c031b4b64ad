//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the wash-cycle rules: the ordered door, filter,
//! fill and run sequence and the translation of collaborator failures
//! into a [`Status`](crate::result::Status).  All interaction with
//! hardware happens through **port traits** defined in [`ports`], keeping
//! this layer fully testable without real peripherals.

pub mod cycle;
pub mod ports;
pub mod request;
pub mod service;
