//! Mock collaborators for integration tests.
//!
//! All four mocks append to one shared call log so tests can assert on
//! the exact order in which the core touched the machine.

use std::cell::RefCell;
use std::rc::Rc;

use dishwasher::app::ports::{DirtFilter, Door, Engine, WaterPump};
use dishwasher::steps::ProgramStep;
use dishwasher::{DishWasher, EngineError, FillLevel, PumpError};

// ── Call record ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    DoorClosed,
    FilterCapacity,
    Pour(FillLevel),
    RunProgram(Vec<ProgramStep>),
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

// ── Mocks ─────────────────────────────────────────────────────

pub struct MockDoor {
    pub log: CallLog,
    pub closed: bool,
}

impl Door for MockDoor {
    fn closed(&mut self) -> bool {
        self.log.borrow_mut().push(Call::DoorClosed);
        self.closed
    }
}

pub struct MockFilter {
    pub log: CallLog,
    pub capacity: f64,
}

impl DirtFilter for MockFilter {
    fn capacity(&mut self) -> f64 {
        self.log.borrow_mut().push(Call::FilterCapacity);
        self.capacity
    }
}

pub struct MockPump {
    pub log: CallLog,
    pub fault: Option<PumpError>,
}

impl WaterPump for MockPump {
    fn pour(&mut self, level: FillLevel) -> Result<(), PumpError> {
        self.log.borrow_mut().push(Call::Pour(level));
        self.fault.map_or(Ok(()), Err)
    }
}

pub struct MockEngine {
    pub log: CallLog,
    pub fault: Option<EngineError>,
}

impl Engine for MockEngine {
    fn run_program(&mut self, steps: &[ProgramStep]) -> Result<(), EngineError> {
        self.log.borrow_mut().push(Call::RunProgram(steps.to_vec()));
        self.fault.map_or(Ok(()), Err)
    }
}

// ── Rig ───────────────────────────────────────────────────────

pub type MockWasher = DishWasher<MockPump, MockEngine, MockFilter, MockDoor>;

/// Scripted machine state for one test.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub door_closed: bool,
    pub filter_capacity: f64,
    pub pump_fault: Option<PumpError>,
    pub engine_fault: Option<EngineError>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            door_closed: true,
            filter_capacity: 60.0,
            pump_fault: None,
            engine_fault: None,
        }
    }
}

impl Scenario {
    pub fn build(self) -> (MockWasher, CallLog) {
        let log = CallLog::default();
        let washer = DishWasher::new(
            MockPump {
                log: log.clone(),
                fault: self.pump_fault,
            },
            MockEngine {
                log: log.clone(),
                fault: self.engine_fault,
            },
            MockFilter {
                log: log.clone(),
                capacity: self.filter_capacity,
            },
            MockDoor {
                log: log.clone(),
                closed: self.door_closed,
            },
        );
        (washer, log)
    }
}
