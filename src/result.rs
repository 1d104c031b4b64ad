//! Terminal outcome of a wash attempt.

use core::fmt;

use serde::Serialize;

use crate::program::WashingProgram;

/// Exactly one of these is produced per [`DishWasher::start`](crate::app::service::DishWasher::start).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Success,
    DoorOpen,
    ErrorFilter,
    ErrorPump,
    ErrorProgram,
}

impl Status {
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::DoorOpen => write!(f, "door open"),
            Self::ErrorFilter => write!(f, "dirt filter needs cleaning"),
            Self::ErrorPump => write!(f, "water pump failure"),
            Self::ErrorProgram => write!(f, "wash program failure"),
        }
    }
}

/// Result handed back to the caller.  Built only by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WashResult {
    status: Status,
    run_program: Option<WashingProgram>,
    run_minutes: u32,
}

impl WashResult {
    pub(crate) fn failed(status: Status) -> Self {
        debug_assert!(!status.is_success());
        Self {
            status,
            run_program: None,
            run_minutes: 0,
        }
    }

    pub(crate) fn completed(program: WashingProgram) -> Self {
        Self {
            status: Status::Success,
            run_program: Some(program),
            run_minutes: program.time_in_minutes(),
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// The program that ran; `None` unless the wash succeeded.
    pub fn run_program(&self) -> Option<WashingProgram> {
        self.run_program
    }

    /// Nominal duration of the program that ran, 0 on failure.
    pub fn run_minutes(&self) -> u32 {
        self.run_minutes
    }
}
