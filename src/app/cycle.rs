//! Wash-cycle phases.
//!
//! ```text
//!  INITIAL ──[door closed]──▶ DOOR_CHECKED ──[filter ok]──▶ FILTER_CHECKED
//!     │                             │                             │
//!  [open]                       [clogged]                     [pour ok]
//!     ▼                             ▼                             ▼
//!  FINISHED(DoorOpen)      FINISHED(ErrorFilter)               FILLED
//!                                                                 │
//!                          FINISHED(ErrorPump) ◀──[pour err]──────┤
//!                                                            [run ok]
//!                          FINISHED(ErrorProgram) ◀──[run err]──  ▼
//!                                                                RUN
//!                                                                 │
//!                                                      FINISHED(Success)
//! ```
//!
//! Every `Finished` phase is terminal.  The only path to `Success` passes
//! through all four checks in order.

use crate::result::Status;

/// Position of a wash attempt in the check/act sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    Initial,
    DoorChecked,
    FilterChecked,
    Filled,
    Run,
    Finished(Status),
}

impl CyclePhase {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Finished(_))
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Initial => "Initial",
            Self::DoorChecked => "DoorChecked",
            Self::FilterChecked => "FilterChecked",
            Self::Filled => "Filled",
            Self::Run => "Run",
            Self::Finished(_) => "Finished",
        }
    }

    /// Phase reached when the current phase's step succeeds.
    pub const fn on_success(self) -> Self {
        match self {
            Self::Initial => Self::DoorChecked,
            Self::DoorChecked => Self::FilterChecked,
            Self::FilterChecked => Self::Filled,
            Self::Filled => Self::Run,
            Self::Run => Self::Finished(Status::Success),
            Self::Finished(s) => Self::Finished(s),
        }
    }

    /// Terminal phase reached when the current phase's step fails.
    pub const fn on_failure(self) -> Self {
        match self {
            Self::Initial => Self::Finished(Status::DoorOpen),
            Self::DoorChecked => Self::Finished(Status::ErrorFilter),
            Self::FilterChecked => Self::Finished(Status::ErrorPump),
            Self::Filled => Self::Finished(Status::ErrorProgram),
            // Nothing left to fail once the engine has returned.
            Self::Run => Self::Finished(Status::Success),
            Self::Finished(s) => Self::Finished(s),
        }
    }
}
