//! Engine step planning.
//!
//! The engine receives the wash as an ordered slice of [`ProgramStep`]s.
//! [`plan`] derives that sequence from a [`ProgramConfiguration`]:
//!
//! ```text
//!  Eco        :            [Tablet] MainWash(50) Rinse       Dry
//!  Intensive  : Prewash    [Tablet] MainWash(70) Rinse Rinse Dry
//!  Night      :            [Tablet] MainWash(45) Rinse       Dry
//!  Rinse      :                                  Rinse
//! ```
//!
//! `Tablet` is present only when tablets are used and the program has a
//! main wash.

use crate::program::{ProgramConfiguration, WashingProgram};

/// Upper bound on planned steps; sized for the longest program plus tablet.
pub const MAX_PROGRAM_STEPS: usize = 8;

/// Fixed-capacity step sequence handed to the engine.
pub type ProgramSteps = heapless::Vec<ProgramStep, MAX_PROGRAM_STEPS>;

/// One engine-level action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramStep {
    /// Cold pre-rinse to loosen heavy soil.
    Prewash,
    /// Open the detergent compartment.
    DispenseTablet,
    /// Heated wash at the given water temperature.
    MainWash { temperature_c: u8 },
    Rinse,
    Dry,
}

/// Build the step sequence for `config`.
pub fn plan(config: &ProgramConfiguration) -> ProgramSteps {
    let program = config.program();
    let mut steps = ProgramSteps::new();

    if program == WashingProgram::Intensive {
        push(&mut steps, ProgramStep::Prewash);
    }

    if let Some(temperature_c) = program.main_wash_temperature_c() {
        if config.tablets_used() {
            push(&mut steps, ProgramStep::DispenseTablet);
        }
        push(&mut steps, ProgramStep::MainWash { temperature_c });
    }

    push(&mut steps, ProgramStep::Rinse);
    if program == WashingProgram::Intensive {
        push(&mut steps, ProgramStep::Rinse);
    }

    if program != WashingProgram::Rinse {
        push(&mut steps, ProgramStep::Dry);
    }

    steps
}

fn push(steps: &mut ProgramSteps, step: ProgramStep) {
    let pushed = steps.push(step).is_ok();
    debug_assert!(pushed, "step plan exceeds MAX_PROGRAM_STEPS");
}
