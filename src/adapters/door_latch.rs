//! Door latch switch on a GPIO input.
//!
//! A reed or micro switch closes when the door latches.  Boards differ in
//! wiring, so the level that means "latched" is configurable.
//!
//! ## Safety contract
//!
//! A failed pin read reports the door as open.  The wash must never start
//! on an unknown door state.

use embedded_hal::digital::InputPin;
use log::warn;

use crate::app::ports::Door;

/// Electrical level the switch presents when the door is latched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatchLevel {
    /// Switch pulls the line high (pull-down input).
    ActiveHigh,
    /// Switch pulls the line to ground (pull-up input).
    ActiveLow,
}

pub struct DoorLatch<P> {
    pin: P,
    level: LatchLevel,
}

impl<P: InputPin> DoorLatch<P> {
    pub fn new(pin: P, level: LatchLevel) -> Self {
        Self { pin, level }
    }

    /// Give the pin back (e.g. to reconfigure it).
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: InputPin> Door for DoorLatch<P> {
    fn closed(&mut self) -> bool {
        let read = match self.level {
            LatchLevel::ActiveHigh => self.pin.is_high(),
            LatchLevel::ActiveLow => self.pin.is_low(),
        };
        match read {
            Ok(latched) => latched,
            Err(e) => {
                warn!("Door latch read failed ({:?}), treating door as open", e);
                false
            }
        }
    }
}
