//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter      | Implements          | Connects to                 |
//! |--------------|---------------------|-----------------------------|
//! | `door_latch` | Door                | GPIO latch switch (e-h 1.0) |
//! | `sim`        | Door, DirtFilter    | In-memory state             |
//! |              | WaterPump, Engine   |                             |

pub mod door_latch;
pub mod sim;
