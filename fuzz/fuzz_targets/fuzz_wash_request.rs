//! Fuzz target: `WashRequest::from_json` → `DishWasher::start`
//!
//! Feeds arbitrary bytes as a request body.  Decoding must never panic,
//! and any request that validates must produce a wash result on
//! simulated hardware without panicking.
//!
//! cargo fuzz run fuzz_wash_request

#![no_main]

use dishwasher::DishWasher;
use dishwasher::adapters::sim::{SimDirtFilter, SimDoor, SimEngine, SimWaterPump};
use dishwasher::app::request::WashRequest;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(request) = WashRequest::from_json(data) else {
        return;
    };
    let Ok(cfg) = request.into_configuration() else {
        return;
    };

    let mut washer = DishWasher::new(
        SimWaterPump::new(),
        SimEngine::new(),
        SimDirtFilter::new(100.0),
        SimDoor::new(true),
    );
    let result = washer.start(&cfg);
    assert_eq!(result.run_program(), Some(cfg.program()));
});
