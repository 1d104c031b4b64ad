//! End-to-end: JSON wash request → configuration → wash on simulated hardware.

use dishwasher::adapters::sim::{SimDirtFilter, SimDoor, SimEngine, SimWaterPump};
use dishwasher::app::request::WashRequest;
use dishwasher::{DishWasher, Error, Status, WashingProgram};

fn sim_washer() -> DishWasher<SimWaterPump, SimEngine, SimDirtFilter, SimDoor> {
    DishWasher::new(
        SimWaterPump::new(),
        SimEngine::new(),
        SimDirtFilter::new(75.0),
        SimDoor::new(true),
    )
}

#[test]
fn panel_request_runs_requested_program() {
    let req = WashRequest::from_json(br#"{"program":"night","fill_level":"full"}"#).unwrap();
    let cfg = req.into_configuration().unwrap();

    let mut washer = sim_washer();
    let result = washer.start(&cfg);

    assert_eq!(result.status(), Status::Success);
    assert_eq!(result.run_program(), Some(WashingProgram::Night));
}

#[test]
fn incomplete_request_never_reaches_the_machine() {
    let req = WashRequest::from_json(br#"{"program":"eco"}"#).unwrap();
    let mut washer = sim_washer();

    let outcome = req
        .into_configuration()
        .and_then(|cfg| washer.try_start(Some(&cfg)));

    assert_eq!(outcome, Err(Error::InvalidArgument("fill level")));
    let (pump, engine, filter, door) = washer.into_parts();
    assert_eq!(door.queries(), 0);
    assert_eq!(filter.queries(), 0);
    assert_eq!(pump.pours(), 0);
    assert_eq!(engine.runs(), 0);
}

#[test]
fn result_serialises_for_reporting() {
    let req = WashRequest::from_json(br#"{"program":"rinse","fill_level":"half"}"#).unwrap();
    let mut washer = sim_washer();
    let result = washer.start(&req.into_configuration().unwrap());

    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(
        json,
        r#"{"status":"SUCCESS","run_program":"rinse","run_minutes":15}"#
    );
}
