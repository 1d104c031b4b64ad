//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the wash core against
//! mock collaborators.  All tests run on the host with no real hardware.

mod mock_hw;
mod request_flow_tests;
