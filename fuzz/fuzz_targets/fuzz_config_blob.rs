//! Fuzz target: `WasherConfig::decode`
//!
//! Arbitrary bytes must either decode to a config that passes validation
//! or be rejected; never panic.
//!
//! cargo fuzz run fuzz_config_blob

#![no_main]

use dishwasher::config::WasherConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(config) = WasherConfig::decode(data) {
        assert!(config.validate().is_ok(), "decode accepted an invalid config");
        let reencoded = config.encode().expect("valid config must encode");
        assert_eq!(WasherConfig::decode(&reencoded), Ok(config));
    }
});
