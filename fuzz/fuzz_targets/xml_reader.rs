#![no_main]

use libfuzzer_sys::fuzz_target;
use timing_report::{xml_input::parse_aggregates, Measured};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Never panics; accepted records are always well-formed
        if let Ok(aggregates) = parse_aggregates(input) {
            for aggregate in &aggregates {
                assert!(!aggregate.name().is_empty());
                assert!(aggregate.total() >= 0.0);
            }
        }
    }
});
