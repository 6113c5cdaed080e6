#![no_main]

use katas::invoke::{invoke, Operation};
use libfuzzer_sys::fuzz_target;

// Rejection sampling is quadratic in the requested length.
const MAX_FUZZ_LENGTH: u64 = 4096;

fuzz_target!(|data: &[u8]| {
    let Ok(args) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let slow_subset = args
        .get("length")
        .and_then(|n| n.as_u64())
        .is_some_and(|n| n > MAX_FUZZ_LENGTH);

    for op in Operation::ALL {
        if op == Operation::RandomSubset && slow_subset {
            continue;
        }
        let _ = invoke(op, &args);
    }
});
