#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(doc) = bijak::json::from_json(s) {
            // Tampered totals are reported, never a panic.
            let _ = bijak::core::validate_arithmetic(&doc);
        }
    }
});
