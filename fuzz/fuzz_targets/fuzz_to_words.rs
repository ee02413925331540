#![no_main]

use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

fuzz_target!(|data: (i64, u32)| {
    let (mantissa, scale) = data;
    let amount = Decimal::new(mantissa, scale % 29);
    let _ = bijak::words::to_words(amount);
});
