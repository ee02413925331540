#![no_main]

use bijak::core::*;
use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

fuzz_target!(|data: (i64, i64, u32, i64, u32, u16)| {
    let (quantity, price, price_scale, discount, discount_scale, rate) = data;
    let price = Decimal::new(price, price_scale % 29);
    let discount = Decimal::new(discount, discount_scale % 29);
    let rates = TaxRates::new().with(IGST, Decimal::from(rate % 120));

    // Errors are fine, panics are bugs. Accepted lines must add up.
    if let Ok(item) = compute_line_item(quantity, price, discount, &rates) {
        assert!(verify_line_item(&item).is_empty());
    }
});
