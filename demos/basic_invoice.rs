use bijak::core::*;
use bijak::gst::{SupplyType, check_exclusivity, split_rate, validate_gstin};
use bijak::words::to_words;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn main() {
    let issue_date = NaiveDate::from_ymd_opt(2024, 11, 5).unwrap();
    let mut numbers = DocumentNumberSequence::new("INV/", 2024);
    numbers.auto_advance(issue_date);

    let seller = PartyBuilder::new("Sharma Traders")
        .gstin("27AAPFU0939F1ZV")
        .state_code("27")
        .address("12 MG Road, Pune")
        .build();
    let buyer = PartyBuilder::new("Bengaluru Retail")
        .gstin("29AAGCB7383J1Z4")
        .state_code("29")
        .build();
    for party in [&seller, &buyer] {
        if let Some(gstin) = &party.gstin {
            validate_gstin(gstin).expect("GSTIN should be valid");
        }
    }

    let supply = SupplyType::determine("27", "29");
    let rates = split_rate(dec!(18), supply);
    check_exclusivity(&rates).expect("rates should follow GST rules");

    let mut invoice = DocumentBuilder::new(
        numbers.next_number().expect("sequence not exhausted"),
        DocumentKind::TaxInvoice,
        issue_date,
    )
    .due_date(NaiveDate::from_ymd_opt(2024, 12, 5).unwrap())
    .seller(seller)
    .buyer(buyer)
    .place_of_supply("29")
    .add_line(
        LineItemInput::new(2, dec!(100))
            .description("Steel bucket")
            .hsn_code("7323")
            .rates(rates.clone()),
    )
    .add_line(
        LineItemInput::new(1, dec!(250))
            .description("Copper pot")
            .hsn_code("7418")
            .discount(dec!(10))
            .rates(rates.clone()),
    )
    .add_line(
        LineItemInput::new(5, dec!(40))
            .description("Ladle")
            .hsn_code("8215")
            .rates(rates),
    )
    .note("Goods once sold will not be taken back")
    .build(&Calculator::gst())
    .expect("invoice should be valid");
    invoice.finalize().expect("draft can be finalized");

    let totals = invoice.totals();
    let money = |amount| format_amount(amount, DigitGrouping::Indian);
    println!("{}: {}", invoice.kind.title(), invoice.number);
    println!("Date:    {}", invoice.issue_date);
    println!("Seller:  {}", invoice.seller.name);
    println!("Buyer:   {}", invoice.buyer.name);
    println!("---");
    for line in invoice.lines() {
        println!(
            "  {} x {} @ {} = {}",
            line.quantity(),
            line.input().description.as_deref().unwrap_or("-"),
            line.unit_price(),
            money(line.total_amount())
        );
    }
    println!("---");
    println!("Taxable: {}", money(totals.subtotal));
    for (name, amount) in &totals.totals_by_rate {
        println!("{name:<8} {}", money(*amount));
    }
    println!("Total:   {}", money(totals.grand_total));
    println!(
        "In words: {} Only",
        to_words(round_money(totals.grand_total)).expect("total is not negative")
    );
}
