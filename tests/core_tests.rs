use bijak::core::*;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn gst18() -> TaxRates {
    TaxRates::new().with(CGST, dec!(9)).with(SGST, dec!(9))
}

fn seller() -> Party {
    PartyBuilder::new("Sharma Traders")
        .gstin("27AAPFU0939F1ZV")
        .state_code("27")
        .address("12 MG Road, Pune")
        .build()
}

fn buyer() -> Party {
    PartyBuilder::new("Patel Stores")
        .state_code("27")
        .address("4 FC Road, Pune")
        .build()
}

// --- Three-line scenario ---

#[test]
fn three_line_grand_total_matches_line_totals() {
    let quantities = [2, 1, 5];
    let prices = [dec!(100), dec!(250), dec!(40)];
    let discounts = [dec!(0), dec!(10), dec!(0)];

    let items: Vec<LineItem> = (0..3)
        .map(|i| compute_line_item(quantities[i], prices[i], discounts[i], &gst18()).unwrap())
        .collect();

    let totals = aggregate(&items);
    let independent: Decimal = items.iter().map(|i| i.total_amount()).sum();

    assert_eq!(totals.grand_total, independent);
    assert_eq!(totals.subtotal, dec!(640));
    assert_eq!(totals.tax_for(CGST), dec!(57.6));
    assert_eq!(totals.tax_for(SGST), dec!(57.6));
    assert_eq!(totals.grand_total, dec!(755.2));
}

#[test]
fn line_identity_holds() {
    let item = compute_line_item(7, dec!(19.99), dec!(3.33), &gst18()).unwrap();
    assert_eq!(
        item.taxable_amount() + item.tax_amount(CGST) + item.tax_amount(SGST),
        item.total_amount()
    );
}

// --- Error taxonomy ---

#[test]
fn negative_discount_is_invalid_input() {
    let err = Calculator::gst()
        .compute(&LineItemInput::new(1, dec!(10)).discount(dec!(-1)).rates(gst18()))
        .unwrap_err();
    assert!(matches!(err, BijakError::InvalidInput(ref e) if e.field == "discount"));
}

#[test]
fn negative_quantity_is_invalid_input() {
    let err = Calculator::gst()
        .compute(&LineItemInput::new(-3, dec!(10)).rates(gst18()))
        .unwrap_err();
    assert!(matches!(err, BijakError::InvalidInput(ref e) if e.field == "quantity"));
}

#[test]
fn out_of_table_rate_is_validation_error() {
    let err = Calculator::gst()
        .compute(&LineItemInput::new(1, dec!(10)).rate(IGST, dec!(15)))
        .unwrap_err();
    match err {
        BijakError::Validation(e) => {
            assert_eq!(e.field, "rates");
            assert!(e.to_string().contains("allowed: 0, 3, 5, 12, 18, 28"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn error_messages_are_readable() {
    let err = compute_line_item(1, dec!(50), dec!(60), &gst18()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "discount: discount 60 exceeds quantity x unit price 50"
    );
}

// --- Documents ---

#[test]
fn full_invoice_lifecycle() {
    let mut seq = DocumentNumberSequence::new("INV/", 2024);
    let number = seq.next_number().unwrap();

    let calc = Calculator::gst();
    let mut doc = DocumentBuilder::new(&number, DocumentKind::TaxInvoice, date(2024, 11, 5))
        .due_date(date(2024, 12, 5))
        .seller(seller())
        .buyer(buyer())
        .place_of_supply("27")
        .note("Goods once sold will not be taken back")
        .add_line(
            LineItemInput::new(2, dec!(100))
                .description("Steel bucket")
                .hsn_code("7323")
                .unit("NOS")
                .rates(gst18()),
        )
        .add_line(
            LineItemInput::new(1, dec!(250))
                .description("Copper pot")
                .hsn_code("7418")
                .discount(dec!(10))
                .rates(gst18()),
        )
        .build(&calc)
        .unwrap();

    assert_eq!(doc.number, "INV/2024-25/001");
    assert_eq!(doc.status(), DocumentStatus::Draft);

    doc.push_line(
        &calc,
        &LineItemInput::new(5, dec!(40)).description("Ladle").rates(gst18()),
    )
    .unwrap();
    assert_eq!(doc.totals().grand_total, dec!(755.2));
    assert!(validate_arithmetic(&doc).is_empty());

    doc.finalize().unwrap();
    assert!(doc.push_line(&calc, &LineItemInput::new(1, dec!(1))).is_err());

    assert_eq!(format_amount(doc.totals().grand_total, DigitGrouping::Indian), "755.20");
    assert_eq!(doc.lines()[1].input().hsn_code.as_deref(), Some("7418"));
}

#[test]
fn large_invoice_presentation() {
    let calc = Calculator::gst();
    let doc = DocumentBuilder::new("INV/2024-25/099", DocumentKind::TaxInvoice, date(2025, 1, 10))
        .seller(seller())
        .buyer(buyer())
        .add_line(LineItemInput::new(1_000, dec!(1234.56)).rates(gst18()))
        .build(&calc)
        .unwrap();
    // 1,234,560 + 18%
    assert_eq!(doc.totals().grand_total, dec!(1456780.8));
    assert_eq!(
        format_amount(doc.totals().grand_total, DigitGrouping::Indian),
        "14,56,780.80"
    );
}

#[test]
fn rounding_happens_only_at_presentation() {
    // Each line's tax is 0.0045; rounding per line would give 0.00 x 1000.
    let rates = TaxRates::new().with(IGST, dec!(3));
    let items: Vec<LineItem> = (0..1000)
        .map(|_| compute_line_item(1, dec!(0.15), dec!(0), &rates).unwrap())
        .collect();
    let totals = aggregate(&items);
    assert_eq!(totals.tax_for(IGST), dec!(4.5));
    assert_eq!(round_money(totals.grand_total), dec!(154.50));
}

#[test]
fn purchase_order_with_custom_table() {
    let calc = Calculator::new(RateTable::new([dec!(0), dec!(5), dec!(40)]).unwrap());
    let doc = DocumentBuilder::new("PO/2024-25/003", DocumentKind::PurchaseOrder, date(2024, 8, 1))
        .seller(PartyBuilder::new("Supplier Co").build())
        .buyer(seller())
        .add_line(LineItemInput::new(10, dec!(12)).rate(IGST, dec!(40)))
        .build(&calc)
        .unwrap();
    assert_eq!(doc.totals().grand_total, dec!(168));
    assert_eq!(doc.kind.title(), "Purchase Order");
}

#[test]
fn shared_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RateTable>();
    assert_send_sync::<Calculator>();
    assert_send_sync::<LineItem>();
    assert_send_sync::<DocumentTotals>();
    assert_send_sync::<Document>();
}

#[test]
fn parallel_partial_totals_reduce_to_the_same_result() {
    let items: Vec<LineItem> = (1..=40)
        .map(|i| compute_line_item(i, dec!(12.5), dec!(0), &gst18()).unwrap())
        .collect();
    let partials: Vec<DocumentTotals> = std::thread::scope(|s| {
        let handles: Vec<_> = items.chunks(10).map(|c| s.spawn(move || aggregate(c))).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    let reduced = partials
        .iter()
        .fold(DocumentTotals::zero(), |acc, p| acc.combine(p));
    assert_eq!(reduced, aggregate(&items));
}
