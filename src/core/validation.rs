//! Explicit defensive re-validation of computed amounts.
//!
//! The aggregator trusts its inputs. These checks are a separate pass for
//! callers that load stored documents and want to confirm the stored
//! amounts are internally consistent.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::document::Document;
use super::error::ValidationError;
use super::types::{DocumentTotals, LineItem};

/// Re-derive a line item's amounts from its stored inputs.
/// Returns all mismatches found (not just the first).
pub fn verify_line_item(item: &LineItem) -> Vec<ValidationError> {
    verify_line_at(item, "line")
}

/// Validate document arithmetic: every line, then the totals against the lines.
pub fn validate_arithmetic(doc: &Document) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (i, line) in doc.lines().iter().enumerate() {
        errors.extend(verify_line_at(line, &format!("lines[{i}]")));
    }

    let totals = doc.totals();

    match checked_sum(doc.lines().iter().map(|l| l.taxable_amount())) {
        Some(expected) if totals.subtotal != expected => errors.push(ValidationError::new(
            "totals.subtotal",
            format!(
                "subtotal {} does not match sum of taxable amounts {}",
                totals.subtotal, expected
            ),
        )),
        Some(_) => {}
        None => errors.push(overflow("totals.subtotal")),
    }

    let mut expected_by_rate: BTreeMap<&str, Option<Decimal>> = BTreeMap::new();
    for line in doc.lines() {
        for (name, amount) in line.tax_amounts() {
            let entry = expected_by_rate
                .entry(name.as_str())
                .or_insert(Some(Decimal::ZERO));
            *entry = entry.and_then(|sum| sum.checked_add(*amount));
        }
    }
    let names = expected_by_rate
        .keys()
        .copied()
        .chain(totals.totals_by_rate.keys().map(String::as_str))
        .collect::<BTreeSet<_>>();
    for name in names {
        let field = format!("totals.totals_by_rate.{name}");
        let Some(expected) = expected_by_rate.get(name).copied().unwrap_or(Some(Decimal::ZERO))
        else {
            errors.push(overflow(&field));
            continue;
        };
        let stored = totals.tax_for(name);
        if stored != expected {
            errors.push(ValidationError::new(
                field,
                format!("{name} total {stored} does not match sum of line amounts {expected}"),
            ));
        }
    }

    let Some(rate_sum) = checked_sum(totals.totals_by_rate.values().copied()) else {
        errors.push(overflow("totals.total_tax"));
        return errors;
    };
    if totals.total_tax != rate_sum {
        errors.push(ValidationError::new(
            "totals.total_tax",
            format!(
                "total tax {} does not match sum of rate totals {}",
                totals.total_tax, rate_sum
            ),
        ));
    }

    match totals.subtotal.checked_add(rate_sum) {
        Some(expected) if totals.grand_total != expected => errors.push(ValidationError::new(
            "totals.grand_total",
            format!(
                "grand total {} does not match subtotal {} + tax {}",
                totals.grand_total, totals.subtotal, rate_sum
            ),
        )),
        Some(_) => {}
        None => errors.push(overflow("totals.grand_total")),
    }

    errors
}

/// Flag totals that carry more than 2 decimal places.
///
/// Running totals are allowed more precision; use this on values that are
/// meant to be presentation amounts (e.g. after [`round_money`](super::money::round_money)).
pub fn check_presentation(totals: &DocumentTotals) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    check_decimal_places(&totals.subtotal, "totals.subtotal", &mut errors);
    for (name, amount) in &totals.totals_by_rate {
        check_decimal_places(amount, &format!("totals.totals_by_rate.{name}"), &mut errors);
    }
    check_decimal_places(&totals.total_tax, "totals.total_tax", &mut errors);
    check_decimal_places(&totals.grand_total, "totals.grand_total", &mut errors);
    errors
}

fn checked_sum(amounts: impl Iterator<Item = Decimal>) -> Option<Decimal> {
    amounts.fold(Some(Decimal::ZERO), |acc, a| acc?.checked_add(a))
}

fn overflow(field: &str) -> ValidationError {
    ValidationError::new(field, "sum exceeds the representable decimal range")
}

fn verify_line_at(item: &LineItem, prefix: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let Some(expected_taxable) = Decimal::from(item.quantity())
        .checked_mul(item.unit_price())
        .and_then(|gross| gross.checked_sub(item.discount()))
    else {
        errors.push(ValidationError::new(
            format!("{prefix}.unit_price"),
            "quantity x unit price exceeds the representable decimal range",
        ));
        return errors;
    };
    if item.taxable_amount() != expected_taxable {
        errors.push(ValidationError::new(
            format!("{prefix}.taxable_amount"),
            format!(
                "taxable amount {} does not match quantity x unit price - discount {}",
                item.taxable_amount(),
                expected_taxable
            ),
        ));
    }

    for (name, pct) in item.rates().iter() {
        let stored = item.tax_amount(name);
        let expected = item
            .taxable_amount()
            .checked_mul(pct)
            .and_then(|v| v.checked_div(dec!(100)));
        let Some(expected) = expected else {
            errors.push(ValidationError::new(
                format!("{prefix}.tax_amounts.{name}"),
                "tax amount exceeds the representable decimal range",
            ));
            continue;
        };
        if stored != expected {
            errors.push(ValidationError::new(
                format!("{prefix}.tax_amounts.{name}"),
                format!("{name} amount {stored} does not match {pct}% of taxable amount ({expected})"),
            ));
        }
    }
    for name in item.tax_amounts().keys() {
        if item.rates().get(name).is_none() {
            errors.push(ValidationError::new(
                format!("{prefix}.tax_amounts.{name}"),
                format!("{name} amount present without a matching rate"),
            ));
        }
    }

    let expected_total = item
        .tax_amounts()
        .values()
        .try_fold(item.taxable_amount(), |acc, tax| acc.checked_add(*tax));
    if expected_total != Some(item.total_amount()) {
        errors.push(ValidationError::new(
            format!("{prefix}.total_amount"),
            format!(
                "total {} does not match taxable amount + tax {}",
                item.total_amount(),
                expected_total.map_or_else(|| "(out of range)".to_string(), |t| t.to_string())
            ),
        ));
    }

    errors
}

fn check_decimal_places(value: &Decimal, field: &str, errors: &mut Vec<ValidationError>) {
    let rounded = value.round_dp(2);
    if *value != rounded {
        errors.push(ValidationError::new(
            field,
            format!("amount {} has more than 2 decimal places", value),
        ));
    }
}
