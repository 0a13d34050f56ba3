//! Money calculation for order totals
//!
//! All arithmetic is carried out in integer cents. Rate computations
//! (discount percentages, tax) go through `Decimal` and are rounded
//! half-up (`MidpointAwayFromZero`), then results convert back to `f64`
//! currency values for storage/serialization. The rounding rule is
//! applied uniformly: half-up on positive cent values.

use std::collections::HashMap;

use rust_decimal::prelude::*;
use shared::models::{Modifier, ModifierPolarity, OrderTotals, TaxConfig};
use shared::order::{DiscountSpec, DraftLineItem, ModifierSelection, SelectionMode};

use super::error::{OrderError, OrderResult};

/// Monetary amounts in integer cents
pub type Cents = i64;

/// Maximum allowed quantity per line
const MAX_QUANTITY: i32 = 9_999;

/// Convert a currency amount to integer cents, rounding half-up
pub fn to_cents(value: f64) -> Cents {
    (Decimal::from_f64(value).unwrap_or_default() * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or_default()
}

/// Convert integer cents back to a two-decimal currency value
pub fn to_currency(cents: Cents) -> f64 {
    cents as f64 / 100.0
}

/// Round a decimal cent amount to whole cents, half-up
fn round_cents(value: Decimal) -> Cents {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or_default()
}

/// Signed cent delta a modifier selection contributes to a line's unit price
///
/// Zero for `Default`; full magnitude for `Added`/`Removed`; half magnitude
/// for `Light`. The sign comes from the modifier's stored polarity, never
/// from the mode.
pub fn modifier_delta(modifier: &Modifier, mode: SelectionMode) -> Cents {
    let magnitude = to_cents(modifier.price);
    let applied = match mode {
        SelectionMode::Default => return 0,
        SelectionMode::Added | SelectionMode::Removed => magnitude,
        SelectionMode::Light => round_cents(Decimal::from(magnitude) / Decimal::TWO),
    };
    match modifier.polarity {
        ModifierPolarity::Add => applied,
        ModifierPolarity::Remove => -applied,
    }
}

fn resolve<'a>(
    modifiers: &'a HashMap<i64, Modifier>,
    selection: &ModifierSelection,
) -> OrderResult<&'a Modifier> {
    modifiers.get(&selection.modifier_id).ok_or_else(|| {
        OrderError::InvalidLineItem(format!("unknown modifier {}", selection.modifier_id))
    })
}

/// Per-unit price of a draft line in cents: base price plus modifier deltas
///
/// May go negative (a remove modifier larger than the base price); the
/// clamp happens at line-total level.
pub fn unit_price(item: &DraftLineItem, modifiers: &HashMap<i64, Modifier>) -> OrderResult<Cents> {
    let mut unit = to_cents(item.base_price);
    for selection in &item.modifiers {
        unit += modifier_delta(resolve(modifiers, selection)?, selection.mode);
    }
    Ok(unit)
}

/// Line total in cents: unit price × quantity, floored at zero
pub fn line_total(item: &DraftLineItem, modifiers: &HashMap<i64, Modifier>) -> OrderResult<Cents> {
    if item.quantity < 1 {
        return Err(OrderError::InvalidQuantity(item.quantity));
    }
    if item.quantity > MAX_QUANTITY {
        return Err(OrderError::InvalidQuantity(item.quantity));
    }
    let unit = unit_price(item, modifiers)?;
    Ok((unit * item.quantity as i64).max(0))
}

/// Sum of line totals in cents, before discount and tax
pub fn raw_subtotal(
    items: &[DraftLineItem],
    modifiers: &HashMap<i64, Modifier>,
) -> OrderResult<Cents> {
    let mut subtotal: Cents = 0;
    for item in items {
        subtotal += line_total(item, modifiers)?;
    }
    Ok(subtotal)
}

/// Discount in cents for the given spec, clamped to `[0, subtotal]`
pub fn discount_cents(discount: &DiscountSpec, subtotal: Cents) -> Cents {
    let raw = match discount {
        DiscountSpec::None => 0,
        DiscountSpec::Percent { value } => round_cents(
            Decimal::from(subtotal) * Decimal::from_f64(*value).unwrap_or_default()
                / Decimal::ONE_HUNDRED,
        ),
        DiscountSpec::Flat { amount } => to_cents(*amount),
    };
    raw.clamp(0, subtotal)
}

/// Compute frozen order totals from draft lines
///
/// Tax-exclusive (the counter-sales default): tax is added on top of the
/// discounted subtotal. Tax-inclusive: line prices already contain tax, so
/// the discounted subtotal is the gross total and is decomposed into an
/// ex-tax subtotal and a tax component. Either way
/// `subtotal + tax == total` holds exactly in cents.
pub fn order_totals(
    items: &[DraftLineItem],
    modifiers: &HashMap<i64, Modifier>,
    tax: &TaxConfig,
    discount: &DiscountSpec,
) -> OrderResult<OrderTotals> {
    if !tax.gst_rate_percent.is_finite() || tax.gst_rate_percent < 0.0 {
        return Err(OrderError::InvalidConfiguration(format!(
            "gst_rate_percent must be non-negative, got {}",
            tax.gst_rate_percent
        )));
    }

    let subtotal = raw_subtotal(items, modifiers)?;
    let discounted = subtotal - discount_cents(discount, subtotal);

    let rate = Decimal::from_f64(tax.gst_rate_percent).unwrap_or_default() / Decimal::ONE_HUNDRED;

    let (subtotal_cents, tax_cents, total_cents) = if tax.tax_free || tax.gst_rate_percent <= 0.0 {
        (discounted, 0, discounted)
    } else if !tax.prices_include_tax {
        let tax_cents = round_cents(Decimal::from(discounted) * rate);
        (discounted, tax_cents, discounted + tax_cents)
    } else {
        let ex_tax = round_cents(Decimal::from(discounted) / (Decimal::ONE + rate));
        (ex_tax, discounted - ex_tax, discounted)
    };

    Ok(OrderTotals {
        subtotal: to_currency(subtotal_cents),
        tax: to_currency(tax_cents),
        total: to_currency(total_cents),
    })
}
