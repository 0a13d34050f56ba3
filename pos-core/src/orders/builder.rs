//! Draft → frozen order builder
//!
//! Totals and kitchen timing are computed exactly once here and embedded
//! in the returned record; later catalog or settings changes never alter
//! an existing order's totals or due timestamp.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use shared::models::settings::FALLBACK_PREP_MINUTES;
use shared::models::{
    AppliedModifier, KitchenSettings, KitchenStatus, KitchenTiming, Modifier, Order, OrderItem,
    OrderStatus, PosSettings,
};
use shared::order::{DraftLineItem, OrderDraft, SelectionMode};

use super::error::{OrderError, OrderResult};
use super::kitchen::{self, PrepResolution};
use super::money;

/// Externally assigned identity for a new order
///
/// Order/ticket numbers come from a counter the surrounding system
/// serializes; the creation timestamp is pinned by the caller so the
/// whole build is deterministic.
#[derive(Debug, Clone)]
pub struct BuildContext {
    pub order_number: String,
    pub ticket_number: Option<u32>,
    pub created_at: DateTime<Utc>,
}

/// Freeze a draft into a persisted order record
///
/// Fails with no partial result when a line is invalid. A broken kitchen
/// configuration does NOT fail the build: timing degrades to the safe
/// default so a settings fault can never block taking payment.
pub fn create_order_from_draft(
    draft: &OrderDraft,
    modifiers: &HashMap<i64, Modifier>,
    settings: &PosSettings,
    resolution: PrepResolution,
    context: BuildContext,
) -> OrderResult<Order> {
    let mut tax = settings.tax_config();
    tax.tax_free = draft.tax_free;

    let totals = money::order_totals(&draft.items, modifiers, &tax, &draft.discount)?;
    let subtotal = money::raw_subtotal(&draft.items, modifiers)?;
    let discount = money::to_currency(money::discount_cents(&draft.discount, subtotal));

    let kitchen_settings = settings
        .kitchen
        .clone()
        .unwrap_or_else(KitchenSettings::fallback);
    let timing = match kitchen::compute_timing(
        &draft.items,
        &kitchen_settings,
        settings.kitchen_prep_minutes,
        resolution,
        context.created_at,
    ) {
        Ok(timing) => timing,
        Err(err) => {
            tracing::warn!(error = %err, "kitchen settings invalid, using fallback prep time");
            KitchenTiming {
                estimated_prep_minutes: FALLBACK_PREP_MINUTES,
                kitchen_due_at: kitchen::due_at(context.created_at, FALLBACK_PREP_MINUTES),
            }
        }
    };

    let items = draft
        .items
        .iter()
        .map(|item| freeze_item(item, modifiers))
        .collect::<OrderResult<Vec<_>>>()?;

    Ok(Order {
        order_number: context.order_number,
        ticket_number: context.ticket_number,
        created_at: context.created_at,
        status: OrderStatus::Open,
        kitchen_status: KitchenStatus::Open,
        kitchen_completed_at: None,
        items,
        totals,
        tax_free: draft.tax_free,
        discount,
        timing,
        note: draft.note.clone(),
    })
}

/// Freeze one draft line: resolve its modifier selections into catalog
/// snapshots and fix the line total
fn freeze_item(item: &DraftLineItem, modifiers: &HashMap<i64, Modifier>) -> OrderResult<OrderItem> {
    let line_total = money::line_total(item, modifiers)?;

    let applied = item
        .modifiers
        .iter()
        .filter(|selection| selection.mode != SelectionMode::Default)
        .map(|selection| {
            let modifier = modifiers.get(&selection.modifier_id).ok_or_else(|| {
                OrderError::InvalidLineItem(format!("unknown modifier {}", selection.modifier_id))
            })?;
            Ok(AppliedModifier {
                modifier_id: modifier.id,
                name: modifier.name.clone(),
                price: modifier.price,
                polarity: modifier.polarity,
                mode: selection.mode,
            })
        })
        .collect::<OrderResult<Vec<_>>>()?;

    Ok(OrderItem {
        product_id: item.product_id,
        name: item.name.clone(),
        base_price: item.base_price,
        quantity: item.quantity,
        category_id: item.category_id,
        modifiers: applied,
        line_total: money::to_currency(line_total),
    })
}
