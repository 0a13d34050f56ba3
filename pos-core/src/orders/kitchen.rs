//! Kitchen timing engine
//!
//! Resolves prep-time estimates from configuration, freezes a due
//! timestamp at order creation, and evaluates countdown/auto-complete
//! state against the current time.
//!
//! The estimate resolves from the FIRST line's category, matching the
//! behavior the kitchen display was built against. Mixed-category orders
//! undercount under this policy; [`PrepResolution::MaxAcrossItems`] is
//! the correctness-minded alternative for deployments that want it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use shared::models::{KitchenSettings, KitchenStatus, KitchenTiming, Order, OrderStatus};
use shared::models::settings::{MAX_PREP_MINUTES, MIN_PREP_MINUTES};
use shared::order::DraftLineItem;

use super::error::{OrderError, OrderResult};

/// Grace period past the estimate before a ticket auto-completes
pub const AUTO_COMPLETE_GRACE_SECONDS: i64 = 30;
/// Hard ceiling: no ticket stays in the active queue longer than this
pub const FORCE_CLEAR_SECONDS: i64 = 7_200;
/// Queue presentation: hide orders older than this
pub const STALE_ORDER_SECONDS: i64 = 12 * 3_600;
/// Queue presentation: hide orders whose due time is this far past
pub const OVERDUE_HIDE_SECONDS: i64 = 2 * 3_600;

/// How the per-order estimate resolves from item categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrepResolution {
    /// First line's category only (compatibility default)
    #[default]
    FirstItem,
    /// Maximum per-item minutes across all lines
    MaxAcrossItems,
}

/// Resolve the estimated prep minutes for a set of draft lines
///
/// A category override is used only when its minutes are positive;
/// otherwise the default applies. An empty order gets the default.
pub fn estimate_minutes(
    items: &[DraftLineItem],
    settings: &KitchenSettings,
    resolution: PrepResolution,
) -> OrderResult<u32> {
    if settings.default_minutes == 0 {
        return Err(OrderError::InvalidConfiguration(
            "kitchen default_minutes must be positive".to_string(),
        ));
    }

    let item_minutes = |item: &DraftLineItem| {
        settings
            .category_minutes(item.category_id)
            .filter(|minutes| *minutes > 0)
            .unwrap_or(settings.default_minutes)
    };

    let minutes = match resolution {
        PrepResolution::FirstItem => items
            .first()
            .map(item_minutes)
            .unwrap_or(settings.default_minutes),
        PrepResolution::MaxAcrossItems => items
            .iter()
            .map(item_minutes)
            .max()
            .unwrap_or(settings.default_minutes),
    };

    Ok(minutes)
}

/// Clamp the global prep-minutes knob to its operational bounds
pub fn clamp_prep_minutes(minutes: u32) -> u32 {
    minutes.clamp(MIN_PREP_MINUTES, MAX_PREP_MINUTES)
}

/// Due timestamp: creation time plus the estimate
pub fn due_at(created_at: DateTime<Utc>, minutes: u32) -> DateTime<Utc> {
    created_at + Duration::minutes(minutes as i64)
}

/// Compute the timing to freeze into a new order
///
/// The clamped global knob, when present, drives the due timestamp; the
/// per-category estimate is kept as informational metadata. Callers
/// invoke this exactly once at order creation and persist the result;
/// later settings changes never move an existing order's due timestamp.
pub fn compute_timing(
    items: &[DraftLineItem],
    settings: &KitchenSettings,
    global_prep_minutes: Option<u32>,
    resolution: PrepResolution,
    created_at: DateTime<Utc>,
) -> OrderResult<KitchenTiming> {
    let estimated = estimate_minutes(items, settings, resolution)?;
    let driving = global_prep_minutes
        .map(clamp_prep_minutes)
        .unwrap_or(estimated);

    Ok(KitchenTiming {
        estimated_prep_minutes: estimated,
        kitchen_due_at: due_at(created_at, driving),
    })
}

/// Result of evaluating a ticket against the clock
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct KitchenEval {
    /// Seconds until due, floored at zero
    pub seconds_remaining: i64,
    pub is_overdue: bool,
    pub should_auto_complete: bool,
}

/// Evaluate countdown and auto-complete state for a ticket
///
/// Idempotent and deterministic for a given `(order, now)`; repeated
/// uncoordinated polling produces at most a redundant completion write,
/// never an incorrect one. `should_auto_complete` is monotone in `now`.
/// Completed tickets are terminal and evaluate to the inert state.
pub fn evaluate(order: &Order, now: DateTime<Utc>) -> KitchenEval {
    if order.kitchen_status == KitchenStatus::Done || order.kitchen_completed_at.is_some() {
        return KitchenEval {
            seconds_remaining: 0,
            is_overdue: false,
            should_auto_complete: false,
        };
    }

    let due = order.timing.kitchen_due_at;
    let diff_seconds = round_to_seconds(due - now);
    let is_overdue = diff_seconds < 0;
    let seconds_remaining = diff_seconds.max(0);

    let elapsed_seconds = (now - order.created_at).num_seconds();
    // The due timestamp is the authoritative estimate driver, so the grace
    // window is measured from it rather than from the raw estimate field.
    let estimate_seconds = (due - order.created_at).num_seconds();
    let should_auto_complete = elapsed_seconds >= estimate_seconds + AUTO_COMPLETE_GRACE_SECONDS
        || elapsed_seconds >= FORCE_CLEAR_SECONDS;

    KitchenEval {
        seconds_remaining,
        is_overdue,
        should_auto_complete,
    }
}

/// Queue presentation filter for the kitchen display feed
///
/// Layered on top of [`evaluate`]: a ticket disappears from the open
/// queue once the order is closed, stale, or long past due, regardless of
/// its engine status.
pub fn is_visible_in_queue(order: &Order, now: DateTime<Utc>) -> bool {
    if order.kitchen_status == KitchenStatus::Done || order.kitchen_completed_at.is_some() {
        return false;
    }
    if matches!(
        order.status,
        OrderStatus::Completed | OrderStatus::Cancelled | OrderStatus::Refunded
    ) {
        return false;
    }
    if (now - order.created_at).num_seconds() > STALE_ORDER_SECONDS {
        return false;
    }
    (now - order.timing.kitchen_due_at).num_seconds() <= OVERDUE_HIDE_SECONDS
}

/// Sort the open queue by due time, then ticket number
pub fn sort_queue(orders: &mut [Order]) {
    orders.sort_by(|a, b| {
        a.timing
            .kitchen_due_at
            .cmp(&b.timing.kitchen_due_at)
            .then_with(|| {
                a.ticket_number
                    .unwrap_or(u32::MAX)
                    .cmp(&b.ticket_number.unwrap_or(u32::MAX))
            })
    });
}

/// `round((due − now) / 1000)` in seconds, matching the display countdown
fn round_to_seconds(delta: Duration) -> i64 {
    (delta.num_milliseconds() + 500).div_euclid(1_000)
}
