//! # Delivery Promise
//!
//! Display strings for a zone's delivery estimate and fee.

use shared_types::ZoneInfo;

/// Default width of the delivery window in minutes.
pub const DEFAULT_WINDOW_MINUTES: u32 = 60;

/// Bounds at or above this many minutes are shown in hours.
const HOURS_FROM_MINUTES: u32 = 120;

/// `"30 min - 90 min"` for a 30 minute estimate and the default window.
pub fn format_delivery_time(minutes: u32) -> String {
    format_delivery_window(minutes, DEFAULT_WINDOW_MINUTES)
}

/// Delivery window from `minutes` to `minutes + window`.
pub fn format_delivery_window(minutes: u32, window: u32) -> String {
    let upper = minutes.saturating_add(window);
    format!("{} - {}", format_bound(minutes), format_bound(upper))
}

fn format_bound(minutes: u32) -> String {
    if minutes < HOURS_FROM_MINUTES {
        return format!("{} min", minutes);
    }
    // Tenths of an hour, rounded half up.
    let tenths = (u64::from(minutes) * 10 + 30) / 60;
    if tenths % 10 == 0 {
        format!("{} hr", tenths / 10)
    } else {
        format!("{}.{} hr", tenths / 10, tenths % 10)
    }
}

/// `"FREE"` when the zone charges nothing or the subtotal reaches the
/// free-delivery threshold, otherwise the fee as `"$3.99"`.
pub fn format_delivery_fee(zone: &ZoneInfo, subtotal: Option<f64>) -> String {
    let free_by_subtotal = subtotal.is_some_and(|s| qualifies_for_free_delivery(zone, s));
    if zone.delivery_fee <= 0.0 || free_by_subtotal {
        "FREE".to_string()
    } else {
        format!("${:.2}", zone.delivery_fee)
    }
}

/// Amount left to add before delivery is free.
///
/// `None` when the zone has no free-delivery offer, `Some(0.0)` once reached.
pub fn amount_until_free_delivery(zone: &ZoneInfo, subtotal: f64) -> Option<f64> {
    if zone.free_delivery_threshold <= 0.0 {
        return None;
    }
    Some((zone.free_delivery_threshold - subtotal).max(0.0))
}

/// Whether the subtotal meets the zone's minimum order.
pub fn meets_minimum_order(zone: &ZoneInfo, subtotal: f64) -> bool {
    subtotal >= zone.minimum_order
}

fn qualifies_for_free_delivery(zone: &ZoneInfo, subtotal: f64) -> bool {
    zone.free_delivery_threshold > 0.0 && subtotal >= zone.free_delivery_threshold
}
