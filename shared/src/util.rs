//! Small utilities: timestamps, ids, currency formatting, ticket numbering

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a snowflake-style i64 for use as a cart line instance id.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms, collision-free at POS scale)
pub fn line_instance_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

/// Format a currency amount for display
pub fn format_currency(value: f64) -> String {
    format!("${:.2}", value)
}

/// Per-day order counter state
///
/// Storage lives with the caller; serializing order-number assignment
/// across concurrent checkouts is the caller's job too.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderCounter {
    pub last_date: String,
    pub last_sequence: u32,
}

impl OrderCounter {
    /// Advance for `date`, returning `(order_number, ticket_number)`.
    /// The sequence restarts at 1 when the date rolls over.
    pub fn next(&mut self, date: NaiveDate) -> (String, u32) {
        let date_str = date.format("%Y-%m-%d").to_string();
        let sequence = if self.last_date == date_str {
            self.last_sequence + 1
        } else {
            1
        };
        self.last_date = date_str;
        self.last_sequence = sequence;
        (
            format!("{}-{:04}", self.last_date, sequence),
            sequence,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_counter_sequences_within_day() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut counter = OrderCounter::default();

        let (first, ticket) = counter.next(date);
        assert_eq!(first, "2025-06-01-0001");
        assert_eq!(ticket, 1);

        let (second, ticket) = counter.next(date);
        assert_eq!(second, "2025-06-01-0002");
        assert_eq!(ticket, 2);
    }

    #[test]
    fn test_order_counter_restarts_on_date_rollover() {
        let mut counter = OrderCounter::default();
        counter.next(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        counter.next(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());

        let (number, ticket) = counter.next(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
        assert_eq!(number, "2025-06-02-0001");
        assert_eq!(ticket, 1);
    }

    #[test]
    fn test_line_instance_id_fits_js_safe_integer() {
        for _ in 0..100 {
            let id = line_instance_id();
            assert!(id > 0);
            assert!(id < (1_i64 << 53));
        }
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(12.5), "$12.50");
        assert_eq!(format_currency(0.0), "$0.00");
    }
}
