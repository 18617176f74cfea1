//! Display helpers shared by every renderer.

use chrono::{NaiveDate, NaiveDateTime};

use marketplace_core::{OrderStatus, Price};

/// Badge colour used for an order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Tertiary,
    Warning,
    Muted,
}

/// Badge colour for a status: delivered, shipped and processing each get
/// their own tone, everything else is muted.
#[must_use]
pub const fn status_tone(status: OrderStatus) -> StatusTone {
    match status {
        OrderStatus::Delivered => StatusTone::Success,
        OrderStatus::Shipped => StatusTone::Tertiary,
        OrderStatus::Processing => StatusTone::Warning,
        OrderStatus::Pending | OrderStatus::Cancelled => StatusTone::Muted,
    }
}

/// Upper-case the first character (`"all"` -> `"All"`).
#[must_use]
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Insert a comma every three digits from the right (`"24500"` -> `"24,500"`).
#[must_use]
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    digits
        .chars()
        .enumerate()
        .fold(String::with_capacity(len + len / 3), |mut out, (i, c)| {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
            out
        })
}

/// Price rounded to whole units with grouped digits, e.g. `$24,500`.
#[must_use]
pub fn whole_dollars(price: Price) -> String {
    format!(
        "{}{}",
        price.currency_code.symbol(),
        group_thousands(&price.amount.round().to_string())
    )
}

/// US-style short date, e.g. `1/15/2024`.
#[must_use]
pub fn short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// 12-hour clock time, e.g. `10:30 AM`.
#[must_use]
pub fn short_time(timestamp: NaiveDateTime) -> String {
    timestamp.format("%-I:%M %p").to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("all"), "All");
        assert_eq!(capitalize("Electronics"), "Electronics");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("7"), "7");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn test_whole_dollars() {
        let price = Price::usd(rust_decimal::Decimal::from(24_500));
        assert_eq!(whole_dollars(price), "$24,500");
    }

    #[test]
    fn test_short_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(short_date(date), "1/5/2024");
    }

    #[test]
    fn test_short_time() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(15, 20, 0)
            .unwrap();
        assert_eq!(short_time(ts), "3:20 PM");
    }

    #[test]
    fn test_status_tone() {
        assert_eq!(status_tone(OrderStatus::Delivered), StatusTone::Success);
        assert_eq!(status_tone(OrderStatus::Pending), StatusTone::Muted);
        assert_eq!(status_tone(OrderStatus::Cancelled), StatusTone::Muted);
    }
}
