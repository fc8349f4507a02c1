//! Core pricing calculation functions.
//!
//! Pure functions for rental math - no I/O, no retained state.

use chrono::TimeDelta;
use rust_decimal::Decimal;

use super::models::{DateRange, DateSelection, RentalQuote};
use super::validation::{validate_price, Rejection};

/// Chargeable whole days between the two ends of a range.
///
/// Elapsed time is taken in absolute value and rounded up, so any partial
/// day is charged as a full one. The result is never below 1: a same-day
/// range still costs one day.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use bikerental_pricing::pricing::{compute_days, DateRange};
///
/// let start = Utc.with_ymd_and_hms(2024, 1, 20, 10, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2024, 1, 21, 11, 0, 0).unwrap(); // 25 hours
/// assert_eq!(compute_days(&DateRange::new(start, end)), 2);
/// ```
pub fn compute_days(range: &DateRange) -> i64 {
    let elapsed = (range.end - range.start).abs();
    let whole_days = elapsed.num_days();

    // num_days truncates, so any leftover means a partial day
    let days = if elapsed > TimeDelta::days(whole_days) {
        whole_days + 1
    } else {
        whole_days
    };

    days.max(1)
}

/// Day count shown beside the price while dates are still being picked.
///
/// Falls back to a single day until both ends are set.
pub fn display_days(selection: &DateSelection) -> i64 {
    selection.range().as_ref().map_or(1, compute_days)
}

/// Price a range at a daily rate.
///
/// Negative rates, and rates whose total would overflow, are rejected with
/// [`Rejection::InvalidPrice`]. The range is not checked for ordering here;
/// run [`super::validate`] before treating the quote as bookable.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
/// use bikerental_pricing::pricing::{quote, DateRange};
///
/// let range = DateRange::from_dates(
///     NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 22).unwrap(),
/// );
/// let quote = quote(&range, dec!(299)).unwrap();
/// assert_eq!(quote.days(), 2);
/// assert_eq!(quote.total_price(), dec!(598));
/// ```
pub fn quote(range: &DateRange, price_per_day: Decimal) -> Result<RentalQuote, Rejection> {
    validate_price(price_per_day)?;

    let days = compute_days(range);
    let total_price = price_per_day
        .checked_mul(Decimal::from(days))
        .ok_or(Rejection::InvalidPrice)?;

    tracing::debug!(
        days,
        %price_per_day,
        %total_price,
        "quoted rental"
    );

    Ok(RentalQuote {
        days,
        price_per_day,
        total_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{validate, ValidationResult};
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ==================== compute_days tests ====================

    #[test]
    fn test_compute_days_same_instant_is_one_day() {
        for start in [at(2024, 1, 20, 0), at(2024, 2, 29, 13), at(1999, 12, 31, 23)] {
            assert_eq!(compute_days(&DateRange::new(start, start)), 1);
        }
    }

    #[test]
    fn test_compute_days_exactly_24_hours() {
        let range = DateRange::new(at(2024, 1, 20, 8), at(2024, 1, 21, 8));
        assert_eq!(compute_days(&range), 1);
    }

    #[test]
    fn test_compute_days_25_hours_rounds_up() {
        let range = DateRange::new(at(2024, 1, 20, 8), at(2024, 1, 21, 9));
        assert_eq!(compute_days(&range), 2);
    }

    #[test]
    fn test_compute_days_one_nanosecond_over_rounds_up() {
        let start = at(2024, 1, 20, 8);
        let end = start + TimeDelta::days(3) + TimeDelta::nanoseconds(1);
        assert_eq!(compute_days(&DateRange::new(start, end)), 4);
    }

    #[test]
    fn test_compute_days_partial_day_is_one_day() {
        let range = DateRange::new(at(2024, 1, 20, 8), at(2024, 1, 20, 9));
        assert_eq!(compute_days(&range), 1);
    }

    #[test]
    fn test_compute_days_reversed_range_uses_absolute_difference() {
        let forward = DateRange::new(at(2024, 1, 20, 8), at(2024, 1, 23, 9));
        let backward = DateRange::new(at(2024, 1, 23, 9), at(2024, 1, 20, 8));
        assert_eq!(compute_days(&forward), 4);
        assert_eq!(compute_days(&backward), 4);
    }

    #[test]
    fn test_compute_days_across_month_and_leap_day() {
        let range = DateRange::from_dates(date(2024, 2, 27), date(2024, 3, 2));
        assert_eq!(compute_days(&range), 4);
    }

    // ==================== display_days tests ====================

    #[test]
    fn test_display_days_defaults_to_one_until_both_dates_set() {
        assert_eq!(display_days(&DateSelection::default()), 1);
        assert_eq!(
            display_days(&DateSelection::from_dates(Some(date(2024, 1, 20)), None)),
            1
        );
        assert_eq!(
            display_days(&DateSelection::from_dates(None, Some(date(2024, 1, 25)))),
            1
        );
    }

    #[test]
    fn test_display_days_with_full_selection() {
        let selection = DateSelection::from_dates(Some(date(2024, 1, 20)), Some(date(2024, 1, 25)));
        assert_eq!(display_days(&selection), 5);
    }

    // ==================== quote tests ====================

    #[test]
    fn test_quote_total_is_days_times_price() {
        let range = DateRange::new(at(2024, 1, 20, 8), at(2024, 1, 27, 10));
        for price in [dec!(0), dec!(25), dec!(28.50), dec!(0.01), dec!(1234.567)] {
            let q = quote(&range, price).unwrap();
            assert_eq!(q.days(), 8);
            assert_eq!(q.price_per_day(), price);
            assert_eq!(q.total_price(), Decimal::from(q.days()) * price);
        }
    }

    #[test]
    fn test_quote_decimal_total_is_exact() {
        let range = DateRange::from_dates(date(2024, 1, 1), date(2024, 1, 4));
        let q = quote(&range, dec!(0.10)).unwrap();
        assert_eq!(q.total_price(), dec!(0.30));
    }

    #[test]
    fn test_quote_rejects_negative_price() {
        let range = DateRange::from_dates(date(2024, 1, 20), date(2024, 1, 22));
        assert_eq!(quote(&range, dec!(-1)), Err(Rejection::InvalidPrice));
    }

    #[test]
    fn test_quote_overflowing_total_is_rejected() {
        let range = DateRange::from_dates(date(2024, 1, 20), date(2024, 1, 22));
        assert_eq!(quote(&range, Decimal::MAX), Err(Rejection::InvalidPrice));

        // a single day never multiplies past the rate itself
        let same_day = DateRange::from_dates(date(2024, 1, 20), date(2024, 1, 20));
        assert_eq!(
            quote(&same_day, Decimal::MAX).unwrap().total_price(),
            Decimal::MAX
        );
    }

    #[test]
    fn test_quote_serializes_amounts_as_strings() {
        let range = DateRange::from_dates(date(2024, 1, 20), date(2024, 1, 22));
        let json = serde_json::to_value(quote(&range, dec!(299)).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"days": 2, "price_per_day": "299", "total_price": "598"})
        );
    }

    // ==================== end-to-end scenarios ====================

    #[test]
    fn test_scenario_two_day_rental() {
        let selection = DateSelection::from_dates(Some(date(2024, 1, 20)), Some(date(2024, 1, 22)));
        assert_eq!(validate(&selection), ValidationResult::Valid);

        let range = selection.range().unwrap();
        let q = quote(&range, dec!(299)).unwrap();
        assert_eq!(q.days(), 2);
        assert_eq!(q.total_price(), dec!(598));
    }

    #[test]
    fn test_scenario_missing_start() {
        let selection = DateSelection::from_dates(None, Some(date(2024, 1, 22)));
        assert_eq!(
            validate(&selection),
            ValidationResult::Invalid(Rejection::MissingStart)
        );
    }

    #[test]
    fn test_scenario_same_day_rejected_but_still_quoted_for_display() {
        let selection = DateSelection::from_dates(Some(date(2024, 1, 20)), Some(date(2024, 1, 20)));
        assert_eq!(
            validate(&selection),
            ValidationResult::Invalid(Rejection::StartNotBeforeEnd)
        );

        let range = selection.range().unwrap();
        assert_eq!(quote(&range, dec!(299)).unwrap().days(), 1);
    }
}
