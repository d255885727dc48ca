use time::{Date, Duration};

use super::entities::VehicleCategory;

/// Derived duration and price for a complete category/date selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RentalQuote {
    pub duration_days: u32,
    pub price_per_day: u32,
    pub total_price: u32,
}

/// Prices the current selection.
///
/// Returns `None` while the category or either date is still unset; an
/// incomplete selection is "not priced yet", never an error.
pub fn rental_quote(
    category: Option<VehicleCategory>,
    start_date: Option<Date>,
    end_date: Option<Date>,
) -> Option<RentalQuote> {
    let category = category?;
    let start = start_date?;
    let end = end_date?;

    let duration_days = ceil_days(end - start);
    let price_per_day = category.daily_rate();

    Some(RentalQuote {
        duration_days,
        price_per_day,
        total_price: price_per_day * duration_days,
    })
}

/// Whole rental days covered by `span`, ignoring direction.
///
/// A zero-length span is 0 days; anything between that and a full day
/// rounds up to 1.
pub fn ceil_days(span: Duration) -> u32 {
    let span = span.abs();
    let whole = span.whole_days();
    if span > Duration::days(whole) {
        whole as u32 + 1
    } else {
        whole as u32
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn sedan_over_three_days_costs_three_daily_rates() {
        let quote = rental_quote(
            Some(VehicleCategory::Sedan),
            Some(date!(2024 - 01 - 01)),
            Some(date!(2024 - 01 - 04)),
        )
        .unwrap();

        assert_eq!(quote.duration_days, 3);
        assert_eq!(quote.price_per_day, 1200);
        assert_eq!(quote.total_price, 3600);
    }

    #[test]
    fn same_day_selection_prices_to_zero() {
        let day = date!(2024 - 03 - 10);
        let quote = rental_quote(Some(VehicleCategory::Suv), Some(day), Some(day)).unwrap();

        assert_eq!(quote.duration_days, 0);
        assert_eq!(quote.total_price, 0);
    }

    #[test]
    fn incomplete_selection_is_not_priced() {
        let start = date!(2024 - 01 - 01);
        let end = date!(2024 - 01 - 04);

        assert!(rental_quote(Some(VehicleCategory::Sedan), None, Some(end)).is_none());
        assert!(rental_quote(Some(VehicleCategory::Sedan), Some(start), None).is_none());
        assert!(rental_quote(None, Some(start), Some(end)).is_none());
    }

    #[test]
    fn total_follows_the_rate_of_the_chosen_category() {
        let start = date!(2024 - 05 - 01);
        let end = date!(2024 - 05 - 03);

        for category in VehicleCategory::ALL {
            let quote = rental_quote(Some(category), Some(start), Some(end)).unwrap();
            assert_eq!(quote.price_per_day, category.daily_rate());
            assert_eq!(quote.total_price, category.daily_rate() * 2);
        }
    }

    #[test]
    fn reversed_date_range_uses_the_absolute_difference() {
        let quote = rental_quote(
            Some(VehicleCategory::Hatchback),
            Some(date!(2024 - 01 - 04)),
            Some(date!(2024 - 01 - 01)),
        )
        .unwrap();

        assert_eq!(quote.duration_days, 3);
        assert_eq!(quote.total_price, 2400);
    }

    #[test]
    fn partial_days_round_up_to_a_full_day() {
        assert_eq!(ceil_days(Duration::ZERO), 0);
        assert_eq!(ceil_days(Duration::minutes(1)), 1);
        assert_eq!(ceil_days(Duration::hours(24)), 1);
        assert_eq!(ceil_days(Duration::hours(25)), 2);
        assert_eq!(ceil_days(-Duration::hours(30)), 2);
    }
}
