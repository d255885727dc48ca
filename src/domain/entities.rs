use time::Date;

use super::pricing::{rental_quote, RentalQuote};

/// Vehicle classes offered for rental, keying the per-day rate table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VehicleCategory {
    Safari,
    Sedan,
    Hatchback,
    Suv,
    Convertible,
}

impl VehicleCategory {
    /// Every category, in the order the booking form and fleet page list them.
    pub const ALL: [VehicleCategory; 5] = [
        VehicleCategory::Safari,
        VehicleCategory::Sedan,
        VehicleCategory::Hatchback,
        VehicleCategory::Suv,
        VehicleCategory::Convertible,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VehicleCategory::Safari => "Safari",
            VehicleCategory::Sedan => "Sedan",
            VehicleCategory::Hatchback => "Hatchback",
            VehicleCategory::Suv => "SUV",
            VehicleCategory::Convertible => "Convertible",
        }
    }

    /// Fixed rental rate in rupees per day.
    pub fn daily_rate(&self) -> u32 {
        match self {
            VehicleCategory::Safari => 1000,
            VehicleCategory::Sedan => 1200,
            VehicleCategory::Hatchback => 800,
            VehicleCategory::Suv => 1500,
            VehicleCategory::Convertible => 1800,
        }
    }

    /// Resolves the value of the category `<select>` back to a category.
    /// The placeholder option has an empty value and maps to `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// One-liner shown on the fleet page cards.
    pub fn tagline(&self) -> &'static str {
        match self {
            VehicleCategory::Safari => "Boxy, rugged, ready for the hills.",
            VehicleCategory::Sedan => "A comfortable cruiser for city and highway.",
            VehicleCategory::Hatchback => "Easy to park, easy on the wallet.",
            VehicleCategory::Suv => "Room for the whole family and the luggage.",
            VehicleCategory::Convertible => "Top down, coastline ahead.",
        }
    }
}

/// A single edit to the booking draft.
#[derive(Clone, Debug, PartialEq)]
pub enum DraftField {
    CustomerName(String),
    PhoneNumber(String),
    Address(String),
    Category(Option<VehicleCategory>),
    StartDate(Option<Date>),
    EndDate(Option<Date>),
}

/// The in-progress booking held while the form is open.
///
/// All edits go through [`BookingDraft::apply`], which recomputes the
/// derived quote in the same step. A price from an earlier
/// category/date combination can therefore never outlive the inputs
/// that produced it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingDraft {
    pub customer_name: String,
    pub phone_number: String,
    pub address: String,
    pub category: Option<VehicleCategory>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    quote: Option<RentalQuote>,
}

impl BookingDraft {
    pub fn apply(&mut self, field: DraftField) {
        match field {
            DraftField::CustomerName(value) => self.customer_name = value,
            DraftField::PhoneNumber(value) => self.phone_number = value,
            DraftField::Address(value) => self.address = value,
            DraftField::Category(value) => self.category = value,
            DraftField::StartDate(value) => self.start_date = value,
            DraftField::EndDate(value) => self.end_date = value,
        }
        self.quote = rental_quote(self.category, self.start_date, self.end_date);
    }

    /// The current price, if the selection is complete enough to have one.
    pub fn quote(&self) -> Option<&RentalQuote> {
        self.quote.as_ref()
    }

    /// Back to an empty form, derived values included.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn quote_appears_once_the_selection_is_complete() {
        let mut draft = BookingDraft::default();

        draft.apply(DraftField::Category(Some(VehicleCategory::Sedan)));
        assert!(draft.quote().is_none());

        draft.apply(DraftField::StartDate(Some(date!(2024 - 01 - 01))));
        assert!(draft.quote().is_none());

        draft.apply(DraftField::EndDate(Some(date!(2024 - 01 - 04))));
        assert_eq!(draft.quote().unwrap().total_price, 3600);
    }

    #[test]
    fn switching_category_reprices_without_reselecting_dates() {
        let mut draft = BookingDraft::default();
        draft.apply(DraftField::StartDate(Some(date!(2024 - 01 - 01))));
        draft.apply(DraftField::EndDate(Some(date!(2024 - 01 - 04))));
        draft.apply(DraftField::Category(Some(VehicleCategory::Sedan)));
        assert_eq!(draft.quote().unwrap().total_price, 3600);

        draft.apply(DraftField::Category(Some(VehicleCategory::Convertible)));
        assert_eq!(draft.quote().unwrap().total_price, 5400);
    }

    #[test]
    fn clearing_a_date_withdraws_the_quote() {
        let mut draft = BookingDraft::default();
        draft.apply(DraftField::Category(Some(VehicleCategory::Safari)));
        draft.apply(DraftField::StartDate(Some(date!(2024 - 06 - 01))));
        draft.apply(DraftField::EndDate(Some(date!(2024 - 06 - 08))));
        assert!(draft.quote().is_some());

        draft.apply(DraftField::EndDate(None));
        assert!(draft.quote().is_none());
    }

    #[test]
    fn clear_resets_every_field() {
        let mut draft = BookingDraft::default();
        draft.apply(DraftField::CustomerName("Asha Rao".to_string()));
        draft.apply(DraftField::PhoneNumber("98450 12345".to_string()));
        draft.apply(DraftField::Address("14 MG Road".to_string()));
        draft.apply(DraftField::Category(Some(VehicleCategory::Suv)));
        draft.apply(DraftField::StartDate(Some(date!(2024 - 02 - 01))));
        draft.apply(DraftField::EndDate(Some(date!(2024 - 02 - 03))));

        draft.clear();
        assert_eq!(draft, BookingDraft::default());
    }

    #[test]
    fn select_option_labels_resolve_back_to_their_category() {
        for category in VehicleCategory::ALL {
            assert_eq!(VehicleCategory::from_label(category.label()), Some(category));
        }
        assert_eq!(VehicleCategory::from_label(""), None);
        assert_eq!(VehicleCategory::from_label("Select Model"), None);
    }

    #[test]
    fn rate_table_matches_the_published_prices() {
        assert_eq!(VehicleCategory::Safari.daily_rate(), 1000);
        assert_eq!(VehicleCategory::Sedan.daily_rate(), 1200);
        assert_eq!(VehicleCategory::Hatchback.daily_rate(), 800);
        assert_eq!(VehicleCategory::Suv.daily_rate(), 1500);
        assert_eq!(VehicleCategory::Convertible.daily_rate(), 1800);
    }
}
