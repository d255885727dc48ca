pub mod booking_form;
pub mod rate_card;
pub mod responsive_menu;
