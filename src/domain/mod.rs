//! Rental pricing and booking-form logic, free of any UI types.

pub mod app_state;
pub mod entities;
pub mod lifecycle;
pub mod pricing;

pub use app_state::{AppState, PersistedState, Theme};
pub use entities::{BookingDraft, DraftField, VehicleCategory};
pub use lifecycle::{BookingPhase, PhaseChange};
pub use pricing::{rental_quote, RentalQuote};
