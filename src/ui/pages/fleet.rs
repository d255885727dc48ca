use dioxus::prelude::*;

use crate::domain::{AppState, VehicleCategory};
use crate::ui::components::rate_card::RateCard;
use crate::ui::theme;

#[component]
pub fn FleetPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let theme_mode = state.with(|s| s.theme);

    let mut state_mut = state;

    rsx! {
        div { class: "space-y-8",
            div {
                h1 { class: "font-serif text-4xl font-bold", "Our Cars" }
                p { class: "mt-2 {theme::text_muted(theme_mode)}",
                    "Every category has one flat daily rate. The booking form uses "
                    "exactly these prices."
                }
            }

            div { class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                for category in VehicleCategory::ALL {
                    RateCard {
                        category,
                        theme: theme_mode,
                        on_book: move |_| state_mut.with_mut(|s| s.booking_open = true),
                    }
                }
            }
        }
    }
}
