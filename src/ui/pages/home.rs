use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::AppState;
use crate::ui::theme;

#[component]
pub fn HomePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let theme_mode = state.with(|s| s.theme);
    let nav = use_navigator();

    let mut state_mut = state;

    rsx! {
        div { class: "space-y-16",
            section { class: "flex flex-col items-center gap-6 py-12 text-center",
                h1 { class: "max-w-2xl font-serif text-5xl font-bold",
                    "Rent the ride. Own the road."
                }
                p { class: "max-w-xl text-lg {theme::text_muted(theme_mode)}",
                    "Pick a car, pick your dates, and see the full price before you commit. "
                    "No hidden fees, no paperwork marathon."
                }
                div { class: "flex gap-4",
                    button {
                        class: "{theme::btn_primary(theme_mode)}",
                        onclick: move |_| state_mut.with_mut(|s| s.booking_open = true),
                        "Book a Car"
                    }
                    button {
                        class: "{theme::btn_ghost(theme_mode)}",
                        onclick: move |_| { nav.push(Route::Fleet {}); },
                        "Browse the Fleet"
                    }
                }
            }

            section { class: "grid gap-4 sm:grid-cols-3",
                HighlightCard {
                    title: "Transparent pricing",
                    copy: "A fixed daily rate per category. The form totals it up as you type.",
                }
                HighlightCard {
                    title: "Flexible pickup",
                    copy: "Same-day rentals welcome. Bring the car back when your dates say so.",
                }
                HighlightCard {
                    title: "A well-kept fleet",
                    copy: "From city hatchbacks to open-top convertibles, serviced and ready.",
                }
            }
        }
    }
}

#[component]
fn HighlightCard(title: &'static str, copy: &'static str) -> Element {
    let state = use_context::<Signal<AppState>>();
    let theme_mode = state.with(|s| s.theme);

    rsx! {
        div { class: "{theme::card(theme_mode)}",
            h3 { class: "text-lg font-semibold", "{title}" }
            p { class: "mt-2 text-sm {theme::text_muted(theme_mode)}", "{copy}" }
        }
    }
}
