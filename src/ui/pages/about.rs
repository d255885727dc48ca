use dioxus::prelude::*;

use crate::domain::AppState;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn AboutPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let theme_mode = state.with(|s| s.theme);

    rsx! {
        div { class: "mx-auto max-w-2xl space-y-6",
            h1 { class: "font-serif text-4xl font-bold", "About {APP_NAME}" }
            p { class: "{theme::text_muted(theme_mode)}",
                "{APP_NAME} started with three cars and a counter at the airport "
                "road. These days the fleet covers everything from nimble "
                "hatchbacks to safari-ready off-roaders, but the promise is the "
                "same: one daily rate, a clean car, and keys in your hand in "
                "minutes."
            }
            p { class: "{theme::text_muted(theme_mode)}",
                "Book through the site and the price you see in the form is the "
                "price you pay at pickup. Bring a licence, leave a phone number, "
                "and the road is yours."
            }
            p { class: "text-xs {theme::text_muted(theme_mode)}",
                "You are browsing {APP_NAME} {version_label()}."
            }
        }
    }
}
