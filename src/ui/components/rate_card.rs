use dioxus::prelude::*;

use crate::domain::{Theme, VehicleCategory};
use crate::ui::theme;

/// One fleet-page card: category, blurb, daily rate, booking shortcut.
#[component]
pub fn RateCard(category: VehicleCategory, theme: Theme, on_book: EventHandler<()>) -> Element {
    rsx! {
        div { class: "{theme::card(theme)}",
            h3 { class: "text-xl font-semibold", "{category.label()}" }
            p { class: "mt-1 text-sm {theme::text_muted(theme)}", "{category.tagline()}" }
            p { class: "mt-4 text-2xl font-semibold {theme::accent_text(theme)}",
                "Rs {category.daily_rate()}"
                span { class: "text-sm font-normal {theme::text_muted(theme)}", " / day" }
            }
            button {
                class: "mt-4 {theme::btn_primary(theme)}",
                onclick: move |_| on_book.call(()),
                "Book"
            }
        }
    }
}
