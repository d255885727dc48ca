use dioxus::prelude::*;

use crate::app::{persist_user_state, Route};
use crate::domain::{AppState, Theme};
use crate::ui::components::booking_form::BookingForm;
use crate::ui::components::responsive_menu::ResponsiveMenu;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let theme_mode = state.with(|s| s.theme);
    let menu_open = state.with(|s| s.menu_open);
    let booking_open = state.with(|s| s.booking_open);

    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let mut state_mut = state;

    let toggle_theme = move |_| {
        state_mut.with_mut(|s| s.theme = s.theme.toggled());
        persist_user_state(&state_mut);
    };

    rsx! {
        div { class: "{theme::page_shell(theme_mode)}",
            header { class: "{theme::header(theme_mode)}",
                div { class: "mx-auto max-w-6xl px-6 py-2 md:py-0",
                    div { class: "flex items-center justify-between",
                        span { class: "font-serif text-3xl font-bold", "{APP_NAME}" }

                        nav { class: "hidden md:block",
                            ul { class: "flex items-center gap-8",
                                li { class: "py-4",
                                    NavButton {
                                        label: "HOME",
                                        active: matches!(current_route, Route::Home {}),
                                        theme: theme_mode,
                                        onclick: move |_| { nav.push(Route::Home {}); },
                                    }
                                }
                                li { class: "py-4",
                                    NavButton {
                                        label: "CARS",
                                        active: matches!(current_route, Route::Fleet {}),
                                        theme: theme_mode,
                                        onclick: move |_| { nav.push(Route::Fleet {}); },
                                    }
                                }
                                li { class: "py-4",
                                    NavButton {
                                        label: "ABOUT",
                                        active: matches!(current_route, Route::About {}),
                                        theme: theme_mode,
                                        onclick: move |_| { nav.push(Route::About {}); },
                                    }
                                }
                                li { class: "py-4",
                                    NavButton {
                                        label: "BOOKING",
                                        active: booking_open,
                                        theme: theme_mode,
                                        onclick: move |_| state_mut.with_mut(|s| s.booking_open = !s.booking_open),
                                    }
                                }
                                li {
                                    button {
                                        class: "{theme::icon_button(theme_mode)}",
                                        title: "Switch theme",
                                        onclick: toggle_theme,
                                        "{theme_mode.toggle_icon()}"
                                    }
                                }
                            }
                        }

                        // Mobile: theme toggle + hamburger only; links live in the drawer.
                        div { class: "flex items-center gap-4 md:hidden",
                            button {
                                class: "{theme::icon_button(theme_mode)}",
                                title: "Switch theme",
                                onclick: toggle_theme,
                                "{theme_mode.toggle_icon()}"
                            }
                            button {
                                class: "{theme::icon_button(theme_mode)}",
                                title: "Menu",
                                onclick: move |_| state_mut.with_mut(|s| s.menu_open = !s.menu_open),
                                if menu_open { "✕" } else { "☰" }
                            }
                        }
                    }
                }
            }

            ResponsiveMenu { open: menu_open }

            if booking_open {
                BookingForm {
                    on_close: move |_| state_mut.with_mut(|s| s.booking_open = false),
                }
            }

            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }

            footer { class: "{theme::footer(theme_mode)}",
                "{APP_NAME} · {version_label()}"
            }
        }
    }
}

#[component]
fn NavButton(
    label: &'static str,
    active: bool,
    theme: Theme,
    onclick: EventHandler<()>,
) -> Element {
    let class = match (theme, active) {
        (Theme::Light, true) => {
            "border-b-2 border-blue-600 py-2 text-lg font-medium text-blue-600"
        }
        (Theme::Light, false) => {
            "py-2 text-lg font-medium transition-colors duration-500 hover:border-b-2 hover:border-blue-600 hover:text-blue-600"
        }
        (Theme::Dark, true) => {
            "border-b-2 border-blue-400 py-2 text-lg font-medium text-blue-400"
        }
        (Theme::Dark, false) => {
            "py-2 text-lg font-medium transition-colors duration-500 hover:border-b-2 hover:border-blue-400 hover:text-blue-400"
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
