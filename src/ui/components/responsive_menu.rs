use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::{AppState, Theme};

/// Slide-in navigation drawer for small screens. Always mounted so the
/// slide transition can play; `open` only moves it on or off screen.
#[component]
pub fn ResponsiveMenu(open: bool) -> Element {
    let state = use_context::<Signal<AppState>>();
    let theme_mode = state.with(|s| s.theme);
    let nav = use_navigator();

    let mut state_mut = state;

    let panel = match (theme_mode, open) {
        (Theme::Light, true) => {
            "fixed bottom-0 left-0 top-16 z-20 flex w-3/4 translate-x-0 flex-col justify-between bg-white px-8 pb-6 pt-16 shadow-md transition-transform duration-300 md:hidden"
        }
        (Theme::Light, false) => {
            "fixed bottom-0 left-0 top-16 z-20 flex w-3/4 -translate-x-full flex-col justify-between bg-white px-8 pb-6 pt-16 shadow-md transition-transform duration-300 md:hidden"
        }
        (Theme::Dark, true) => {
            "fixed bottom-0 left-0 top-16 z-20 flex w-3/4 translate-x-0 flex-col justify-between bg-slate-900 px-8 pb-6 pt-16 text-slate-100 shadow-md transition-transform duration-300 md:hidden"
        }
        (Theme::Dark, false) => {
            "fixed bottom-0 left-0 top-16 z-20 flex w-3/4 -translate-x-full flex-col justify-between bg-slate-900 px-8 pb-6 pt-16 text-slate-100 shadow-md transition-transform duration-300 md:hidden"
        }
    };

    let item = "text-xl font-semibold";

    rsx! {
        div { class: "{panel}",
            nav {
                ul { class: "space-y-6",
                    li {
                        button {
                            class: "{item}",
                            onclick: move |_| {
                                state_mut.with_mut(|s| s.menu_open = false);
                                nav.push(Route::Home {});
                            },
                            "HOME"
                        }
                    }
                    li {
                        button {
                            class: "{item}",
                            onclick: move |_| {
                                state_mut.with_mut(|s| s.menu_open = false);
                                nav.push(Route::Fleet {});
                            },
                            "CARS"
                        }
                    }
                    li {
                        button {
                            class: "{item}",
                            onclick: move |_| {
                                state_mut.with_mut(|s| s.menu_open = false);
                                nav.push(Route::About {});
                            },
                            "ABOUT"
                        }
                    }
                    li {
                        button {
                            class: "{item}",
                            onclick: move |_| {
                                state_mut.with_mut(|s| {
                                    s.menu_open = false;
                                    s.booking_open = true;
                                });
                            },
                            "BOOKING"
                        }
                    }
                }
            }
            p { class: "text-sm text-slate-500", "Drive more, worry less." }
        }
    }
}
