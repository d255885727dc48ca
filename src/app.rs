use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::AppState,
    ui::{
        pages::{AboutPage, FleetPage, HomePage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_preferences, save_preferences},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/fleet")]
    Fleet {},
    #[route("/about")]
    About {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state.clone();
        move || {
            if let Some(saved) = load_preferences() {
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
    }
}

/// Writes the visitor's preferences (currently just the theme) to the
/// platform config directory.
pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_preferences(&snapshot) {
        tracing::warn!("failed to persist preferences: {err}");
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { Shell { HomePage {} } }
}

#[component]
pub fn Fleet() -> Element {
    rsx! { Shell { FleetPage {} } }
}

#[component]
pub fn About() -> Element {
    rsx! { Shell { AboutPage {} } }
}
