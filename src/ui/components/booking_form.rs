use std::time::Duration;

use dioxus::prelude::*;

use crate::domain::{AppState, BookingDraft, BookingPhase, DraftField, PhaseChange, VehicleCategory};
use crate::ui::theme;
use crate::util::dates;

/// How long the confirmation notice stays up before the form closes
/// itself and resets.
const CONFIRMATION_DISPLAY: Duration = Duration::from_secs(2);

/// The modal booking widget. Owns its draft and lifecycle phase; the
/// host only learns about completion through `on_close`.
#[component]
pub fn BookingForm(on_close: EventHandler<()>) -> Element {
    let app = use_context::<Signal<AppState>>();
    let theme_mode = app.with(|s| s.theme);

    let mut draft = use_signal(BookingDraft::default);
    let mut phase = use_signal(BookingPhase::default);

    let mut apply_change = move |change: PhaseChange| {
        if change.clear_draft {
            draft.set(BookingDraft::default());
        }
        if change.notify_host {
            on_close.call(());
        }
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Some(change) = phase.with_mut(|p| p.submit()) {
            tracing::info!("booking submitted, showing confirmation");
            apply_change(change);
        }
    };

    let on_cancel = move |_| {
        if let Some(change) = phase.with_mut(|p| p.close()) {
            apply_change(change);
        }
    };

    let on_confirmation_elapsed = move |_| {
        if let Some(change) = phase.with_mut(|p| p.confirmation_elapsed()) {
            apply_change(change);
        }
    };

    let start_value = draft.with(|d| dates::input_value(d.start_date));
    let end_value = draft.with(|d| dates::input_value(d.end_date));
    // The end picker refuses dates before the chosen start; a range can
    // never be built backwards through the UI.
    let end_min = start_value.clone();

    let category_value = draft.with(|d| d.category.map(|c| c.label()).unwrap_or(""));

    let (duration_display, total_display) = draft.with(|d| match d.quote() {
        Some(quote) if quote.duration_days > 0 => (
            format!("{} days", quote.duration_days),
            format!("Rs {}", quote.total_price),
        ),
        _ => (String::new(), String::new()),
    });

    let field = theme::input_class(theme_mode);
    let caption = theme::label_class(theme_mode);

    rsx! {
        div { class: "fixed inset-0 z-50 flex items-center justify-center bg-slate-800/75",
            div { class: "{theme::modal_panel(theme_mode)}",
                h2 { class: "mb-4 text-2xl font-semibold", "Booking Form" }
                form { onsubmit: on_submit,
                    div { class: "mb-4",
                        label { class: "{caption}", "Name:" }
                        input {
                            r#type: "text",
                            class: "{field}",
                            placeholder: "Enter Your Name",
                            value: draft.with(|d| d.customer_name.clone()),
                            oninput: move |evt| {
                                draft.with_mut(|d| d.apply(DraftField::CustomerName(evt.value())))
                            },
                        }
                    }
                    div { class: "mb-4",
                        label { class: "{caption}", "Phone Number:" }
                        input {
                            r#type: "text",
                            class: "{field}",
                            placeholder: "Enter Your Mobile Number",
                            value: draft.with(|d| d.phone_number.clone()),
                            oninput: move |evt| {
                                draft.with_mut(|d| d.apply(DraftField::PhoneNumber(evt.value())))
                            },
                        }
                    }
                    div { class: "mb-4",
                        label { class: "{caption}", "Address:" }
                        input {
                            r#type: "text",
                            class: "{field}",
                            placeholder: "Enter Your Address",
                            value: draft.with(|d| d.address.clone()),
                            oninput: move |evt| {
                                draft.with_mut(|d| d.apply(DraftField::Address(evt.value())))
                            },
                        }
                    }
                    div { class: "mb-4",
                        label { class: "{caption}", "Select a Model:" }
                        select {
                            class: "{field}",
                            value: category_value,
                            onchange: move |evt| {
                                let picked = VehicleCategory::from_label(&evt.value());
                                draft.with_mut(|d| d.apply(DraftField::Category(picked)));
                            },
                            option { value: "", "Select Model" }
                            for category in VehicleCategory::ALL {
                                option { value: category.label(), "{category.label()}" }
                            }
                        }
                    }
                    div { class: "mb-4",
                        label { class: "{caption}", "Start Date:" }
                        input {
                            r#type: "date",
                            class: "{field}",
                            value: start_value,
                            onchange: move |evt| {
                                let parsed = dates::parse_input(&evt.value());
                                draft.with_mut(|d| d.apply(DraftField::StartDate(parsed)));
                            },
                        }
                    }
                    div { class: "mb-4",
                        label { class: "{caption}", "End Date:" }
                        input {
                            r#type: "date",
                            class: "{field}",
                            min: end_min,
                            value: end_value,
                            onchange: move |evt| {
                                let parsed = dates::parse_input(&evt.value());
                                draft.with_mut(|d| d.apply(DraftField::EndDate(parsed)));
                            },
                        }
                    }
                    div { class: "mb-4",
                        label { class: "{caption}", "Duration:" }
                        input {
                            r#type: "text",
                            class: "{field}",
                            readonly: true,
                            value: duration_display,
                        }
                    }
                    div { class: "mb-4",
                        label { class: "{caption}", "Total Price:" }
                        input {
                            r#type: "text",
                            class: "{field}",
                            readonly: true,
                            value: total_display,
                        }
                    }

                    if phase.with(|p| p.is_confirming()) {
                        ConfirmationNotice { on_elapsed: on_confirmation_elapsed }
                    }

                    div { class: "flex gap-2",
                        button {
                            r#type: "submit",
                            class: "{theme::btn_primary(theme_mode)}",
                            "Submit"
                        }
                        button {
                            r#type: "button",
                            class: "{theme::btn_danger(theme_mode)}",
                            onclick: on_cancel,
                            "Close"
                        }
                    }
                }
            }
        }
    }
}

/// Success alert shown while the lifecycle is in `Confirming`.
///
/// The auto-close timer lives in this component's scope, so tearing the
/// widget down early drops the task before it can touch anything.
/// Dismissing the alert only hides it; the form still closes itself
/// when the interval runs out.
#[component]
fn ConfirmationNotice(on_elapsed: EventHandler<()>) -> Element {
    let mut visible = use_signal(|| true);

    let _auto_close = use_future(move || async move {
        tokio::time::sleep(CONFIRMATION_DISPLAY).await;
        on_elapsed.call(());
    });

    if !visible() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            role: "alert",
            class: "relative mb-4 rounded border border-green-400 bg-green-100 px-4 py-3 text-green-700",
            strong { class: "font-bold", "Booking confirmed! " }
            span { class: "block sm:inline", "Thank you for booking with us." }
            button {
                r#type: "button",
                class: "absolute bottom-0 right-0 top-0 px-4 py-3 text-green-500 hover:text-green-700",
                onclick: move |_| visible.set(false),
                "✕"
            }
        }
    }
}
