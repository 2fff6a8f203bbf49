//! Form Input Component
//!
//! Controlled text input with an optional icon and inline error message.

use leptos::prelude::*;

/// Labelled-by-placeholder input bound to a string signal
///
/// # Arguments
/// * `name` - field name, also used as the element id
/// * `value` / `on_input` - controlled value and change callback
/// * `error` - message shown under the field when present
#[component]
pub fn Input(
    #[prop(into)] name: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(optional)] icon: Option<&'static str>,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let (focused, set_focused) = signal(false);

    let container_class = move || {
        let mut class = String::from("input-container");
        if focused.get() {
            class.push_str(" focused");
        }
        if !value.with(String::is_empty) {
            class.push_str(" filled");
        }
        if error.with(Option::is_some) {
            class.push_str(" errored");
        }
        class
    };

    view! {
        <div class=container_class>
            {icon.map(|glyph| view! { <span class="input-icon">{glyph}</span> })}
            <input
                type=input_type
                id=name.clone()
                name=name
                placeholder=placeholder
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:focus=move |_| set_focused.set(true)
                on:blur=move |_| set_focused.set(false)
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error.get().map(|message| view! {
                <span class="input-error">{message}</span>
            })}
        </div>
    }
}
