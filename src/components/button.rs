//! Button Component

use leptos::prelude::*;

/// Primary action button; disabled and relabelled while `loading`
#[component]
pub fn Button(
    #[prop(into)] loading: Signal<bool>,
    #[prop(default = "button")] button_type: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <button type=button_type class="button" disabled=move || loading.get()>
            <Show when=move || !loading.get() fallback=|| "Saving...">
                {children()}
            </Show>
        </button>
    }
}
