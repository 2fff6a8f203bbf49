//! Toast Container Component
//!
//! Renders the app-wide toast queue in the top-right corner.

use leptos::prelude::*;

use crate::context::use_toasts;
use crate::toast::Toast;

/// Stack of active toasts. Click a toast to dismiss it early.
#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-container">
            <For
                each=move || toasts.toasts()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.message.kind.as_class() on:click=move |_| toasts.dismiss(id)>
                            <strong>{toast.message.title}</strong>
                            <p>{toast.message.description}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
