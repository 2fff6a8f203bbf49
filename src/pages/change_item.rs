//! Change Item Page
//!
//! Pre-filled edit form for the item selected on the dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use reactive_stores::Store;

use crate::api::HttpItemApi;
use crate::components::{Button, Input, PageHeader};
use crate::context::{use_config, use_toasts};
use crate::edit::{load_item, submit_item, FormPhase, Navigator, SubmitOutcome};
use crate::models::{ItemForm, ItemFormStoreFields};
use crate::session::{read_item_target, LocalStorage};
use crate::validation::FieldErrors;

/// Adapts the router's navigate function to the `Navigator` seam
struct RouterNavigator<F>(F);

impl<F: Fn(&str, NavigateOptions)> Navigator for RouterNavigator<F> {
    fn navigate(&self, path: &str) {
        (self.0)(path, NavigateOptions::default());
    }
}

fn field_error(errors: RwSignal<FieldErrors>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|errors| errors.get(field).map(str::to_string)))
}

#[component]
pub fn ChangeItemPage() -> impl IntoView {
    let config = use_config();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let form = Store::new(ItemForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let phase = RwSignal::new(FormPhase::Loading);

    let api = HttpItemApi::new(config.api_base_url);
    let target = read_item_target(&LocalStorage);
    if let Err(e) = &target {
        log::warn!("No usable session: {}", e);
    }

    // Load once on mount; a failed load leaves the form blank but editable
    {
        let api = api.clone();
        let target = target.clone();
        Effect::new(move |_| {
            let api = api.clone();
            let target = target.clone();
            spawn_local(async move {
                // Without a complete session no GET is sent at all
                match load_item(&api, target.as_ref()).await {
                    Ok(loaded) => {
                        form.try_update(|current| *current = loaded);
                    }
                    Err(e) => log::error!("Failed to load item: {}", e),
                }
                phase.try_update(FormPhase::finish_load);
            });
        });
    }

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !phase.try_update(FormPhase::begin_submit).unwrap_or(false) {
            return;
        }
        errors.set(FieldErrors::default());

        let values = form.get_untracked();
        let api = api.clone();
        let target = target.clone();
        let navigator = RouterNavigator(navigate.clone());
        spawn_local(async move {
            let outcome = submit_item(&api, &toasts, &navigator, target.as_ref(), values).await;
            phase.try_update(|phase| phase.finish_submit(&outcome));
            if let SubmitOutcome::Invalid(field_errors) = outcome {
                errors.try_set(field_errors);
            }
        });
    };

    let inputs_disabled = Signal::derive(move || phase.get() != FormPhase::Editable);
    let submitting = Signal::derive(move || phase.get() == FormPhase::Submitting);

    view! {
        <div class="change-page">
            <PageHeader />
            <section class="content">
                <form class="item-form" on:submit=on_submit>
                    <h2>"Update Item"</h2>

                    <Input
                        name="name"
                        icon="▣"
                        placeholder="Name"
                        value=Signal::derive(move || form.name().get())
                        on_input=Callback::new(move |value: String| *form.name().write() = value)
                        error=field_error(errors, "name")
                        disabled=inputs_disabled
                    />

                    <Input
                        name="description"
                        icon="≡"
                        placeholder="Description"
                        value=Signal::derive(move || form.description().get())
                        on_input=Callback::new(move |value: String| *form.description().write() = value)
                        error=field_error(errors, "description")
                        disabled=inputs_disabled
                    />

                    <Input
                        name="price"
                        icon="$"
                        input_type="number"
                        placeholder="Price"
                        value=Signal::derive(move || form.price().get())
                        on_input=Callback::new(move |value: String| *form.price().write() = value)
                        error=field_error(errors, "price")
                        disabled=inputs_disabled
                    />

                    <Button button_type="submit" loading=submitting>
                        "Update"
                    </Button>
                </form>
            </section>
        </div>
    }
}
