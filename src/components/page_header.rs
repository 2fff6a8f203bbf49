//! Page Header Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::DASHBOARD_ROUTE;

/// Logo bar with an optional back link to the dashboard
#[component]
pub fn PageHeader(#[prop(default = true)] show_back: bool) -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="compact">
                <div class="logo">"Virtual Store"</div>
                {show_back.then(|| view! {
                    <div class="return-link">
                        <A href=DASHBOARD_ROUTE>"←"</A>
                    </div>
                })}
            </div>
        </header>
    }
}
