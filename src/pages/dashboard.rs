//! Dashboard Page
//!
//! Landing route after a successful save.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::PageHeader;
use crate::config::EDIT_ITEM_ROUTE;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <PageHeader show_back=false />
            <section class="content">
                <h2>"Dashboard"</h2>
                <A href=EDIT_ITEM_ROUTE>"Edit selected item"</A>
            </section>
        </div>
    }
}
