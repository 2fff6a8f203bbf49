//! Virtual Store Frontend App
//!
//! Root component: shared context, toast overlay and routes.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::ToastContainer;
use crate::config::AppConfig;
use crate::context::provide_app_context;
use crate::pages::{ChangeItemPage, DashboardPage};

#[component]
pub fn App() -> impl IntoView {
    provide_app_context(AppConfig::from_build_env());

    view! {
        <Router>
            <ToastContainer />
            <main class="app-layout">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=DashboardPage />
                    <Route path=path!("/dashboard") view=DashboardPage />
                    <Route path=path!("/items/edit") view=ChangeItemPage />
                </Routes>
            </main>
        </Router>
    }
}
