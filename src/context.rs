//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::AppConfig;
use crate::toast::{Notifier, Toast, ToastMessage, ToastQueue};

/// App-wide toast queue
#[derive(Clone, Copy)]
pub struct ToastContext {
    queue: RwSignal<ToastQueue>,
    duration_ms: u32,
}

impl ToastContext {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            duration_ms,
        }
    }

    /// Currently visible toasts, oldest first
    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|queue| queue.toasts().to_vec())
    }

    /// Show a toast and schedule its removal
    pub fn add_toast(&self, message: ToastMessage) {
        let Some(id) = self.queue.try_update(|queue| queue.push(message)) else {
            return;
        };
        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(ctx.duration_ms).await;
            ctx.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u32) {
        self.queue.try_update(|queue| queue.dismiss(id));
    }
}

impl Notifier for ToastContext {
    fn notify(&self, message: ToastMessage) {
        self.add_toast(message);
    }
}

/// Provide config and toasts to all children
pub fn provide_app_context(config: AppConfig) {
    provide_context(ToastContext::new(config.toast_duration_ms));
    provide_context(config);
}

pub fn use_toasts() -> ToastContext {
    expect_context::<ToastContext>()
}

pub fn use_config() -> AppConfig {
    expect_context::<AppConfig>()
}
