//! Toast Notifications
//!
//! Plain queue of transient messages. The reactive wrapper lives in
//! `context::ToastContext`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
        }
    }
}

/// Message requested by a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

impl ToastMessage {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Queued toast with a stable id for keyed rendering and dismissal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub message: ToastMessage,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Append a toast and return its id
    pub fn push(&mut self, message: ToastMessage) -> u32 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, message });
        id
    }

    /// Remove by id; unknown ids are ignored (already dismissed by click)
    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Sink for user-facing notifications
pub trait Notifier {
    fn notify(&self, message: ToastMessage);
}
