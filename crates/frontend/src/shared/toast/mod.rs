//! Transient notifications in the corner of the dashboard.
//!
//! A toast stays visible for `toast_visible_ms`, then gets the leaving class
//! for its fade-out and is removed at `toast_remove_ms`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config::UiConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            Self::Info => "toast toast--info",
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub leaving: bool,
}

/// Toasts currently on screen, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            kind,
            message: message.into(),
            leaving: false,
        });
        self.next_id
    }

    pub fn mark_leaving(&mut self, id: u64) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.leaving = true;
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
    visible_ms: u32,
    remove_ms: u32,
}

impl ToastService {
    pub fn new(ui: &UiConfig) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            visible_ms: ui.toast_visible_ms,
            remove_ms: ui.toast_remove_ms.max(ui.toast_visible_ms),
        }
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(ToastKind::Info, message.into());
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    fn show(&self, kind: ToastKind, message: String) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, message));

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(svc.visible_ms).await;
            svc.queue.update(|q| q.mark_leaving(id));
            TimeoutFuture::new(svc.remove_ms - svc.visible_ms).await;
            svc.queue.update(|q| q.remove(id));
        });
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Renders the toasts of the [`ToastService`] in context
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_toasts();

    view! {
        <div class="toast-container" aria-live="polite">
            <For
                each=move || svc.queue.with(|q| q.toasts().to_vec())
                key=|toast| (toast.id, toast.leaving)
                children=|toast: Toast| {
                    let class = if toast.leaving {
                        format!("{} toast--leaving", toast.kind.class())
                    } else {
                        toast.kind.class().to_string()
                    };
                    view! { <div class=class>{toast.message}</div> }
                }
            />
        </div>
    }
}
