//! Transient user notifications (toasts).
//!
//! Stores and views report through the [`Notifier`] trait; the app provides a
//! [`ToastService`] that renders them in the corner of the screen via
//! [`ToastHost`].

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl NotificationLevel {
    /// How long a toast of this level stays on screen
    pub fn duration_ms(&self) -> u32 {
        match self {
            NotificationLevel::Success | NotificationLevel::Info => 3000,
            NotificationLevel::Warning | NotificationLevel::Error => 5000,
        }
    }

    fn css_modifier(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "toast--success",
            NotificationLevel::Info => "toast--info",
            NotificationLevel::Warning => "toast--warning",
            NotificationLevel::Error => "toast--error",
        }
    }
}

pub trait Notifier {
    fn notify(&self, level: NotificationLevel, message: String);

    fn success(&self, message: &str) {
        self.notify(NotificationLevel::Success, message.to_string());
    }

    fn warning(&self, message: &str) {
        self.notify(NotificationLevel::Warning, message.to_string());
    }

    fn error(&self, message: &str) {
        self.notify(NotificationLevel::Error, message.to_string());
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub level: NotificationLevel,
    pub message: String,
}

/// Toast queue shared through context.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastService {
    fn notify(&self, level: NotificationLevel, message: String) {
        match level {
            NotificationLevel::Error => log::error!("{}", message),
            NotificationLevel::Warning => log::warn!("{}", message),
            _ => log::info!("{}", message),
        }

        let id = Uuid::new_v4();
        self.toasts.update(|list| list.push(Toast { id, level, message }));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(level.duration_ms()).await;
            this.dismiss(id);
        });
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found in context")
}

/// Renders the toast stack; click a toast to dismiss it early.
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toasts();

    view! {
        <div class="toast-stack">
            {move || service.toasts.get().into_iter().map(|toast| {
                let id = toast.id;
                let class = format!("toast {}", toast.level.css_modifier());
                view! {
                    <div class=class role="status" on:click=move |_| service.dismiss(id)>
                        {toast.message}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
