use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::shared::notification::{ErrorSource, Notification, NotificationKind};
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    id: Uuid,
    message: String,
}

/// Сервис пользовательских уведомлений: ошибка в модальном окне, успех во всплывающем toast.
///
/// A new error replaces the one on screen; a new toast replaces the current
/// toast and restarts its timer.
#[derive(Clone, Copy)]
pub struct NotificationService {
    error: RwSignal<Option<String>>,
    toast: RwSignal<Option<Toast>>,
    toast_timeout_ms: u32,
}

impl NotificationService {
    pub fn new(toast_timeout_ms: u32) -> Self {
        Self {
            error: RwSignal::new(None),
            toast: RwSignal::new(None),
            toast_timeout_ms,
        }
    }

    pub fn show_error(&self, message: impl Into<String>) {
        let message = message.into();
        log::error!("{}", message);
        self.error.set(Some(message));
    }

    pub fn show_success(&self, message: impl Into<String>) {
        let id = Uuid::new_v4();
        self.toast.set(Some(Toast {
            id,
            message: message.into(),
        }));

        let toast = self.toast;
        let timeout = self.toast_timeout_ms;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(timeout).await;
            // only hide the toast this timer was started for
            if toast.with_untracked(|t| t.as_ref().map(|t| t.id)) == Some(id) {
                toast.set(None);
            }
        });
    }

    pub fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Error => self.show_error(notification.message),
            NotificationKind::Success => self.show_success(notification.message),
        }
    }

    pub fn report(&self, source: ErrorSource, detail: &str) {
        self.notify(Notification::from_error(source, detail));
    }

    pub fn dismiss_error(&self) {
        self.error.set(None);
    }

    pub fn dismiss_toast(&self) {
        self.toast.set(None);
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Renders the error modal and the success toast. Mount once near the root.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifications = use_notifications();
    let on_close = Callback::new(move |_| notifications.dismiss_error());

    view! {
        {move || {
            notifications.error.get().map(|message| {
                view! {
                    <Modal title="Error".to_string() on_close=on_close>
                        <div class="notification notification--error">
                            {icon("alert")}
                            <span class="notification__message">{message}</span>
                        </div>
                    </Modal>
                }
            })
        }}
        {move || {
            notifications.toast.get().map(|toast| {
                view! {
                    <div class="toast toast--success" role="status">
                        {icon("check")}
                        <span class="toast__message">{toast.message}</span>
                        <button
                            class="button button--icon toast__close"
                            on:click=move |_| notifications.dismiss_toast()
                        >
                            {icon("x")}
                        </button>
                    </div>
                }
            })
        }}
    }
}
