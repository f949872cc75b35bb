use crate::pages::databases::DatabasesPage;
use crate::shared::config::AppConfig;
use crate::shared::notifications::{NotificationHost, NotificationService};
use crate::system::error_hooks::{install_error_hooks, ErrorReporter};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::info!("api base: '{}'", config.api_base);

    // Сервис уведомлений доступен всем страницам через context
    let notifications = NotificationService::new(config.toast_timeout_ms);
    provide_context(config);
    provide_context(notifications);

    let reporter = ErrorReporter::new(move |notification| notifications.notify(notification));
    match install_error_hooks(reporter) {
        // Listeners stay attached for as long as the root owner lives
        Ok(hooks) => {
            StoredValue::new_local(hooks);
        }
        Err(e) => log::error!("error hooks not installed: {}", e),
    }

    view! {
        <DatabasesPage />
        <NotificationHost />
    }
}
