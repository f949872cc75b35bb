//! Clipboard utilities for copying text to clipboard
//!
//! Uses the Web Clipboard API. Both outcomes are reported to the user
//! through the notification service.

use crate::shared::notifications::NotificationService;
use crate::system::error_hooks::describe_js_value;
use contracts::shared::notification::{ErrorSource, COPIED_MESSAGE};
use wasm_bindgen_futures::{spawn_local, JsFuture};

/// Copy text to the system clipboard
///
/// # Example
/// ```ignore
/// copy_to_clipboard("db.users.find({})", use_notifications());
/// ```
pub fn copy_to_clipboard(text: &str, notifications: NotificationService) {
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            notifications.report(ErrorSource::Clipboard, "No window object");
            return;
        };
        let clipboard = window.navigator().clipboard();
        match JsFuture::from(clipboard.write_text(&text)).await {
            Ok(_) => notifications.show_success(COPIED_MESSAGE),
            Err(e) => notifications.report(ErrorSource::Clipboard, &describe_js_value(&e)),
        }
    });
}
