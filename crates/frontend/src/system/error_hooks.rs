//! Last-resort reporting of uncaught errors and unhandled promise rejections.
//!
//! The bootstrap creates an `ErrorReporter` and hands it to
//! `install_error_hooks`. The returned `ErrorHooks` owns the window listeners;
//! dropping it detaches them.

use contracts::shared::notification::{ErrorSource, Notification};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, PromiseRejectionEvent, Window};

/// Explicit sink for errors that no component caught.
#[derive(Clone, Copy)]
pub struct ErrorReporter {
    callback: Callback<Notification>,
}

impl ErrorReporter {
    pub fn new(callback: impl Fn(Notification) + Send + Sync + 'static) -> Self {
        Self {
            callback: Callback::new(callback),
        }
    }

    pub fn report(&self, source: ErrorSource, detail: &str) {
        self.callback.run(Notification::from_error(source, detail));
    }
}

pub struct ErrorHooks {
    window: Window,
    on_error: Closure<dyn FnMut(ErrorEvent)>,
    on_rejection: Closure<dyn FnMut(PromiseRejectionEvent)>,
}

impl Drop for ErrorHooks {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("error", self.on_error.as_ref().unchecked_ref());
        let _ = self.window.remove_event_listener_with_callback(
            "unhandledrejection",
            self.on_rejection.as_ref().unchecked_ref(),
        );
    }
}

pub fn install_error_hooks(reporter: ErrorReporter) -> Result<ErrorHooks, String> {
    let window = web_sys::window().ok_or("No window object")?;

    let on_error = Closure::wrap(Box::new(move |event: ErrorEvent| {
        let error = event.error();
        let thrown = if error.is_undefined() || error.is_null() {
            None
        } else {
            Some(describe_js_value(&error))
        };
        let detail = error_event_detail(thrown, event.message());
        log::error!("Global error: {}", detail);
        reporter.report(ErrorSource::Uncaught, &detail);
    }) as Box<dyn FnMut(ErrorEvent)>);

    let on_rejection = Closure::wrap(Box::new(move |event: PromiseRejectionEvent| {
        let detail = describe_js_value(&event.reason());
        log::error!("Unhandled promise rejection: {}", detail);
        reporter.report(ErrorSource::UnhandledRejection, &detail);
    }) as Box<dyn FnMut(PromiseRejectionEvent)>);

    window
        .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
        .map_err(|e| format!("Failed to attach error listener: {:?}", e))?;
    window
        .add_event_listener_with_callback("unhandledrejection", on_rejection.as_ref().unchecked_ref())
        .map_err(|e| format!("Failed to attach rejection listener: {:?}", e))?;

    Ok(ErrorHooks {
        window,
        on_error,
        on_rejection,
    })
}

/// Human-readable text for any thrown JS value.
pub fn describe_js_value(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    if value.is_undefined() || value.is_null() {
        return "unknown error".to_string();
    }
    format!("{:?}", value)
}

/// Cross-origin script errors carry no error object, only the event message.
fn error_event_detail(thrown: Option<String>, event_message: String) -> String {
    match thrown {
        Some(text) if !text.is_empty() => text,
        _ if !event_message.is_empty() => event_message,
        _ => "unknown error".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_event_detail() {
        assert_eq!(
            error_event_detail(Some("x is undefined".into()), "Uncaught TypeError".into()),
            "x is undefined"
        );
        assert_eq!(error_event_detail(None, "Script error.".into()), "Script error.");
        assert_eq!(error_event_detail(Some(String::new()), String::new()), "unknown error");
    }
}
