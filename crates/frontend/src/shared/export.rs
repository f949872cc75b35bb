/// Экспорт данных в JSON-файл и импорт JSON-файла, выбранного пользователем
use crate::shared::notifications::NotificationService;
use contracts::shared::notification::{ErrorSource, Notification};
use contracts::shared::transfer::{export_filename, export_json, parse_import};
use leptos::prelude::*;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, HtmlInputElement, Url};

/// Сериализует значение в JSON (отступ 2 пробела) и инициирует скачивание
///
/// `filename` falls back to `export.json` when missing or blank.
pub fn export_to_json<T: Serialize + ?Sized>(data: &T, filename: Option<&str>) -> Result<(), String> {
    let content = export_json(data).map_err(|e| e.to_string())?;
    let blob = create_json_blob(&content)?;
    download_blob(&blob, &export_filename(filename))
}

/// Создает Blob объект с JSON данными
fn create_json_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("application/json");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание Blob через браузер
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    web_sys::HtmlElement::style(&anchor)
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    // Добавляем в DOM, кликаем и удаляем
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

/// Opens a file picker for `.json` files and passes the parsed content to
/// `on_parsed`. Unreadable or invalid files produce one error notification
/// and `on_parsed` is not called. Cancelling the picker does nothing.
pub fn import_from_json(on_parsed: Callback<Value>, notifications: NotificationService) {
    if let Err(e) = open_json_picker(on_parsed, notifications) {
        notifications.report(ErrorSource::ImportParse, &e);
    }
}

fn open_json_picker(on_parsed: Callback<Value>, notifications: NotificationService) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document object")?;

    let input = document
        .create_element("input")
        .map_err(|e| format!("Failed to create input: {:?}", e))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|e| format!("Failed to cast to input: {:?}", e))?;
    input.set_type("file");
    input.set_accept(".json");

    let onchange = wasm_bindgen::closure::Closure::once_into_js(move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let Some(file) = file else { return };

        leptos::task::spawn_local(async move {
            match JsFuture::from(file.text()).await {
                Ok(text) => deliver_import(
                    &text.as_string().unwrap_or_default(),
                    |value| on_parsed.run(value),
                    |notification| notifications.notify(notification),
                ),
                Err(e) => notifications.report(ErrorSource::ImportParse, &format!("{:?}", e)),
            }
        });
    });

    input.set_onchange(Some(onchange.unchecked_ref()));
    input.click();
    Ok(())
}

/// Either hands the parsed value to `on_parsed` or reports the parse error.
/// Exactly one of the two callbacks runs.
pub fn deliver_import(
    text: &str,
    on_parsed: impl FnOnce(Value),
    on_error: impl FnOnce(Notification),
) {
    match parse_import(text) {
        Ok(value) => on_parsed(value),
        Err(e) => on_error(Notification::from_error(ErrorSource::ImportParse, &e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;

    #[test]
    fn test_deliver_valid_import() {
        let exported = export_json(&json!({ "databases": ["admin", "shop"], "count": 2 })).unwrap();
        let parsed = RefCell::new(None);
        let errors = RefCell::new(Vec::new());

        deliver_import(
            &exported,
            |v| *parsed.borrow_mut() = Some(v),
            |n| errors.borrow_mut().push(n),
        );

        assert_eq!(
            parsed.into_inner(),
            Some(json!({ "databases": ["admin", "shop"], "count": 2 }))
        );
        assert!(errors.into_inner().is_empty());
    }

    #[test]
    fn test_deliver_invalid_import() {
        let called = RefCell::new(false);
        let errors = RefCell::new(Vec::new());

        deliver_import(
            "{\"databases\": [",
            |_| *called.borrow_mut() = true,
            |n| errors.borrow_mut().push(n),
        );

        assert!(!called.into_inner());
        let errors = errors.into_inner();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].is_error());
        assert!(errors[0].message.starts_with("Invalid JSON file: "));
    }
}
