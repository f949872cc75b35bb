/// Утилиты для списков: индикатор сортировки и поле поиска с debounce
use contracts::shared::table_view::{SortDirection, SortState};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

const SEARCH_DEBOUNCE_MS: i32 = 300;

/// Получить индикатор сортировки для заголовка колонки
pub fn get_sort_indicator(sort: SortState, column: usize) -> &'static str {
    match (sort.column, sort.direction) {
        (Some(c), SortDirection::Ascending) if c == column => " ▲",
        (Some(c), SortDirection::Descending) if c == column => " ▼",
        _ => " ⇅",
    }
}

pub fn get_sort_class(sort: SortState, column: usize) -> &'static str {
    if sort.column == Some(column) {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}

/// Поле поиска с debounce и кнопкой очистки
///
/// Every keystroke restarts a 300 ms timer; `on_change` receives the value
/// once typing pauses. Clearing fires immediately.
#[component]
pub fn SearchInput(
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(String::new());
    let debounce_timeout = StoredValue::new(None::<i32>);

    let cancel_pending = move || {
        if let (Some(timeout_id), Some(window)) = (debounce_timeout.get_value(), web_sys::window()) {
            window.clear_timeout_with_handle(timeout_id);
        }
        debounce_timeout.set_value(None);
    };

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        cancel_pending();

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };
        let closure = wasm_bindgen::closure::Closure::once_into_js(move || {
            on_change.run(new_value);
        });

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.unchecked_ref::<js_sys::Function>(),
            SEARCH_DEBOUNCE_MS,
        ) {
            Ok(timeout_id) => debounce_timeout.set_value(Some(timeout_id)),
            Err(e) => log::warn!("setTimeout failed: {:?}", e),
        }
    };

    let clear_filter = move |_| {
        cancel_pending();
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="search"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        let sort = SortState::default().clicked(1);
        assert_eq!(get_sort_indicator(sort, 1), " ▲");
        assert_eq!(get_sort_indicator(sort.clicked(1), 1), " ▼");
        assert_eq!(get_sort_indicator(sort, 0), " ⇅");
        assert_eq!(get_sort_indicator(SortState::default(), 0), " ⇅");
        assert_eq!(get_sort_class(sort, 1), "sort-icon active");
    }
}
