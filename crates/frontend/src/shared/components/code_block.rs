use crate::shared::clipboard::copy_to_clipboard;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use leptos::prelude::*;

/// Блок кода с кнопкой копирования в правом верхнем углу
#[component]
pub fn CodeBlock(
    #[prop(into)]
    code: Signal<String>,
) -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="code-block" style="position: relative;">
            <pre><code>{move || code.get()}</code></pre>
            <button
                class="button button--icon code-block__copy"
                style="position: absolute; top: 0; right: 0; margin: 8px;"
                title="Copy"
                on:click=move |_| copy_to_clipboard(&code.get_untracked(), notifications)
            >
                {icon("copy")}
            </button>
        </div>
    }
}
