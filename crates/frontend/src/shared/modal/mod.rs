use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Модальное окно поверх страницы. Закрывается по Escape, клику по фону и кнопке в заголовке.
#[component]
pub fn Modal(
    /// Title of the modal
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Extra CSS class for the dialog box, e.g. "modal--lg"
    #[prop(optional, into)]
    class: String,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Handle Escape key; the listener lives as long as the modal
    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    let handle_overlay_click = move |_| {
        on_close.run(());
    };

    // Prevent click propagation from modal content
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let dialog_class = if class.is_empty() {
        "modal".to_string()
    } else {
        format!("modal {}", class)
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class=dialog_class role="dialog" aria-modal="true" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                <div class="modal-footer">
                    <button class="button button--secondary" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
