use crate::shared::icons::icon;
use leptos::prelude::*;

/// Заголовок страницы: иконка, название, подзаголовок и кнопки действий
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Icon name from the icon() helper
    #[prop(optional, into)]
    icon_name: Option<String>,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Action buttons on the right
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                {icon_name.map(|name| icon(&name))}
                <div class="page-header__text">
                    <h1 class="page__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}
