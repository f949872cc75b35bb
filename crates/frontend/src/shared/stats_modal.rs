//! Кнопка "Statistics": загружает `/api/v1/stats` и показывает карточки в модальном окне.
//!
//! A failed or error-flagged response produces one error notification and
//! no modal; a previously shown panel is not touched.

use crate::shared::api_utils::fetch_stats;
use crate::shared::components::stat_card::StatCard;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::notifications::use_notifications;
use contracts::shared::stats::StatsPanel;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn StatsButton() -> impl IntoView {
    let config = StoredValue::new(use_context::<AppConfig>().unwrap_or_default());
    let notifications = use_notifications();

    let panel = RwSignal::new(None::<StatsPanel>);
    let is_loading = RwSignal::new(false);

    let load_stats = move |_| {
        if is_loading.get_untracked() {
            return;
        }
        is_loading.set(true);
        let config = config.get_value();
        spawn_local(async move {
            match fetch_stats(&config).await {
                Ok(stats) => {
                    log::debug!("server {} up for {}s", stats.version, stats.uptime);
                    panel.set(Some(StatsPanel::from_stats(&stats)));
                }
                Err(e) => notifications.notify(e.to_notification()),
            }
            is_loading.set(false);
        });
    };

    let on_close = Callback::new(move |_| panel.set(None));

    view! {
        <Button
            appearance=ButtonAppearance::Secondary
            on_click=load_stats
            disabled=Signal::derive(move || is_loading.get())
        >
            {icon("chart")}
            {move || if is_loading.get() { " Loading..." } else { " Statistics" }}
        </Button>

        {move || panel.get().map(|panel| view! {
            <Modal title="Server statistics".to_string() class="modal--lg" on_close=on_close>
                <div class="stats-panel">
                    {panel.cards
                        .into_iter()
                        .map(|card| view! { <StatCard card=card /> })
                        .collect_view()}
                </div>
            </Modal>
        })}
    }
}
