use crate::shared::icons::icon;
use contracts::shared::stats::StatsCard;
use leptos::prelude::*;

#[component]
pub fn StatCard(card: StatsCard) -> impl IntoView {
    let class = if card.full_width {
        "stat-card stat-card--wide"
    } else {
        "stat-card"
    };

    view! {
        <div class=class>
            <div class="stat-card__header">
                <span class="stat-card__icon">{icon(card.icon)}</span>
                <h6 class="stat-card__title">{card.title}</h6>
            </div>
            <div class="stat-card__content">
                {card.lines
                    .into_iter()
                    .map(|line| view! {
                        <p class="stat-card__line">
                            <strong>{line.label}": "</strong>
                            <span>{line.value}</span>
                        </p>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
