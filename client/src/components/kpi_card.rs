//! Headline metric card for the dashboard.

use leptos::prelude::*;

use issues::metrics::{Kpi, Tone};

#[component]
pub fn KpiCard(kpi: Kpi, icon: &'static str) -> impl IntoView {
    let tone_class = match kpi.tone {
        Tone::Neutral => "kpi-card__value",
        Tone::Critical => "kpi-card__value kpi-card__value--critical",
        Tone::Done => "kpi-card__value kpi-card__value--done",
    };

    view! {
        <div class="card kpi-card">
            <div class="kpi-card__header">
                <span class="kpi-card__title">{kpi.title}</span>
                <span class="kpi-card__icon" aria-hidden="true">{icon}</span>
            </div>
            <div class=tone_class>{kpi.value}</div>
            <p class="kpi-card__caption">{kpi.caption}</p>
        </div>
    }
}
