//! Metrics dashboard view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the static datasets from `issues::metrics`. Only the "last
//! updated" badge changes, and only once after hydration.

use leptos::prelude::*;

use issues::metrics::{DAILY_ACTIVITY, KPIS, PRIORITY_BREAKDOWN, STATUS_DISTRIBUTION, Slice};

use crate::components::charts::{BarChart, BarSeries, PieChart};
use crate::components::kpi_card::KpiCard;
use crate::util::clock::local_time_label;

const KPI_ICONS: [&str; 4] = ["↗", "⚠", "✓", "◷"];

#[component]
pub fn DashboardView() -> impl IntoView {
    let last_updated = RwSignal::new(String::new());
    Effect::new(move || last_updated.set(local_time_label()));

    let kpi_cards = KPIS
        .into_iter()
        .zip(KPI_ICONS)
        .map(|(kpi, icon)| view! { <KpiCard kpi=kpi icon=icon/> })
        .collect::<Vec<_>>();

    let status_slices: &'static [Slice] = &STATUS_DISTRIBUTION;

    let priority_categories = PRIORITY_BREAKDOWN.iter().map(|s| s.name).collect::<Vec<_>>();
    let priority_series = vec![BarSeries {
        name: "Count",
        color: "primary",
        values: PRIORITY_BREAKDOWN.iter().map(|s| s.value).collect(),
    }];

    let day_categories = DAILY_ACTIVITY.iter().map(|d| d.date).collect::<Vec<_>>();
    let activity_series = vec![
        BarSeries { name: "Created", color: "status-open", values: DAILY_ACTIVITY.iter().map(|d| d.created).collect() },
        BarSeries {
            name: "Resolved",
            color: "status-done",
            values: DAILY_ACTIVITY.iter().map(|d| d.resolved).collect(),
        },
    ];

    view! {
        <section class="view view--dashboard">
            <div class="view__heading">
                <h1>"Dashboard"</h1>
                <span class="badge">{move || format!("Last updated: {}", last_updated.get())}</span>
            </div>

            <div class="kpi-grid">{kpi_cards}</div>

            <div class="chart-grid">
                <div class="card">
                    <h2 class="card__title">"Issue Status Distribution"</h2>
                    <PieChart slices=status_slices/>
                </div>
                <div class="card">
                    <h2 class="card__title">"Priority Breakdown"</h2>
                    <BarChart categories=priority_categories series=priority_series/>
                </div>
            </div>

            <div class="card">
                <h2 class="card__title">"Daily Activity"</h2>
                <BarChart categories=day_categories series=activity_series legend=true/>
            </div>
        </section>
    }
}
