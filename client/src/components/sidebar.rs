//! Collapsible navigation sidebar.
//!
//! ARCHITECTURE
//! ============
//! The sidebar is the only writer of `UiState::active_view`; the index page
//! reads it to decide which top-level view is mounted.

use leptos::prelude::*;

use crate::state::ui::{ActiveView, UiState};

/// Left sidebar with brand, view navigation and a settings footer.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let collapsed = move || ui.get().sidebar_collapsed;

    let nav_items = ActiveView::ALL
        .into_iter()
        .map(|view_id| {
            view! {
                <button
                    class="sidebar__nav-item"
                    class:sidebar__nav-item--active=move || ui.get().is_active(view_id)
                    title=view_id.label()
                    on:click=move |_| ui.update(|u| u.show(view_id))
                >
                    <span class="sidebar__icon" aria-hidden="true">{view_id.icon()}</span>
                    <Show when=move || !collapsed()>
                        <span class="sidebar__label">{view_id.label()}</span>
                    </Show>
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <aside class="sidebar" class:sidebar--collapsed=collapsed>
            <div class="sidebar__brand-row">
                <Show when=move || !collapsed()>
                    <h1 class="sidebar__brand">"Issues Tracker"</h1>
                </Show>
                <button
                    class="btn btn--ghost sidebar__toggle"
                    title="Toggle sidebar"
                    on:click=move |_| ui.update(UiState::toggle_sidebar)
                >
                    {move || if collapsed() { "›" } else { "‹" }}
                </button>
            </div>

            <nav class="sidebar__nav">{nav_items}</nav>

            <div class="sidebar__footer">
                <button class="sidebar__nav-item" title="Settings">
                    <span class="sidebar__icon" aria-hidden="true">"⚙"</span>
                    <Show when=move || !collapsed()>
                        <span class="sidebar__label">"Settings"</span>
                    </Show>
                </button>
            </div>
        </aside>
    }
}
