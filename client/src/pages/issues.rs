//! Filterable issue list view.
//!
//! SYSTEM CONTEXT
//! ==============
//! The filter card writes `IssueListState`; the visible list is a `Memo`
//! re-derived from the full inventory whenever any criterion changes.

use leptos::prelude::*;

use issues::{Issue, Priority, Status, mock_issues};

use crate::components::issue_card::IssueCard;
use crate::state::issue_list::{IssueListState, summary_label};

#[component]
pub fn IssuesView() -> impl IntoView {
    let issue_list = expect_context::<RwSignal<IssueListState>>();
    let visible = Memo::new(move |_| issue_list.with(IssueListState::visible));
    let total = mock_issues().len();

    view! {
        <section class="view view--issues">
            <div class="view__heading">
                <h1>"Issues"</h1>
                <span class="badge">{move || summary_label(visible.get().len(), total)}</span>
            </div>

            <FilterCard issue_list=issue_list/>

            <div class="issue-grid">
                {move || {
                    visible
                        .get()
                        .into_iter()
                        .map(|issue: &'static Issue| view! { <IssueCard issue=issue/> })
                        .collect::<Vec<_>>()
                }}
            </div>

            <Show when=move || visible.get().is_empty()>
                <div class="card empty-state">
                    <span class="empty-state__icon" aria-hidden="true">"⛛"</span>
                    <h3>"No issues found"</h3>
                    <p>"Try adjusting your search or filter criteria"</p>
                </div>
            </Show>
        </section>
    }
}

/// Search box plus status and priority selects.
#[component]
fn FilterCard(issue_list: RwSignal<IssueListState>) -> impl IntoView {
    let status_options = Status::ALL
        .into_iter()
        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
        .collect::<Vec<_>>();
    let priority_options = Priority::ALL
        .into_iter()
        .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
        .collect::<Vec<_>>();

    view! {
        <div class="card filter-card">
            <div class="filter-card__search">
                <span class="filter-card__search-icon" aria-hidden="true">"⌕"</span>
                <input
                    class="input"
                    type="search"
                    placeholder="Search issues..."
                    prop:value=move || issue_list.get().filter.query
                    on:input=move |ev| {
                        let query = event_target_value(&ev);
                        issue_list.update(|s| s.set_query(query));
                    }
                />
            </div>
            <div class="filter-card__selects">
                <select
                    class="select"
                    prop:value=move || issue_list.get().filter.status.to_string()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        issue_list.update(|s| s.set_status_value(&value));
                    }
                >
                    <option value="all">"All Status"</option>
                    {status_options}
                </select>
                <select
                    class="select"
                    prop:value=move || issue_list.get().filter.priority.to_string()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        issue_list.update(|s| s.set_priority_value(&value));
                    }
                >
                    <option value="all">"All Priority"</option>
                    {priority_options}
                </select>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "issues_test.rs"]
mod issues_test;
