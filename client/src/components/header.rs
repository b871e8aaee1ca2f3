//! Top header bar with global search, create action and user badge.
//!
//! SYSTEM CONTEXT
//! ==============
//! The search box writes the same query as the issues page filter card and
//! switches to the issues view so results are visible while typing.

use leptos::prelude::*;

use issues::Person;

use crate::components::avatar::Avatar;
use crate::state::create_issue::CreateIssueState;
use crate::state::issue_list::IssueListState;
use crate::state::ui::{ActiveView, UiState};

const CURRENT_USER_AVATAR: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=32&h=32&fit=crop&crop=face";

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let issue_list = expect_context::<RwSignal<IssueListState>>();
    let create = expect_context::<RwSignal<CreateIssueState>>();

    let on_search = move |ev: leptos::ev::Event| {
        let query = event_target_value(&ev);
        issue_list.update(|s| s.set_query(query));
        ui.update(|u| u.show(ActiveView::Issues));
    };

    view! {
        <header class="header">
            <div class="header__search">
                <span class="header__search-icon" aria-hidden="true">"⌕"</span>
                <input
                    class="input header__search-input"
                    type="search"
                    placeholder="Search issues..."
                    prop:value=move || issue_list.get().filter.query
                    on:input=on_search
                />
            </div>

            <div class="header__actions">
                <button class="btn btn--primary" on:click=move |_| create.update(CreateIssueState::show)>
                    "+ Create Issue"
                </button>
                <span class="badge badge--success">"Admin"</span>
                <Avatar person=Person::new("John Doe", Some(CURRENT_USER_AVATAR))/>
            </div>
        </header>
    }
}
