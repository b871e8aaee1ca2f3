//! Root page: sidebar, header and the active top-level view.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::create_issue_dialog::CreateIssueDialog;
use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::pages::dashboard::DashboardView;
use crate::pages::issues::IssuesView;
use crate::state::ui::{ActiveView, UiState};

#[component]
pub fn IndexPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let active_view = Memo::new(move |_| ui.get().active_view);

    view! {
        <div class="desk">
            <div class="desk__frame">
                <Sidebar/>
                <div class="desk__column">
                    <Header/>
                    <main class="desk__main">
                        {move || match active_view.get() {
                            ActiveView::Dashboard => view! { <DashboardView/> }.into_any(),
                            ActiveView::Issues => view! { <IssuesView/> }.into_any(),
                        }}
                    </main>
                </div>
            </div>
            <CreateIssueDialog/>
        </div>
    }
}
