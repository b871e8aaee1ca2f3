#![cfg(feature = "ssr")]

use leptos::tachys::view::RenderHtml;

use super::*;

fn render(state: IssueListState) -> String {
    Owner::new().with(|| {
        provide_context(RwSignal::new(state));
        view! { <IssuesView/> }.to_html()
    })
}

#[test]
fn conflicting_filters_render_empty_state() {
    let mut state = IssueListState::default();
    state.set_status_value("open");
    state.set_priority_value("low");

    let html = render(state);
    assert!(html.contains("No issues found"));
    assert!(html.contains("Try adjusting your search or filter criteria"));
    assert!(html.contains("0 of 4 issues"));
}

#[test]
fn matching_filter_omits_empty_state() {
    let mut state = IssueListState::default();
    state.set_query("login".to_owned());

    let html = render(state);
    assert!(!html.contains("No issues found"));
    assert!(html.contains("ISS-001"));
    assert!(html.contains("1 of 4 issues"));
}
