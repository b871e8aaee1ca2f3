//! Card summarizing a single issue in the list.

use leptos::prelude::*;

use issues::Issue;

use crate::components::avatar::Avatar;
use crate::util::badge::{priority_badge_class, status_badge_class};

#[component]
pub fn IssueCard(issue: &'static Issue) -> impl IntoView {
    let assignee = issue.assignee.clone().map(|person| {
        view! {
            <span class="issue-card__person">
                "Assignee:"
                <Avatar person=person.clone() small=true/>
                <span>{person.name}</span>
            </span>
        }
    });

    view! {
        <article class="card issue-card">
            <div class="issue-card__badges">
                <span class=status_badge_class(issue.status)>{issue.status.badge()}</span>
                <span class=priority_badge_class(issue.priority)>{issue.priority.label()}</span>
                <span class="issue-card__id">{issue.id.as_str()}</span>
            </div>

            <h3 class="issue-card__title">{issue.title.as_str()}</h3>
            <p class="issue-card__description">{issue.description.as_str()}</p>

            <div class="issue-card__footer">
                <div class="issue-card__people">
                    <span class="issue-card__person">
                        "Reporter:"
                        <Avatar person=issue.reporter.clone() small=true/>
                        <span>{issue.reporter.name.as_str()}</span>
                    </span>
                    {assignee}
                </div>
                <div class="issue-card__meta">
                    <span class="issue-card__updated">{format!("Updated {}", issue.updated_label())}</span>
                    <button class="btn btn--ghost btn--small" title="More actions">"⋯"</button>
                </div>
            </div>
        </article>
    }
}
