//! Floating create button and the "Create New Issue" modal form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Inputs are controlled by `CreateIssueState`. A valid submit logs the
//! payload to the console and closes; nothing is stored.

use leptos::prelude::*;

use issues::Priority;

use crate::state::create_issue::CreateIssueState;

/// Dialog priority options, least urgent first.
const PRIORITY_OPTIONS: [Priority; 4] = [Priority::Low, Priority::Medium, Priority::High, Priority::Critical];

#[component]
pub fn CreateIssueDialog() -> impl IntoView {
    let create = expect_context::<RwSignal<CreateIssueState>>();

    let on_close = Callback::new(move |()| create.update(CreateIssueState::dismiss));
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        create.update(|s| {
            let _ = s.submit();
        });
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <button
            class="fab"
            title="Create issue"
            aria-label="Create issue"
            on:click=move |_| create.update(CreateIssueState::show)
        >
            "+"
        </button>

        <Show when=move || create.get().is_open>
            <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="dialog dialog--create"
                    role="dialog"
                    aria-modal="true"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <h2>"Create New Issue"</h2>
                    <form class="dialog__form" on:submit=on_submit>
                        <label class="dialog__label" for="issue-title">"Title"</label>
                        <input
                            id="issue-title"
                            class="dialog__input"
                            type="text"
                            placeholder="Brief description of the issue..."
                            required=true
                            autofocus=true
                            prop:value=move || create.get().draft.title
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                create.update(|s| s.set_title(value));
                            }
                        />

                        <label class="dialog__label" for="issue-description">"Description"</label>
                        <textarea
                            id="issue-description"
                            class="dialog__input dialog__textarea"
                            rows="6"
                            placeholder="Detailed description of the issue, steps to reproduce, expected behavior..."
                            required=true
                            prop:value=move || create.get().draft.description
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                create.update(|s| s.set_description(value));
                            }
                        ></textarea>

                        <label class="dialog__label" for="issue-priority">"Priority"</label>
                        <select
                            id="issue-priority"
                            class="dialog__input"
                            required=true
                            prop:value=move || create.get().priority_value()
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                create.update(|s| s.set_priority_value(&value));
                            }
                        >
                            <option value="" disabled=true>"Select priority level"</option>
                            {PRIORITY_OPTIONS
                                .into_iter()
                                .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>

                        <Show when=move || create.get().error.is_some()>
                            <p class="dialog__error">
                                {move || create.get().error.map(|e| e.to_string()).unwrap_or_default()}
                            </p>
                        </Show>

                        <div class="dialog__actions">
                            <button type="button" class="btn" on:click=move |_| on_close.run(())>
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn--primary">
                                "Create Issue"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
#[path = "create_issue_dialog_test.rs"]
mod create_issue_dialog_test;
