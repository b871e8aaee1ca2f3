//! Round avatar with an initials fallback.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use issues::Person;

#[component]
pub fn Avatar(person: Person, #[prop(optional)] small: bool) -> impl IntoView {
    let initials = person.initials();
    let body = match person.avatar {
        Some(src) => view! { <img class="avatar__image" src=src alt=person.name/> }.into_any(),
        None => view! { <span class="avatar__fallback">{initials}</span> }.into_any(),
    };

    view! {
        <span class="avatar" class:avatar--small=small>
            {body}
        </span>
    }
}
