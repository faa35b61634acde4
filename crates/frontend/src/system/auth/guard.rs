use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_session;

/// Renders children for a signed-in user, otherwise sends them to the login page
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=|| view! { <Redirect path="/" /> }
        >
            {children()}
        </Show>
    }
}

/// Renders children only for the admin role
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show when=move || session.get().is_admin()>
            {children()}
        </Show>
    }
}
