//! Dashboard page: session gate, dashboard state and the entry animation.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::dashboard_store::DashboardStore;
use crate::layout::DashboardLayout;
use crate::shared::config::use_ui_config;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireSession;

#[component]
fn Dashboard() -> impl IntoView {
    let session = use_session();
    let ui = use_ui_config();

    let store = DashboardStore::new();
    provide_context(store);
    store.init_url_sync(session.get_untracked().role());

    let (entering, set_entering) = signal(true);
    spawn_local(async move {
        TimeoutFuture::new(ui.login_transition_ms).await;
        set_entering.set(false);
    });

    view! {
        <div class="dashboard" class:page-enter=move || entering.get()>
            <DashboardLayout />
        </div>
    }
}

/// `/dashboard`; anonymous visitors are redirected to the login page
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireSession>
            <Dashboard />
        </RequireSession>
    }
}
