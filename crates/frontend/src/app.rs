use crate::routes::routes::AppRoutes;
use crate::shared::api_client::{ApiClient, GlooTransport};
use crate::shared::config::load_config;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::provide_session;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();

    provide_context(config.ui);
    provide_context(ToastService::new(&config.ui));
    provide_context(ApiClient::new(GlooTransport, config.api));
    provide_session();

    view! {
        <AppRoutes />
        <ToastHost />
    }
}
