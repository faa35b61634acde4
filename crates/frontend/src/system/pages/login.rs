use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::shared::config::use_ui_config;
use crate::system::auth::context::{do_login, use_session};

pub const DASHBOARD_PATH: &str = "/dashboard";

#[component]
pub fn LoginPage() -> impl IntoView {
    let ui = use_ui_config();
    let session = use_session();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (leaving, set_leaving) = signal(false);
    let navigated = StoredValue::new(false);

    // Exit animation end or the fallback timer, whichever comes first
    let finish = move || {
        if !navigated.get_value() {
            navigated.set_value(true);
            navigate(DASHBOARD_PATH, Default::default());
        }
    };

    // Already signed in: skip the form
    Effect::new({
        let finish = finish.clone();
        move |_| {
            if session.get_untracked().is_authenticated() && !leaving.get_untracked() {
                finish();
            }
        }
    });

    let on_submit = {
        let finish = finish.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if leaving.get_untracked() {
                return;
            }
            match do_login(&username.get_untracked(), &password.get_untracked()) {
                Ok(_) => {
                    set_error_message.set(None);
                    set_leaving.set(true);
                    let finish = finish.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(ui.login_transition_ms).await;
                        finish();
                    });
                }
                Err(e) => set_error_message.set(Some(e.to_string())),
            }
        }
    };

    view! {
        <div
            class="login-container"
            class:page-exit=move || leaving.get()
            on:animationend=move |_| {
                if leaving.get_untracked() {
                    finish();
                }
            }
        >
            <div class="login-box">
                <h1>"Almoxarifado"</h1>
                <h2>"Acesso ao painel"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Usuário"</label>
                        <input
                            type="text"
                            id="username"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            disabled=move || leaving.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Senha"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || leaving.get()
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || leaving.get()>
                        {move || if leaving.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
