use contracts::domain::a004_audit_log::{search, AuditLogEntry};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a004_audit_log::api::load_audit;
use crate::layout::dashboard_store::use_dashboard;
use crate::shared::api_client::{load_error_message, use_api};
use crate::shared::config::use_ui_config;
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::list_utils::SearchInput;
use crate::shared::load_generation::LoadGeneration;
use crate::shared::text_utils::TruncatedCell;
use crate::shared::toast::use_toasts;

const COLUMNS: usize = 5;

/// Audit trail, fetched on mount and after each admin mutation. Search runs
/// over the cached entries without further requests.
#[component]
pub fn AuditLogList() -> impl IntoView {
    let store = use_dashboard();
    let toasts = use_toasts();
    let ui = use_ui_config();
    let client = use_api();

    let (loading, set_loading) = signal(true);
    let (failure, set_failure) = signal(None::<String>);
    let generation = LoadGeneration::new();

    Effect::new(move |_| {
        store.audit_revision.track();
        let ticket = generation.begin();
        set_loading.set(true);

        let client = client.clone();
        spawn_local(async move {
            let result = load_audit(&client).await;
            // The store outlives this view; a late answer must not land in it
            if !generation.is_current(ticket) {
                return;
            }
            match result {
                Ok(entries) => {
                    store.audit_entries.set(entries);
                    set_failure.set(None);
                }
                Err(e) => {
                    log::error!("[loader] auditoria: {}", e);
                    let message = load_error_message(&e, "auditoria");
                    toasts.error(message.clone());
                    store.audit_entries.set(Vec::new());
                    set_failure.set(Some(message));
                }
            }
            set_loading.set(false);
        });
    });

    let visible = Memo::new(move |_| {
        let query = store.audit_query.get();
        store.audit_entries.with(|entries| search(entries, &query))
    });

    let body = move || {
        if loading.get() {
            return placeholder("Carregando...".to_string());
        }
        if let Some(message) = failure.get() {
            return placeholder(message);
        }
        let rows = visible.get();
        if rows.is_empty() {
            let message = if store.audit_query.with(|q| q.trim().is_empty()) {
                "Nenhum registro de auditoria."
            } else {
                "Nenhum registro corresponde à busca."
            };
            return placeholder(message.to_string());
        }
        rows.into_iter()
            .map(|entry| audit_row(entry, ui.audit_details_max_len))
            .collect_view()
            .into_any()
    };

    view! {
        <section class="panel">
            <div class="header">
                <div class="header__content">
                    <h2 class="header__title">"Auditoria"</h2>
                </div>
                <div class="header__actions">
                    <SearchInput
                        value=store.audit_query
                        on_change=Callback::new(move |v: String| store.audit_query.set(v))
                        debounce_ms=ui.audit_search_debounce_ms
                        placeholder="Buscar por usuário, ação, item ou detalhes..."
                    />
                </div>
            </div>
            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Data"</th>
                            <th class="table__header-cell">"Usuário"</th>
                            <th class="table__header-cell">"Ação"</th>
                            <th class="table__header-cell">"Item"</th>
                            <th class="table__header-cell">"Detalhes"</th>
                        </tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            </div>
        </section>
    }
}

fn placeholder(message: String) -> AnyView {
    view! {
        <tr>
            <td class="table__cell table__cell--empty" colspan=COLUMNS>{message}</td>
        </tr>
    }
    .into_any()
}

fn audit_row(entry: AuditLogEntry, details_max_len: usize) -> AnyView {
    let details = entry.clean_details();
    view! {
        <tr class="table__row">
            <td class="table__cell">{format_optional_datetime(entry.registered_at.as_deref())}</td>
            <td class="table__cell">{entry.user.unwrap_or_else(|| "-".to_string())}</td>
            <td class="table__cell">{entry.action.unwrap_or_else(|| "-".to_string())}</td>
            <td class="table__cell">
                {entry.item_id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())}
            </td>
            <td class="table__cell">
                <TruncatedCell text=details max_len=details_max_len />
            </td>
        </tr>
    }
    .into_any()
}
