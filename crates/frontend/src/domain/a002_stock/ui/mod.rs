use contracts::domain::a001_item::aggregate::ItemId;
use contracts::domain::a002_stock::aggregate::Stock;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_stock::api::adjust_stock;
use crate::layout::dashboard_store::use_dashboard;
use crate::shared::api_client::{use_api, SubmitError};
use crate::shared::modal::{FormError, Modal};
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;

/// Admin dialog to change an item's total quantity
#[component]
pub fn AdjustStockModal(item_id: ItemId, name: String, stock: Stock) -> impl IntoView {
    let store = use_dashboard();
    let session = use_session();
    let toasts = use_toasts();
    let client = use_api();

    let new_total = RwSignal::new(stock.total.to_string());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let client = client.clone();
        let raw = new_total.get_untracked();
        error.set(None);
        spawn_local(async move {
            match adjust_stock(&client, item_id, &raw).await {
                Ok(()) => {
                    store.close_modal();
                    toasts.success("Estoque ajustado.");
                    store.refresh_after_mutation(session.get_untracked().role());
                }
                Err(e) => {
                    if let SubmitError::Api(api) = &e {
                        log::error!("[stock] adjust of item {} failed: {}", item_id, api);
                    }
                    error.set(Some(e.message("Erro ao ajustar estoque.")));
                }
            }
        });
    };

    view! {
        <Modal title=format!("Ajustar estoque: {}", name) on_close=Callback::new(move |_| store.close_modal())>
            <form class="form" on:submit=on_submit>
                <p class="form-hint">
                    {format!(
                        "Total atual: {} | Disponível: {} | Em uso: {}",
                        stock.total,
                        stock.available,
                        stock.units_out(),
                    )}
                </p>
                <label class="form-group">
                    "Nova quantidade total"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || new_total.get()
                        on:input=move |ev| new_total.set(event_target_value(&ev))
                    />
                </label>
                <FormError message=error />
                <div class="form-actions">
                    <button type="button" class="button button--secondary" on:click=move |_| store.close_modal()>
                        "Cancelar"
                    </button>
                    <button type="submit" class="button button--primary">"Salvar"</button>
                </div>
            </form>
        </Modal>
    }
}
