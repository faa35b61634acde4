use contracts::domain::a001_item::aggregate::ItemId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_item::api::{delete_error_message, delete_item};
use crate::layout::dashboard_store::use_dashboard;
use crate::shared::api_client::use_api;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;

/// Confirmation before removing an item and its stock
#[component]
pub fn DeleteItemModal(item_id: ItemId, name: String) -> impl IntoView {
    let store = use_dashboard();
    let session = use_session();
    let toasts = use_toasts();
    let client = use_api();
    let pending = RwSignal::new(false);

    let confirm = move |_| {
        let client = client.clone();
        pending.set(true);
        spawn_local(async move {
            match delete_item(&client, item_id).await {
                Ok(()) => {
                    store.close_modal();
                    toasts.success("Item excluído.");
                    store.refresh_after_mutation(session.get_untracked().role());
                }
                Err(e) => {
                    log::error!("[item] delete of {} failed: {}", item_id, e);
                    toasts.error(delete_error_message(&e));
                    pending.set(false);
                }
            }
        });
    };

    view! {
        <Modal title="Excluir item" on_close=Callback::new(move |_| store.close_modal())>
            <p>
                "Excluir o item " <strong>{name}</strong> "? "
                "O histórico de movimentações e a auditoria são mantidos."
            </p>
            <div class="form-actions">
                <button type="button" class="button button--secondary" on:click=move |_| store.close_modal()>
                    "Cancelar"
                </button>
                <button
                    type="button"
                    class="button button--danger"
                    disabled=move || pending.get()
                    on:click=confirm
                >
                    "Excluir"
                </button>
            </div>
        </Modal>
    }
}
