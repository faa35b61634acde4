use contracts::domain::a001_item::aggregate::ItemId;
use contracts::domain::a003_movement::ReturnForm;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_movement::api::return_item;
use crate::layout::dashboard_store::use_dashboard;
use crate::shared::api_client::{use_api, SubmitError};
use crate::shared::modal::{FormError, Modal};
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;

/// Return of units, prefilled with the quantity of the movement it was
/// opened from
#[component]
pub fn ReturnModal(item_id: ItemId, name: String, quantity: Option<i32>) -> impl IntoView {
    let store = use_dashboard();
    let session = use_session();
    let toasts = use_toasts();
    let client = use_api();

    let form = RwSignal::new(ReturnForm::for_item(item_id, quantity));
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let client = client.clone();
        let values = form.get_untracked();
        error.set(None);
        spawn_local(async move {
            match return_item(&client, &values).await {
                Ok(()) => {
                    store.close_modal();
                    toasts.success("Devolução registrada.");
                    store.refresh_after_mutation(session.get_untracked().role());
                }
                Err(e) => {
                    if let SubmitError::Api(api) = &e {
                        log::error!("[movement] return of item {} failed: {}", item_id, api);
                    }
                    error.set(Some(e.message("Erro ao registrar devolução.")));
                }
            }
        });
    };

    view! {
        <Modal title=format!("Devolução: {}", name) on_close=Callback::new(move |_| store.close_modal())>
            <form class="form" on:submit=on_submit>
                <label class="form-group">
                    "Quantidade devolvida"
                    <input
                        type="number"
                        min="1"
                        prop:value=move || form.with(|f| f.quantity.clone())
                        on:input=move |ev| form.update(|f| f.quantity = event_target_value(&ev))
                    />
                </label>
                <FormError message=error />
                <div class="form-actions">
                    <button type="button" class="button button--secondary" on:click=move |_| store.close_modal()>
                        "Cancelar"
                    </button>
                    <button type="submit" class="button button--primary">"Registrar"</button>
                </div>
            </form>
        </Modal>
    }
}
