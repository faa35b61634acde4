use contracts::domain::a001_item::aggregate::CreateItemForm;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_item::api::create_item;
use crate::layout::dashboard_store::use_dashboard;
use crate::shared::api_client::{use_api, SubmitError};
use crate::shared::modal::{FormError, Modal};
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;

#[component]
pub fn CreateItemModal() -> impl IntoView {
    let store = use_dashboard();
    let session = use_session();
    let toasts = use_toasts();
    let client = use_api();

    let form = RwSignal::new(CreateItemForm::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let client = client.clone();
        let values = form.get_untracked();
        error.set(None);
        spawn_local(async move {
            match create_item(&client, &values).await {
                Ok(()) => {
                    store.close_modal();
                    toasts.success(format!("Item \"{}\" criado.", values.name.trim()));
                    store.refresh_after_mutation(session.get_untracked().role());
                }
                Err(e) => {
                    if let SubmitError::Api(api) = &e {
                        log::error!("[item] create failed: {}", api);
                    }
                    error.set(Some(e.message("Erro ao criar item.")));
                }
            }
        });
    };

    view! {
        <Modal title="Novo item" on_close=Callback::new(move |_| store.close_modal())>
            <form class="form" on:submit=on_submit>
                <label class="form-group">
                    "Nome"
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <label class="form-group">
                    "Patrimônio"
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.asset_tag.clone())
                        on:input=move |ev| form.update(|f| f.asset_tag = event_target_value(&ev))
                    />
                </label>
                <label class="form-group">
                    "Descrição"
                    <textarea
                        rows="3"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="form-group">
                    "Quantidade total"
                    <input
                        type="number"
                        min="1"
                        prop:value=move || form.with(|f| f.total_quantity.clone())
                        on:input=move |ev| form.update(|f| f.total_quantity = event_target_value(&ev))
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
