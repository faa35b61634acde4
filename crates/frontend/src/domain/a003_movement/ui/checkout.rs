use contracts::domain::a001_item::aggregate::ItemId;
use contracts::domain::a003_movement::{CheckoutForm, MovementKind};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_movement::api::checkout;
use crate::layout::dashboard_store::use_dashboard;
use crate::shared::api_client::{use_api, SubmitError};
use crate::shared::modal::{FormError, Modal};
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;

/// Checkout (or loan) of units of one item
#[component]
pub fn CheckoutModal(item_id: ItemId, name: String) -> impl IntoView {
    let store = use_dashboard();
    let session = use_session();
    let toasts = use_toasts();
    let client = use_api();

    let form = RwSignal::new(CheckoutForm::for_item(item_id));
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let client = client.clone();
        let values = form.get_untracked();
        error.set(None);
        spawn_local(async move {
            match checkout(&client, &values).await {
                Ok(()) => {
                    store.close_modal();
                    toasts.success("Retirada registrada.");
                    store.refresh_after_mutation(session.get_untracked().role());
                }
                Err(e) => {
                    if let SubmitError::Api(api) = &e {
                        log::error!("[movement] checkout of item {} failed: {}", item_id, api);
                    }
                    error.set(Some(e.message("Erro ao registrar retirada.")));
                }
            }
        });
    };

    let needs_date = move || form.with(|f| f.kind.requires_expected_return());

    view! {
        <Modal title=format!("Retirada: {}", name) on_close=Callback::new(move |_| store.close_modal())>
            <form class="form" on:submit=on_submit>
                <label class="form-group">
                    "Quantidade"
                    <input
                        type="number"
                        min="1"
                        prop:value=move || form.with(|f| f.quantity.clone())
                        on:input=move |ev| form.update(|f| f.quantity = event_target_value(&ev))
                    />
                </label>
                <label class="form-group">
                    "Funcionário solicitante"
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.requester.clone())
                        on:input=move |ev| form.update(|f| f.requester = event_target_value(&ev))
                    />
                </label>
                <label class="form-group">
                    "Tipo"
                    <select on:change=move |ev| {
                        let kind = MovementKind::parse(&event_target_value(&ev)).unwrap_or_default();
                        form.update(|f| f.kind = kind);
                    }>
                        {MovementKind::ALL
                            .into_iter()
                            .map(|kind| view! {
                                <option value=kind.code() selected=move || form.with(|f| f.kind == kind)>
                                    {kind.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </label>
                <label class="form-group">
                    {move || if needs_date() { "Data prevista de devolução" } else { "Data prevista de devolução (opcional)" }}
                    <input
                        type="date"
                        prop:value=move || form.with(|f| f.expected_return.clone())
                        on:input=move |ev| form.update(|f| f.expected_return = event_target_value(&ev))
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
