mod state;

pub use state::ItemListState;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_item::api::{load_item_rows, ItemRow};
use crate::layout::dashboard_store::{use_dashboard, ModalTarget};
use crate::shared::api_client::{load_error_message, use_api};
use crate::shared::config::use_ui_config;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::load_generation::LoadGeneration;
use crate::shared::text_utils::TruncatedCell;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;

const COLUMNS: usize = 5;

/// Item table with name search; reloads whenever the filter or the item
/// revision changes
#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_dashboard();
    let session = use_session();
    let toasts = use_toasts();
    let ui = use_ui_config();
    let client = use_api();

    let (state, set_state) = signal(ItemListState::Loading);
    let generation = LoadGeneration::new();

    Effect::new(move |_| {
        let filter = store.item_filter.get();
        store.items_revision.track();

        let ticket = generation.begin();
        set_state.set(ItemListState::Loading);

        let client = client.clone();
        spawn_local(async move {
            let result = load_item_rows(&client, &filter).await;
            // Superseded by a newer load, or the list is gone
            if !generation.is_current(ticket) {
                return;
            }
            let next = match result {
                Ok(listing) => ItemListState::from_listing(listing),
                Err(e) => {
                    log::error!("[loader] itens: {}", e);
                    let message = load_error_message(&e, "itens");
                    toasts.error(message.clone());
                    ItemListState::Failed(message)
                }
            };
            set_state.set(next);
        });
    });

    let is_admin = move || session.get().is_admin();

    view! {
        <section class="panel">
            <div class="header">
                <div class="header__content">
                    <h2 class="header__title">"Itens"</h2>
                </div>
                <div class="header__actions">
                    <SearchInput
                        value=store.item_filter
                        on_change=Callback::new(move |v: String| store.item_filter.set(v))
                        debounce_ms=ui.item_search_debounce_ms
                        placeholder="Buscar item por nome..."
                    />
                    <button
                        class="button button--primary"
                        on:click=move |_| store.open_modal(ModalTarget::CreateItem)
                    >
                        {icon("plus")}
                        "Novo item"
                    </button>
                </div>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Nome"</th>
                            <th class="table__header-cell">"Patrimônio"</th>
                            <th class="table__header-cell">"Descrição"</th>
                            <th class="table__header-cell">"Disponível / Total"</th>
                            <th class="table__header-cell">"Ações"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || match state.get() {
                            ItemListState::Loaded(rows) => rows
                                .into_iter()
                                .map(|row| item_row(row, is_admin(), ui.description_max_len))
                                .collect_view()
                                .into_any(),
                            other => view! {
                                <tr>
                                    <td class="table__cell table__cell--empty" colspan=COLUMNS>
                                        {other.message()}
                                    </td>
                                </tr>
                            }
                            .into_any(),
                        }}
                    </tbody>
                </table>
            </div>
        </section>
    }
}

fn item_row(row: ItemRow, is_admin: bool, description_max_len: usize) -> impl IntoView {
    let store = use_dashboard();
    let ItemRow { item, stock } = row;
    let item_id = item.id;
    let name = item.name.clone();
    let checkout_name = name.clone();
    let delete_name = name.clone();
    let adjust_name = name.clone();

    view! {
        <tr class="table__row">
            <td class="table__cell">{name}</td>
            <td class="table__cell">{item.asset_tag.unwrap_or_else(|| "-".to_string())}</td>
            <td class="table__cell">
                <TruncatedCell text=item.description max_len=description_max_len />
            </td>
            <td class="table__cell" class:table__cell--warning={stock.available == 0}>
                {format!("{} / {}", stock.available, stock.total)}
            </td>
            <td class="table__cell table__cell--actions">
                <button
                    class="button button--small"
                    title="Registrar retirada"
                    disabled={stock.available == 0}
                    on:click=move |_| store.open_modal(ModalTarget::Checkout {
                        item_id,
                        name: checkout_name.clone(),
                    })
                >
                    {icon("checkout")}
                    "Retirar"
                </button>
                {is_admin.then(|| view! {
                    <button
                        class="button button--small button--secondary"
                        title="Ajustar estoque"
                        on:click=move |_| store.open_modal(ModalTarget::AdjustStock {
                            item_id,
                            name: adjust_name.clone(),
                            stock,
                        })
                    >
                        {icon("edit")}
                    </button>
                })}
                <button
                    class="button button--small button--danger"
                    title="Excluir item"
                    on:click=move |_| store.open_modal(ModalTarget::DeleteItem {
                        item_id,
                        name: delete_name.clone(),
                    })
                >
                    {icon("trash")}
                </button>
            </td>
        </tr>
    }
}
