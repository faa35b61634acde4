mod state;

pub use state::{deadline_cell, MovementBoardState};

use contracts::domain::a003_movement::{MovementKind, Movement};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_movement::api::{load_movement_board, MovementRow};
use crate::layout::dashboard_store::{use_dashboard, ModalTarget};
use crate::shared::api_client::{load_error_message, use_api};
use crate::shared::date_utils::{format_optional_date, format_optional_datetime, today};
use crate::shared::icons::icon;
use crate::shared::load_generation::LoadGeneration;
use crate::shared::toast::use_toasts;

const ACTIVE_COLUMNS: usize = 8;
const RETURNED_COLUMNS: usize = 6;

/// Active and returned movement tables, reloaded on every movement revision
#[component]
pub fn MovementBoardView() -> impl IntoView {
    let store = use_dashboard();
    let toasts = use_toasts();
    let client = use_api();

    let (state, set_state) = signal(MovementBoardState::Loading);
    let generation = LoadGeneration::new();

    Effect::new(move |_| {
        store.movements_revision.track();
        let ticket = generation.begin();
        set_state.set(MovementBoardState::Loading);

        let client = client.clone();
        spawn_local(async move {
            let result = load_movement_board(&client, today()).await;
            if !generation.is_current(ticket) {
                return;
            }
            let next = match result {
                Ok(board) => MovementBoardState::Loaded(board),
                Err(e) => {
                    log::error!("[loader] movimentações: {}", e);
                    let message = load_error_message(&e, "movimentações");
                    toasts.error(message.clone());
                    MovementBoardState::Failed(message)
                }
            };
            set_state.set(next);
        });
    });

    let open_return = move |movement: &Movement| match movement.effective_item_id() {
        Some(item_id) => store.open_modal(ModalTarget::Return {
            item_id,
            name: movement.display_item_name(),
            quantity: movement.quantity,
        }),
        None => toasts.error("Item inválido para devolução."),
    };

    view! {
        <section class="panel">
            <div class="header">
                <h2 class="header__title">"Movimentações ativas"</h2>
            </div>
            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Item"</th>
                            <th class="table__header-cell">"Qtd"</th>
                            <th class="table__header-cell">"Tipo"</th>
                            <th class="table__header-cell">"Funcionário"</th>
                            <th class="table__header-cell">"Retirada"</th>
                            <th class="table__header-cell">"Previsão"</th>
                            <th class="table__header-cell">"Prazo"</th>
                            <th class="table__header-cell">"Ações"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || match state.get() {
                            MovementBoardState::Loaded(board) if board.active.is_empty() => {
                                placeholder_row("Nenhuma movimentação ativa.", ACTIVE_COLUMNS)
                            }
                            MovementBoardState::Loaded(board) => board
                                .active
                                .into_iter()
                                .map(|row| active_row(row, open_return))
                                .collect_view()
                                .into_any(),
                            MovementBoardState::Loading => placeholder_row("Carregando...", ACTIVE_COLUMNS),
                            MovementBoardState::Failed(message) => placeholder_row(&message, ACTIVE_COLUMNS),
                        }}
                    </tbody>
                </table>
            </div>
        </section>

        <section class="panel">
            <div class="header">
                <h2 class="header__title">"Devolvidos"</h2>
            </div>
            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Item"</th>
                            <th class="table__header-cell">"Qtd"</th>
                            <th class="table__header-cell">"Tipo"</th>
                            <th class="table__header-cell">"Funcionário"</th>
                            <th class="table__header-cell">"Retirada"</th>
                            <th class="table__header-cell">"Devolução"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || match state.get() {
                            MovementBoardState::Loaded(board) if board.returned.is_empty() => {
                                placeholder_row("Nenhuma devolução registrada.", RETURNED_COLUMNS)
                            }
                            MovementBoardState::Loaded(board) => board
                                .returned
                                .into_iter()
                                .map(returned_row)
                                .collect_view()
                                .into_any(),
                            MovementBoardState::Loading => placeholder_row("Carregando...", RETURNED_COLUMNS),
                            MovementBoardState::Failed(message) => placeholder_row(&message, RETURNED_COLUMNS),
                        }}
                    </tbody>
                </table>
            </div>
        </section>
    }
}

fn placeholder_row(message: &str, columns: usize) -> AnyView {
    let message = message.to_string();
    view! {
        <tr>
            <td class="table__cell table__cell--empty" colspan=columns>{message}</td>
        </tr>
    }
    .into_any()
}

fn kind_label(movement: &Movement) -> String {
    movement
        .kind
        .as_deref()
        .map(|raw| {
            MovementKind::parse(raw)
                .map(|k| k.label().to_string())
                .unwrap_or_else(|| raw.to_string())
        })
        .unwrap_or_else(|| "-".to_string())
}

fn quantity_text(movement: &Movement) -> String {
    movement
        .quantity
        .map(|q| q.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn active_row(row: MovementRow, open_return: impl Fn(&Movement) + Copy + 'static) -> impl IntoView {
    let (deadline, deadline_class) = deadline_cell(&row);
    let MovementRow { movement, overdue } = row;
    let item = movement.display_item_name();
    let quantity = quantity_text(&movement);
    let kind = kind_label(&movement);
    let requester = movement.requester.clone().unwrap_or_else(|| "-".to_string());
    let checked_out = format_optional_datetime(movement.registration_timestamp());
    let expected = format_optional_date(movement.expected_return.as_deref());

    view! {
        <tr class="table__row" class:table__row--overdue=overdue>
            <td class="table__cell">{item}</td>
            <td class="table__cell">{quantity}</td>
            <td class="table__cell">{kind}</td>
            <td class="table__cell">{requester}</td>
            <td class="table__cell">{checked_out}</td>
            <td class="table__cell">{expected}</td>
            <td class="table__cell"><span class=deadline_class>{deadline}</span></td>
            <td class="table__cell table__cell--actions">
                <button
                    class="button button--small"
                    title="Registrar devolução"
                    on:click=move |_| open_return(&movement)
                >
                    {icon("return")}
                    "Devolver"
                </button>
            </td>
        </tr>
    }
}

fn returned_row(row: MovementRow) -> impl IntoView {
    let movement = row.movement;
    let checked_out = format_optional_datetime(
        movement
            .checked_out_at
            .as_deref()
            .or_else(|| movement.registration_timestamp()),
    );

    view! {
        <tr class="table__row">
            <td class="table__cell">{movement.display_item_name()}</td>
            <td class="table__cell">{quantity_text(&movement)}</td>
            <td class="table__cell">{kind_label(&movement)}</td>
            <td class="table__cell">{movement.requester.clone().unwrap_or_else(|| "-".to_string())}</td>
            <td class="table__cell">{checked_out}</td>
            <td class="table__cell">{format_optional_datetime(movement.returned_at.as_deref())}</td>
        </tr>
    }
}
