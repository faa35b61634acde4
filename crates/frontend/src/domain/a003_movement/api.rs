//! Movement endpoints and the loader behind the two movement tables.
//!
//! Backend versions disagree on where the movement lists live, so both
//! lists are read from ordered candidate endpoints.

use chrono::NaiveDate;
use contracts::domain::a003_movement::{
    retain_state, CheckoutForm, Movement, MovementState, ReturnForm,
};
use futures::future::join;

use crate::shared::api_client::{ApiClient, ApiError, HttpTransport, SubmitError};
use crate::shared::api_utils::encode_segment;

pub const ACTIVE_CANDIDATES: [&str; 2] = ["movimentacao/ativas", "movimentacoes"];
pub const RETURNED_CANDIDATES: [&str; 2] = ["movimentacoes", "movimentacao/movimentacoes"];

#[derive(Debug, Clone, PartialEq)]
pub struct MovementRow {
    pub movement: Movement,
    pub overdue: bool,
}

/// Both movement tables, built from one load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovementBoard {
    pub active: Vec<MovementRow>,
    pub returned: Vec<MovementRow>,
}

/// Load active and returned movements.
///
/// Failure of the active list fails the board. The returned list is
/// secondary: any failure there leaves it empty.
pub async fn load_movement_board<T: HttpTransport>(
    client: &ApiClient<T>,
    today: NaiveDate,
) -> Result<MovementBoard, ApiError> {
    let (active, returned) = join(fetch_active(client), fetch_returned(client)).await;
    let rows = |movements: Vec<Movement>| -> Vec<MovementRow> {
        movements
            .into_iter()
            .map(|movement| MovementRow {
                overdue: movement.is_overdue(today),
                movement,
            })
            .collect()
    };

    Ok(MovementBoard {
        active: rows(active?),
        returned: rows(returned),
    })
}

async fn fetch_active<T: HttpTransport>(client: &ApiClient<T>) -> Result<Vec<Movement>, ApiError> {
    let movements = client
        .get_first_reachable::<Vec<Movement>>(&ACTIVE_CANDIDATES)
        .await?
        .unwrap_or_default();
    Ok(retain_state(movements, MovementState::Active))
}

async fn fetch_returned<T: HttpTransport>(client: &ApiClient<T>) -> Vec<Movement> {
    match client
        .get_first_reachable::<Vec<Movement>>(&RETURNED_CANDIDATES)
        .await
    {
        Ok(movements) => retain_state(movements.unwrap_or_default(), MovementState::Returned),
        Err(e) => {
            log::warn!("[loader] returned movements unavailable: {}", e);
            Vec::new()
        }
    }
}

pub async fn checkout<T: HttpTransport>(
    client: &ApiClient<T>,
    form: &CheckoutForm,
) -> Result<(), SubmitError> {
    let (item_id, request) = form.validate().map_err(SubmitError::Invalid)?;
    client
        .post(
            &format!("movimentacao/retirar/{}", encode_segment(item_id)),
            &request,
        )
        .await?;
    Ok(())
}

pub async fn return_item<T: HttpTransport>(
    client: &ApiClient<T>,
    form: &ReturnForm,
) -> Result<(), SubmitError> {
    let (item_id, request) = form.validate().map_err(SubmitError::Invalid)?;
    client
        .post(
            &format!("movimentacao/devolver/{}", encode_segment(item_id)),
            &request,
        )
        .await?;
    Ok(())
}
