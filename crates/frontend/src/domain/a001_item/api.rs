//! Item endpoints and the loader behind the item table.

use contracts::domain::a001_item::aggregate::{CreateItemForm, Item, ItemId};
use contracts::domain::a002_stock::aggregate::Stock;
use futures::future::join_all;

use crate::domain::a002_stock::api::fetch_stock;
use crate::shared::api_client::{ApiClient, ApiError, HttpTransport, SubmitError};
use crate::shared::api_utils::encode_segment;

/// One line of the item table
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub item: Item,
    pub stock: Stock,
}

/// Rows left after filtering, and whether the backend had any item at all
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemListing {
    pub rows: Vec<ItemRow>,
    pub catalog_empty: bool,
}

pub async fn fetch_items<T: HttpTransport>(client: &ApiClient<T>) -> Result<Vec<Item>, ApiError> {
    Ok(client.get::<Vec<Item>>("itens").await?.unwrap_or_default())
}

/// Items whose name contains `filter`, each with its stock figures.
///
/// Stock is fetched only for the items that survive the filter, all at once.
/// An item whose stock cannot be fetched is still listed, with zero figures.
pub async fn load_item_rows<T: HttpTransport>(
    client: &ApiClient<T>,
    filter: &str,
) -> Result<ItemListing, ApiError> {
    let all = fetch_items(client).await?;
    let catalog_empty = all.is_empty();
    let items: Vec<Item> = all
        .into_iter()
        .filter(|item| item.name_matches(filter))
        .collect();

    let stocks = join_all(items.iter().map(|item| stock_or_zero(client, item.id))).await;

    let rows = items
        .into_iter()
        .zip(stocks)
        .map(|(item, stock)| ItemRow { item, stock })
        .collect();
    Ok(ItemListing {
        rows,
        catalog_empty,
    })
}

async fn stock_or_zero<T: HttpTransport>(client: &ApiClient<T>, item_id: ItemId) -> Stock {
    match fetch_stock(client, item_id).await {
        Ok(Some(stock)) => stock,
        Ok(None) => {
            log::warn!("[loader] empty stock response for item {}", item_id);
            Stock::default()
        }
        Err(e) => {
            log::warn!("[loader] stock of item {} unavailable: {}", item_id, e);
            Stock::default()
        }
    }
}

pub async fn create_item<T: HttpTransport>(
    client: &ApiClient<T>,
    form: &CreateItemForm,
) -> Result<(), SubmitError> {
    let request = form.validate().map_err(SubmitError::Invalid)?;
    client.post("itens", &request).await?;
    Ok(())
}

/// Removes the item and its stock; movement history and audit stay
pub async fn delete_item<T: HttpTransport>(
    client: &ApiClient<T>,
    item_id: ItemId,
) -> Result<(), ApiError> {
    client
        .delete(&format!("itens/{}", encode_segment(item_id)))
        .await?;
    Ok(())
}

/// Toast text for a failed deletion
pub fn delete_error_message(err: &ApiError) -> String {
    match err.status() {
        Some(status) => err
            .body_text()
            .unwrap_or_else(|| format!("Erro {}", status)),
        None => "Erro ao excluir item. Veja console.".to_string(),
    }
}
