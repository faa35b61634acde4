use contracts::domain::a001_item::aggregate::ItemId;
use contracts::domain::a002_stock::aggregate::{AdjustStockRequest, Stock};

use crate::shared::api_client::{ApiClient, ApiError, HttpTransport, SubmitError};
use crate::shared::api_utils::encode_segment;

/// Stock figures of one item; `Ok(None)` when the server sent nothing
pub async fn fetch_stock<T: HttpTransport>(
    client: &ApiClient<T>,
    item_id: ItemId,
) -> Result<Option<Stock>, ApiError> {
    client
        .get(&format!("movimentacao/estoque/{}", encode_segment(item_id)))
        .await
}

/// Set a new total quantity. Admin only; the server keeps units already out.
pub async fn adjust_stock<T: HttpTransport>(
    client: &ApiClient<T>,
    item_id: ItemId,
    new_total: &str,
) -> Result<(), SubmitError> {
    let request = AdjustStockRequest::from_input(new_total).map_err(SubmitError::Invalid)?;
    client
        .patch(&format!("itens/estoque/{}", encode_segment(item_id)), &request)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::fake_backend::{test_client, FakeBackend};
    use futures::executor::block_on;

    #[test]
    fn test_fetch_stock() {
        let client = test_client(FakeBackend::with_items(&[("Rádio", 4)]));
        let stock = block_on(fetch_stock(&client, 1)).unwrap();
        assert_eq!(stock, Some(Stock { total: 4, available: 4 }));
    }

    #[test]
    fn test_adjust_stock_updates_total() {
        let client = test_client(FakeBackend::with_items(&[("Rádio", 4)]));
        block_on(adjust_stock(&client, 1, "6")).unwrap();
        let stock = block_on(fetch_stock(&client, 1)).unwrap().unwrap();
        assert_eq!(stock, Stock { total: 6, available: 6 });
        assert_eq!(client.transport().stock_of(1), Some(stock));
    }

    #[test]
    fn test_invalid_total_sends_nothing() {
        let client = test_client(FakeBackend::with_items(&[("Rádio", 4)]));
        let err = block_on(adjust_stock(&client, 1, "-2")).unwrap_err();
        assert_eq!(err, SubmitError::Invalid("Nova quantidade total inválida.".into()));
        assert!(client.transport().requests().is_empty());
    }
}
