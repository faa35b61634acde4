use serde::{Deserialize, Serialize};

use crate::domain::common::quantity::parse_non_negative_quantity;

/// Stock figures of one item, from `GET /movimentacao/estoque/{id}`.
///
/// `Default` is the zero fallback shown when the figures cannot be fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    #[serde(rename = "quantidadeTotal", default)]
    pub total: i32,

    #[serde(rename = "quantidadeDisponivel", default)]
    pub available: i32,
}

impl Stock {
    /// Units currently checked out
    pub fn units_out(&self) -> i32 {
        (self.total - self.available).max(0)
    }
}

/// Body of `PATCH /itens/estoque/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustStockRequest {
    #[serde(rename = "quantidadeTotal")]
    pub total: i32,
}

impl AdjustStockRequest {
    pub fn from_input(raw: &str) -> Result<Self, String> {
        parse_non_negative_quantity(raw)
            .map(|total| Self { total })
            .ok_or_else(|| "Nova quantidade total inválida.".to_string())
    }
}
