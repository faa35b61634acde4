use serde::{Deserialize, Serialize};

use crate::domain::common::parse_positive_quantity;

// ============================================================================
// ID Type
// ============================================================================

/// Backend identifier of an item
pub type ItemId = i64;

// ============================================================================
// Aggregate
// ============================================================================

/// Trackable inventory unit as returned by `GET /itens`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,

    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "patrimonio", default)]
    pub asset_tag: Option<String>,

    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
}

impl Item {
    /// Case-insensitive substring match on the item name
    pub fn name_matches(&self, filter: &str) -> bool {
        let filter = filter.trim();
        filter.is_empty() || self.name.to_lowercase().contains(&filter.to_lowercase())
    }
}

// ============================================================================
// Create request
// ============================================================================

/// Body of `POST /itens`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateItemRequest {
    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "patrimonio")]
    pub asset_tag: String,

    #[serde(rename = "descricao")]
    pub description: String,

    #[serde(rename = "quantidadeTotal")]
    pub total_quantity: i32,
}

/// Raw values of the create-item form, exactly as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateItemForm {
    pub name: String,
    pub asset_tag: String,
    pub description: String,
    pub total_quantity: String,
}

impl CreateItemForm {
    /// A freshly opened form starts with a quantity of one
    pub fn new() -> Self {
        Self {
            total_quantity: "1".to_string(),
            ..Default::default()
        }
    }

    /// Validate and build the request body
    pub fn validate(&self) -> Result<CreateItemRequest, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Nome é obrigatório.".into());
        }
        let total_quantity = parse_positive_quantity(&self.total_quantity)
            .ok_or_else(|| "Quantidade total deve ser maior que zero.".to_string())?;

        Ok(CreateItemRequest {
            name: name.to_string(),
            asset_tag: self.asset_tag.trim().to_string(),
            description: self.description.trim().to_string(),
            total_quantity,
        })
    }
}
