use crate::domain::a001_item::api::{ItemListing, ItemRow};

/// What the item table body shows
#[derive(Debug, Clone, PartialEq)]
pub enum ItemListState {
    Loading,
    Empty,
    NoMatch,
    Loaded(Vec<ItemRow>),
    Failed(String),
}

impl ItemListState {
    /// An empty catalog reads as empty even while a search is typed
    pub fn from_listing(listing: ItemListing) -> Self {
        if listing.catalog_empty {
            Self::Empty
        } else if listing.rows.is_empty() {
            Self::NoMatch
        } else {
            Self::Loaded(listing.rows)
        }
    }

    /// Placeholder line for every state without rows
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Loading => Some("Carregando...".to_string()),
            Self::Empty => Some("Nenhum item encontrado.".to_string()),
            Self::NoMatch => Some("Nenhum item corresponde à busca.".to_string()),
            Self::Failed(message) => Some(message.clone()),
            Self::Loaded(_) => None,
        }
    }
}
