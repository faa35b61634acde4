use serde::{Deserialize, Serialize};

use crate::domain::a001_item::aggregate::ItemId;

/// Boilerplate the backend appends to deletion details
const STOCK_REMOVED_MARKER: &str = "estoque removido";

/// One record of `GET /auditoria`, newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(rename = "usuarioResponsavel", alias = "usuario", default)]
    pub user: Option<String>,

    #[serde(rename = "acao", default)]
    pub action: Option<String>,

    #[serde(rename = "itemIdAfetado", alias = "item", default)]
    pub item_id: Option<ItemId>,

    #[serde(rename = "detalhes", default)]
    pub details: Option<String>,

    #[serde(rename = "dataRegistro", alias = "data", default)]
    pub registered_at: Option<String>,
}

impl AuditLogEntry {
    /// Details without the trailing "estoque removido ..." boilerplate
    pub fn clean_details(&self) -> Option<String> {
        let raw = self.details.as_deref()?;
        // ASCII lowercasing keeps byte offsets aligned with `raw`
        let lower = raw.to_ascii_lowercase();
        let kept = match lower.find(STOCK_REMOVED_MARKER) {
            Some(pos) => {
                let head = raw[..pos].trim_end();
                head.strip_suffix(',').unwrap_or(head)
            }
            None => raw,
        };
        Some(kept.trim().to_string())
    }

    /// Case-insensitive substring match over user, action, item id and details.
    /// An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        let item_id = self.item_id.map(|id| id.to_string());
        let matched = [
            self.user.as_deref(),
            self.action.as_deref(),
            item_id.as_deref(),
            self.details.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&query));
        matched
    }
}

/// Entries matching `query`, keeping the order they arrived in
pub fn search(entries: &[AuditLogEntry], query: &str) -> Vec<AuditLogEntry> {
    entries
        .iter()
        .filter(|e| e.matches_query(query))
        .cloned()
        .collect()
}
