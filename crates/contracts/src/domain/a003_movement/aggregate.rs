use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a001_item::aggregate::{Item, ItemId};

pub type MovementId = i64;

/// Checkout or return event as returned by the movement endpoints.
///
/// Dates are kept as the backend's ISO strings; [`Movement::expected_return_date`]
/// parses the one the dashboard reasons about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    #[serde(default)]
    pub id: Option<MovementId>,

    #[serde(default)]
    pub item: Option<Item>,

    #[serde(rename = "itemNome", default)]
    pub item_name: Option<String>,

    #[serde(rename = "itemId", default)]
    pub item_id: Option<ItemId>,

    #[serde(rename = "quantidade", default)]
    pub quantity: Option<i32>,

    #[serde(rename = "tipo", default)]
    pub kind: Option<String>,

    #[serde(rename = "funcionarioSolicitante", alias = "solicitante", default)]
    pub requester: Option<String>,

    #[serde(rename = "dataRetirada", default)]
    pub checked_out_at: Option<String>,

    #[serde(
        rename = "dataPrevistaDevolucao",
        alias = "data_prevista_devolucao",
        default
    )]
    pub expected_return: Option<String>,

    #[serde(rename = "dataDevolucao", alias = "data_devolucao", default)]
    pub returned_at: Option<String>,

    #[serde(rename = "statusPrazo", default)]
    pub deadline_status: Option<String>,

    #[serde(rename = "dataRegistro", alias = "data", default)]
    pub registered_at: Option<String>,
}

impl Movement {
    /// Item name for display: denormalized name, embedded item, then the bare id
    pub fn display_item_name(&self) -> String {
        non_blank(&self.item_name)
            .map(str::to_string)
            .or_else(|| self.item.as_ref().map(|i| i.name.clone()))
            .or_else(|| self.item_id.map(|id| id.to_string()))
            .unwrap_or_else(|| "-".to_string())
    }

    /// Item the movement refers to, if the backend told us
    pub fn effective_item_id(&self) -> Option<ItemId> {
        self.item_id.or_else(|| self.item.as_ref().map(|i| i.id))
    }

    pub fn has_return_date(&self) -> bool {
        non_blank(&self.returned_at).is_some()
    }

    /// Registration timestamp, falling back to the checkout timestamp
    pub fn registration_timestamp(&self) -> Option<&str> {
        non_blank(&self.registered_at).or_else(|| non_blank(&self.checked_out_at))
    }

    pub fn expected_return_date(&self) -> Option<NaiveDate> {
        let raw = non_blank(&self.expected_return)?;
        let date_part = raw.split('T').next().unwrap_or(raw);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }

    /// Past its expected return date and still not returned
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.has_return_date()
            && self
                .expected_return_date()
                .map(|due| due < today)
                .unwrap_or(false)
    }

    pub fn deadline(&self) -> Option<DeadlineStatus> {
        non_blank(&self.deadline_status).and_then(DeadlineStatus::parse)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// Deadline bookkeeping the backend attaches to each movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineStatus {
    Pending,
    Late,
    Completed,
}

impl DeadlineStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "PENDENTE" => Some(Self::Pending),
            "ATRASADO" => Some(Self::Late),
            "CONCLUIDO" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pendente",
            Self::Late => "Atrasado",
            Self::Completed => "Concluído",
        }
    }
}
