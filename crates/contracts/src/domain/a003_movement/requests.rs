use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a001_item::aggregate::ItemId;
use crate::domain::common::parse_positive_quantity;

/// Movement type sent with a checkout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementKind {
    /// Regular checkout, must come back by the expected date
    #[default]
    #[serde(rename = "RETIRADA")]
    Checkout,
    /// Handed over without a due date
    #[serde(rename = "CEDIDO")]
    Loan,
}

impl MovementKind {
    pub const ALL: [MovementKind; 2] = [MovementKind::Checkout, MovementKind::Loan];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Checkout => "RETIRADA",
            Self::Loan => "CEDIDO",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Checkout => "Retirada",
            Self::Loan => "Cedido",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "RETIRADA" => Some(Self::Checkout),
            "CEDIDO" => Some(Self::Loan),
            _ => None,
        }
    }

    pub fn requires_expected_return(&self) -> bool {
        matches!(self, Self::Checkout)
    }
}

/// Body of `POST /movimentacao/retirar/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    #[serde(rename = "quantidade")]
    pub quantity: i32,

    #[serde(rename = "funcionarioSolicitante")]
    pub requester: String,

    #[serde(rename = "tipo")]
    pub kind: MovementKind,

    #[serde(rename = "dataPrevistaDevolucao")]
    pub expected_return: Option<String>,
}

/// Raw values of the checkout modal
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutForm {
    pub item_id: Option<ItemId>,
    pub quantity: String,
    pub requester: String,
    pub kind: MovementKind,
    pub expected_return: String,
}

impl CheckoutForm {
    pub fn for_item(item_id: ItemId) -> Self {
        Self {
            item_id: Some(item_id),
            quantity: "1".to_string(),
            requester: String::new(),
            kind: MovementKind::Checkout,
            expected_return: String::new(),
        }
    }

    pub fn validate(&self) -> Result<(ItemId, CheckoutRequest), String> {
        let item_id = self.item_id.ok_or_else(|| "Item inválido.".to_string())?;
        let quantity = parse_positive_quantity(&self.quantity)
            .ok_or_else(|| "Informe quantidade válida.".to_string())?;
        let requester = self.requester.trim();
        if requester.is_empty() {
            return Err("Informe o funcionário.".into());
        }

        let expected_return = match self.expected_return.trim() {
            "" if self.kind.requires_expected_return() => {
                return Err("Data prevista obrigatória.".into());
            }
            "" => None,
            raw => {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| "Data prevista inválida. Use AAAA-MM-DD.".to_string())?;
                Some(raw.to_string())
            }
        };

        Ok((
            item_id,
            CheckoutRequest {
                quantity,
                requester: requester.to_string(),
                kind: self.kind,
                expected_return,
            },
        ))
    }
}

/// Body of `POST /movimentacao/devolver/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnRequest {
    #[serde(rename = "quantidadeDevolvida")]
    pub quantity: i32,
}

/// Raw values of the return modal
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnForm {
    pub item_id: Option<ItemId>,
    pub quantity: String,
}

impl ReturnForm {
    /// Prefill with the quantity still out on the movement being closed
    pub fn for_item(item_id: ItemId, quantity: Option<i32>) -> Self {
        Self {
            item_id: Some(item_id),
            quantity: quantity.unwrap_or(1).to_string(),
        }
    }

    pub fn validate(&self) -> Result<(ItemId, ReturnRequest), String> {
        let item_id = self.item_id.ok_or_else(|| "Item inválido.".to_string())?;
        let quantity = parse_positive_quantity(&self.quantity)
            .ok_or_else(|| "Informe quantidade válida.".to_string())?;
        Ok((item_id, ReturnRequest { quantity }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> CheckoutForm {
        CheckoutForm {
            item_id: Some(3),
            quantity: "2".into(),
            requester: " Joana ".into(),
            kind: MovementKind::Checkout,
            expected_return: "2024-04-01".into(),
        }
    }

    #[test]
    fn test_checkout_serializes_backend_shape() {
        let (item_id, request) = filled_form().validate().unwrap();
        assert_eq!(item_id, 3);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["quantidade"], 2);
        assert_eq!(body["funcionarioSolicitante"], "Joana");
        assert_eq!(body["tipo"], "RETIRADA");
        assert_eq!(body["dataPrevistaDevolucao"], "2024-04-01");
    }

    #[test]
    fn test_checkout_requires_date_only_for_regular_checkout() {
        let mut form = filled_form();
        form.expected_return = String::new();
        assert_eq!(form.validate().unwrap_err(), "Data prevista obrigatória.");

        form.kind = MovementKind::Loan;
        let (_, request) = form.validate().unwrap();
        assert_eq!(request.expected_return, None);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["tipo"], "CEDIDO");
        assert!(body["dataPrevistaDevolucao"].is_null());
    }

    #[test]
    fn test_checkout_validation_order() {
        let mut form = filled_form();
        form.item_id = None;
        assert_eq!(form.validate().unwrap_err(), "Item inválido.");

        let mut form = filled_form();
        form.quantity = "0".into();
        assert_eq!(form.validate().unwrap_err(), "Informe quantidade válida.");

        let mut form = filled_form();
        form.requester = "  ".into();
        assert_eq!(form.validate().unwrap_err(), "Informe o funcionário.");

        let mut form = filled_form();
        form.expected_return = "01/04/2024".into();
        assert!(form.validate().unwrap_err().starts_with("Data prevista inválida"));
    }

    #[test]
    fn test_return_form() {
        let form = ReturnForm::for_item(5, Some(3));
        assert_eq!(form.quantity, "3");
        let (item_id, request) = form.validate().unwrap();
        assert_eq!(item_id, 5);
        assert_eq!(
            serde_json::to_value(request).unwrap(),
            serde_json::json!({"quantidadeDevolvida": 3})
        );

        let bad = ReturnForm {
            item_id: Some(5),
            quantity: "-1".into(),
        };
        assert_eq!(bad.validate().unwrap_err(), "Informe quantidade válida.");
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(MovementKind::parse("cedido"), Some(MovementKind::Loan));
        assert_eq!(MovementKind::parse("RETIRADA"), Some(MovementKind::Checkout));
        assert_eq!(MovementKind::parse("TROCA"), None);
    }
}
