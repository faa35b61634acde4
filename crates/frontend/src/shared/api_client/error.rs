use serde::de::DeserializeOwned;
use std::fmt;

use super::HttpResponse;

/// Body returned by the server: parsed JSON, or raw text for anything else
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(serde_json::Value),
    Text(String),
}

impl ResponseBody {
    /// `Ok(None)` for 204 and empty bodies, `Err` when a JSON body is malformed
    pub fn parse(response: &HttpResponse) -> Result<Option<Self>, String> {
        if response.status == 204 || response.body.trim().is_empty() {
            return Ok(None);
        }
        let is_json = response
            .content_type
            .as_deref()
            .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
            .unwrap_or(false);
        if is_json {
            serde_json::from_str(&response.body)
                .map(|v| Some(Self::Json(v)))
                .map_err(|e| format!("Invalid JSON body: {}", e))
        } else {
            Ok(Some(Self::Text(response.body.clone())))
        }
    }

    pub fn into_typed<R: DeserializeOwned>(self) -> Result<R, ApiError> {
        match self {
            Self::Json(value) => serde_json::from_value(value),
            Self::Text(text) => serde_json::from_str(&text),
        }
        .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(serde_json::Value::String(s)) => f.write_str(s),
            Self::Json(value) => write!(f, "{}", value),
            Self::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, CORS rejection or aborted fetch
    #[error("Network error or request aborted: {0}")]
    Network(String),

    #[error("Network error: request timed out after {after_ms} ms")]
    Timeout { after_ms: u32 },

    #[error("{status} {status_text} - {}", display_body(.body))]
    Http {
        status: u16,
        status_text: String,
        body: Option<ResponseBody>,
    },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

fn display_body(body: &Option<ResponseBody>) -> String {
    match body {
        Some(b) if !b.to_string().trim().is_empty() => b.to_string(),
        _ => "(sem corpo)".to_string(),
    }
}

impl ApiError {
    /// Transport-level failure, as opposed to an answer from the server
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-provided body of an HTTP error, if any
    pub fn body_text(&self) -> Option<String> {
        match self {
            Self::Http { body: Some(b), .. } => {
                Some(b.to_string()).filter(|s| !s.trim().is_empty())
            }
            _ => None,
        }
    }
}

/// Inline message for a failed form submission.
///
/// A 400 shows the server's explanation verbatim; anything else points to the
/// console where the full error was logged.
pub fn form_error_message(err: &ApiError, fallback: &str) -> String {
    match err.status() {
        Some(400) => err.body_text().unwrap_or_else(|| fallback.to_string()),
        _ => format!("{} Veja console.", fallback),
    }
}

/// Outcome of a rejected form: caught before sending, or refused by the API
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("{0}")]
    Invalid(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SubmitError {
    /// Message for the form's inline error line
    pub fn message(&self, fallback: &str) -> String {
        match self {
            Self::Invalid(message) => message.clone(),
            Self::Api(err) => form_error_message(err, fallback),
        }
    }
}

/// Empty-state message for a list that failed to load, e.g. `what = "itens"`
pub fn load_error_message(err: &ApiError, what: &str) -> String {
    if err.is_network() {
        format!("Erro de rede ao carregar {}.", what)
    } else if let Some(status) = err.status() {
        format!("Erro {} ao carregar {}.", status, what)
    } else {
        format!("Erro ao carregar {}.", what)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, content_type: Option<&str>, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            status_text: String::new(),
            content_type: content_type.map(str::to_string),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_parse_body_by_content_type() {
        let json = response(200, Some("application/json;charset=UTF-8"), r#"{"a":1}"#);
        assert_eq!(
            ResponseBody::parse(&json).unwrap(),
            Some(ResponseBody::Json(serde_json::json!({"a": 1})))
        );

        let text = response(400, Some("text/plain"), "Estoque insuficiente. Disponível: 0");
        assert_eq!(
            ResponseBody::parse(&text).unwrap(),
            Some(ResponseBody::Text("Estoque insuficiente. Disponível: 0".into()))
        );

        assert_eq!(ResponseBody::parse(&response(204, None, "")).unwrap(), None);
        assert!(ResponseBody::parse(&response(200, Some("application/json"), "{")).is_err());
    }

    #[test]
    fn test_form_error_message() {
        let bad_request = ApiError::Http {
            status: 400,
            status_text: "Bad Request".into(),
            body: Some(ResponseBody::Text("Estoque insuficiente. Disponível: 1".into())),
        };
        assert_eq!(
            form_error_message(&bad_request, "Erro ao registrar retirada."),
            "Estoque insuficiente. Disponível: 1"
        );

        let empty_400 = ApiError::Http {
            status: 400,
            status_text: "Bad Request".into(),
            body: None,
        };
        assert_eq!(
            form_error_message(&empty_400, "Erro ao criar item."),
            "Erro ao criar item."
        );

        let server_error = ApiError::Http {
            status: 500,
            status_text: "Internal Server Error".into(),
            body: None,
        };
        assert_eq!(
            form_error_message(&server_error, "Erro ao criar item."),
            "Erro ao criar item. Veja console."
        );
        assert_eq!(
            form_error_message(&ApiError::Timeout { after_ms: 1 }, "Erro ao criar item."),
            "Erro ao criar item. Veja console."
        );
    }

    #[test]
    fn test_load_error_message() {
        assert_eq!(
            load_error_message(&ApiError::Network("refused".into()), "itens"),
            "Erro de rede ao carregar itens."
        );
        let not_found = ApiError::Http {
            status: 503,
            status_text: "Service Unavailable".into(),
            body: None,
        };
        assert_eq!(load_error_message(&not_found, "itens"), "Erro 503 ao carregar itens.");
        assert_eq!(
            load_error_message(&ApiError::Decode("x".into()), "itens"),
            "Erro ao carregar itens."
        );
    }

    #[test]
    fn test_json_string_body_displays_unquoted() {
        let body = ResponseBody::Json(serde_json::Value::String("Item não encontrado.".into()));
        assert_eq!(body.to_string(), "Item não encontrado.");
    }

    #[test]
    fn test_submit_error_message() {
        let invalid = SubmitError::Invalid("Informe o funcionário.".into());
        assert_eq!(invalid.message("Erro ao registrar retirada."), "Informe o funcionário.");

        let refused = SubmitError::from(ApiError::Network("refused".into()));
        assert_eq!(
            refused.message("Erro ao registrar retirada."),
            "Erro ao registrar retirada. Veja console."
        );
    }
}
