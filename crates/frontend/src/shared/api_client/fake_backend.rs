//! In-memory stand-in for the inventory REST API, used by loader and form
//! tests. Mirrors the backend's validation messages and stock bookkeeping.

use contracts::domain::a001_item::aggregate::Item;
use contracts::domain::a002_stock::aggregate::Stock;
use contracts::domain::a003_movement::Movement;
use contracts::domain::a004_audit_log::AuditLogEntry;
use serde::Serialize;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use super::{ApiClient, ApiError, HttpRequest, HttpResponse, HttpTransport, Method};
use crate::shared::config::ApiConfig;

pub(crate) const BASE: &str = "http://backend.test";

pub(crate) fn test_client(backend: FakeBackend) -> ApiClient<FakeBackend> {
    ApiClient::new(
        backend,
        ApiConfig {
            base: BASE.to_string(),
            backend_port: 8080,
            prefix: "/api".to_string(),
            timeout_ms: 10_000,
        },
    )
}

#[derive(Default)]
struct State {
    next_item_id: i64,
    next_movement_id: i64,
    clock: u32,
    items: Vec<Item>,
    stock: HashMap<i64, Stock>,
    movements: Vec<Movement>,
    audit: Vec<AuditLogEntry>,
    offline: HashSet<String>,
    hang_all: bool,
    hanging: HashSet<String>,
    requests: Vec<HttpRequest>,
}

impl State {
    fn tick(&mut self) -> String {
        self.clock += 1;
        format!("2024-03-10T10:{:02}:00", self.clock % 60)
    }

    fn log(&mut self, action: &str, item_id: i64, details: String) {
        let at = self.tick();
        let id = self.audit.len() as i64 + 1;
        self.audit.push(AuditLogEntry {
            id: Some(id),
            user: Some("sistema".into()),
            action: Some(action.into()),
            item_id: Some(item_id),
            details: Some(details),
            registered_at: Some(at),
        });
    }
}

pub(crate) struct FakeBackend {
    state: RefCell<State>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(State {
                next_item_id: 1,
                next_movement_id: 1,
                ..Default::default()
            }),
        }
    }

    /// Items with ids 1.. and all units available
    pub fn with_items(items: &[(&str, i32)]) -> Self {
        let backend = Self::new();
        {
            let mut s = backend.state.borrow_mut();
            for (name, qty) in items {
                let id = s.next_item_id;
                s.next_item_id += 1;
                s.items.push(Item {
                    id,
                    name: name.to_string(),
                    asset_tag: Some(format!("PT-{:04}", id)),
                    description: None,
                });
                s.stock.insert(
                    id,
                    Stock {
                        total: *qty,
                        available: *qty,
                    },
                );
            }
        }
        backend
    }

    /// Requests never complete; only the timeout can end them
    pub fn hang_requests(&self) {
        self.state.borrow_mut().hang_all = true;
    }

    /// Like [`hang_requests`](Self::hang_requests), for `path` only
    pub fn hang_path(&self, path: &str) {
        self.state.borrow_mut().hanging.insert(path.to_string());
    }

    /// Requests to `path` fail as if the connection was refused
    pub fn take_offline(&self, path: &str) {
        self.state.borrow_mut().offline.insert(path.to_string());
    }

    pub fn fail_stock_for(&self, item_id: i64) {
        self.take_offline(&format!("/api/movimentacao/estoque/{}", item_id));
    }

    pub fn seed_movement(&self, movement: Movement) {
        self.state.borrow_mut().movements.push(movement);
    }

    pub fn seed_audit(&self, entry: AuditLogEntry) {
        self.state.borrow_mut().audit.push(entry);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.borrow().requests.clone()
    }

    pub fn stock_of(&self, item_id: i64) -> Option<Stock> {
        self.state.borrow().stock.get(&item_id).copied()
    }

    fn route(&self, method: Method, path: &str, body: Option<&str>) -> HttpResponse {
        let body: Value = body
            .and_then(|b| serde_json::from_str(b).ok())
            .unwrap_or(Value::Null);
        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        let mut s = self.state.borrow_mut();

        match (method, segments.as_slice()) {
            (Method::Get, ["api", "itens"]) => json(200, &s.items),
            (Method::Post, ["api", "itens"]) => {
                let name = body["nome"].as_str().map(str::to_string);
                let qty = body["quantidadeTotal"].as_i64().filter(|q| *q > 0);
                let (Some(name), Some(qty)) = (name, qty) else {
                    return text(400, "Nome e Quantidade Total (> 0) são obrigatórios.");
                };
                let id = s.next_item_id;
                s.next_item_id += 1;
                let item = Item {
                    id,
                    name: name.clone(),
                    asset_tag: body["patrimonio"].as_str().map(str::to_string),
                    description: body["descricao"].as_str().map(str::to_string),
                };
                s.items.push(item.clone());
                s.stock.insert(
                    id,
                    Stock {
                        total: qty as i32,
                        available: qty as i32,
                    },
                );
                s.log("CRIACAO_ITEM", id, format!("Novo item: {} (Qtd: {})", name, qty));
                json(201, &item)
            }
            (Method::Delete, ["api", "itens", id]) => {
                let Some(id) = parse_id(id) else {
                    return empty(400);
                };
                let Some(pos) = s.items.iter().position(|i| i.id == id) else {
                    return empty(404);
                };
                let item = s.items.remove(pos);
                s.stock.remove(&id);
                s.movements.retain(|m| m.effective_item_id() != Some(id));
                s.log(
                    "EXCLUSAO_ITEM",
                    id,
                    format!("Item excluído: {}, estoque removido", item.name),
                );
                empty(204)
            }
            (Method::Patch, ["api", "itens", "estoque", id]) => {
                let id = parse_id(id).unwrap_or_default();
                let new_total = body["quantidadeTotal"].as_i64().filter(|q| *q >= 0);
                let Some(stock) = s.stock.get_mut(&id) else {
                    return text(404, "Estoque não encontrado para este item.");
                };
                let Some(new_total) = new_total else {
                    return text(400, "Nova quantidade total inválida.");
                };
                let diff = new_total as i32 - stock.total;
                stock.total = new_total as i32;
                stock.available = (stock.available + diff).max(0);
                let updated = *stock;
                s.log("AJUSTE_ESTOQUE", id, format!("Ajuste de QTD: Diferença {:+}", diff));
                json(200, &updated)
            }
            (Method::Get, ["api", "movimentacao", "estoque", id]) => {
                match parse_id(id).and_then(|id| s.stock.get(&id)) {
                    Some(stock) => json(200, stock),
                    None => empty(404),
                }
            }
            (Method::Get, ["api", "movimentacao", "ativas"]) => {
                let active: Vec<&Movement> =
                    s.movements.iter().filter(|m| !m.has_return_date()).collect();
                json(200, &active)
            }
            (Method::Get, ["api", "movimentacoes"])
            | (Method::Get, ["api", "movimentacao", "movimentacoes"]) => json(200, &s.movements),
            (Method::Post, ["api", "movimentacao", "retirar", id]) => {
                let id = parse_id(id).unwrap_or_default();
                let Some(item) = s.items.iter().find(|i| i.id == id).cloned() else {
                    return text(404, "Item não encontrado.");
                };
                let Some(qty) = body["quantidade"].as_i64().filter(|q| *q > 0) else {
                    return text(400, "A quantidade a ser retirada é obrigatória e deve ser > 0.");
                };
                let available = s.stock.get(&id).map(|st| st.available).unwrap_or(0);
                if qty as i32 > available {
                    return text(400, &format!("Estoque insuficiente. Disponível: {}", available));
                }
                let kind = body["tipo"].as_str().unwrap_or("RETIRADA").to_string();
                let expected = body["dataPrevistaDevolucao"].as_str().map(str::to_string);
                if kind == "RETIRADA" && expected.is_none() {
                    return text(
                        400,
                        "Data prevista de devolução é obrigatória para o tipo RETIRADA.",
                    );
                }
                if let Some(stock) = s.stock.get_mut(&id) {
                    stock.available -= qty as i32;
                }
                let at = s.tick();
                let movement_id = s.next_movement_id;
                s.next_movement_id += 1;
                let movement = Movement {
                    id: Some(movement_id),
                    item_name: Some(item.name.clone()),
                    item: Some(item),
                    quantity: Some(qty as i32),
                    kind: Some(kind),
                    requester: body["funcionarioSolicitante"].as_str().map(str::to_string),
                    checked_out_at: Some(at.clone()),
                    expected_return: expected,
                    deadline_status: Some("PENDENTE".into()),
                    registered_at: Some(at),
                    ..Default::default()
                };
                s.movements.push(movement.clone());
                s.log("RETIRADA_RETIRADA", id, format!("Retirada de {} unidades", qty));
                json(201, &movement)
            }
            (Method::Post, ["api", "movimentacao", "devolver", id]) => {
                let id = parse_id(id).unwrap_or_default();
                let Some(qty) = body["quantidadeDevolvida"].as_i64().filter(|q| *q > 0) else {
                    return text(
                        400,
                        "A quantidade a ser devolvida é obrigatória e deve ser maior que zero.",
                    );
                };
                let Some(stock) = s.stock.get(&id).copied() else {
                    return text(404, "Item ou Estoque não encontrado.");
                };
                let out = stock.units_out();
                if qty as i32 > out {
                    return text(
                        400,
                        &format!(
                            "Erro: A quantidade devolvida excede as unidades atualmente fora de estoque ({}).",
                            out
                        ),
                    );
                }
                if let Some(stock) = s.stock.get_mut(&id) {
                    stock.available += qty as i32;
                }
                let now = s.tick();
                let mut remaining = qty as i32;
                for m in s
                    .movements
                    .iter_mut()
                    .filter(|m| m.effective_item_id() == Some(id) && !m.has_return_date())
                {
                    if remaining <= 0 {
                        break;
                    }
                    let open = m.quantity.unwrap_or(0);
                    if remaining >= open {
                        m.returned_at = Some(now.clone());
                        m.deadline_status = Some("CONCLUIDO".into());
                        remaining -= open;
                    } else {
                        m.quantity = Some(open - remaining);
                        remaining = 0;
                    }
                }
                s.log("DEVOLUCAO_ITEM", id, format!("Devolução de {} unidades.", qty));
                text(200, "Devolução registrada com sucesso. Estoque atualizado.")
            }
            (Method::Get, ["api", "auditoria"]) => {
                let newest_first: Vec<&AuditLogEntry> = s.audit.iter().rev().collect();
                json(200, &newest_first)
            }
            _ => empty(404),
        }
    }
}

impl HttpTransport for FakeBackend {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let path = request
            .url
            .strip_prefix(BASE)
            .unwrap_or(&request.url)
            .to_string();
        let hang = {
            let mut s = self.state.borrow_mut();
            s.requests.push(request.clone());
            s.hang_all || s.hanging.contains(&path)
        };
        if hang {
            futures::future::pending::<()>().await;
        }

        if self.state.borrow().offline.contains(&path) {
            return Err(ApiError::Network("Failed to fetch".into()));
        }
        Ok(self.route(request.method, &path, request.body.as_deref()))
    }

    /// Elapses at once while anything hangs. Answered requests still win
    /// the race, since `execute` completes on its first poll.
    async fn sleep(&self, _millis: u32) {
        let hang = {
            let s = self.state.borrow();
            s.hang_all || !s.hanging.is_empty()
        };
        if !hang {
            futures::future::pending::<()>().await;
        }
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

fn status_text(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        404 => "Not Found",
        _ => "Internal Server Error",
    }
}

fn json<T: Serialize + ?Sized>(status: u16, body: &T) -> HttpResponse {
    HttpResponse {
        status,
        status_text: status_text(status).to_string(),
        content_type: Some("application/json".to_string()),
        body: serde_json::to_string(body).unwrap_or_default(),
    }
}

fn text(status: u16, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        status_text: status_text(status).to_string(),
        content_type: Some("text/plain;charset=UTF-8".to_string()),
        body: body.to_string(),
    }
}

fn empty(status: u16) -> HttpResponse {
    HttpResponse {
        status,
        status_text: status_text(status).to_string(),
        content_type: None,
        body: String::new(),
    }
}
