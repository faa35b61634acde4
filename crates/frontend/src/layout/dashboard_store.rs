use contracts::domain::a001_item::aggregate::ItemId;
use contracts::domain::a002_stock::aggregate::Stock;
use contracts::domain::a004_audit_log::AuditLogEntry;
use contracts::system::auth::Role;
use leptos::prelude::*;
use web_sys::window;

use super::sections::{section_from_query, section_query, Section};

/// Which dialog is open, with the data it was opened for
#[derive(Debug, Clone, PartialEq)]
pub enum ModalTarget {
    CreateItem,
    DeleteItem {
        item_id: ItemId,
        name: String,
    },
    Checkout {
        item_id: ItemId,
        name: String,
    },
    Return {
        item_id: ItemId,
        name: String,
        quantity: Option<i32>,
    },
    AdjustStock {
        item_id: ItemId,
        name: String,
        stock: Stock,
    },
}

/// Views to reload after a mutating action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPlan {
    pub items: bool,
    pub movements: bool,
    pub audit: bool,
}

impl RefreshPlan {
    /// Items and movements always; the audit trail only for admins
    pub fn after_mutation(role: Option<Role>) -> Self {
        Self {
            items: true,
            movements: true,
            audit: role.map(|r| r.is_admin()).unwrap_or(false),
        }
    }
}

/// Dashboard-wide state. Loaders watch the revision counters; bumping one
/// makes the matching view fetch again.
#[derive(Clone, Copy)]
pub struct DashboardStore {
    pub section: RwSignal<Section>,
    pub items_revision: RwSignal<u64>,
    pub movements_revision: RwSignal<u64>,
    pub audit_revision: RwSignal<u64>,
    pub item_filter: RwSignal<String>,
    /// Last fetched audit trail, searched locally
    pub audit_entries: RwSignal<Vec<AuditLogEntry>>,
    pub audit_query: RwSignal<String>,
    pub modal: RwSignal<Option<ModalTarget>>,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self {
            section: RwSignal::new(Section::default()),
            items_revision: RwSignal::new(0),
            movements_revision: RwSignal::new(0),
            audit_revision: RwSignal::new(0),
            item_filter: RwSignal::new(String::new()),
            audit_entries: RwSignal::new(Vec::new()),
            audit_query: RwSignal::new(String::new()),
            modal: RwSignal::new(None),
        }
    }

    pub fn open_modal(&self, target: ModalTarget) {
        self.modal.set(Some(target));
    }

    pub fn close_modal(&self) {
        self.modal.set(None);
    }

    pub fn reload_items(&self) {
        self.items_revision.update(|r| *r += 1);
    }

    pub fn reload_movements(&self) {
        self.movements_revision.update(|r| *r += 1);
    }

    pub fn reload_audit(&self) {
        self.audit_revision.update(|r| *r += 1);
    }

    pub fn refresh_after_mutation(&self, role: Option<Role>) {
        let plan = RefreshPlan::after_mutation(role);
        log::debug!("[dashboard] refresh after mutation: {:?}", plan);
        if plan.items {
            self.reload_items();
        }
        if plan.movements {
            self.reload_movements();
        }
        if plan.audit {
            self.reload_audit();
        }
    }

    /// Restore the section from `?section=` and keep the URL in step with it
    pub fn init_url_sync(&self, role: Option<Role>) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(section) = section_from_query(&search).filter(|s| s.allowed_for(role)) {
            self.section.set(section);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = section_query(this.section.get());
            let Some(w) = window() else {
                return;
            };
            let current_search = w.location().search().unwrap_or_default();
            if current_search != new_url {
                if let Ok(history) = w.history() {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    );
                }
            }
        });
    }
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_dashboard() -> DashboardStore {
    use_context::<DashboardStore>().expect("DashboardStore not provided in context")
}
