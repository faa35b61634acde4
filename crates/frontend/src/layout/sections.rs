//! Dashboard sections and their activation table.

use contracts::system::auth::Role;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Items,
    Movements,
    Audit,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Items, Section::Movements, Section::Audit];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Items => "items",
            Self::Movements => "movements",
            Self::Audit => "audit",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key.trim())
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Items => "Itens",
            Self::Movements => "Movimentações",
            Self::Audit => "Auditoria",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Items => "items",
            Self::Movements => "movements",
            Self::Audit => "audit",
        }
    }

    pub fn requires_admin(&self) -> bool {
        matches!(self, Self::Audit)
    }

    pub fn allowed_for(&self, role: Option<Role>) -> bool {
        !self.requires_admin() || role.map(|r| r.is_admin()).unwrap_or(false)
    }

    /// Navigation entries for `role`, in display order
    pub fn visible_for(role: Option<Role>) -> Vec<Section> {
        Self::ALL
            .into_iter()
            .filter(|s| s.allowed_for(role))
            .collect()
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SectionQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    section: Option<String>,
}

/// Section named in a location query such as `?section=audit`
pub fn section_from_query(search: &str) -> Option<Section> {
    serde_qs::from_str::<SectionQuery>(search.trim_start_matches('?'))
        .ok()?
        .section
        .as_deref()
        .and_then(Section::from_key)
}

pub fn section_query(section: Section) -> String {
    let query = SectionQuery {
        section: Some(section.key().to_string()),
    };
    format!("?{}", serde_qs::to_string(&query).unwrap_or_default())
}

/// Maps each section to what has to happen when it is opened
#[derive(Default)]
pub struct SectionTable {
    entries: Vec<(Section, Box<dyn Fn()>)>,
}

impl SectionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, section: Section, on_activate: impl Fn() + 'static) -> Self {
        self.entries.push((section, Box::new(on_activate)));
        self
    }

    /// Run the activation of `requested`, or of the item section when `role`
    /// may not open it. Returns the section that was activated.
    pub fn activate(&self, requested: Section, role: Option<Role>) -> Section {
        let section = if requested.allowed_for(role) {
            requested
        } else {
            log::warn!("[dashboard] section {} requires admin", requested.key());
            Section::Items
        };
        if let Some((_, on_activate)) = self.entries.iter().find(|(s, _)| *s == section) {
            on_activate();
        }
        section
    }
}
