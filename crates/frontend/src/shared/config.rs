//! Client configuration.
//!
//! The defaults live in `config.toml` next to this file and are embedded into
//! the wasm bundle, so the dashboard has no config fetch at startup.

use serde::Deserialize;

use crate::shared::api_utils::api_base;

const DEFAULT_CONFIG: &str = include_str!("config.toml");

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base: String,
    pub backend_port: u16,
    pub prefix: String,
    pub timeout_ms: u32,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct UiConfig {
    pub item_search_debounce_ms: u32,
    pub audit_search_debounce_ms: u32,
    pub toast_visible_ms: u32,
    pub toast_remove_ms: u32,
    pub login_transition_ms: u32,
    pub description_max_len: usize,
    pub audit_details_max_len: usize,
}

impl ApiConfig {
    /// Base URL requests go to; an empty `base` follows the page's host
    pub fn resolved_base(&self) -> String {
        if self.base.trim().is_empty() {
            api_base(self.backend_port)
        } else {
            self.base.trim_end_matches('/').to_string()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base: String::new(),
                backend_port: 8080,
                prefix: "/api".to_string(),
                timeout_ms: 10_000,
            },
            ui: UiConfig {
                item_search_debounce_ms: 250,
                audit_search_debounce_ms: 200,
                toast_visible_ms: 3000,
                toast_remove_ms: 3400,
                login_transition_ms: 900,
                description_max_len: 120,
                audit_details_max_len: 160,
            },
        }
    }
}

pub fn parse_config(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

/// Load the embedded configuration, falling back to compiled-in defaults
pub fn load_config() -> Config {
    match parse_config(DEFAULT_CONFIG) {
        Ok(config) => {
            log::debug!("Using embedded configuration, api prefix {}", config.api.prefix);
            config
        }
        Err(e) => {
            log::error!("Embedded config.toml is invalid, using defaults: {}", e);
            Config::default()
        }
    }
}

/// UI timings and limits provided at the application root
pub fn use_ui_config() -> UiConfig {
    leptos::prelude::use_context::<UiConfig>().unwrap_or(Config::default().ui)
}
