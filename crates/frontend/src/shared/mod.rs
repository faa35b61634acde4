pub mod api_client;
pub mod api_utils;
pub mod config;
pub mod date_utils;
pub mod icons;
pub mod list_utils;
pub mod load_generation;
pub mod modal;
pub mod text_utils;
pub mod toast;
