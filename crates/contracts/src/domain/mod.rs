pub mod a001_item;
pub mod a002_stock;
pub mod a003_movement;
pub mod a004_audit_log;
pub mod common;
