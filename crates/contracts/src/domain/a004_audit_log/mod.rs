pub mod aggregate;

pub use aggregate::{search, AuditLogEntry};
