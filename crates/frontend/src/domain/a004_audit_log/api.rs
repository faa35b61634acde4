use contracts::domain::a004_audit_log::AuditLogEntry;

use crate::shared::api_client::{ApiClient, ApiError, HttpTransport};

/// Full audit trail, newest first as the server orders it
pub async fn load_audit<T: HttpTransport>(
    client: &ApiClient<T>,
) -> Result<Vec<AuditLogEntry>, ApiError> {
    Ok(client
        .get::<Vec<AuditLogEntry>>("auditoria")
        .await?
        .unwrap_or_default())
}
