//! Dashboard session: role, credential check and login/logout transitions.
//!
//! The credential check is a fixed compare that only decides which UI to show.
//! It is not an access-control mechanism; the backend does not see the role.

use serde::{Deserialize, Serialize};

/// Local storage key holding the session role
pub const ROLE_STORAGE_KEY: &str = "userRole";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    /// Restricted operator at the gate: no audit, no stock adjustment
    #[serde(rename = "portaria")]
    Gatekeeper,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Gatekeeper => "portaria",
        }
    }

    /// Parse a stored role; anything unrecognised means no session
    pub fn from_storage(raw: &str) -> Option<Self> {
        match raw.trim() {
            "admin" => Some(Self::Admin),
            "portaria" => Some(Self::Gatekeeper),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Administrador",
            Self::Gatekeeper => "Portaria",
        }
    }
}

const ACCOUNTS: [(&str, &str, Role); 2] = [
    ("admin", "@gestaoAuditoriaP", Role::Admin),
    ("portaria", "gestaoEstoque", Role::Gatekeeper),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Usuário ou senha incorretos.")]
    InvalidCredentials,
}

/// Match the typed credentials (trimmed) against the known accounts
pub fn authenticate(username: &str, password: &str) -> Result<Role, AuthError> {
    let (username, password) = (username.trim(), password.trim());
    ACCOUNTS
        .iter()
        .find(|(u, p, _)| *u == username && *p == password)
        .map(|(_, _, role)| *role)
        .ok_or(AuthError::InvalidCredentials)
}

/// Two-state session machine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated(Role),
}

impl SessionState {
    pub fn from_stored_role(raw: Option<&str>) -> Self {
        raw.and_then(Role::from_storage)
            .map(Self::Authenticated)
            .unwrap_or_default()
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Authenticated(role) => Some(*role),
            Self::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.role().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role().map(|r| r.is_admin()).unwrap_or(false)
    }

    /// On mismatch the state is left untouched
    pub fn login(&mut self, username: &str, password: &str) -> Result<Role, AuthError> {
        let role = authenticate(username, password)?;
        *self = Self::Authenticated(role);
        Ok(role)
    }

    pub fn logout(&mut self) {
        *self = Self::Unauthenticated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_credentials() {
        assert_eq!(authenticate("admin", "@gestaoAuditoriaP"), Ok(Role::Admin));
        assert_eq!(authenticate(" admin ", " @gestaoAuditoriaP "), Ok(Role::Admin));
    }

    #[test]
    fn test_gatekeeper_credentials() {
        assert_eq!(authenticate("portaria", "gestaoEstoque"), Ok(Role::Gatekeeper));
    }

    #[test]
    fn test_mismatch_is_rejected() {
        for (u, p) in [
            ("admin", "gestaoEstoque"),
            ("portaria", "@gestaoAuditoriaP"),
            ("Admin", "@gestaoAuditoriaP"),
            ("", ""),
        ] {
            assert_eq!(authenticate(u, p), Err(AuthError::InvalidCredentials));
        }
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Usuário ou senha incorretos."
        );
    }

    #[test]
    fn test_session_transitions() {
        let mut session = SessionState::default();
        assert!(!session.is_authenticated());

        assert!(session.login("admin", "wrong").is_err());
        assert_eq!(session, SessionState::Unauthenticated);

        session.login("admin", "@gestaoAuditoriaP").unwrap();
        assert!(session.is_admin());

        session.logout();
        assert_eq!(session, SessionState::Unauthenticated);
    }

    #[test]
    fn test_stored_role_parsing() {
        assert_eq!(
            SessionState::from_stored_role(Some("admin")),
            SessionState::Authenticated(Role::Admin)
        );
        assert_eq!(
            SessionState::from_stored_role(Some("portaria")),
            SessionState::Authenticated(Role::Gatekeeper)
        );
        assert_eq!(SessionState::from_stored_role(Some("root")), SessionState::Unauthenticated);
        assert_eq!(SessionState::from_stored_role(None), SessionState::Unauthenticated);
    }
}
