use contracts::system::auth::{AuthError, Role, SessionState};
use leptos::prelude::*;

use super::storage::{clear_role, load_session, save_role, KeyValueStore, LocalStorage};

/// Restore the session from local storage and provide it to the app
pub fn provide_session() -> RwSignal<SessionState> {
    let session = RwSignal::new(load_session(&LocalStorage));
    log::debug!("[auth] restored session: {:?}", session.get_untracked());
    provide_context(session);
    session
}

/// Hook to access the session
pub fn use_session() -> RwSignal<SessionState> {
    use_context::<RwSignal<SessionState>>().expect("session not provided in context")
}

/// Check credentials, persist the role on success. On failure both the
/// session and the store are left untouched.
pub fn sign_in(
    store: &impl KeyValueStore,
    session: &mut SessionState,
    username: &str,
    password: &str,
) -> Result<Role, AuthError> {
    let role = session.login(username, password)?;
    save_role(store, role);
    log::info!("[auth] signed in as {}", role.as_str());
    Ok(role)
}

pub fn sign_out(store: &impl KeyValueStore, session: &mut SessionState) {
    clear_role(store);
    session.logout();
}

/// Helper: Perform login against browser storage
pub fn do_login(username: &str, password: &str) -> Result<Role, AuthError> {
    let session = use_session();
    let mut next = session.get_untracked();
    let role = sign_in(&LocalStorage, &mut next, username, password)?;
    session.set(next);
    Ok(role)
}

/// Helper: Perform logout
pub fn do_logout() {
    let session = use_session();
    let mut next = session.get_untracked();
    sign_out(&LocalStorage, &mut next);
    session.set(next);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::storage::memory::MemoryStore;
    use contracts::system::auth::ROLE_STORAGE_KEY;

    #[test]
    fn test_admin_login_stores_role() {
        let store = MemoryStore::default();
        let mut session = SessionState::default();
        let role = sign_in(&store, &mut session, "admin", "@gestaoAuditoriaP").unwrap();
        assert_eq!(role, Role::Admin);
        assert_eq!(session, SessionState::Authenticated(Role::Admin));
        assert_eq!(store.get(ROLE_STORAGE_KEY).as_deref(), Some("admin"));
    }

    #[test]
    fn test_wrong_password_leaves_role_unset() {
        let store = MemoryStore::default();
        let mut session = SessionState::default();
        let err = sign_in(&store, &mut session, "admin", "admin").unwrap_err();
        assert_eq!(err.to_string(), "Usuário ou senha incorretos.");
        assert_eq!(session, SessionState::Unauthenticated);
        assert_eq!(store.get(ROLE_STORAGE_KEY), None);
    }

    #[test]
    fn test_sign_out_clears_role() {
        let store = MemoryStore::default();
        let mut session = SessionState::default();
        sign_in(&store, &mut session, "portaria", "gestaoEstoque").unwrap();
        sign_out(&store, &mut session);
        assert_eq!(session, SessionState::Unauthenticated);
        assert_eq!(store.get(ROLE_STORAGE_KEY), None);
    }
}
