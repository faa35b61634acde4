use contracts::system::auth::{Role, SessionState, ROLE_STORAGE_KEY};
use web_sys::window;

/// String key/value persistence, `localStorage` in the browser
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = get_local_storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("[auth] could not persist {}", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Session as left by the last login; unknown roles count as logged out
pub fn load_session(store: &impl KeyValueStore) -> SessionState {
    SessionState::from_stored_role(store.get(ROLE_STORAGE_KEY).as_deref())
}

pub fn save_role(store: &impl KeyValueStore, role: Role) {
    store.set(ROLE_STORAGE_KEY, role.as_str());
}

pub fn clear_role(store: &impl KeyValueStore) {
    store.remove(ROLE_STORAGE_KEY);
}
