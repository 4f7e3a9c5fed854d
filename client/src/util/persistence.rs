//! Per-event drafts kept in browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages save in-progress work under `eventdesk:{kind}:{identifier}` so a
//! reload does not lose it. Every key shares [`APP_PREFIX`], which is how
//! logout drops them all through `storage_cleanup::clear_prefixed`.
//!
//! ERROR HANDLING
//! ==============
//! Storage is best-effort. A missing or throwing store reads as "no draft"
//! and writes are dropped; a draft that no longer decodes is discarded.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::storage_cleanup::APP_PREFIX;

/// Namespaced storage key for a per-event draft.
pub fn draft_key(kind: &str, identifier: &str) -> String {
    format!("{APP_PREFIX}{kind}:{identifier}")
}

/// Decode a stored draft; `None` for anything that is not a `T`.
pub fn decode_draft<T: DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_str(raw).ok()
}

/// Load the `kind` draft for `identifier`, dropping it if it no longer decodes.
pub fn load_draft<T: DeserializeOwned>(kind: &str, identifier: &str) -> Option<T> {
    let key = draft_key(kind, identifier);
    let raw = read_item(&key)?;
    let draft = decode_draft(&raw);
    if draft.is_none() {
        remove_item(&key);
    }
    draft
}

/// Store the `kind` draft for `identifier`.
pub fn save_draft<T: Serialize>(kind: &str, identifier: &str, value: &T) {
    if let Ok(raw) = serde_json::to_string(value) {
        write_item(&draft_key(kind, identifier), &raw);
    }
}

/// Forget the `kind` draft for `identifier`.
pub fn clear_draft(kind: &str, identifier: &str) {
    remove_item(&draft_key(kind, identifier));
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn read_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

fn write_item(key: &str, raw: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            if storage.set_item(key, raw).is_err() {
                log::warn!("draft not saved: {key}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, raw);
    }
}

fn remove_item(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
