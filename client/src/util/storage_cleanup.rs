//! `localStorage` cleanup by key prefix.
//!
//! ERROR HANDLING
//! ==============
//! Storage can be disabled or throw (private mode, quota, SSR). Every failure
//! is swallowed and reported as zero removed keys; cleanup is best-effort.

#[cfg(test)]
#[path = "storage_cleanup_test.rs"]
mod storage_cleanup_test;

/// Prefix shared by every key this app writes.
pub const APP_PREFIX: &str = "eventdesk:";

/// Keys that start with at least one non-empty prefix, in input order.
pub fn select_keys<'a>(keys: &'a [String], prefixes: &[&str]) -> Vec<&'a str> {
    keys.iter()
        .map(String::as_str)
        .filter(|key| prefixes.iter().any(|p| !p.is_empty() && key.starts_with(p)))
        .collect()
}

/// Remove every `localStorage` key starting with one of `prefixes`.
///
/// Returns the number of keys removed.
pub fn clear_prefixed(prefixes: &[&str]) -> usize {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return 0;
        };
        let Ok(len) = storage.length() else {
            return 0;
        };
        let keys: Vec<String> = (0..len).filter_map(|i| storage.key(i).ok().flatten()).collect();
        let removed = select_keys(&keys, prefixes)
            .into_iter()
            .filter(|key| storage.remove_item(key).is_ok())
            .count();
        log::debug!("cleared {removed} storage keys");
        removed
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = prefixes;
        0
    }
}
