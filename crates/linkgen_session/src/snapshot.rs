use linkgen_core::SearchModel;
use linkgen_engine::BlobStore;

/// Store key under which the last-used search is remembered.
pub const SNAPSHOT_KEY: &str = "LinkedInLastSearch";

/// Restores the last-used search, or a default model when no snapshot
/// exists or the stored one no longer decodes. Decode failure is a schema
/// drift situation, not an error: the snapshot is discarded with a warning.
pub fn load_search_model(store: &dyn BlobStore) -> SearchModel {
    let Some(blob) = store.get(SNAPSHOT_KEY) else {
        return SearchModel::default();
    };

    match serde_json::from_slice(&blob) {
        Ok(model) => model,
        Err(err) => {
            log::warn!("Discarding unreadable search snapshot: {err}");
            SearchModel::default()
        }
    }
}

/// Persists the current search. The model's own schema is always
/// encodable, so a serialization failure is a defect: it fails loudly in
/// development builds and degrades to an error log in release builds. A
/// store write failure is logged; the in-memory model stays authoritative.
pub fn save_search_model(store: &dyn BlobStore, model: &SearchModel) {
    let blob = match serde_json::to_vec(model) {
        Ok(blob) => blob,
        Err(err) => {
            log::error!("Failed to serialize search model: {err}");
            debug_assert!(false, "search model must always be encodable: {err}");
            return;
        }
    };

    if let Err(err) = store.set(SNAPSHOT_KEY, &blob) {
        log::error!("Failed to persist search snapshot: {err}");
    }
}
