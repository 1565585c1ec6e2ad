use linkgen_core::{build_link, ParametersModel, SearchModel};
use linkgen_engine::{BlobStore, CatalogueEvent, CatalogueHandle, FetchError};
use url::Url;

use crate::snapshot::{load_search_model, save_search_model};

/// The single logical owner of a [`SearchModel`].
///
/// Constructed once per UI session; reads the persisted snapshot at
/// startup and writes it back only on explicit [`save`](Session::save).
/// Being the sole writer is what makes the synchronous store safe.
pub struct Session<S: BlobStore> {
    model: SearchModel,
    store: S,
}

impl<S: BlobStore> Session<S> {
    /// Starts a session from the stored snapshot, or from defaults when
    /// there is none.
    pub fn restore(store: S) -> Self {
        let model = load_search_model(&store);
        Self { model, store }
    }

    pub fn model(&self) -> &SearchModel {
        &self.model
    }

    /// Live UI edits mutate the model in place through this.
    pub fn model_mut(&mut self) -> &mut SearchModel {
        &mut self.model
    }

    /// Snapshots the current model to the store.
    pub fn save(&self) {
        save_search_model(&self.store, &self.model);
    }

    /// Renders the current state as a destination URL.
    pub fn build_link(&self) -> Option<Url> {
        build_link(&self.model)
    }

    /// Applies a completed catalogue fetch.
    ///
    /// On success the parameter set is replaced by the merge result in a
    /// single assignment, so no reader ever observes a half-merged set of
    /// categories. On failure the local parameters are left untouched; the
    /// user keeps whatever they had.
    pub fn apply_catalogue(&mut self, result: Result<ParametersModel, FetchError>) {
        match result {
            Ok(remote) => {
                self.model.parameters = self.model.parameters.merged(&remote);
            }
            Err(err) => {
                log::warn!("Catalogue unavailable, keeping local parameters: {err}");
            }
        }
    }

    /// Drains one pending catalogue event from the handle, if any.
    /// Returns whether an event was applied.
    pub fn poll_catalogue(&mut self, handle: &CatalogueHandle) -> bool {
        match handle.try_recv() {
            Some(CatalogueEvent::Fetched(result)) => {
                self.apply_catalogue(result);
                true
            }
            None => false,
        }
    }
}
