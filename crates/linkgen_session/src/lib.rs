//! LinkGen session: ties the pure model to the engine's fetcher and store.
//!
//! One session owns one [`linkgen_core::SearchModel`] at a time: restored
//! from the store on construction, mutated by the embedding UI, refreshed
//! from the remote catalogue off the interactive path, and persisted on
//! explicit save.
pub mod logging;
mod session;
mod snapshot;

pub use session::Session;
pub use snapshot::{load_search_model, save_search_model, SNAPSHOT_KEY};
