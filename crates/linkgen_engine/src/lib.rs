//! LinkGen engine: the I/O boundary around the pure core — remote catalogue
//! fetching and the local snapshot blob store.
mod catalogue;
mod dto;
mod fetch;
mod store;
mod types;

pub use catalogue::{CatalogueEvent, CatalogueHandle};
pub use dto::{CatalogueDto, EntryDto};
pub use fetch::{CatalogueFetcher, FetchSettings, ReqwestCatalogueFetcher, DEFAULT_CATALOGUE_URL};
pub use store::{BlobStore, FileBlobStore, StoreError};
pub use types::{FailureKind, FetchError};
