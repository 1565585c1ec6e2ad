//! LinkGen core: pure selectable-parameter model and query URL builder.
mod link;
mod parameter;
mod parameters;
mod search;

pub use link::{build_link, GEO_ID_WORLDWIDE, LOCATION_WORLDWIDE};
pub use parameter::{ParameterCategory, SelectionEntry};
pub use parameters::{CategoryKind, ParametersModel};
pub use search::{LinkType, SearchModel, Sorting, TimeUnit};
