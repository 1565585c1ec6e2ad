use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use crate::search::{LinkType, SearchModel};

/// Fixed `geoId` for a worldwide search.
pub const GEO_ID_WORLDWIDE: &str = "92000000";
/// Fixed `location` label matching [`GEO_ID_WORLDWIDE`].
pub const LOCATION_WORLDWIDE: &str = "Worldwide";

/// Separator between ids inside a single multi-value query parameter. The
/// destination expects the encoded comma literally, so it is joined into the
/// value rather than left for the URL assembly to encode.
const ID_SEPARATOR: &str = "%2C";

/// Everything that must be escaped in a URL query component per RFC 3986:
/// alphanumerics and the query-allowed punctuation pass through, space
/// becomes `%20`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b':')
    .remove(b'@')
    .remove(b'/')
    .remove(b'?');

/// Renders the current search state as a destination URL.
///
/// Pure and deterministic: safe to call on every UI refresh. Query
/// parameters appear in a fixed order and parameters with empty values are
/// dropped, so two equal models always render byte-identical URLs.
///
/// Returns `None` only if URL assembly itself fails, which closed enum
/// inputs cannot cause; a `None` here is a defect, not a runtime condition
/// to recover from.
pub fn build_link(model: &SearchModel) -> Option<Url> {
    let parameters = &model.parameters;

    let pairs = [
        ("f_T", parameters.titles.selected_ids().join(ID_SEPARATOR)),
        ("f_C", parameters.companies.selected_ids().join(ID_SEPARATOR)),
        ("f_CR", parameters.countries.selected_ids().join(ID_SEPARATOR)),
        ("f_PP", parameters.cities.selected_ids().join(ID_SEPARATOR)),
        ("f_TPR", format!("r{}", model.window_seconds())),
        ("geoId", GEO_ID_WORLDWIDE.to_string()),
        (
            "keywords",
            utf8_percent_encode(&model.search_phrase, QUERY_COMPONENT).to_string(),
        ),
        ("location", LOCATION_WORLDWIDE.to_string()),
        ("f_AL", flag(model.is_easy_apply)),
        ("f_EA", flag(model.is_few_applicants)),
        ("sortBy", model.sorting.query_code().to_string()),
    ];

    let query = pairs
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    let base = match model.link_type {
        LinkType::Url => "https://www.linkedin.com/jobs/search/",
        LinkType::Deeplink => "linkedin://jobs/search/",
    };

    // Values are percent-encoded already; parsing the assembled string does
    // not touch existing escape sequences, so nothing is double-encoded.
    Url::parse(&format!("{base}?{query}")).ok()
}

fn flag(enabled: bool) -> String {
    if enabled {
        "true".to_string()
    } else {
        String::new()
    }
}
