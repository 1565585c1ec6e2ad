use linkgen_core::{ParameterCategory, ParametersModel, SelectionEntry};
use serde::Deserialize;

/// Wire shape of the remotely hosted catalogue document. Any category key
/// may be absent and is then treated as an empty list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogueDto {
    #[serde(default)]
    pub companies: Vec<EntryDto>,
    #[serde(default)]
    pub titles: Vec<EntryDto>,
    #[serde(default)]
    pub countries: Vec<EntryDto>,
    #[serde(default)]
    pub cities: Vec<EntryDto>,
}

/// One catalogue entry. The catalogue carries numeric ids; the model keys
/// its maps by the string form.
#[derive(Debug, Clone, Deserialize)]
pub struct EntryDto {
    pub name: String,
    pub search_id: i64,
}

impl CatalogueDto {
    /// Converts the wire document into the identifier-keyed model shape.
    /// Catalogue entries never carry selection state, so everything starts
    /// unselected.
    pub fn into_parameters(self) -> ParametersModel {
        ParametersModel {
            companies: into_category(self.companies),
            titles: into_category(self.titles),
            countries: into_category(self.countries),
            cities: into_category(self.cities),
        }
    }
}

fn into_category(entries: Vec<EntryDto>) -> ParameterCategory {
    entries
        .into_iter()
        .map(|entry| SelectionEntry::new(entry.search_id.to_string(), entry.name))
        .collect()
}
