use serde::{Deserialize, Serialize};

use crate::parameter::ParameterCategory;

/// The four filter dimensions a search can be narrowed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Companies,
    Titles,
    Countries,
    Cities,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 4] = [
        CategoryKind::Companies,
        CategoryKind::Titles,
        CategoryKind::Countries,
        CategoryKind::Cities,
    ];

    /// Human-readable picker label.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryKind::Companies => "Company",
            CategoryKind::Titles => "Job Title",
            CategoryKind::Countries => "Country",
            CategoryKind::Cities => "City",
        }
    }
}

/// All selectable parameters, one category per filter dimension.
///
/// Categories are independent; ids are only unique within a category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParametersModel {
    pub companies: ParameterCategory,
    pub titles: ParameterCategory,
    pub countries: ParameterCategory,
    pub cities: ParameterCategory,
}

impl ParametersModel {
    pub fn category(&self, kind: CategoryKind) -> &ParameterCategory {
        match kind {
            CategoryKind::Companies => &self.companies,
            CategoryKind::Titles => &self.titles,
            CategoryKind::Countries => &self.countries,
            CategoryKind::Cities => &self.cities,
        }
    }

    pub fn category_mut(&mut self, kind: CategoryKind) -> &mut ParameterCategory {
        match kind {
            CategoryKind::Companies => &mut self.companies,
            CategoryKind::Titles => &mut self.titles,
            CategoryKind::Countries => &mut self.countries,
            CategoryKind::Cities => &mut self.cities,
        }
    }

    /// Merges a freshly fetched catalogue into the locally held parameters,
    /// category by category. See [`ParameterCategory::merged`] for the
    /// per-entry rules. Idempotent: merging the same catalogue twice yields
    /// the same result.
    pub fn merged(&self, remote: &Self) -> Self {
        let mut result = Self::default();
        for kind in CategoryKind::ALL {
            *result.category_mut(kind) = self.category(kind).merged(remote.category(kind));
        }
        result
    }
}
