use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parameters::ParametersModel;

/// Unit of the posting-age window. Each unit maps to a fixed duration in
/// seconds; `Any` disables the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeUnit {
    Any,
    Hour,
    #[default]
    Day,
    Week,
    Month,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 5] = [
        TimeUnit::Any,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Month,
    ];

    pub fn seconds(&self) -> u64 {
        match self {
            TimeUnit::Any => 0,
            TimeUnit::Hour => 3_600,
            TimeUnit::Day => 86_400,
            TimeUnit::Week => 604_800,
            TimeUnit::Month => 2_628_000,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TimeUnit::Any => "Any",
            TimeUnit::Hour => "Hour",
            TimeUnit::Day => "Day",
            TimeUnit::Week => "Week",
            TimeUnit::Month => "Month",
        };
        f.write_str(label)
    }
}

/// Result ordering requested from the destination endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Sorting {
    #[default]
    Recent,
    Relevant,
}

impl Sorting {
    pub const ALL: [Sorting; 2] = [Sorting::Recent, Sorting::Relevant];

    /// Remote sort code carried in the `sortBy` query parameter.
    pub fn query_code(&self) -> &'static str {
        match self {
            Sorting::Recent => "DD",
            Sorting::Relevant => "R",
        }
    }
}

impl fmt::Display for Sorting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sorting::Recent => "Recent",
            Sorting::Relevant => "Relevant",
        };
        f.write_str(label)
    }
}

/// Which flavor of link to produce: a browser URL or an app deeplink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LinkType {
    #[default]
    #[serde(rename = "URL")]
    Url,
    Deeplink,
}

impl LinkType {
    pub const ALL: [LinkType; 2] = [LinkType::Url, LinkType::Deeplink];
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LinkType::Url => "URL",
            LinkType::Deeplink => "Deeplink",
        };
        f.write_str(label)
    }
}

/// The complete, persistable search state: selectable parameters plus the
/// scalar filter settings.
///
/// Every field has a safe default, so a model is never partially invalid.
/// Serialized with the snapshot's camelCase keys; fields missing from an
/// older snapshot fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchModel {
    pub parameters: ParametersModel,
    /// Free text passed through to the destination verbatim (encoded, not
    /// parsed): boolean operators and parentheses are the endpoint's concern.
    pub search_phrase: String,
    pub time_unit: TimeUnit,
    /// Stored 0-based, displayed and entered 1-based (`time_amount + 1`
    /// units). The off-by-one is part of the persisted schema; keep it.
    pub time_amount: u32,
    pub sorting: Sorting,
    pub link_type: LinkType,
    pub is_easy_apply: bool,
    pub is_few_applicants: bool,
}

impl SearchModel {
    /// Posting-age window in seconds: unit duration times the 1-based amount.
    pub fn window_seconds(&self) -> u64 {
        self.time_unit.seconds() * u64::from(self.time_amount + 1)
    }
}
