use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::profile::ProvisioningProfile;

/// Distribution channel written to the `method` key of the export options.
///
/// Any string is accepted. Values `xcodebuild` does not know about are kept
/// verbatim in `Other`, so parsing and printing always round-trip.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExportMethod {
    AppStore,
    AdHoc,
    Enterprise,
    Development,
    Other(String),
}

impl ExportMethod {
    pub fn known() -> Vec<Self> {
        vec![
            Self::AppStore,
            Self::AdHoc,
            Self::Enterprise,
            Self::Development,
        ]
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::AppStore => "app-store",
            Self::AdHoc => "ad-hoc",
            Self::Enterprise => "enterprise",
            Self::Development => "development",
            Self::Other(method) => method,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Profiles that enumerate device UDIDs are treated as development
    /// profiles, everything else as App Store.
    ///
    /// Ad-hoc and enterprise profiles are not told apart.
    pub fn classify(profile: &ProvisioningProfile) -> Self {
        if profile.contains_key("ProvisionedDevices") {
            Self::Development
        } else {
            Self::AppStore
        }
    }
}

impl From<&str> for ExportMethod {
    fn from(s: &str) -> Self {
        match s {
            "app-store" => ExportMethod::AppStore,
            "ad-hoc" => ExportMethod::AdHoc,
            "enterprise" => ExportMethod::Enterprise,
            "development" => ExportMethod::Development,
            _ => ExportMethod::Other(s.to_string()),
        }
    }
}

impl From<String> for ExportMethod {
    fn from(s: String) -> Self {
        match ExportMethod::from(s.as_str()) {
            ExportMethod::Other(_) => ExportMethod::Other(s),
            known => known,
        }
    }
}

impl From<ExportMethod> for String {
    fn from(method: ExportMethod) -> Self {
        match method {
            ExportMethod::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for ExportMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
