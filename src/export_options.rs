use std::{fmt::Display, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::export_method::ExportMethod;
use crate::utils::*;

/// Content of the `-exportOptionsPlist` file passed to `xcodebuild -exportArchive`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<ExportMethod>,
}

impl ExportOptions {
    pub fn new(method: Option<ExportMethod>) -> Self {
        Self { method }
    }

    pub fn to_plist_string(&self) -> Result<String> {
        let mut content = Vec::new();
        plist::to_writer_xml(&mut content, self)
            .with_context(|| "Failed to serialize export options")?;
        String::from_utf8(content).with_context(|| "Serialized export options are not UTF-8")
    }

    pub fn from_plist_bytes(bytes: &[u8]) -> Result<Self> {
        plist::from_bytes(bytes).with_context(|| "Failed to parse export options plist")
    }

    pub fn read_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read(path)
            .with_context(|| format!("Failed to read export options at {}", path.display()))?;
        Self::from_plist_bytes(&content)
    }

    /// Serializes the options and replaces `path` with the result.
    ///
    /// Prints the options and the generated plist before writing.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        println!();
        println!(" (i) export_options: {}", self);
        let content = self.to_plist_string()?;
        println!(" (i) plist_content: {}", content);
        println!(" (i) saving into file: {}", path.display());

        fs::write_file(path, content.as_bytes())
            .with_context(|| format!("Failed to save export options to {}", path.display()))
    }
}

impl Display for ExportOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        write!(f, "{}", json)
    }
}
