//! Decoding of the provisioning profile embedded in an app bundle.
//!
//! A provisioning profile is a CMS (PKCS#7) signed message whose payload is a
//! plist. Unwrapping the signature is delegated to a system tool behind the
//! [`ProfileDecoder`] trait; this module only parses the payload.

use std::{collections::BTreeMap, env, path::Path, process::Command};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::utils::*;

/// Holds the signing certificates as raw data blobs. Never kept.
pub const DEVELOPER_CERTIFICATES_KEY: &str = "DeveloperCertificates";

pub trait ProfileDecoder {
    /// Returns the plaintext plist embedded in the signed profile at `path`.
    fn decode(&self, path: &Path) -> Result<Vec<u8>>;
}

/// `security cms -D -i <path>`, available on macOS.
pub struct SecurityCmsDecoder;

impl ProfileDecoder for SecurityCmsDecoder {
    fn decode(&self, path: &Path) -> Result<Vec<u8>> {
        let mut cmd = Command::new("security");
        cmd.args(["cms", "-D", "-i"]).arg(path);
        run_decoder(cmd)
    }
}

/// `openssl cms -verify -noverify`, for hosts without the `security` tool.
///
/// The signer chain is not verified; the payload is extracted as is.
pub struct OpensslCmsDecoder;

impl ProfileDecoder for OpensslCmsDecoder {
    fn decode(&self, path: &Path) -> Result<Vec<u8>> {
        let mut cmd = Command::new("openssl");
        cmd.args(["cms", "-verify", "-noverify", "-inform", "DER", "-in"])
            .arg(path);
        run_decoder(cmd)
    }
}

fn run_decoder(mut cmd: Command) -> Result<Vec<u8>> {
    println!("$ {:?}", cmd);
    let output = cmd.successful_output()?;
    Ok(output.stdout)
}

pub fn default_decoder() -> Box<dyn ProfileDecoder> {
    if env::consts::OS == "macos" {
        Box::new(SecurityCmsDecoder)
    } else {
        Box::new(OpensslCmsDecoder)
    }
}

/// A top-level profile entry.
///
/// Containers are kept as they are, every other plist type is flattened to
/// its string form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProfileValue {
    String(String),
    Dictionary(plist::Dictionary),
    Array(Vec<plist::Value>),
}

impl ProfileValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[plist::Value]> {
        match self {
            Self::Array(array) => Some(array.as_slice()),
            _ => None,
        }
    }

    pub fn as_dictionary(&self) -> Option<&plist::Dictionary> {
        match self {
            Self::Dictionary(dict) => Some(dict),
            _ => None,
        }
    }
}

impl From<plist::Value> for ProfileValue {
    fn from(value: plist::Value) -> Self {
        match value {
            plist::Value::Dictionary(dict) => Self::Dictionary(dict),
            plist::Value::Array(array) => Self::Array(array),
            plist::Value::String(s) => Self::String(s),
            plist::Value::Boolean(b) => Self::String(b.to_string()),
            plist::Value::Integer(i) => Self::String(i.to_string()),
            plist::Value::Real(r) => Self::String(r.to_string()),
            plist::Value::Date(date) => Self::String(date.to_xml_format()),
            plist::Value::Data(data) => Self::String(String::from_utf8_lossy(&data).into_owned()),
            other => Self::String(format!("{:?}", other)),
        }
    }
}

/// Decoded profile content, without [`DEVELOPER_CERTIFICATES_KEY`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProvisioningProfile {
    entries: BTreeMap<String, ProfileValue>,
}

impl ProvisioningProfile {
    pub fn from_plist_bytes(bytes: &[u8]) -> Result<Self> {
        let value: plist::Value =
            plist::from_bytes(bytes).with_context(|| "Failed to parse profile plist")?;
        let dict = value
            .into_dictionary()
            .context("Profile plist is not a dictionary")?;
        Ok(Self::from_dictionary(dict))
    }

    pub fn from_dictionary(dict: plist::Dictionary) -> Self {
        let entries = dict
            .into_iter()
            .filter(|(key, _)| key != DEVELOPER_CERTIFICATES_KEY)
            .map(|(key, value)| (key, ProfileValue::from(value)))
            .collect();
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&ProfileValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Decodes the profile at `path` with `decoder` and parses its payload.
pub fn read_provisioning_profile(
    decoder: &dyn ProfileDecoder,
    path: &Path,
) -> Result<ProvisioningProfile> {
    let payload = decoder
        .decode(path)
        .with_context(|| format!("Failed to decode provisioning profile {}", path.display()))?;
    let profile = ProvisioningProfile::from_plist_bytes(&payload)
        .with_context(|| format!("Invalid provisioning profile {}", path.display()))?;

    match serde_json::to_string(&profile) {
        Ok(json) => tracing::debug!(profile = %json, "decoded provisioning profile"),
        Err(e) => tracing::debug!(error = %e, "decoded provisioning profile is not JSON serializable"),
    }

    Ok(profile)
}
