use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::InputError;

const PROFILE_PATTERN: &str = "Products/Applications/*.app/Contents/embedded.provisionprofile";

/// Returns the embedded provisioning profile of the archived app.
///
/// Archives are expected to hold a single app bundle. When there are more,
/// the first one in alphabetical order wins.
pub fn find_provisioning_profile(archive_path: &Path) -> Result<PathBuf> {
    let mut profiles = embedded_provisioning_profiles(archive_path)?;
    if profiles.len() > 1 {
        tracing::warn!(
            candidates = ?profiles,
            "multiple embedded provisioning profiles found, using the first one"
        );
    }

    if profiles.is_empty() {
        return Err(InputError::ProfileNotFound {
            archive_path: archive_path.to_path_buf(),
        }
        .into());
    }

    let profile = profiles.swap_remove(0);
    tracing::debug!(path = %profile.display(), "found embedded provisioning profile");
    Ok(profile)
}

/// All files matching the embedded profile location, in `glob` order.
pub fn embedded_provisioning_profiles(archive_path: &Path) -> Result<Vec<PathBuf>> {
    let archive = archive_path
        .to_str()
        .with_context(|| format!("Archive path is not valid UTF-8: {:?}", archive_path))?;
    let pattern = Path::new(&glob::Pattern::escape(archive)).join(PROFILE_PATTERN);
    let pattern = pattern
        .to_str()
        .with_context(|| format!("Invalid search pattern: {:?}", pattern))?;

    let profiles = glob::glob(pattern)
        .with_context(|| format!("Invalid search pattern: {}", pattern))?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::debug!(error = %e, "skipping unreadable path");
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();
    Ok(profiles)
}
