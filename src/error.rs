//! Errors reported to the user as a single highlighted line.
//!
//! Everything else (decoder failures, plist and IO errors) travels as an
//! `anyhow::Error` and is printed with its full context chain.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("{0} not specified")]
    NotSpecified(&'static str),

    #[error("no provisioning profile found in {}", .archive_path.display())]
    ProfileNotFound { archive_path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            InputError::NotSpecified("archive_path").to_string(),
            "archive_path not specified"
        );
        assert_eq!(
            InputError::ProfileNotFound {
                archive_path: PathBuf::from("/tmp/App.xcarchive")
            }
            .to_string(),
            "no provisioning profile found in /tmp/App.xcarchive"
        );
    }
}
