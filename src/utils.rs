use std::{
    path::Path,
    process::{Command, Output},
};

use anyhow::{Context, Result};

pub(crate) trait ExecuteCommand {
    fn successful_output(&mut self) -> Result<Output>;
}

impl ExecuteCommand for Command {
    fn successful_output(&mut self) -> Result<Output> {
        let output = self
            .output()
            .with_context(|| format!("Command failed: $ {:?}", self))?;
        if output.status.success() {
            Ok(output)
        } else {
            anyhow::bail!(
                "Command failed with exit code: {}\nstderr: {:?}\n$ {:?}",
                output.status,
                String::from_utf8_lossy(&output.stderr),
                self
            )
        }
    }
}

pub(crate) mod fs {

    use std::io::Write;

    use super::*;

    /// Writes `contents` to `path` in place, truncating an existing file.
    ///
    /// Symlinks are followed and an existing file keeps its mode. The
    /// destination directory must already exist.
    pub fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to open {:?} for writing", path))?;
        file.write_all(contents)
            .with_context(|| format!("Failed to write to {:?}", path))?;
        file.sync_all()
            .with_context(|| format!("Failed to flush {:?} to disk", path))?;

        Ok(())
    }
}
