use std::path::PathBuf;

use crate::error::InputError;
use crate::export_method::ExportMethod;

/// Validated command-line inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    pub export_options_path: PathBuf,
    pub archive_path: PathBuf,
    pub export_method: Option<ExportMethod>,
}

impl Inputs {
    /// Empty strings count as missing. Accepted values are echoed as they are
    /// checked, so the output shows how far validation got.
    pub fn validate(
        export_options_path: Option<String>,
        archive_path: Option<String>,
        export_method: Option<String>,
    ) -> Result<Self, InputError> {
        let export_options_path =
            provided(export_options_path).ok_or(InputError::NotSpecified("export_options_path"))?;
        println!("(i) export_options_path: {}", export_options_path);

        let archive_path = provided(archive_path).ok_or(InputError::NotSpecified("archive_path"))?;
        println!("(i) archive_path: {}", archive_path);

        let export_method = provided(export_method).map(ExportMethod::from);
        if let Some(method) = &export_method {
            println!("(i) export_method: {}", method);
            if !method.is_known() {
                tracing::warn!(
                    %method,
                    "export method is not one of app-store, ad-hoc, enterprise, development; writing it as given"
                );
            }
        }

        Ok(Self {
            export_options_path: export_options_path.into(),
            archive_path: archive_path.into(),
            export_method,
        })
    }
}

fn provided(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
