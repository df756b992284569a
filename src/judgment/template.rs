//! Loader for the judgment-format template.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// User-facing prefix shown when the template cannot be read.
pub const READ_FAILURE_PREFIX: &str = "파일을 읽는 중 오류가 발생했습니다";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read template {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("template {path} is empty")]
    Empty { path: PathBuf },
}

impl TemplateError {
    /// Message rendered to the user when generation is blocked.
    pub fn user_message(&self) -> String {
        match self {
            Self::Read { source, .. } => format!("{READ_FAILURE_PREFIX}: {source}"),
            Self::Empty { path } => {
                format!("{READ_FAILURE_PREFIX}: {} 파일이 비어 있습니다", path.display())
            }
        }
    }
}

/// The judgment format, kept exactly as read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template(String);

impl Template {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Read the whole file at `path` as UTF-8 text.
pub fn load_template(path: impl AsRef<Path>) -> Result<Template, TemplateError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| TemplateError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if text.trim().is_empty() {
        return Err(TemplateError::Empty {
            path: path.to_path_buf(),
        });
    }

    log::debug!("Loaded template {} ({} bytes)", path.display(), text.len());
    Ok(Template(text))
}
