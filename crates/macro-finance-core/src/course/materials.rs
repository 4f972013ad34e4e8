//! Per-session PDF summaries.
//!
//! A missing PDF is reported back to the caller as [`MaterialStatus::Missing`]
//! so the rest of the page can still be shown.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::session::SessionPage;
use crate::error::MacroFinanceError;
use crate::MacroFinanceResult;

pub const PDF_MIME: &str = "application/pdf";

/// A PDF summary found on disk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Material {
    pub path: PathBuf,
    pub download_name: String,
    pub mime: &'static str,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MaterialStatus {
    Available(Material),
    Missing { path: PathBuf, message: String },
}

/// Resolve the PDF for `page` under `root`. Pages without a PDF yield `None`.
pub fn locate_material(root: &Path, page: &SessionPage) -> Option<MaterialStatus> {
    let relative = page.pdf_path.as_ref()?;
    let path = root.join(relative);

    let status = match fs::metadata(&path) {
        Ok(meta) if meta.is_file() => MaterialStatus::Available(Material {
            download_name: page
                .download_name
                .clone()
                .unwrap_or_else(|| relative.clone()),
            mime: PDF_MIME,
            size_bytes: meta.len(),
            path,
        }),
        _ => {
            let message = MacroFinanceError::MaterialNotFound {
                path: path.display().to_string(),
            }
            .to_string();
            tracing::warn!("{message}");
            MaterialStatus::Missing { path, message }
        }
    };

    Some(status)
}

/// Copy the PDF for `page` into `dest_dir` under its download name.
pub fn export_material(root: &Path, page: &SessionPage, dest_dir: &Path) -> MacroFinanceResult<PathBuf> {
    match locate_material(root, page) {
        Some(MaterialStatus::Available(material)) => {
            let target = dest_dir.join(&material.download_name);
            fs::copy(&material.path, &target)?;
            tracing::info!(target = %target.display(), bytes = material.size_bytes, "exported material");
            Ok(target)
        }
        Some(MaterialStatus::Missing { path, .. }) => Err(MacroFinanceError::MaterialNotFound {
            path: path.display().to_string(),
        }),
        None => Err(MacroFinanceError::InvalidInput {
            field: "session".into(),
            reason: format!("Session '{}' has no downloadable summary", page.slug),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::session::{home, session_one};

    #[test]
    fn test_missing_pdf_reported() {
        let dir = tempfile::tempdir().unwrap();
        let status = locate_material(dir.path(), &session_one()).unwrap();
        match status {
            MaterialStatus::Missing { message, .. } => {
                assert!(message.starts_with("PDF not found at path:"));
                assert!(message.ends_with("session1_summary.pdf"));
            }
            other => panic!("expected Missing, got {other:?}"),
        }
    }

    #[test]
    fn test_available_pdf() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("session1_summary.pdf"), b"%PDF-1.4").unwrap();
        let status = locate_material(dir.path(), &session_one()).unwrap();
        match status {
            MaterialStatus::Available(m) => {
                assert_eq!(m.download_name, "session1_asset_pricing_foundations.pdf");
                assert_eq!(m.size_bytes, 8);
                assert_eq!(m.mime, PDF_MIME);
            }
            other => panic!("expected Available, got {other:?}"),
        }
    }

    #[test]
    fn test_page_without_pdf() {
        let dir = tempfile::tempdir().unwrap();
        assert!(locate_material(dir.path(), &home()).is_none());
    }
}
