//! File export: JSON, Wavefront OBJ and binary STL.

pub mod obj;
pub mod stl;

use crate::error::{Result, ToldoError};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use toldo_ir::RenderableExport;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// The renderer document as JSON.
    Json,
    /// Wavefront OBJ text.
    Obj,
    /// Binary STL.
    Stl,
}

impl ExportFormat {
    /// Parse a format name (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "obj" => Ok(ExportFormat::Obj),
            "stl" => Ok(ExportFormat::Stl),
            _ => Err(ToldoError::UnsupportedFormat(name.to_string())),
        }
    }

    /// Infer the format from a file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        Self::from_name(ext)
    }

    /// Conventional file extension.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Obj => "obj",
            ExportFormat::Stl => "stl",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ToldoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Encode an export in the given format.
///
/// Mesh formats (OBJ, STL) carry only `geometry`; they fail with
/// [`ToldoError::EmptyGeometry`] when there are no faces, as for a pergola.
pub fn export_bytes(export: &RenderableExport, format: ExportFormat, pretty: bool) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Json => Ok(export.to_json(pretty)?.into_bytes()),
        ExportFormat::Obj => Ok(obj::to_obj(&export.geometry, &export.metadata.product_type)?.into_bytes()),
        ExportFormat::Stl => stl::to_stl_bytes(&export.geometry),
    }
}

/// Encode and write an export to `path`.
pub fn write_export(
    export: &RenderableExport,
    format: ExportFormat,
    pretty: bool,
    path: impl AsRef<Path>,
) -> Result<()> {
    let bytes = export_bytes(export, format, pretty)?;
    std::fs::write(path.as_ref(), &bytes)?;
    tracing::debug!(
        path = %path.as_ref().display(),
        %format,
        bytes = bytes.len(),
        "wrote export"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names() {
        assert_eq!(ExportFormat::from_name("json").unwrap(), ExportFormat::Json);
        assert_eq!(ExportFormat::from_name("OBJ").unwrap(), ExportFormat::Obj);
        assert_eq!("stl".parse::<ExportFormat>().unwrap(), ExportFormat::Stl);
    }

    #[test]
    fn unsupported_formats() {
        for name in ["gltf", "step", ""] {
            assert!(matches!(
                ExportFormat::from_name(name),
                Err(ToldoError::UnsupportedFormat(f)) if f == name
            ));
        }
    }

    #[test]
    fn format_from_path() {
        assert_eq!(ExportFormat::from_path("out/awning.stl").unwrap(), ExportFormat::Stl);
        assert_eq!(ExportFormat::from_path("a.JSON").unwrap(), ExportFormat::Json);
        assert!(ExportFormat::from_path("noext").is_err());
    }
}
