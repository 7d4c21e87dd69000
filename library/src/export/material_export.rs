use crate::import::scene_info::MeshMaterials;
use crate::utils::file_system::create_parent_folders;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaterialExportError {
    #[error("io problem while writing material export: {what:?}")]
    IoError { what: String },
    #[error("material export serialization failed: {what:?}")]
    SerializationError { what: String },
}

/// Writes the material-only projection of an import as pretty JSON, creating
/// missing folders on the target path first.
pub fn write_material_export(target: &Path, materials: &MeshMaterials) -> Result<(), MaterialExportError> {
    let rendered = serde_json::to_string_pretty(materials)
        .map_err(|e| MaterialExportError::SerializationError { what: e.to_string() })?;

    create_parent_folders(target).map_err(|e| MaterialExportError::IoError { what: e.to_string() })?;
    fs::write(target, rendered).map_err(|e| MaterialExportError::IoError { what: e.to_string() })?;

    Ok(())
}
