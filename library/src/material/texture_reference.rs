use crate::utils::file_system::file_stem_of;
use crate::utils::reference_uid::ReferenceUid;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;
use std::path::Path;

/// Handle of a texture that a later pipeline stage finished resolving.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Display, Serialize, Deserialize)]
#[display("{}", _0)]
pub struct TextureHandle(pub u32);

/// Identity of a texture asset recorded during import. The asset bytes are
/// not required to exist before the resolution stage runs.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum TextureReference {
    /// Deferred reference addressed by the storage location the conversion
    /// output will occupy.
    Location(String),
    /// Deferred reference carrying a freshly minted identity and the name
    /// shown in tooling.
    Identity { uid: ReferenceUid, display_name: String },
    /// Reference the resolution stage already bound to a loaded texture.
    Resolved(TextureHandle),
}

impl TextureReference {
    /// Deferred reference of a texture that conversion will place next to
    /// the asset output: the output path joined to the source file stem
    /// with an underscore.
    #[must_use]
    pub fn import_location(output_path: &str, source_texture: &Path) -> Self {
        TextureReference::Location(format!("{}_{}", output_path, file_stem_of(source_texture)))
    }

    /// Deferred reference with a new process-unique identity, shown in
    /// tooling under the source file stem.
    #[must_use]
    pub fn fresh_identity(source_texture: &Path) -> Self {
        TextureReference::Identity {
            uid: ReferenceUid::fresh(),
            display_name: file_stem_of(source_texture),
        }
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, TextureReference::Resolved(_))
    }

    /// Storage location for location-addressed references.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        match self {
            TextureReference::Location(location) => Some(location),
            _ => None,
        }
    }
}

impl fmt::Display for TextureReference {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TextureReference::Location(location) => formatter.write_str(location),
            TextureReference::Identity { uid, display_name } => {
                write!(formatter, "{} (uid {})", display_name, uid)
            }
            TextureReference::Resolved(handle) => write!(formatter, "texture #{}", handle),
        }
    }
}
