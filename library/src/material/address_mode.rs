use serde::{Deserialize, Serialize};

/// How sampling treats texture coordinates outside of [0, 1].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TextureAddressMode {
    Wrap,
    Clamp,
}

impl TextureAddressMode {
    /// Importers describe addressing as a per-axis wrap flag.
    #[must_use]
    pub fn from_wrap_flag(wrap: bool) -> Self {
        if wrap { TextureAddressMode::Wrap } else { TextureAddressMode::Clamp }
    }
}
