use crate::material::compute_texture_color::ComputeTextureColor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Material definition assembled during import: named attribute slots, each
/// fed by one texture-sampling node. Carries no behavior of its own.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialDescription {
    attributes: HashMap<String, ComputeTextureColor>,
}

impl MaterialDescription {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_attribute(&mut self, slot: &str, node: ComputeTextureColor) {
        self.attributes.insert(slot.to_string(), node);
    }

    #[must_use]
    pub fn attribute(&self, slot: &str) -> Option<&ComputeTextureColor> {
        self.attributes.get(slot)
    }

    #[must_use]
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }
}
