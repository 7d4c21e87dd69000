use crate::material::texture_reference::TextureReference;
use crate::parameters::parameter_key::{ParameterKey, ScalarSlot, TextSlot, TextureSlot};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Value held by one slot of a parameter bag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ParameterValue {
    Texture(TextureReference),
    Scalar(f32),
    Text(String),
}

/// Parameter bag of one mesh. It only grows while the import pass runs and
/// is never mutated afterwards, so there is no removal.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterCollection {
    values: HashMap<String, ParameterValue>,
}

impl ParameterCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_texture(&mut self, key: &ParameterKey<TextureSlot>, value: TextureReference) {
        self.values.insert(key.name().to_string(), ParameterValue::Texture(value));
    }

    pub fn set_scalar(&mut self, key: &ParameterKey<ScalarSlot>, value: f32) {
        self.values.insert(key.name().to_string(), ParameterValue::Scalar(value));
    }

    pub fn set_text(&mut self, key: &ParameterKey<TextSlot>, value: &str) {
        self.values.insert(key.name().to_string(), ParameterValue::Text(value.to_string()));
    }

    #[must_use]
    pub fn get(&self, slot_name: &str) -> Option<&ParameterValue> {
        self.values.get(slot_name)
    }

    #[must_use]
    pub fn contains(&self, slot_name: &str) -> bool {
        self.values.contains_key(slot_name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
