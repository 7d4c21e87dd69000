use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Kind tag of keys addressing texture slots.
#[derive(Clone, Debug)]
pub struct TextureSlot;
/// Kind tag of keys addressing scalar slots.
#[derive(Clone, Debug)]
pub struct ScalarSlot;
/// Kind tag of keys addressing text slots.
#[derive(Clone, Debug)]
pub struct TextSlot;

/// Addressable, typed slot identity inside a material parameter bag.
#[derive(Debug)]
pub struct ParameterKey<Kind = TextureSlot> {
    name: String,

    kind: PhantomData<Kind>,
}

impl<Kind> ParameterKey<Kind> {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), kind: PhantomData }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Key of the indexed slot sharing this base identity. Index 0 addresses
    /// the base key itself; otherwise a base name with a trailing zero digit
    /// has that digit replaced by the index, and any other base name gets
    /// the index appended.
    #[must_use]
    pub fn indexed(&self, index: u32) -> ParameterKey<Kind> {
        if index == 0 {
            return self.clone();
        }
        let name = match self.name.strip_suffix('0') {
            Some(prefix) => format!("{}{}", prefix, index),
            None => format!("{}{}", self.name, index),
        };
        ParameterKey { name, kind: PhantomData }
    }
}

impl<Kind> Clone for ParameterKey<Kind> {
    fn clone(&self) -> Self {
        Self { name: self.name.clone(), kind: PhantomData }
    }
}

impl<Kind> Hash for ParameterKey<Kind> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl<Kind> PartialEq for ParameterKey<Kind> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<Kind> Eq for ParameterKey<Kind> {}

impl<Kind> Display for ParameterKey<Kind> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.name)
    }
}
