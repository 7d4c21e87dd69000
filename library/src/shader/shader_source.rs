use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A named building block of a shader graph together with the ordered
/// arguments it is instantiated with. Immutable once built.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ShaderClassSource {
    class_name: String,
    generic_arguments: Vec<String>,
}

impl ShaderClassSource {
    #[must_use]
    pub fn new(class_name: &str, generic_arguments: Vec<String>) -> Self {
        Self { class_name: class_name.to_string(), generic_arguments }
    }

    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    #[must_use]
    pub fn generic_arguments(&self) -> &[String] {
        &self.generic_arguments
    }
}

impl Display for ShaderClassSource {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        if self.generic_arguments.is_empty() {
            return formatter.write_str(&self.class_name);
        }
        write!(formatter, "{}<{}>", self.class_name, self.generic_arguments.join(", "))
    }
}
