use crate::import::mesh_parameters::MeshParameters;
use crate::material::material_description::MaterialDescription;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One scene-graph node met while walking the imported scene.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeInfo {
    pub name: String,
    pub depth: usize,
    /// An otherwise empty node can still carry an animation or an attachment
    /// and must survive scene pruning.
    pub preserve: bool,
}

/// Everything one scene import produced. Owns its collections outright.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityInfo {
    pub texture_dependencies: Vec<String>,
    pub materials: HashMap<String, MaterialDescription>,
    pub animation_nodes: Vec<String>,
    pub models: Vec<MeshParameters>,
    pub nodes: Vec<NodeInfo>,
}

impl EntityInfo {
    /// Records a source texture the converted asset will depend on. Each
    /// path is kept once, in first-seen order.
    pub fn register_texture_dependency(&mut self, source_path: &str) {
        if self.texture_dependencies.iter().any(|known| known == source_path) {
            return;
        }
        self.texture_dependencies.push(source_path.to_string());
    }
}

/// Material-only projection of an import, for exports that skip geometry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshMaterials {
    pub materials: HashMap<String, MaterialDescription>,
    pub models: Vec<MeshParameters>,
}

impl From<EntityInfo> for MeshMaterials {
    fn from(import: EntityInfo) -> Self {
        Self { materials: import.materials, models: import.models }
    }
}
