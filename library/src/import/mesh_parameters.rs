use crate::parameters::parameter_collection::ParameterCollection;
use serde::{Deserialize, Serialize};

/// Per-mesh import result: the names binding one mesh into the scene and the
/// parameter bag filled while its material is generated. Owned by whoever
/// runs the import pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshParameters {
    pub material_name: String,
    pub mesh_name: String,
    pub node_name: String,
    pub parameters: ParameterCollection,
}

impl MeshParameters {
    #[must_use]
    pub fn new(material_name: &str, mesh_name: &str, node_name: &str) -> Self {
        Self {
            material_name: material_name.to_string(),
            mesh_name: mesh_name.to_string(),
            node_name: node_name.to_string(),
            parameters: ParameterCollection::new(),
        }
    }
}
