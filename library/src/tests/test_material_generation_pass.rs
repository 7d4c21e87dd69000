use crate::export::material_export::write_material_export;
use crate::import::mesh_parameters::MeshParameters;
use crate::import::scene_info::{EntityInfo, MeshMaterials, NodeInfo};
use crate::import::texture_layer_generator::TextureLayerGenerator;
use crate::import::texture_slot_allocator::TextureSlotAllocator;
use crate::material::material_description::MaterialDescription;
use crate::parameters::parameter_key::{ParameterKey, ScalarSlot, TextureSlot};
use crate::shader::uv_channel::UvChannel;
use crate::utils::warning_sink::WarningSink;
use cgmath::Vector2;
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[derive(Default)]
struct CountingSink {
    count: RefCell<usize>,
}

impl WarningSink for CountingSink {
    fn warning(&self, _message: &str) {
        *self.count.borrow_mut() += 1;
    }
}

struct SourceScene {
    _root: TempDir,
    albedo: PathBuf,
    normal: PathBuf,
    missing_detail: PathBuf,
}

#[must_use]
fn make_source_scene() -> SourceScene {
    let root = TempDir::new().expect("failed to create source folder");
    let albedo = root.path().join("hull_albedo.png");
    let normal = root.path().join("hull_normal.png");
    fs::write(&albedo, b"pixels").expect("failed to write albedo stand-in");
    fs::write(&normal, b"pixels").expect("failed to write normal stand-in");
    let missing_detail = root.path().join("hull_detail.png");

    SourceScene { _root: root, albedo, normal, missing_detail }
}

#[test]
fn test_one_material_pass_end_to_end() {
    let scene = make_source_scene();
    let warnings = CountingSink::default();
    let generator = TextureLayerGenerator::new(&warnings);
    let base_key = ParameterKey::<TextureSlot>::new("Texturing.Texture0");

    let mut import = EntityInfo::default();
    import.nodes.push(NodeInfo { name: "ship_root".to_string(), depth: 0, preserve: false });
    import.nodes.push(NodeInfo { name: "hull".to_string(), depth: 1, preserve: true });
    import.animation_nodes.push("hull".to_string());

    let mut hull = MeshParameters::new("rusted_metal", "hull", "ship_root");
    hull.parameters.set_scalar(&ParameterKey::<ScalarSlot>::new("Material.SpecularIntensity"), 0.4);

    let mut slots = TextureSlotAllocator::new();
    let sources = [&scene.albedo, &scene.normal, &scene.missing_detail];
    let mut layers = Vec::new();
    for source in sources {
        layers.push(generator.generate_texture_layer(
            "/output/ship",
            source,
            UvChannel::Texcoord0,
            Vector2::new(1.0, 1.0),
            &mut slots,
            &base_key,
            &hull,
        ));
        import.register_texture_dependency(&source.to_string_lossy());
    }

    let mut material = MaterialDescription::new();
    material.set_attribute(
        "Diffuse",
        generator.generate_material_texture_node(
            "/output/ship",
            &scene.albedo,
            UvChannel::Texcoord0,
            Vector2::new(1.0, 1.0),
            true,
            true,
        ),
    );
    material.set_attribute(
        "Normal",
        generator.generate_material_texture_node(
            "/output/ship",
            &scene.normal,
            UvChannel::Texcoord1,
            Vector2::new(2.0, 2.0),
            false,
            false,
        ),
    );
    import.materials.insert(hull.material_name.clone(), material);
    import.models.push(hull);

    assert_eq!(*warnings.count.borrow(), 1, "only the missing detail texture warns");
    assert_eq!(import.texture_dependencies.len(), 3);
    assert_eq!(slots.allocated_count(), 3);

    let allocated_slots: Vec<&str> = layers.iter().map(|layer| layer.generic_arguments()[0].as_str()).collect();
    assert_eq!(allocated_slots, vec!["Texturing.Texture0", "Texturing.Texture1", "Texturing.Texture2"]);

    let export_root = TempDir::new().expect("failed to create export folder");
    let target = export_root.path().join("materials").join("ship.json");
    let materials = MeshMaterials::from(import);
    write_material_export(&target, &materials).expect("export failed");

    let parsed: MeshMaterials =
        serde_json::from_str(&fs::read_to_string(&target).expect("export file is unreadable"))
            .expect("export does not parse");
    assert_eq!(parsed, materials);
    assert_eq!(parsed.materials["rusted_metal"].attribute_count(), 2);
    assert_eq!(parsed.models.len(), 1);
    assert!(parsed.models[0].parameters.contains("Material.SpecularIntensity"));
}
