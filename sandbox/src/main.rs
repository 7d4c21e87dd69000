use anyhow::Context;
use cgmath::Vector2;
use library::export::material_export::write_material_export;
use library::import::mesh_parameters::MeshParameters;
use library::import::scene_info::{EntityInfo, MeshMaterials, NodeInfo};
use library::import::texture_layer_generator::TextureLayerGenerator;
use library::import::texture_slot_allocator::TextureSlotAllocator;
use library::material::material_description::MaterialDescription;
use library::parameters::parameter_key::{ParameterKey, ScalarSlot, TextureSlot};
use library::shader::uv_channel::UvChannel;
use library::utils::warning_sink::LogWarningSink;
use log::info;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const EXPORT_FILE: &str = "demo-output/ship_materials.json";

/// One texture reference of the demo scene, the way a scene walker would
/// hand it over.
struct TextureBinding {
    attribute: &'static str,
    source: PathBuf,
    uv_channel: UvChannel,
    uv_scaling: Vector2<f32>,
    wrap_u: bool,
    wrap_v: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let working_folder = env::current_dir().context("working folder is unknown")?;
    info!("running the import demo in {}", working_folder.display());

    let source_folder = working_folder.join("demo-output").join("source_textures");
    let bindings = make_demo_bindings(&source_folder)?;

    let warnings = LogWarningSink;
    let generator = TextureLayerGenerator::new(&warnings);

    let mut import = EntityInfo::default();
    import.nodes.push(NodeInfo { name: "ship_root".to_string(), depth: 0, preserve: false });
    import.nodes.push(NodeInfo { name: "hull".to_string(), depth: 1, preserve: true });
    import.animation_nodes.push("hull".to_string());

    let mut hull = MeshParameters::new("rusted_metal", "hull", "ship_root");
    hull.parameters.set_scalar(&ParameterKey::<ScalarSlot>::new("Material.SpecularIntensity"), 0.4);

    let output_path = "/output/ship";
    let base_key = ParameterKey::<TextureSlot>::new("Texturing.Texture0");
    let mut slots = TextureSlotAllocator::new();
    let mut material = MaterialDescription::new();

    for binding in &bindings {
        let layer = generator.generate_texture_layer(
            output_path,
            &binding.source,
            binding.uv_channel,
            binding.uv_scaling,
            &mut slots,
            &base_key,
            &hull,
        );
        info!("shader layer for '{}': {}", binding.attribute, layer);

        let node = generator.generate_material_texture_node(
            output_path,
            &binding.source,
            binding.uv_channel,
            binding.uv_scaling,
            binding.wrap_u,
            binding.wrap_v,
        );
        material.set_attribute(binding.attribute, node);

        import.register_texture_dependency(&binding.source.to_string_lossy());
    }

    import.materials.insert(hull.material_name.clone(), material);
    import.models.push(hull);

    info!(
        "imported {} texture dependencies, {} nodes, {} parameter slots",
        import.texture_dependencies.len(),
        import.nodes.len(),
        slots.allocated_count(),
    );

    let export_target = working_folder.join(EXPORT_FILE);
    let materials = MeshMaterials::from(import);
    write_material_export(&export_target, &materials).context("material export failed")?;
    info!("materials written to {}", export_target.display());

    Ok(())
}

/// Lays out the demo source textures on disk. The detail map is left
/// missing on purpose so the run shows the deferred-reference warning.
fn make_demo_bindings(source_folder: &Path) -> anyhow::Result<Vec<TextureBinding>> {
    fs::create_dir_all(source_folder)
        .with_context(|| format!("failed to prepare {}", source_folder.display()))?;

    let albedo = source_folder.join("hull_albedo.png");
    let normal = source_folder.join("hull_normal.png");
    for present in [&albedo, &normal] {
        fs::write(present, b"placeholder image bytes")
            .with_context(|| format!("failed to prepare {}", present.display()))?;
    }

    Ok(vec![
        TextureBinding {
            attribute: "Diffuse",
            source: albedo,
            uv_channel: UvChannel::Texcoord0,
            uv_scaling: Vector2::new(1.0, 1.0),
            wrap_u: true,
            wrap_v: true,
        },
        TextureBinding {
            attribute: "Normal",
            source: normal,
            uv_channel: UvChannel::Texcoord0,
            uv_scaling: Vector2::new(1.0, 1.0),
            wrap_u: true,
            wrap_v: false,
        },
        TextureBinding {
            attribute: "Detail",
            source: source_folder.join("hull_detail.png"),
            uv_channel: UvChannel::Texcoord1,
            uv_scaling: Vector2::new(4.0, 4.0),
            wrap_u: true,
            wrap_v: true,
        },
    ])
}
