use crate::import::mesh_parameters::MeshParameters;
use crate::import::texture_slot_allocator::TextureSlotAllocator;
use crate::material::address_mode::TextureAddressMode;
use crate::material::compute_texture_color::ComputeTextureColor;
use crate::material::texture_reference::TextureReference;
use crate::parameters::parameter_key::{ParameterKey, TextureSlot};
use crate::shader::shader_source::ShaderClassSource;
use crate::shader::uv_channel::UvChannel;
use crate::utils::warning_sink::WarningSink;
use cgmath::Vector2;
use std::path::Path;

pub(crate) mod conventions {
    pub(crate) const SHADER_CLASS_TEXTURE: &str = "ComputeColorTexture";
    pub(crate) const SHADER_CLASS_TEXTURE_REPEAT: &str = "ComputeColorTextureRepeat";
}

/// Converts one mesh texture reference into the material layer sampling it.
///
/// Both operations defer the actual texture bytes to the resolution stage: a
/// source file missing on disk is reported through the warning capability
/// and still yields a usable, dangling reference. Nothing here is fatal to
/// the surrounding import.
pub struct TextureLayerGenerator<'caller> {
    warnings: &'caller dyn WarningSink,
}

impl<'caller> TextureLayerGenerator<'caller> {
    #[must_use]
    pub fn new(warnings: &'caller dyn WarningSink) -> Self {
        Self { warnings }
    }

    /// Shader-graph form of the layer: picks the repeat variant when the UV
    /// scaling differs from identity, allocates the next texture slot of the
    /// material bag and names the UV set the mesh samples from.
    ///
    /// The texture stays a location-addressed deferred reference; `mesh`
    /// lends its names to diagnostics only.
    pub fn generate_texture_layer(
        &self,
        output_path: &str,
        source_texture: &Path,
        uv_channel: UvChannel,
        uv_scaling: Vector2<f32>,
        slots: &mut TextureSlotAllocator,
        base_key: &ParameterKey<TextureSlot>,
        mesh: &MeshParameters,
    ) -> ShaderClassSource {
        let texture = TextureReference::import_location(output_path, source_texture);
        self.warn_if_source_missing(
            source_texture,
            &texture,
            &format!("material '{}' of mesh '{}'", mesh.material_name, mesh.mesh_name),
        );

        let parameter_key = base_key.indexed(slots.allocate());
        let uv_set_name = uv_channel.semantic_name();

        if uv_scaling == Vector2::new(1.0, 1.0) {
            ShaderClassSource::new(
                conventions::SHADER_CLASS_TEXTURE,
                vec![parameter_key.name().to_string(), uv_set_name],
            )
        } else {
            ShaderClassSource::new(
                conventions::SHADER_CLASS_TEXTURE_REPEAT,
                vec![
                    parameter_key.name().to_string(),
                    uv_set_name,
                    format!("float2({}, {})", uv_scaling.x, uv_scaling.y),
                ],
            )
        }
    }

    /// Compute-node form of the layer, consumed by the asset-level material
    /// graph. Every call mints a fresh reference identity; no parameter slot
    /// is involved and no caller state is touched.
    pub fn generate_material_texture_node(
        &self,
        output_path: &str,
        source_texture: &Path,
        uv_channel: UvChannel,
        uv_scaling: Vector2<f32>,
        wrap_texture_u: bool,
        wrap_texture_v: bool,
    ) -> ComputeTextureColor {
        let conversion_target = TextureReference::import_location(output_path, source_texture);
        self.warn_if_source_missing(source_texture, &conversion_target, "the mesh material");

        let texture = TextureReference::fresh_identity(source_texture);
        ComputeTextureColor::new(texture, uv_channel, uv_scaling, Vector2::new(0.0, 0.0)).with_address_modes(
            TextureAddressMode::from_wrap_flag(wrap_texture_u),
            TextureAddressMode::from_wrap_flag(wrap_texture_v),
        )
    }

    fn warn_if_source_missing(&self, source_texture: &Path, conversion_target: &TextureReference, referenced_by: &str) {
        if source_texture.exists() {
            return;
        }
        self.warnings.warning(&format!(
            "texture '{}' referenced by {} was not found on this system; \
             '{}' will stay unresolved until the resolution stage",
            source_texture.display(),
            referenced_by,
            conversion_target,
        ));
    }
}
