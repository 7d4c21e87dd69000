use crate::material::address_mode::TextureAddressMode;
use crate::material::texture_reference::TextureReference;
use crate::shader::uv_channel::UvChannel;
use cgmath::Vector2;
use serde::{Deserialize, Serialize};

/// Texture-sampling node of the asset-level material graph. Immutable once
/// built; the material-graph assembler downstream consumes it as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComputeTextureColor {
    texture: TextureReference,
    uv_channel: UvChannel,
    scale: Vector2<f32>,
    offset: Vector2<f32>,
    address_mode_u: TextureAddressMode,
    address_mode_v: TextureAddressMode,
}

impl ComputeTextureColor {
    #[must_use]
    pub fn new(texture: TextureReference, uv_channel: UvChannel, scale: Vector2<f32>, offset: Vector2<f32>) -> Self {
        Self {
            texture,
            uv_channel,
            scale,
            offset,
            address_mode_u: TextureAddressMode::Wrap,
            address_mode_v: TextureAddressMode::Wrap,
        }
    }

    #[must_use]
    pub fn with_address_modes(mut self, u: TextureAddressMode, v: TextureAddressMode) -> Self {
        self.address_mode_u = u;
        self.address_mode_v = v;
        self
    }

    #[must_use]
    pub fn texture(&self) -> &TextureReference {
        &self.texture
    }

    #[must_use]
    pub fn uv_channel(&self) -> UvChannel {
        self.uv_channel
    }

    #[must_use]
    pub fn scale(&self) -> Vector2<f32> {
        self.scale
    }

    #[must_use]
    pub fn offset(&self) -> Vector2<f32> {
        self.offset
    }

    #[must_use]
    pub fn address_mode_u(&self) -> TextureAddressMode {
        self.address_mode_u
    }

    #[must_use]
    pub fn address_mode_v(&self) -> TextureAddressMode {
        self.address_mode_v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_addressing_defaults_to_wrap() {
        let system_under_test = ComputeTextureColor::new(
            TextureReference::fresh_identity(Path::new("albedo.png")),
            UvChannel::Texcoord0,
            Vector2::new(1.0, 1.0),
            Vector2::new(0.0, 0.0),
        );

        assert_eq!(system_under_test.address_mode_u(), TextureAddressMode::Wrap);
        assert_eq!(system_under_test.address_mode_v(), TextureAddressMode::Wrap);
    }

    #[test]
    fn test_with_address_modes() {
        let system_under_test = ComputeTextureColor::new(
            TextureReference::fresh_identity(Path::new("albedo.png")),
            UvChannel::Texcoord1,
            Vector2::new(2.0, 2.0),
            Vector2::new(0.0, 0.0),
        )
        .with_address_modes(TextureAddressMode::Wrap, TextureAddressMode::Clamp);

        assert_eq!(system_under_test.address_mode_u(), TextureAddressMode::Wrap);
        assert_eq!(system_under_test.address_mode_v(), TextureAddressMode::Clamp);
        assert_eq!(system_under_test.uv_channel(), UvChannel::Texcoord1);
    }
}
