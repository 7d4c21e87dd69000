pub mod address_mode;
pub mod compute_texture_color;
pub mod material_description;
pub mod texture_reference;
