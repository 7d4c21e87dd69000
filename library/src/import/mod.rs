pub mod mesh_parameters;
pub mod scene_info;
pub mod texture_layer_generator;
pub mod texture_slot_allocator;
