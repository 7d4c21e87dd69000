pub mod material_export;
