mod test_material_generation_pass;
