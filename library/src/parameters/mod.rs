pub mod parameter_collection;
pub mod parameter_key;
