pub mod class_types;
pub mod records;
