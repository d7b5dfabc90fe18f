pub mod class_type;
pub mod decimal;
pub mod errors;
pub mod record;
pub mod status;
pub mod summary;
