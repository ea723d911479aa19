pub mod id;
pub mod in_memory;
pub mod json_file;
