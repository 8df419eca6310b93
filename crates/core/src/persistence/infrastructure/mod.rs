pub mod in_memory_record_store;
pub mod json_file_store;
