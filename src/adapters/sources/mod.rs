pub mod map_source;
pub mod process_env;
