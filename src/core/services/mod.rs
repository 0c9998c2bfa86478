pub mod config_merger;
pub mod environment_resolver;
pub mod placeholder_resolver;
pub mod scan_service;
pub mod service_context;
