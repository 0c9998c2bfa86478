pub mod node;
pub mod parsed_config;
pub mod scan_report;
pub mod source;
