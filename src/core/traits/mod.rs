pub mod parser;
pub mod placeholder;
