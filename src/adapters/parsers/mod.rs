pub mod yaml_subset_parser;
