pub mod dump_builder;
pub mod file_filter;
