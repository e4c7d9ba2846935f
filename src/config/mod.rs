pub mod config;
pub mod configuration_table;
