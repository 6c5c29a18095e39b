pub mod loader;
pub mod parser;
pub mod types;
