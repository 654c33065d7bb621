pub mod ast;
pub mod config;
pub mod errors;
pub mod samples;
pub mod validate;
