//! configuration loading, access and validation
pub mod instance;
pub mod options;
pub mod validate;
