pub mod domain;
pub mod embed;
pub mod errors;
pub mod ports;
pub mod services;

pub use errors::CoreError;
