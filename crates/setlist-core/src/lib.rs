pub mod domain;
pub mod errors;
pub mod outcome;
pub mod ports;
pub mod services;

pub use errors::CoreError;
pub use outcome::{Response, Status};
