//! Domain layer
//!
//! Framework-free error types shared by the infrastructure code.

pub mod errors;

pub use errors::DomainError;
