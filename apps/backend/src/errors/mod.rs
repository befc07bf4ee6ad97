//! Error handling for the portal backend.

pub mod domain;

pub use domain::DomainError;

#[cfg(test)]
mod tests_error_mapping;
