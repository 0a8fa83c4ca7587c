//! customers-types: domain model and repository port for the customers service.

pub mod domain;
pub mod ports;
