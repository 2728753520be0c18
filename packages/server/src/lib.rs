// Encore - event vendor marketplace API
//
// This crate provides the backend API connecting event organizers with
// artists and venues: vendor discovery, booking requests, messaging,
// favorites, and notifications. Architecture follows domain-driven design
// with one module per business domain.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
