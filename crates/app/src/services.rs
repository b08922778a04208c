//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic
//! parameters (constructor injection), keeping this layer decoupled from
//! concrete adapters. One service method corresponds to one request
//! handler of the exposed API.

pub mod client_service;
pub mod dashboard_service;
pub mod device_service;
pub mod event_service;
