//! # devman-domain
//!
//! Pure domain model for the devman device-management backend.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error taxonomy, timestamps
//! - Define **value objects** (client name, email, phone number, serial
//!   number, IMEI) — immutable, self-validating wrappers around strings
//! - Define **entities** ([`Client`](client::Client), [`Device`](device::Device),
//!   [`Event`](event::Event)) — aggregate roots composed of value objects
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;
pub mod value;

pub mod client;
pub mod device;
pub mod event;
