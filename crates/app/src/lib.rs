//! # devman-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound
//!   ports): [`ClientRepository`](ports::ClientRepository),
//!   [`DeviceRepository`](ports::DeviceRepository),
//!   [`EventRepository`](ports::EventRepository)
//! - Implement the **use-case services** (driving/inbound ports):
//!   [`ClientService`](services::client_service::ClientService),
//!   [`DeviceService`](services::device_service::DeviceService),
//!   [`EventService`](services::event_service::EventService),
//!   [`DashboardService`](services::dashboard_service::DashboardService)
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! Every use-case is a single-shot request/response function returning
//! `Result<_, DevManError>`; expected failures are values, never panics.
//! Uniqueness pre-checks done here are advisory — the storage layer's
//! unique constraints are the final authority.
//!
//! ## Dependency rule
//! Depends on `devman-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
