//! # surveyhub-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RecordStore`: create/get/list/update/delete for one record kind
//!   - `MentalHealthRepository`: adds the age search and sleep-issues ordering
//!   - `SocialMediaRepository`: adds the gender search and age ordering
//! - Define the **driving/inbound port** as a generic use-case struct:
//!   - `RecordService`: validate input, map absent records to not-found errors
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `surveyhub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
